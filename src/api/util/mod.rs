pub mod date_validator;
pub mod json;
