pub mod controller;
pub mod dto;
pub mod extract;
pub mod routes;
pub mod util;
