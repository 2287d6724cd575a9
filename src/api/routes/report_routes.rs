//! Report routes (e.g., /api/v1/reports/*)

use axum::{routing::get, Router};

use crate::api::controller::report::DailyReportController;
use crate::app_state::AppState;

pub fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(DailyReportController::list_reports).post(DailyReportController::create_report),
        )
        .route("/latest", get(DailyReportController::get_latest_report))
        .route(
            "/{date}",
            get(DailyReportController::get_report)
                .put(DailyReportController::update_report)
                .delete(DailyReportController::delete_report),
        )
        .route("/{start}/{end}", get(DailyReportController::get_reports_in_range))
}
