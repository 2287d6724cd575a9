//! Statistics routes (e.g., /api/v1/statistics/*)

use axum::{routing::get, Router};

use crate::api::controller::statistics::ReportStatisticsController;
use crate::app_state::AppState;

pub fn statistics_routes() -> Router<AppState> {
    Router::new()
        .route("/totals", get(ReportStatisticsController::get_cumulative_totals))
        .route("/total-cases", get(ReportStatisticsController::get_total_cases))
        .route("/total-recovered", get(ReportStatisticsController::get_total_recovered))
        .route("/total-deceased", get(ReportStatisticsController::get_total_deceased))
        .route("/lethality-rate", get(ReportStatisticsController::get_lethality_rate))

        .route("/new-positives/{start}/{end}", get(ReportStatisticsController::get_new_positives))
        .route("/new-recovered/{start}/{end}", get(ReportStatisticsController::get_new_recovered))
        .route("/new-deceased/{start}/{end}", get(ReportStatisticsController::get_new_deceased))
        .route("/moving-average/{start}/{end}", get(ReportStatisticsController::get_moving_average))
        .route("/positivity-rate/{start}/{end}", get(ReportStatisticsController::get_positivity_rate))
}
