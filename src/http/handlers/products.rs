use crate::service::report_service::ReportError;
use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

pub async fn lost_products(State(state): State<AppState>) -> impl IntoResponse {
    match state.report_service.lost_products().await {
        Ok(entries) => success(entries),
        Err(err) => failure(err),
    }
}

pub async fn expiring_payments(State(state): State<AppState>) -> impl IntoResponse {
    match state.report_service.expiring_payment_borrows().await {
        Ok(entries) => success(entries),
        Err(err) => failure(err),
    }
}

fn success<T: Serialize>(data: Vec<T>) -> axum::response::Response {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "success": true,
            "count": data.len(),
            "data": data,
        })),
    )
        .into_response()
}

fn failure(err: ReportError) -> axum::response::Response {
    let status = if err.is_store_unavailable() {
        axum::http::StatusCode::SERVICE_UNAVAILABLE
    } else {
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    };
    tracing::error!("report request failed: {}", err);
    (
        status,
        Json(serde_json::json!({
            "success": false,
            "error": err.to_string(),
        })),
    )
        .into_response()
}
