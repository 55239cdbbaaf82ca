use axum::response::IntoResponse;
use axum::Json;

pub async fn health() -> impl IntoResponse {
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "timestamp": chrono::Utc::now().to_rfc3339(),
        })),
    )
        .into_response()
}
