use axum::{extract::Path, Json};
use serde_json::json;

use crate::domain::a001_court;
use crate::domain::a001_court::service::CourtServiceError;

/// GET /api/courts
pub async fn list_all(
) -> Result<Json<Vec<contracts::domain::a001_court::Court>>, axum::http::StatusCode> {
    match a001_court::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// GET /api/courts/:id
pub async fn get_by_id(
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a001_court::Court>, axum::http::StatusCode> {
    match a001_court::service::get_by_id(&id).await {
        Ok(v) => Ok(Json(v)),
        Err(CourtServiceError::NotFound) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}

/// POST /api/courts/testdata
pub async fn insert_test_data() -> Result<Json<serde_json::Value>, axum::http::StatusCode> {
    match a001_court::service::insert_test_data().await {
        Ok(inserted) => Ok(Json(json!({ "inserted": inserted }))),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
