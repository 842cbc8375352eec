//! Single-entity lookups for services, users, and receipts.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use gemval_core::catalog::Service;
use gemval_core::receipts::Receipt;
use gemval_core::users::User;

async fn get_service(
    Path(service_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Service>> {
    let service = state.catalog_service.get_service(&service_id)?;
    Ok(Json(service))
}

async fn get_user(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&user_id)?;
    Ok(Json(user))
}

async fn get_receipt(
    Path(receipt_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Receipt>> {
    let receipt = state.receipt_service.get_receipt(&receipt_id)?;
    Ok(Json(receipt))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/services/{id}", get(get_service))
        .route("/users/{id}", get(get_user))
        .route("/receipts/{id}", get(get_receipt))
}
