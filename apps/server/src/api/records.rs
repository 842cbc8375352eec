use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use gemval_core::details::{RecordDetail, RecordTrackingItem};
use gemval_core::records::{RecordStatus, ValuationRecord, ValuationRecordUpdate};

#[derive(Deserialize)]
struct ListRecordsQuery {
    status: Option<String>,
}

async fn create_record(
    Path(receipt_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ValuationRecord>> {
    let record = state.record_service.create_record(&receipt_id).await?;
    Ok(Json(record))
}

async fn list_records(
    Query(query): Query<ListRecordsQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ValuationRecord>>> {
    let status = query
        .status
        .map(|s| s.parse::<RecordStatus>())
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    let records = state.record_service.list_records(status)?;
    Ok(Json(records))
}

async fn get_record_detail(
    Path(record_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<RecordDetail>> {
    let detail = state.detail_service.get_record_detail(&record_id)?;
    Ok(Json(detail))
}

async fn update_record(
    Path(record_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<ValuationRecordUpdate>,
) -> ApiResult<Json<ValuationRecord>> {
    let record = state.record_service.update_record(&record_id, update).await?;
    Ok(Json(record))
}

async fn complete_record(
    Path(record_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ValuationRecord>> {
    let record = state.record_service.complete_record(&record_id).await?;
    Ok(Json(record))
}

async fn request_commitment(
    Path(record_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ValuationRecord>> {
    let record = state.record_service.request_commitment(&record_id).await?;
    Ok(Json(record))
}

async fn list_records_in_progress(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ValuationRecord>>> {
    let records = state.record_service.get_records_in_progress()?;
    Ok(Json(records))
}

async fn list_records_completed(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ValuationRecord>>> {
    let records = state.record_service.get_records_completed()?;
    Ok(Json(records))
}

async fn list_customer_records(
    Path(user_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<RecordTrackingItem>>> {
    let items = state.detail_service.list_customer_records(&user_id)?;
    Ok(Json(items))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/valuation-records", get(list_records))
        // The path parameter is a receipt id on POST (intake) and a record
        // id on GET/PUT, matching the intake flow's API shape.
        .route(
            "/valuation-records/{id}",
            get(get_record_detail)
                .post(create_record)
                .put(update_record),
        )
        .route("/valuation-records/{id}/complete", put(complete_record))
        .route(
            "/valuation-records/{id}/request-commitment",
            put(request_commitment),
        )
        .route("/valuation-records/user/{userId}", get(list_customer_records))
        .route("/valuation-records-in-progress", get(list_records_in_progress))
        .route("/valuation-records-completed", get(list_records_completed))
}
