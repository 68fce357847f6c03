use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::marketing_status::{codec, MarketingStatus};
use tracing::info;

use crate::errors::{lookup_status, JsonApiError};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/one/marketingstatus/byid/{id}", tag = "marketing-status",
    params(("id" = i32, Path, description = "Marketing status id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MarketingStatusDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<MarketingStatus>, StatusCode> {
    state.marketing_status.get_by_id(id).await.map(Json).map_err(lookup_status)
}

#[utoipa::path(
    get, path = "/one/marketingstatus/{name}", tag = "marketing-status",
    params(("name" = String, Path, description = "Exact marketing status name")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MarketingStatusDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_by_name(State(state): State<AppState>, Path(name): Path<String>) -> Result<Json<MarketingStatus>, StatusCode> {
    state.marketing_status.get_by_name(&name).await.map(Json).map_err(lookup_status)
}

#[utoipa::path(
    get, path = "/all/marketingstatus", tag = "marketing-status",
    responses(
        (status = 200, description = "All statuses by ascending id", body = [crate::openapi::MarketingStatusDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_all(State(state): State<AppState>) -> Result<Json<Vec<MarketingStatus>>, JsonApiError> {
    let all = state.marketing_status.get_all().await?;
    info!(count = all.len(), "list marketing statuses");
    Ok(Json(all))
}

#[utoipa::path(
    get, path = "/all/marketingstatus/mapped", tag = "marketing-status",
    responses(
        (status = 200, description = "All statuses keyed by id"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn get_all_mapped(State(state): State<AppState>) -> Result<Json<BTreeMap<i32, MarketingStatus>>, JsonApiError> {
    Ok(Json(state.marketing_status.get_all_mapped().await?))
}

#[utoipa::path(
    post, path = "/add/marketingstatus", tag = "marketing-status",
    request_body = crate::openapi::MarketingStatusDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MarketingStatusDoc),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Name already in use")
    )
)]
pub async fn add(State(state): State<AppState>, body: Bytes) -> Result<(StatusCode, Json<MarketingStatus>), JsonApiError> {
    let input = codec::decode(&body)?;
    let created = state.marketing_status.add(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/update/marketingstatus", tag = "marketing-status",
    request_body = crate::openapi::MarketingStatusDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::MarketingStatusDoc),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Name already in use")
    )
)]
pub async fn update(State(state): State<AppState>, body: Bytes) -> Result<Json<MarketingStatus>, JsonApiError> {
    let input = codec::decode(&body)?;
    Ok(Json(state.marketing_status.update(input).await?))
}

#[utoipa::path(
    delete, path = "/delete/marketingstatus/{id}", tag = "marketing-status",
    params(("id" = i32, Path, description = "Marketing status id")),
    responses(
        (status = 200, description = "Deleted, or was already absent"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<StatusCode, JsonApiError> {
    state.marketing_status.delete(id).await?;
    Ok(StatusCode::OK)
}
