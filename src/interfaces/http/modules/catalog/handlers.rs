//! Reference-data HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::FleetService;
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{reject, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for reference-data handlers.
#[derive(Clone)]
pub struct CatalogAppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub fleet: Arc<FleetService>,
}

// ── Bus types ──────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/bus-types",
    tag = "Catalog",
    responses((status = 200, description = "All bus types", body = ApiResponse<Vec<BusTypeDto>>))
)]
pub async fn list_bus_types(
    State(state): State<CatalogAppState>,
) -> Result<Json<ApiResponse<Vec<BusTypeDto>>>, (StatusCode, Json<ApiResponse<Vec<BusTypeDto>>>)> {
    let rows = state.repos.catalog().list_bus_types().await.map_err(reject)?;
    Ok(Json(ApiResponse::success(
        rows.into_iter().map(BusTypeDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/bus-types",
    tag = "Catalog",
    request_body = CreateBusTypeRequest,
    responses((status = 201, description = "Bus type created", body = ApiResponse<BusTypeDto>))
)]
pub async fn create_bus_type(
    State(state): State<CatalogAppState>,
    ValidatedJson(request): ValidatedJson<CreateBusTypeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BusTypeDto>>), (StatusCode, Json<ApiResponse<BusTypeDto>>)>
{
    let row = state
        .repos
        .catalog()
        .create_bus_type(&request.name, request.seat_count)
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(row.into()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/bus-types/{id}",
    tag = "Catalog",
    params(("id" = i32, Path, description = "Bus type ID")),
    responses(
        (status = 200, description = "Bus type deleted"),
        (status = 409, description = "Buses still use this type")
    )
)]
pub async fn delete_bus_type(
    State(state): State<CatalogAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.fleet.delete_bus_type(id).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(())))
}

// ── Destinations ───────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/destinations",
    tag = "Catalog",
    responses((status = 200, description = "All destinations", body = ApiResponse<Vec<DestinationDto>>))
)]
pub async fn list_destinations(
    State(state): State<CatalogAppState>,
) -> Result<
    Json<ApiResponse<Vec<DestinationDto>>>,
    (StatusCode, Json<ApiResponse<Vec<DestinationDto>>>),
> {
    let rows = state
        .repos
        .catalog()
        .list_destinations()
        .await
        .map_err(reject)?;
    Ok(Json(ApiResponse::success(
        rows.into_iter().map(DestinationDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/destinations",
    tag = "Catalog",
    request_body = CreateDestinationRequest,
    responses((status = 201, description = "Destination created", body = ApiResponse<DestinationDto>))
)]
pub async fn create_destination(
    State(state): State<CatalogAppState>,
    ValidatedJson(request): ValidatedJson<CreateDestinationRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<DestinationDto>>),
    (StatusCode, Json<ApiResponse<DestinationDto>>),
> {
    let row = state
        .repos
        .catalog()
        .create_destination(&request.name, request.price)
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(row.into()))))
}

#[utoipa::path(
    put,
    path = "/api/v1/destinations/{id}/price",
    tag = "Catalog",
    params(("id" = i32, Path, description = "Destination ID")),
    request_body = UpdateDestinationPriceRequest,
    responses(
        (status = 200, description = "Fare updated; existing bookings keep their amount"),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn update_destination_price(
    State(state): State<CatalogAppState>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateDestinationPriceRequest>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .repos
        .catalog()
        .update_destination_price(id, request.price)
        .await
        .map_err(reject)?;
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/destinations/{id}",
    tag = "Catalog",
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Destination deleted"),
        (status = 409, description = "Bookings still reference this destination")
    )
)]
pub async fn delete_destination(
    State(state): State<CatalogAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.fleet.delete_destination(id).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(())))
}

// ── Pickup points ──────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/pickup-points",
    tag = "Catalog",
    responses((status = 200, description = "All pickup points", body = ApiResponse<Vec<PickupPointDto>>))
)]
pub async fn list_pickup_points(
    State(state): State<CatalogAppState>,
) -> Result<
    Json<ApiResponse<Vec<PickupPointDto>>>,
    (StatusCode, Json<ApiResponse<Vec<PickupPointDto>>>),
> {
    let rows = state
        .repos
        .catalog()
        .list_pickup_points()
        .await
        .map_err(reject)?;
    Ok(Json(ApiResponse::success(
        rows.into_iter().map(PickupPointDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/pickup-points",
    tag = "Catalog",
    request_body = CreatePickupPointRequest,
    responses((status = 201, description = "Pickup point created", body = ApiResponse<PickupPointDto>))
)]
pub async fn create_pickup_point(
    State(state): State<CatalogAppState>,
    ValidatedJson(request): ValidatedJson<CreatePickupPointRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<PickupPointDto>>),
    (StatusCode, Json<ApiResponse<PickupPointDto>>),
> {
    let row = state
        .repos
        .catalog()
        .create_pickup_point(&request.name)
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(row.into()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/pickup-points/{id}",
    tag = "Catalog",
    params(("id" = i32, Path, description = "Pickup point ID")),
    responses(
        (status = 200, description = "Pickup point deleted"),
        (status = 409, description = "Bookings still reference this pickup point")
    )
)]
pub async fn delete_pickup_point(
    State(state): State<CatalogAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.fleet.delete_pickup_point(id).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(())))
}

// ── Referrals ──────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/api/v1/referrals",
    tag = "Catalog",
    responses((status = 200, description = "All referrals", body = ApiResponse<Vec<ReferralDto>>))
)]
pub async fn list_referrals(
    State(state): State<CatalogAppState>,
) -> Result<Json<ApiResponse<Vec<ReferralDto>>>, (StatusCode, Json<ApiResponse<Vec<ReferralDto>>>)>
{
    let rows = state.repos.catalog().list_referrals().await.map_err(reject)?;
    Ok(Json(ApiResponse::success(
        rows.into_iter().map(ReferralDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/referrals",
    tag = "Catalog",
    request_body = CreateReferralRequest,
    responses((status = 201, description = "Referral created", body = ApiResponse<ReferralDto>))
)]
pub async fn create_referral(
    State(state): State<CatalogAppState>,
    ValidatedJson(request): ValidatedJson<CreateReferralRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReferralDto>>), (StatusCode, Json<ApiResponse<ReferralDto>>)>
{
    let row = state
        .repos
        .catalog()
        .create_referral(&request.name, request.phone.as_deref())
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(row.into()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/referrals/{id}",
    tag = "Catalog",
    params(("id" = i32, Path, description = "Referral ID")),
    responses(
        (status = 200, description = "Referral deleted"),
        (status = 409, description = "Bookings still reference this referral")
    )
)]
pub async fn delete_referral(
    State(state): State<CatalogAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.fleet.delete_referral(id).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(())))
}
