//! Bus and seat HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::{BookingService, FleetService};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{reject, ApiResponse, ValidatedJson};

use super::dto::*;

/// Application state for bus and seat handlers.
#[derive(Clone)]
pub struct BusAppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub fleet: Arc<FleetService>,
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    get,
    path = "/api/v1/buses",
    tag = "Buses",
    responses(
        (status = 200, description = "All buses", body = ApiResponse<Vec<BusDto>>)
    )
)]
pub async fn list_buses(
    State(state): State<BusAppState>,
) -> Result<Json<ApiResponse<Vec<BusDto>>>, (StatusCode, Json<ApiResponse<Vec<BusDto>>>)> {
    let buses = state.repos.buses().find_all().await.map_err(reject)?;
    Ok(Json(ApiResponse::success(
        buses.into_iter().map(BusDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/buses",
    tag = "Buses",
    request_body = CreateBusRequest,
    responses(
        (status = 201, description = "Bus created with its seats provisioned", body = ApiResponse<BusDto>),
        (status = 404, description = "Bus type not found")
    )
)]
pub async fn create_bus(
    State(state): State<BusAppState>,
    ValidatedJson(request): ValidatedJson<CreateBusRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BusDto>>), (StatusCode, Json<ApiResponse<BusDto>>)> {
    let bus = state
        .fleet
        .create_bus(&request.name, request.bus_type_id)
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(bus.into()))))
}

#[utoipa::path(
    get,
    path = "/api/v1/buses/{bus_id}",
    tag = "Buses",
    params(("bus_id" = i32, Path, description = "Bus ID")),
    responses(
        (status = 200, description = "Bus found", body = ApiResponse<BusDto>),
        (status = 404, description = "Bus not found")
    )
)]
pub async fn get_bus(
    State(state): State<BusAppState>,
    Path(bus_id): Path<i32>,
) -> Result<Json<ApiResponse<BusDto>>, (StatusCode, Json<ApiResponse<BusDto>>)> {
    let bus = state
        .repos
        .buses()
        .find_by_id(bus_id)
        .await
        .map_err(reject)?
        .ok_or_else(|| {
            reject(DomainError::NotFound {
                entity: "Bus",
                field: "id",
                value: bus_id.to_string(),
            })
        })?;
    Ok(Json(ApiResponse::success(bus.into())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/buses/{bus_id}",
    tag = "Buses",
    params(("bus_id" = i32, Path, description = "Bus ID")),
    responses(
        (status = 200, description = "Bus deleted"),
        (status = 409, description = "Bookings still reference this bus")
    )
)]
pub async fn delete_bus(
    State(state): State<BusAppState>,
    Path(bus_id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state.fleet.delete_bus(bus_id).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    get,
    path = "/api/v1/buses/{bus_id}/seats",
    tag = "Buses",
    params(("bus_id" = i32, Path, description = "Bus ID")),
    responses(
        (status = 200, description = "Per-seat availability, seat number ascending",
         body = ApiResponse<Vec<SeatStatusDto>>),
        (status = 404, description = "Bus not found")
    )
)]
pub async fn bus_seat_status(
    State(state): State<BusAppState>,
    Path(bus_id): Path<i32>,
) -> Result<
    Json<ApiResponse<Vec<SeatStatusDto>>>,
    (StatusCode, Json<ApiResponse<Vec<SeatStatusDto>>>),
> {
    let seats = state.bookings.seat_status(bus_id).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(
        seats.into_iter().map(SeatStatusDto::from).collect(),
    )))
}

#[utoipa::path(
    put,
    path = "/api/v1/buses/{bus_id}/seats/{seat_number}/active",
    tag = "Buses",
    params(
        ("bus_id" = i32, Path, description = "Bus ID"),
        ("seat_number" = i32, Path, description = "Seat number")
    ),
    request_body = SetSeatActiveRequest,
    responses(
        (status = 200, description = "Seat flag updated"),
        (status = 404, description = "Seat not found")
    )
)]
pub async fn set_seat_active(
    State(state): State<BusAppState>,
    Path((bus_id, seat_number)): Path<(i32, i32)>,
    Json(request): Json<SetSeatActiveRequest>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .fleet
        .set_seat_active(bus_id, seat_number, request.is_active)
        .await
        .map_err(reject)?;
    Ok(Json(ApiResponse::success(())))
}
