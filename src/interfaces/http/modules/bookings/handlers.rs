//! Booking HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::BookingService;
use crate::domain::{BookingDetails, BookingStatus, DomainError};
use crate::interfaces::http::common::{
    reject, ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson,
};

use super::dto::*;

/// Application state for booking handlers.
#[derive(Clone)]
pub struct BookingAppState {
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings",
    tag = "Bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Seat reserved", body = ApiResponse<BookingDto>),
        (status = 404, description = "Bus, seat or reference row not found"),
        (status = 409, description = "Seat already taken or inactive"),
        (status = 422, description = "Validation failed")
    )
)]
pub async fn create_booking(
    State(state): State<BookingAppState>,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingDto>>), (StatusCode, Json<ApiResponse<BookingDto>>)>
{
    let details = BookingDetails {
        full_name: request.full_name,
        passenger_class: request.passenger_class,
        email: request.email,
        phone: request.phone,
        emergency_contact: request.emergency_contact,
        pickup_point_id: request.pickup_point_id,
        destination_id: request.destination_id,
        referral_id: request.referral_id,
    };

    let booking = state
        .bookings
        .attempt_booking(request.bus_id, request.seat_number, details)
        .await
        .map_err(reject)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(booking.into())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings",
    tag = "Bookings",
    params(PaginationParams),
    responses(
        (status = 200, description = "Paginated bookings, newest first",
         body = ApiResponse<PaginatedResponse<BookingDto>>)
    )
)]
pub async fn list_bookings(
    State(state): State<BookingAppState>,
    Query(params): Query<PaginationParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<BookingDto>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<BookingDto>>>),
> {
    let (bookings, total) = state
        .bookings
        .list(params.page, params.limit)
        .await
        .map_err(reject)?;

    let items = bookings.into_iter().map(BookingDto::from).collect();
    Ok(Json(ApiResponse::success(PaginatedResponse::new(
        items,
        total,
        params.page,
        params.limit,
    ))))
}

#[utoipa::path(
    get,
    path = "/api/v1/bookings/{id}",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking found", body = ApiResponse<BookingDto>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state.bookings.get(&id).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/bookings/{id}/status",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated (no-op when unchanged)", body = ApiResponse<BookingDto>),
        (status = 400, description = "Unknown status or forbidden transition"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Restoring would collide with a live booking")
    )
)]
pub async fn update_booking_status(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let target = BookingStatus::parse(&request.status).ok_or_else(|| {
        reject(DomainError::Validation(format!(
            "unknown status '{}'",
            request.status
        )))
    })?;

    let booking = state.bookings.set_status(&id, target).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(booking.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/bookings/{id}/cancel",
    tag = "Bookings",
    params(("id" = String, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking cancelled, seat released", body = ApiResponse<BookingDto>),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn cancel_booking(
    State(state): State<BookingAppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BookingDto>>, (StatusCode, Json<ApiResponse<BookingDto>>)> {
    let booking = state.bookings.cancel_booking(&id).await.map_err(reject)?;
    Ok(Json(ApiResponse::success(booking.into())))
}
