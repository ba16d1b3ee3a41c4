//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{any, delete, get, post, put},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, FleetService, PaymentService};
use crate::domain::RepositoryProvider;
use crate::interfaces::http::common::{ApiResponse, PaginatedResponse, PaginationParams};
use crate::interfaces::http::modules::{
    analytics, bookings, buses, catalog, health, metrics as metrics_module, payments,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::update_booking_status,
        bookings::cancel_booking,
        // Buses & seats
        buses::list_buses,
        buses::create_bus,
        buses::get_bus,
        buses::delete_bus,
        buses::bus_seat_status,
        buses::set_seat_active,
        // Catalog
        catalog::list_bus_types,
        catalog::create_bus_type,
        catalog::delete_bus_type,
        catalog::list_destinations,
        catalog::create_destination,
        catalog::update_destination_price,
        catalog::delete_destination,
        catalog::list_pickup_points,
        catalog::create_pickup_point,
        catalog::delete_pickup_point,
        catalog::list_referrals,
        catalog::create_referral,
        catalog::delete_referral,
        // Payments
        payments::create_checkout,
        // Analytics
        analytics::analytics_summary,
        analytics::revenue_by_destination,
        analytics::bookings_per_day,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            PaginationParams,
            PaginatedResponse<bookings::BookingDto>,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Bookings
            bookings::BookingDto,
            bookings::CreateBookingRequest,
            bookings::UpdateStatusRequest,
            // Buses
            buses::BusDto,
            buses::CreateBusRequest,
            buses::SeatStatusDto,
            buses::SetSeatActiveRequest,
            // Catalog
            catalog::BusTypeDto,
            catalog::CreateBusTypeRequest,
            catalog::DestinationDto,
            catalog::CreateDestinationRequest,
            catalog::UpdateDestinationPriceRequest,
            catalog::PickupPointDto,
            catalog::CreatePickupPointRequest,
            catalog::ReferralDto,
            catalog::CreateReferralRequest,
            // Payments
            payments::CreateCheckoutRequest,
            payments::CheckoutResponse,
            // Analytics
            analytics::AnalyticsSummary,
            analytics::RevenueByDestinationResponse,
            analytics::DestinationRevenue,
            analytics::BookingsPerDayResponse,
            analytics::DailyBookings,
        )
    ),
    tags(
        (name = "Health", description = "Server health check"),
        (name = "Bookings", description = "Seat reservation and booking lifecycle"),
        (name = "Buses", description = "Fleet management and the per-bus seat availability view"),
        (name = "Catalog", description = "Reference data: bus types, destinations, pickup points, referrals"),
        (name = "Payments", description = "Hosted checkout sessions and payment reconciliation"),
        (name = "Analytics", description = "Read-only aggregates for the operator dashboard"),
    ),
    info(
        title = "Seatwise Booking API",
        version = "1.0.0",
        description = "REST API for bus seat booking and payment reconciliation",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    booking_service: Arc<BookingService>,
    payment_service: Arc<PaymentService>,
    fleet_service: Arc<FleetService>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let booking_state = bookings::BookingAppState {
        bookings: Arc::clone(&booking_service),
    };

    let bus_state = buses::BusAppState {
        repos: Arc::clone(&repos),
        fleet: Arc::clone(&fleet_service),
        bookings: Arc::clone(&booking_service),
    };

    let catalog_state = catalog::CatalogAppState {
        repos: Arc::clone(&repos),
        fleet: fleet_service,
    };

    let gateway_configured = payment_service.gateway_configured();
    let payment_state = payments::PaymentAppState {
        payments: payment_service,
        bookings: booking_service,
    };

    let analytics_state = analytics::AnalyticsState { db: db.clone() };

    let health_state = health::HealthState {
        db,
        payment_gateway_configured: gateway_configured,
        started_at: Arc::new(Instant::now()),
    };

    let metrics_state = metrics_module::MetricsState {
        handle: metrics_handle,
    };

    // CORS configuration: the booking form and the gateway's webhook both
    // arrive from origins we do not control.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let booking_routes = Router::new()
        .route(
            "/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/{id}", get(bookings::get_booking))
        .route("/{id}/status", put(bookings::update_booking_status))
        .route("/{id}/cancel", post(bookings::cancel_booking))
        .with_state(booking_state);

    let bus_routes = Router::new()
        .route("/", get(buses::list_buses).post(buses::create_bus))
        .route("/{bus_id}", get(buses::get_bus).delete(buses::delete_bus))
        .route("/{bus_id}/seats", get(buses::bus_seat_status))
        .route(
            "/{bus_id}/seats/{seat_number}/active",
            put(buses::set_seat_active),
        )
        .with_state(bus_state);

    let bus_type_routes = Router::new()
        .route(
            "/",
            get(catalog::list_bus_types).post(catalog::create_bus_type),
        )
        .route("/{id}", delete(catalog::delete_bus_type))
        .with_state(catalog_state.clone());

    let destination_routes = Router::new()
        .route(
            "/",
            get(catalog::list_destinations).post(catalog::create_destination),
        )
        .route("/{id}", delete(catalog::delete_destination))
        .route("/{id}/price", put(catalog::update_destination_price))
        .with_state(catalog_state.clone());

    let pickup_point_routes = Router::new()
        .route(
            "/",
            get(catalog::list_pickup_points).post(catalog::create_pickup_point),
        )
        .route("/{id}", delete(catalog::delete_pickup_point))
        .with_state(catalog_state.clone());

    let referral_routes = Router::new()
        .route(
            "/",
            get(catalog::list_referrals).post(catalog::create_referral),
        )
        .route("/{id}", delete(catalog::delete_referral))
        .with_state(catalog_state);

    let payment_routes = Router::new()
        .route("/checkout", post(payments::create_checkout))
        // Gateways disagree on the callback method; accept them all
        .route("/webhook", any(payments::payment_webhook))
        .with_state(payment_state);

    let analytics_routes = Router::new()
        .route("/summary", get(analytics::analytics_summary))
        .route(
            "/revenue-by-destination",
            get(analytics::revenue_by_destination),
        )
        .route("/bookings-per-day", get(analytics::bookings_per_day))
        .with_state(analytics_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check).with_state(health_state))
        .route(
            "/metrics",
            get(metrics_module::prometheus_metrics).with_state(metrics_state),
        )
        .nest("/api/v1/bookings", booking_routes)
        .nest("/api/v1/buses", bus_routes)
        .nest("/api/v1/bus-types", bus_type_routes)
        .nest("/api/v1/destinations", destination_routes)
        .nest("/api/v1/pickup-points", pickup_point_routes)
        .nest("/api/v1/referrals", referral_routes)
        .nest("/api/v1/payments", payment_routes)
        .nest("/api/v1/analytics", analytics_routes)
        .layer(middleware::from_fn(
            metrics_module::http_metrics_middleware,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
