//! Seatwise server entrypoint
//!
//! Bus seat booking service with payment reconciliation.
//! Reads configuration from TOML file (~/.config/seatwise/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use seatwise::application::{BookingService, FleetService, PaymentService};
use seatwise::config::AppConfig;
use seatwise::domain::RepositoryProvider;
use seatwise::infrastructure::database::migrator::Migrator;
use seatwise::infrastructure::payment::PaymentGatewayConfig;
use seatwise::infrastructure::sms::SmsConfig;
use seatwise::infrastructure::{HttpPaymentGateway, HttpSmsSender};
use seatwise::{create_api_router, default_config_path, init_database, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("SEATWISE_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Seatwise booking service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    seatwise::interfaces::http::modules::metrics::describe_metrics();
    info!("Prometheus metrics recorder installed");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.url.clone(),
    };
    info!("Database: {}", db_config.url);

    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    let repos: Arc<dyn RepositoryProvider> =
        Arc::new(seatwise::SeaOrmRepositoryProvider::new(db.clone()));

    // ── External providers ─────────────────────────────────────
    let gateway_config = PaymentGatewayConfig {
        api_base: app_cfg.payment.api_base.clone(),
        api_key: app_cfg.payment.api_key.clone(),
        callback_url: app_cfg.payment.callback_url.clone(),
    };
    if !gateway_config.is_configured() {
        warn!("Payment gateway credentials not configured; checkout will be rejected");
    }
    let gateway = Arc::new(HttpPaymentGateway::new(gateway_config));

    let sms_config = SmsConfig {
        api_base: app_cfg.sms.api_base.clone(),
        api_key: app_cfg.sms.api_key.clone(),
        sender_id: app_cfg.sms.sender_id.clone(),
    };
    if !sms_config.is_configured() {
        warn!("SMS provider credentials not configured; confirmations will not be sent");
    }
    let sms = Arc::new(HttpSmsSender::new(sms_config));

    // ── Services ───────────────────────────────────────────────
    let booking_service = Arc::new(BookingService::new(repos.clone(), sms));
    let payment_service = Arc::new(PaymentService::new(
        repos.clone(),
        gateway,
        booking_service.clone(),
        app_cfg.payment.paid_statuses.clone(),
    ));
    let fleet_service = Arc::new(FleetService::new(repos.clone()));

    // ── REST API server ────────────────────────────────────────
    let api_router = create_api_router(
        repos,
        db.clone(),
        booking_service,
        payment_service,
        fleet_service,
        prometheus_handle,
    );

    let api_addr = app_cfg.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Performing final cleanup...");
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Seatwise shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
