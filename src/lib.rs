//! # Seatwise
//!
//! Bus seat booking service: seat allocation with a storage-enforced
//! uniqueness invariant, payment reconciliation, and passenger SMS
//! notifications.
//!
//! ## Architecture
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Services (booking, payment, fleet) and outbound ports
//! - **infrastructure**: External concerns (database, payment gateway, SMS)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
