//! External concerns: database, payment gateway, SMS provider

pub mod database;
pub mod payment;
pub mod sms;

pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
pub use payment::{HttpPaymentGateway, PaymentGatewayConfig};
pub use sms::{HttpSmsSender, SmsConfig};
