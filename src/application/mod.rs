//! Business logic: services and outbound ports

pub mod ports;
pub mod services;

pub use ports::{CheckoutRequest, CheckoutSession, PaymentGateway, SmsSender};
pub use services::{BookingService, FleetService, PaymentService};
