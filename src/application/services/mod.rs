//! Application services

pub mod booking;
pub mod fleet;
pub mod payment;

#[cfg(test)]
pub(crate) mod testutil;

pub use booking::BookingService;
pub use fleet::FleetService;
pub use payment::{PaymentService, ReconcileOutcome, WebhookUpdate, DEFAULT_PAID_STATUSES};
