pub mod analytics;
pub mod bookings;
pub mod buses;
pub mod catalog;
pub mod health;
pub mod metrics;
pub mod payments;
