//! Core business entities, types and traits

pub mod booking;
pub mod bus;
pub mod catalog;
pub mod error;
pub mod repositories;

// Re-export commonly used types
pub use booking::{Booking, BookingDetails, BookingStatus};
pub use bus::{Bus, Seat, SeatAvailability, SeatStatus};
pub use catalog::{BusType, Destination, PickupPoint, Referral};
pub use error::{DomainError, DomainResult};
pub use repositories::RepositoryProvider;
