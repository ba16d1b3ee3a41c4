//! Booking aggregate
//!
//! Contains the Booking entity, its lifecycle state machine, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{Booking, BookingDetails, BookingStatus};
pub use repository::BookingRepository;
