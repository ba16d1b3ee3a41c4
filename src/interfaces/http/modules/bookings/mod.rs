//! Booking endpoints: seat reservation, listing, status transitions

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
