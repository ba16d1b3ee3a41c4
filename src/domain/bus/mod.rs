//! Bus and seat registry aggregate

pub mod model;
pub mod repository;

pub use model::{Bus, Seat, SeatAvailability, SeatStatus};
pub use repository::BusRepository;
