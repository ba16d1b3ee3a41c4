//! Reference-data endpoints: bus types, destinations, pickup points,
//! referrals

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
