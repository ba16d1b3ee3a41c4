//! SeaORM entities

pub mod booking;
pub mod bus;
pub mod bus_type;
pub mod destination;
pub mod pickup_point;
pub mod referral;
pub mod seat;
