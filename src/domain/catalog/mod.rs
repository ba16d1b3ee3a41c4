//! Reference-data aggregate (bus types, destinations, pickup points,
//! referrals)

pub mod model;
pub mod repository;

pub use model::{BusType, Destination, PickupPoint, Referral};
pub use repository::CatalogRepository;
