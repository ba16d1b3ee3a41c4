//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_bus_types;
mod m20250301_000002_create_buses;
mod m20250301_000003_create_seats;
mod m20250301_000004_create_destinations;
mod m20250301_000005_create_pickup_points;
mod m20250301_000006_create_referrals;
mod m20250301_000007_create_bookings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_bus_types::Migration),
            Box::new(m20250301_000002_create_buses::Migration),
            Box::new(m20250301_000003_create_seats::Migration),
            Box::new(m20250301_000004_create_destinations::Migration),
            Box::new(m20250301_000005_create_pickup_points::Migration),
            Box::new(m20250301_000006_create_referrals::Migration),
            Box::new(m20250301_000007_create_bookings::Migration),
        ]
    }
}
