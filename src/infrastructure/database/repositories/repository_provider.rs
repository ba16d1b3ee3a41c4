//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::booking::BookingRepository;
use crate::domain::bus::BusRepository;
use crate::domain::catalog::CatalogRepository;
use crate::domain::repositories::RepositoryProvider;

use super::booking_repository::SeaOrmBookingRepository;
use super::bus_repository::SeaOrmBusRepository;
use super::catalog_repository::SeaOrmCatalogRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
pub struct SeaOrmRepositoryProvider {
    buses: SeaOrmBusRepository,
    bookings: SeaOrmBookingRepository,
    catalog: SeaOrmCatalogRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            buses: SeaOrmBusRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            catalog: SeaOrmCatalogRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn buses(&self) -> &dyn BusRepository {
        &self.buses
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn catalog(&self) -> &dyn CatalogRepository {
        &self.catalog
    }
}
