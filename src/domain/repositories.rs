//! Repository provider: one object bundling all per-aggregate repositories

use crate::domain::booking::BookingRepository;
use crate::domain::bus::BusRepository;
use crate::domain::catalog::CatalogRepository;

/// Unified accessor for the per-aggregate repositories.
///
/// Services hold an `Arc<dyn RepositoryProvider>` so tests and alternative
/// storage backends can swap the whole persistence layer at one seam.
pub trait RepositoryProvider: Send + Sync {
    fn buses(&self) -> &dyn BusRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn catalog(&self) -> &dyn CatalogRepository;
}
