//! SeaORM repository implementations

pub mod booking_repository;
pub mod bus_repository;
pub mod catalog_repository;
pub mod repository_provider;

pub use booking_repository::SeaOrmBookingRepository;
pub use bus_repository::SeaOrmBusRepository;
pub use catalog_repository::SeaOrmCatalogRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
