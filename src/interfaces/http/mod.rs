//! HTTP interface: REST API modules, shared types, router

pub mod common;
pub mod modules;
pub mod router;

pub use common::{ApiResponse, PaginatedResponse, PaginationParams, ValidatedJson};
pub use router::{create_api_router, ApiDoc};
