//! Read-only aggregate endpoints for the operator dashboard

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
