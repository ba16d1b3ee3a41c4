//! Payment endpoints: hosted checkout creation and the gateway webhook

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
