//! Bus and seat endpoints: fleet CRUD, the public availability view,
//! and the operator seat toggle

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
