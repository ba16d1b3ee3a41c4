use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Seat {seat_number} on bus {bus_id} is already taken")]
    SeatTaken { bus_id: i32, seat_number: i32 },

    #[error("Seat {seat_number} on bus {bus_id} is not open for booking")]
    SeatInactive { bus_id: i32, seat_number: i32 },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("{entity} {id} is still referenced and cannot be deleted")]
    DependencyInUse { entity: &'static str, id: String },

    #[error("Payment provider: {0}")]
    Provider(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
