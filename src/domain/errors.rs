use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Lookup of an entity that has no persisted row. Carries the entity
    /// name, so `NotFound("Order")` displays as "Order not found".
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    InvalidInput(String),
    #[error("Persistence error: {0}")]
    Persistence(String),
}
