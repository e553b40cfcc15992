use thiserror::Error;

/// error types of quantity conversion
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("No species with id '{0}' in the balanced reaction")]
    UnknownSpecies(String),
    #[error("Known and target species must be different")]
    SameSpecies,
    #[error("Balance the reaction first")]
    NoBalancedReaction,
}
