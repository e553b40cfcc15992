use thiserror::Error;

/// error types of formula parsing and equation balancing
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoichError {
    #[error("Cannot parse formula '{formula}' at position {position}: {reason}")]
    Parse {
        formula: String,
        position: usize,
        reason: String,
    },
    #[error("Unsupported element: {0}")]
    UnknownElement(String),
    #[error("Enter at least one reactant and one product")]
    NotEnoughSpecies,
    #[error("Cannot balance the reaction with the given species")]
    Underconstrained,
    #[error("Degenerate balance: check the species")]
    Degenerate,
    #[error("Non-finite number while balancing: {0}")]
    NonFinite(f64),
    #[error("Integer overflow while scaling coefficients")]
    Overflow,
    #[error("Coefficients found with max_denominator = {max_denominator} do not balance the reaction, raise the bound")]
    Unbalanced { max_denominator: i64 },
}

impl StoichError {
    pub fn parse(formula: &str, position: usize, reason: &str) -> Self {
        StoichError::Parse {
            formula: formula.to_string(),
            position,
            reason: reason.to_string(),
        }
    }
}
