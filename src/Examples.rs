/// worked examples: formula parsing, balancing, conversions and sessions
pub mod stoichiometry_examples;
