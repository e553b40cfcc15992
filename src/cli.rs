/// balancing: reads reactant and product formulas and prints the balanced reaction
pub mod cli_balance;
/// conversion: asks for the known and the requested quantity and prints the result with its factor chain
pub mod cli_convert;
pub mod cli_examples;
/// main menu loop and stdin helpers
pub mod cli_main;
pub mod cli_settings;
