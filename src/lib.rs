#[allow(non_snake_case)]
pub mod Conversion;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Stoichiometry;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod session;
pub mod settings;
