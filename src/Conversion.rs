/// error type of quantity conversion
pub mod conversion_errors;
/// pressure, volume and temperature units, the gas constant and ideal gas arithmetic
pub mod units;
/// factor-label record of a conversion: every factor with its unit, the result and the units that cancel
pub mod trace;
/// The module describes known and target quantities of a species (mass, moles, volume of a solution,
/// volume of an ideal gas). Known quantities turn into moles, target quantities are computed from moles;
/// both are enums dispatched with enum_dispatch so new kinds of quantities only need a struct and a trait impl.
pub mod quantities;
/// Conversion of a known quantity of one species of a balanced reaction into a quantity of another species.
/// # Examples
/// ```
/// use StoichCalc::Conversion::engine::convert;
/// use StoichCalc::Conversion::quantities::{KnownQuantity, TargetQuantity};
/// use StoichCalc::Stoichiometry::reaction::balance;
/// use StoichCalc::Stoichiometry::stoich_matrix::SpeciesInput;
/// use StoichCalc::settings::BalancerSettings;
/// let inputs = vec![
///     SpeciesInput::reactant("H2"),
///     SpeciesInput::reactant("O2"),
///     SpeciesInput::product("H2O"),
/// ];
/// let reaction = balance(&inputs, &BalancerSettings::default()).unwrap();
/// let result = convert(&reaction, "r1", "p1", &KnownQuantity::mass(4.0), &TargetQuantity::mass()).unwrap();
/// assert_eq!(result.description, "35.744 g of H2O");
/// println!("{}", result.trace);
/// ```
pub mod engine;
mod conversion_tests;
