/// Error type shared by the parser, the matrix builder and the balancer.
pub mod stoich_errors;
/// The module parses chemical formulas such as "Fe2(SO4)3" or "H₂O" into an ordered elemental
/// composition. Nested brackets with multipliers are supported; charges,
/// hydrate dots and leading coefficients are rejected with the position of the offending character.
/// # Examples
/// ```
/// use StoichCalc::Stoichiometry::formula_parser::parse_formula;
/// let composition = parse_formula("Fe2(SO4)3").unwrap();
/// assert_eq!(composition.get("O"), Some(12));
/// assert_eq!(composition.render(), "Fe2S3O12");
/// ```
pub mod formula_parser;
/// atomic masses of elements and molar masses of compositions
pub mod molmass;
/// gcd, lcm and continued fraction reconstruction of exact fractions
pub mod rational;
/// The module orders the species of a reaction (reactants first, then products), assigns them
/// ids r1, r2, ..., p1, p2, ... and builds the signed element x species matrix:
/// reactant atom counts are negative, product atom counts are positive.
pub mod stoich_matrix;
/// The module finds the smallest positive integer coefficients balancing a stoichiometric matrix:
/// Gauss-Jordan elimination gives a real null vector, continued fractions turn it into exact fractions
/// and the vector is scaled by the lcm of denominators and divided by the gcd.
pub mod balancer;
/// High level balancing of a list of formulas.
/// # Examples
/// ```
/// use StoichCalc::Stoichiometry::reaction::balance;
/// use StoichCalc::Stoichiometry::stoich_matrix::SpeciesInput;
/// use StoichCalc::settings::BalancerSettings;
/// let inputs = vec![
///     SpeciesInput::reactant("CH4"),
///     SpeciesInput::reactant("O2"),
///     SpeciesInput::product("CO2"),
///     SpeciesInput::product("H2O"),
/// ];
/// let reaction = balance(&inputs, &BalancerSettings::default()).unwrap();
/// assert_eq!(reaction.equation_string(), "CH4 + 2 O2 → CO2 + 2 H2O");
/// reaction.pretty_print();
/// ```
pub mod reaction;
