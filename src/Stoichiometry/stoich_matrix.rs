use super::formula_parser::{Composition, normalize_subscripts, parse_formula};
use super::stoich_errors::StoichError;
use log::debug;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// side of the reaction equation a species belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Reactant,
    Product,
}

impl Side {
    /// sign of the species atoms in the element balance: reactants are consumed
    pub fn sign(&self) -> f64 {
        match self {
            Side::Reactant => -1.0,
            Side::Product => 1.0,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Reactant => "reactant",
            Side::Product => "product",
        }
    }
    fn id_prefix(&self) -> char {
        match self {
            Side::Reactant => 'r',
            Side::Product => 'p',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// one formula entered by the user together with its side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesInput {
    pub formula: String,
    pub side: Side,
}

impl SpeciesInput {
    pub fn new(formula: &str, side: Side) -> Self {
        Self {
            formula: formula.to_string(),
            side,
        }
    }
    pub fn reactant(formula: &str) -> Self {
        Self::new(formula, Side::Reactant)
    }
    pub fn product(formula: &str) -> Self {
        Self::new(formula, Side::Product)
    }
}

/// species with parsed composition, in matrix column order
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSpecies {
    /// r1, r2, ... for reactants and p1, p2, ... for products
    pub id: String,
    pub formula: String,
    pub side: Side,
    pub composition: Composition,
}

/// Parses every formula and puts the species in column order: all reactants in input order,
/// then all products in input order. Blank formulas are skipped. At least one reactant and one
/// product must remain.
pub fn parse_species(inputs: &[SpeciesInput]) -> Result<Vec<ParsedSpecies>, StoichError> {
    let mut parsed = Vec::new();
    for side in [Side::Reactant, Side::Product] {
        let mut n = 0;
        for input in inputs.iter().filter(|input| input.side == side) {
            // stored without any whitespace, as parse_formula reads it
            let formula: String = normalize_subscripts(&input.formula)
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if formula.is_empty() {
                continue;
            }
            n += 1;
            let composition = parse_formula(&formula)?;
            parsed.push(ParsedSpecies {
                id: format!("{}{}", side.id_prefix(), n),
                formula,
                side,
                composition,
            });
        }
        if n == 0 {
            return Err(StoichError::NotEnoughSpecies);
        }
    }
    Ok(parsed)
}

/// element x species matrix of signed atom counts
#[derive(Debug, Clone, PartialEq)]
pub struct StoichMatrix {
    pub matrix: DMatrix<f64>,
    /// row labels, in discovery order
    pub elements: Vec<String>,
    /// column labels (species ids)
    pub species: Vec<String>,
}

impl StoichMatrix {
    /// a reaction needs at least one element and two species to be balanced
    pub fn validate(&self) -> Result<(), StoichError> {
        if self.matrix.nrows() < 1 || self.matrix.ncols() < 2 {
            return Err(StoichError::NotEnoughSpecies);
        }
        Ok(())
    }
}

/// Builds the stoichiometric matrix: rows are elements in the order they are first met scanning
/// the species in column order, entries are atom counts negated for reactants, so that a vector of
/// coefficients balances the reaction exactly when it lies in the null space of the matrix.
pub fn build_matrix(species: &[ParsedSpecies]) -> StoichMatrix {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut elements: Vec<String> = Vec::new();
    for s in species {
        for el in s.composition.elements() {
            if seen.insert(el) {
                elements.push(el.to_string());
            }
        }
    }
    let mut matrix = DMatrix::zeros(elements.len(), species.len());
    for (j, s) in species.iter().enumerate() {
        for (i, el) in elements.iter().enumerate() {
            if let Some(count) = s.composition.get(el) {
                matrix[(i, j)] = s.side.sign() * count as f64;
            }
        }
    }
    debug!("stoichiometric matrix, rows {:?}: {}", elements, matrix);
    StoichMatrix {
        matrix,
        elements,
        species: species.iter().map(|s| s.id.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_species_order_and_ids() {
        let inputs = vec![
            SpeciesInput::product("H2O"),
            SpeciesInput::reactant("H₂"),
            SpeciesInput::reactant("  "),
            SpeciesInput::reactant("O2"),
        ];
        let parsed = parse_species(&inputs).unwrap();
        let ids: Vec<&str> = parsed.iter().map(|s| s.id.as_str()).collect();
        let formulas: Vec<&str> = parsed.iter().map(|s| s.formula.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r2", "p1"]);
        assert_eq!(formulas, vec!["H2", "O2", "H2O"]);
    }

    #[test]
    fn test_stored_formula_has_no_whitespace() {
        let inputs = vec![
            SpeciesInput::reactant("Fe2 (SO4)3"),
            SpeciesInput::reactant(" K O H "),
            SpeciesInput::product("K2SO4"),
            SpeciesInput::product("Fe(OH)₃"),
        ];
        let parsed = parse_species(&inputs).unwrap();
        let formulas: Vec<&str> = parsed.iter().map(|s| s.formula.as_str()).collect();
        assert_eq!(formulas, vec!["Fe2(SO4)3", "KOH", "K2SO4", "Fe(OH)3"]);
    }

    #[test]
    fn test_parse_species_needs_both_sides() {
        let inputs = vec![SpeciesInput::reactant("H2"), SpeciesInput::reactant("O2")];
        assert_eq!(parse_species(&inputs), Err(StoichError::NotEnoughSpecies));
        let inputs = vec![SpeciesInput::reactant(""), SpeciesInput::product("H2O")];
        assert_eq!(parse_species(&inputs), Err(StoichError::NotEnoughSpecies));
    }

    #[test]
    fn test_element_matrix() {
        let inputs = vec![
            SpeciesInput::reactant("CH4"),
            SpeciesInput::reactant("O2"),
            SpeciesInput::product("CO2"),
            SpeciesInput::product("H2O"),
        ];
        let parsed = parse_species(&inputs).unwrap();
        let sm = build_matrix(&parsed);
        assert_eq!(sm.elements, vec!["C", "H", "O"]);
        assert_eq!(sm.species, vec!["r1", "r2", "p1", "p2"]);
        let expected = DMatrix::from_row_slice(
            3,
            4,
            &[
                -1.0, 0.0, 1.0, 0.0, //
                -4.0, 0.0, 0.0, 2.0, //
                0.0, -2.0, 2.0, 1.0,
            ],
        );
        assert_eq!(sm.matrix, expected);
        assert!(sm.validate().is_ok());
    }

    #[test]
    fn test_balanced_vector_is_in_null_space() {
        let inputs = vec![
            SpeciesInput::reactant("CH4"),
            SpeciesInput::reactant("O2"),
            SpeciesInput::product("CO2"),
            SpeciesInput::product("H2O"),
        ];
        let sm = build_matrix(&parse_species(&inputs).unwrap());
        let coefficients = nalgebra::DVector::from_vec(vec![1.0, 2.0, 1.0, 2.0]);
        let residual = &sm.matrix * coefficients;
        assert!(residual.iter().all(|x| *x == 0.0));
    }
}
