use super::balancer::balance_matrix;
use super::formula_parser::Composition;
use super::molmass::molar_mass;
use super::stoich_errors::StoichError;
use super::stoich_matrix::{Side, SpeciesInput, build_matrix, parse_species};
use crate::settings::BalancerSettings;
use log::{info, warn};
use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// species of a balanced reaction with its coefficient and molar mass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancedSpecies {
    pub id: String,
    pub formula: String,
    pub side: Side,
    pub composition: Composition,
    pub coefficient: u64,
    /// g/mol
    pub molar_mass: f64,
}

/// result of one balance operation: species in column order (reactants, then products)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalancedReaction {
    pub species: Vec<BalancedSpecies>,
    /// element order of the stoichiometric matrix
    pub elements: Vec<String>,
}

/// Balances the reaction given by a list of formulas with sides.
///
/// formulas -> compositions -> stoichiometric matrix -> null vector -> minimal positive
/// integer coefficients, then the molar mass of every species. Coefficients that do not conserve
/// every element give `StoichError::Unbalanced`.
pub fn balance(
    inputs: &[SpeciesInput],
    settings: &BalancerSettings,
) -> Result<BalancedReaction, StoichError> {
    let parsed = parse_species(inputs)?;
    let stoich_matrix = build_matrix(&parsed);
    stoich_matrix.validate()?;
    let coefficients = balance_matrix(&stoich_matrix.matrix, settings)?;

    let species = parsed
        .into_iter()
        .zip(coefficients)
        .map(|(s, coefficient)| {
            let molar_mass = molar_mass(&s.composition)?;
            Ok(BalancedSpecies {
                id: s.id,
                formula: s.formula,
                side: s.side,
                composition: s.composition,
                coefficient,
                molar_mass,
            })
        })
        .collect::<Result<Vec<_>, StoichError>>()?;

    let reaction = BalancedReaction {
        species,
        elements: stoich_matrix.elements,
    };
    // continued fractions stop at max_denominator, so an exact null vector is not guaranteed
    if !reaction.is_balanced() {
        warn!(
            "{} is not balanced, fractions were cut at max_denominator = {}",
            reaction.equation_string(),
            settings.max_denominator
        );
        return Err(StoichError::Unbalanced {
            max_denominator: settings.max_denominator,
        });
    }
    info!("balanced: {}", reaction.equation_string());
    Ok(reaction)
}

impl BalancedReaction {
    pub fn find(&self, id: &str) -> Option<&BalancedSpecies> {
        self.species.iter().find(|s| s.id == id)
    }

    pub fn find_by_formula(&self, formula: &str) -> Option<&BalancedSpecies> {
        self.species.iter().find(|s| s.formula == formula)
    }

    pub fn reactants(&self) -> impl Iterator<Item = &BalancedSpecies> {
        self.species.iter().filter(|s| s.side == Side::Reactant)
    }

    pub fn products(&self) -> impl Iterator<Item = &BalancedSpecies> {
        self.species.iter().filter(|s| s.side == Side::Product)
    }

    pub fn coefficients(&self) -> Vec<u64> {
        self.species.iter().map(|s| s.coefficient).collect()
    }

    /// "2 H2 + O2 → 2 H2O", coefficients equal to 1 are omitted
    pub fn equation_string(&self) -> String {
        fn side_string<'a>(species: impl Iterator<Item = &'a BalancedSpecies>) -> String {
            species
                .map(|s| {
                    if s.coefficient == 1 {
                        s.formula.clone()
                    } else {
                        format!("{} {}", s.coefficient, s.formula)
                    }
                })
                .collect::<Vec<_>>()
                .join(" + ")
        }
        format!(
            "{} → {}",
            side_string(self.reactants()),
            side_string(self.products())
        )
    }

    /// "H2O: 18.015 g/mol" for every species
    pub fn molar_mass_list(&self) -> Vec<String> {
        self.species
            .iter()
            .map(|s| format!("{}: {:.3} g/mol", s.formula, s.molar_mass))
            .collect()
    }

    /// element-by-element check that atoms are conserved with the stored coefficients
    pub fn is_balanced(&self) -> bool {
        self.elements.iter().all(|el| {
            let net: i128 = self
                .species
                .iter()
                .map(|s| {
                    let atoms = s.composition.get(el).unwrap_or(0) as i128 * s.coefficient as i128;
                    match s.side {
                        Side::Reactant => -atoms,
                        Side::Product => atoms,
                    }
                })
                .sum();
            net == 0
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("id"),
            Cell::new("side"),
            Cell::new("formula"),
            Cell::new("coefficient"),
            Cell::new("molar mass, g/mol"),
        ]));
        for s in &self.species {
            table.add_row(Row::new(vec![
                Cell::new(&s.id),
                Cell::new(s.side.as_str()),
                Cell::new(&s.formula),
                Cell::new(&s.coefficient.to_string()),
                Cell::new(&format!("{:.3}", s.molar_mass)),
            ]));
        }
        println!("{}", self.equation_string());
        table.printstd();
    }
}
