use super::conversion_errors::ConversionError;
use super::quantities::{KnownQuantity, KnownQuantityCalc, TargetQuantity, TargetQuantityCalc};
use super::trace::{ConversionTrace, Term};
use crate::Stoichiometry::reaction::{BalancedReaction, BalancedSpecies};
use log::info;
use serde::Serialize;

/// Result of one conversion
/// # Fields
/// * `value` - requested quantity in `unit`
/// * `moles_known`, `moles_target` - intermediate amounts of both species
/// * `trace` - the factor-label chain of the whole calculation
/// * `description` - e.g. "35.744 g of H2O"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    pub unit: String,
    pub formula: String,
    pub moles_known: f64,
    pub moles_target: f64,
    pub trace: ConversionTrace,
    pub description: String,
}

/// moles of target per mole of known species
pub fn stoichiometric_ratio(known: &BalancedSpecies, target: &BalancedSpecies) -> f64 {
    target.coefficient as f64 / known.coefficient as f64
}

// quantities that overflow f64 on the way are reported instead of returned as inf
fn finite(value: f64, what: &str) -> Result<f64, ConversionError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConversionError::InvalidQuantity(format!(
            "{} is out of range ({})",
            what, value
        )))
    }
}

fn species<'a>(
    reaction: &'a BalancedReaction,
    id: &str,
) -> Result<&'a BalancedSpecies, ConversionError> {
    reaction
        .find(id)
        .ok_or_else(|| ConversionError::UnknownSpecies(id.to_string()))
}

/// Converts a known quantity of species `known_id` into the requested quantity of species `target_id`
/// of a balanced reaction: known quantity -> moles of known -> moles of target (coefficient ratio) ->
/// target quantity.
pub fn convert(
    reaction: &BalancedReaction,
    known_id: &str,
    target_id: &str,
    known_quantity: &KnownQuantity,
    target_quantity: &TargetQuantity,
) -> Result<ConversionResult, ConversionError> {
    let known = species(reaction, known_id)?;
    let target = species(reaction, target_id)?;
    if known.id == target.id {
        return Err(ConversionError::SameSpecies);
    }

    let mut trace = ConversionTrace::new();
    let moles_known = known_quantity.to_moles(known, &mut trace)?;
    let moles_known = finite(moles_known, "amount of the known species")?;
    let moles_target = finite(
        moles_known * stoichiometric_ratio(known, target),
        "amount of the target species",
    )?;
    trace.multiply_fraction(
        Term::new(target.coefficient as f64, &format!("mol {}", target.formula), 0),
        Term::new(known.coefficient as f64, &format!("mol {}", known.formula), 0),
    );
    let value = finite(
        target_quantity.from_moles(moles_target, target, &mut trace)?,
        "result",
    )?;
    let description = target_quantity.describe(value, target);
    info!("{} -> {}", known.formula, description);

    Ok(ConversionResult {
        value,
        unit: target_quantity.unit().to_string(),
        formula: target.formula.clone(),
        moles_known,
        moles_target,
        trace,
        description,
    })
}
