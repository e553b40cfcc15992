//! The balanced reaction a user is currently working with.
//!
//! `ReactionSession` is the state behind the interactive menu: species are balanced once and then
//! any number of conversions are run against the result. A failed balance leaves no reaction, so
//! stale coefficients can never be used for a conversion.
use crate::Conversion::conversion_errors::ConversionError;
use crate::Conversion::engine::{ConversionResult, convert};
use crate::Conversion::quantities::{KnownQuantity, TargetQuantity};
use crate::Stoichiometry::reaction::{BalancedReaction, balance};
use crate::Stoichiometry::stoich_errors::StoichError;
use crate::Stoichiometry::stoich_matrix::SpeciesInput;
use crate::settings::BalancerSettings;
use log::warn;

#[derive(Debug, Clone, Default)]
pub struct ReactionSession {
    pub settings: BalancerSettings,
    reaction: Option<BalancedReaction>,
}

impl ReactionSession {
    pub fn new(settings: BalancerSettings) -> Self {
        Self {
            settings,
            reaction: None,
        }
    }

    /// Balances a new reaction and makes it the current one. On error the current reaction is dropped.
    pub fn balance(&mut self, inputs: Vec<SpeciesInput>) -> Result<&BalancedReaction, StoichError> {
        self.reaction = None;
        match balance(&inputs, &self.settings) {
            Ok(reaction) => Ok(&*self.reaction.insert(reaction)),
            Err(e) => {
                warn!("balancing failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn current(&self) -> Option<&BalancedReaction> {
        self.reaction.as_ref()
    }

    /// converts a quantity between two species of the current reaction
    pub fn convert(
        &self,
        known_id: &str,
        target_id: &str,
        known_quantity: &KnownQuantity,
        target_quantity: &TargetQuantity,
    ) -> Result<ConversionResult, ConversionError> {
        let reaction = self
            .reaction
            .as_ref()
            .ok_or(ConversionError::NoBalancedReaction)?;
        convert(reaction, known_id, target_id, known_quantity, target_quantity)
    }

    pub fn reset(&mut self) {
        self.reaction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn water_inputs() -> Vec<SpeciesInput> {
        vec![
            SpeciesInput::reactant("H2"),
            SpeciesInput::reactant("O2"),
            SpeciesInput::product("H2O"),
        ]
    }

    #[test]
    fn test_balance_then_convert() {
        let mut session = ReactionSession::default();
        let reaction = session.balance(water_inputs()).unwrap();
        assert_eq!(reaction.coefficients(), vec![2, 1, 2]);

        let before = session.current().cloned();
        let res = session
            .convert("r1", "p1", &KnownQuantity::mass(4.0), &TargetQuantity::mass())
            .unwrap();
        assert_relative_eq!(res.value, 35.744, epsilon = 1e-3);
        // conversions do not touch the reaction
        assert_eq!(session.current().cloned(), before);
    }

    #[test]
    fn test_convert_without_reaction() {
        let session = ReactionSession::new(BalancerSettings::default());
        assert_eq!(
            session.convert("r1", "p1", &KnownQuantity::moles(1.0), &TargetQuantity::moles()),
            Err(ConversionError::NoBalancedReaction)
        );
    }

    #[test]
    fn test_failed_balance_clears_reaction() {
        let mut session = ReactionSession::default();
        session.balance(water_inputs()).unwrap();
        assert!(session.current().is_some());

        let err = session
            .balance(vec![SpeciesInput::reactant("H2"), SpeciesInput::product("O2")])
            .unwrap_err();
        assert_eq!(err, StoichError::Underconstrained);
        assert!(session.current().is_none());
        assert_eq!(
            session.convert("r1", "p1", &KnownQuantity::moles(1.0), &TargetQuantity::moles()),
            Err(ConversionError::NoBalancedReaction)
        );
    }

    #[test]
    fn test_rebalance_replaces_reaction() {
        let mut session = ReactionSession::default();
        session.balance(water_inputs()).unwrap();
        session
            .balance(vec![
                SpeciesInput::reactant("N2"),
                SpeciesInput::reactant("H2"),
                SpeciesInput::product("NH3"),
            ])
            .unwrap();
        assert_eq!(session.current().unwrap().equation_string(), "N2 + 3 H2 → 2 NH3");
        session.reset();
        assert!(session.current().is_none());
    }
}
