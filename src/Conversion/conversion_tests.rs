#[cfg(test)]
mod tests {
    use crate::Conversion::conversion_errors::ConversionError;
    use crate::Conversion::engine::{convert, stoichiometric_ratio};
    use crate::Conversion::quantities::{KnownQuantity, TargetQuantity};
    use crate::Conversion::trace::Operator;
    use crate::Conversion::units::{PressureUnit, VolumeUnit};
    use crate::Stoichiometry::reaction::{BalancedReaction, balance};
    use crate::Stoichiometry::stoich_matrix::SpeciesInput;
    use crate::settings::BalancerSettings;
    use approx::assert_relative_eq;

    fn reaction(reactants: &[&str], products: &[&str]) -> BalancedReaction {
        let inputs: Vec<SpeciesInput> = reactants
            .iter()
            .map(|f| SpeciesInput::reactant(f))
            .chain(products.iter().map(|f| SpeciesInput::product(f)))
            .collect();
        balance(&inputs, &BalancerSettings::default()).unwrap()
    }

    fn water() -> BalancedReaction {
        reaction(&["H2", "O2"], &["H2O"])
    }

    #[test]
    fn test_mass_to_mass() {
        let r = water();
        let res = convert(
            &r,
            "r1",
            "p1",
            &KnownQuantity::mass(4.0),
            &TargetQuantity::mass(),
        )
        .unwrap();
        assert_relative_eq!(res.moles_known, 1.984127, epsilon = 1e-6);
        assert_relative_eq!(res.moles_target, 1.984127, epsilon = 1e-6);
        assert_relative_eq!(res.value, 35.744, epsilon = 1e-3);
        assert_eq!(res.unit, "g");
        assert_eq!(res.formula, "H2O");
        assert_eq!(res.description, "35.744 g of H2O");

        // 1 O2 per 2 H2
        let res = convert(
            &r,
            "r1",
            "r2",
            &KnownQuantity::mass(4.0),
            &TargetQuantity::mass(),
        )
        .unwrap();
        assert_relative_eq!(res.moles_target, 0.992063, epsilon = 1e-6);
        assert_relative_eq!(res.value, 31.744, epsilon = 1e-3);
    }

    #[test]
    fn test_mass_trace() {
        let res = convert(
            &water(),
            "r1",
            "p1",
            &KnownQuantity::mass(4.0),
            &TargetQuantity::mass(),
        )
        .unwrap();
        assert_eq!(
            res.trace.to_string(),
            "4.000 g H2 × (1 mol H2 / 2.016 g H2) × (2 mol H2O / 2 mol H2) × (18.015 g H2O / 1 mol H2O) = 35.744 g H2O"
        );
        assert_eq!(
            res.trace.cancelled_units(),
            vec!["g H2".to_string(), "mol H2".to_string(), "mol H2O".to_string()]
        );
        assert_relative_eq!(res.trace.result().unwrap().value, res.value);
    }

    #[test]
    fn test_moles_to_moles() {
        let r = reaction(&["N2", "H2"], &["NH3"]);
        let res = convert(
            &r,
            "r2",
            "p1",
            &KnownQuantity::moles(3.0),
            &TargetQuantity::moles(),
        )
        .unwrap();
        assert_relative_eq!(res.value, 2.0, epsilon = 1e-12);
        assert_eq!(res.unit, "mol");
        assert_eq!(res.description, "2.000000 mol of NH3");
        assert_eq!(res.trace.len(), 3);
        assert_eq!(res.trace.steps[2].operator, Operator::Equals);
    }

    #[test]
    fn test_gas_at_standard_conditions() {
        let r = reaction(&["N2", "H2"], &["NH3"]);
        let res = convert(
            &r,
            "r1",
            "p1",
            &KnownQuantity::gas(22.414, 1.0, PressureUnit::Atm, 0.0),
            &TargetQuantity::moles(),
        )
        .unwrap();
        assert_relative_eq!(res.moles_known, 1.0, epsilon = 1e-3);
        assert_relative_eq!(res.value, 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_gas_pressure_units_agree() {
        let r = reaction(&["N2", "H2"], &["NH3"]);
        let amounts: Vec<f64> = [
            (1.0, PressureUnit::Atm),
            (101.325, PressureUnit::KPa),
            (760.0, PressureUnit::MmHg),
        ]
        .iter()
        .map(|&(p, unit)| {
            convert(
                &r,
                "r1",
                "p1",
                &KnownQuantity::gas(10.0, p, unit, 25.0),
                &TargetQuantity::moles(),
            )
            .unwrap()
            .moles_known
        })
        .collect();
        assert_relative_eq!(amounts[0], amounts[1], epsilon = 1e-12);
        assert_relative_eq!(amounts[0], amounts[2], epsilon = 1e-12);
    }

    #[test]
    fn test_gas_trace_in_kpa() {
        let r = reaction(&["N2", "H2"], &["NH3"]);
        let res = convert(
            &r,
            "r1",
            "p1",
            &KnownQuantity::gas(22.414, 101.325, PressureUnit::KPa, 0.0),
            &TargetQuantity::moles(),
        )
        .unwrap();
        // kPa is converted to atm before the gas constant is applied
        assert!(res.trace.cancelled_units().contains(&"kPa".to_string()));
        assert!(res.trace.to_string().starts_with("101.325 kPa × (1 atm / 101.325 kPa) × 22.414 L ÷"));
    }

    #[test]
    fn test_solution_to_gas() {
        // 250 mL of 0.5 M HCl dissolving aluminium
        let r = reaction(&["Al", "HCl"], &["AlCl3", "H2"]);
        let res = convert(
            &r,
            "r2",
            "p2",
            &KnownQuantity::solution(250.0, 0.5),
            &TargetQuantity::gas(1.0, PressureUnit::Atm, 25.0),
        )
        .unwrap();
        assert_relative_eq!(res.moles_known, 0.125, epsilon = 1e-12);
        assert_relative_eq!(res.moles_target, 0.0625, epsilon = 1e-12);
        assert_relative_eq!(res.value, 1.529081, epsilon = 1e-6);
        assert_eq!(res.unit, "L");
        assert_eq!(res.description, "1.529 L of H2 (ideal gas)");
        assert!(
            res.trace
                .to_string()
                .starts_with("0.500000 mol/L × 0.250000 L = 0.125000 mol HCl × (3 mol H2 / 6 mol HCl)")
        );
    }

    #[test]
    fn test_mass_to_solution_volume() {
        let r = reaction(&["NaOH", "HCl"], &["NaCl", "H2O"]);
        let res = convert(
            &r,
            "r1",
            "r2",
            &KnownQuantity::mass(10.0),
            &TargetQuantity::solution(2.0, VolumeUnit::ML),
        )
        .unwrap();
        assert_relative_eq!(res.moles_target, 0.250019, epsilon = 1e-6);
        assert_relative_eq!(res.value, 125.009, epsilon = 1e-3);
        assert_eq!(res.unit, "mL");
        assert_eq!(res.description, "125.009 mL of HCl solution");

        let res = convert(
            &r,
            "r1",
            "r2",
            &KnownQuantity::mass(10.0),
            &TargetQuantity::solution(2.0, VolumeUnit::L),
        )
        .unwrap();
        assert_relative_eq!(res.value, 0.125009, epsilon = 1e-6);
    }

    #[test]
    fn test_results_out_of_range_are_rejected() {
        let r = water();
        // 1 O2 gives 2 H2O, so the amount doubles past f64::MAX
        assert!(matches!(
            convert(&r, "r2", "p1", &KnownQuantity::moles(1e308), &TargetQuantity::moles()),
            Err(ConversionError::InvalidQuantity(_))
        ));
        // the amount stays finite but the mass does not
        assert!(matches!(
            convert(&r, "r1", "p1", &KnownQuantity::moles(1e307), &TargetQuantity::mass()),
            Err(ConversionError::InvalidQuantity(_))
        ));
        // small target molarity blows the volume up
        assert!(matches!(
            convert(
                &r,
                "r1",
                "p1",
                &KnownQuantity::moles(1e300),
                &TargetQuantity::solution(1e-10, VolumeUnit::ML)
            ),
            Err(ConversionError::InvalidQuantity(_))
        ));
        assert!(
            convert(&r, "r1", "p1", &KnownQuantity::moles(1e300), &TargetQuantity::mass()).is_ok()
        );
    }

    #[test]
    fn test_stoichiometric_ratio() {
        let r = reaction(&["KMnO4", "HCl"], &["KCl", "MnCl2", "H2O", "Cl2"]);
        let kmno4 = r.find("r1").unwrap();
        let cl2 = r.find("p4").unwrap();
        assert_relative_eq!(stoichiometric_ratio(kmno4, cl2), 2.5, epsilon = 1e-12);
        assert_relative_eq!(stoichiometric_ratio(cl2, kmno4), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_conversion_errors() {
        let r = water();
        let mass = KnownQuantity::mass(4.0);
        assert_eq!(
            convert(&r, "r1", "r1", &mass, &TargetQuantity::mass()),
            Err(ConversionError::SameSpecies)
        );
        assert_eq!(
            convert(&r, "r9", "p1", &mass, &TargetQuantity::mass()),
            Err(ConversionError::UnknownSpecies("r9".to_string()))
        );
        for bad in [
            KnownQuantity::mass(0.0),
            KnownQuantity::mass(-1.0),
            KnownQuantity::moles(f64::NAN),
            KnownQuantity::solution(100.0, 0.0),
            KnownQuantity::gas(1.0, 1.0, PressureUnit::Atm, -300.0),
            KnownQuantity::gas(1.0, -1.0, PressureUnit::KPa, 25.0),
        ] {
            assert!(
                matches!(
                    convert(&r, "r1", "p1", &bad, &TargetQuantity::mass()),
                    Err(ConversionError::InvalidQuantity(_))
                ),
                "{:?} should be rejected",
                bad
            );
        }
        for bad in [
            TargetQuantity::solution(0.0, VolumeUnit::L),
            TargetQuantity::gas(1.0, PressureUnit::Atm, f64::INFINITY),
            TargetQuantity::gas(0.0, PressureUnit::MmHg, 25.0),
        ] {
            assert!(
                matches!(
                    convert(&r, "r1", "p1", &mass, &bad),
                    Err(ConversionError::InvalidQuantity(_))
                ),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
