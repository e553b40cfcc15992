pub fn stoich_examples(stoichtask: usize) {
    //
    match stoichtask {
        0 => {
            // atomic composition and molar masses
            use crate::Stoichiometry::formula_parser::parse_formula;
            use crate::Stoichiometry::molmass::{
                calculate_molar_mass, calculate_molar_mass_of_vector_of_subs,
            };
            let formula = "C6H8O6";
            let (molar_mass, element_composition) = calculate_molar_mass(formula).unwrap();
            println!("Element counts: {}", element_composition);
            println!("Molar mass: {:.3} g/mol", molar_mass);

            let atomic_composition = parse_formula("Na(NO3)2").unwrap();
            println!("{:?}", atomic_composition.to_hashmap());

            let vec_of_formulae = vec!["H2O", "NaCl", "C6H8O6", "Ca(NO3)2"];
            let expected_molar_masses = vec![18.015, 58.44, 176.124, 164.086];
            let calculated_molar_masses =
                calculate_molar_mass_of_vector_of_subs(&vec_of_formulae).unwrap();
            for (i, &expected_molar_mass) in expected_molar_masses.iter().enumerate() {
                println!("molar mass: {:.3} g/mol", calculated_molar_masses[i]);
                assert!((calculated_molar_masses[i] - expected_molar_mass).abs() < 1e-2);
            }
            // charges and hydrates are not formulas of this calculator
            for bad in ["SO4-2", "CuSO4·5H2O", "h2o"] {
                println!("{}", parse_formula(bad).unwrap_err());
            }
        }
        1 => {
            // balancing reactions
            use crate::Stoichiometry::reaction::balance;
            use crate::Stoichiometry::stoich_matrix::SpeciesInput;
            use crate::settings::BalancerSettings;
            let settings = BalancerSettings::default();
            let reactions = vec![
                (vec!["CH4", "O2"], vec!["CO2", "H2O"]),
                (vec!["KMnO4", "HCl"], vec!["KCl", "MnCl2", "H2O", "Cl2"]),
                (vec!["Fe2(SO4)3", "KOH"], vec!["K2SO4", "Fe(OH)3"]),
                (vec!["C₆H₁₂O₆", "O₂"], vec!["CO₂", "H₂O"]),
            ];
            for (reactants, products) in reactions {
                let inputs: Vec<SpeciesInput> = reactants
                    .iter()
                    .map(|f| SpeciesInput::reactant(f))
                    .chain(products.iter().map(|f| SpeciesInput::product(f)))
                    .collect();
                let reaction = balance(&inputs, &settings).unwrap();
                reaction.pretty_print();
                println!("{:?}", reaction.molar_mass_list());
                assert!(reaction.is_balanced());
            }
            // species that cannot be balanced
            let inputs = vec![SpeciesInput::reactant("H2"), SpeciesInput::product("O2")];
            println!("{}", balance(&inputs, &settings).unwrap_err());
        }
        2 => {
            // quantity conversions with the factor-label chain
            use crate::Conversion::engine::convert;
            use crate::Conversion::quantities::{KnownQuantity, TargetQuantity};
            use crate::Conversion::units::{PressureUnit, VolumeUnit};
            use crate::Stoichiometry::reaction::balance;
            use crate::Stoichiometry::stoich_matrix::SpeciesInput;
            use crate::settings::BalancerSettings;
            let inputs = vec![
                SpeciesInput::reactant("Al"),
                SpeciesInput::reactant("HCl"),
                SpeciesInput::product("AlCl3"),
                SpeciesInput::product("H2"),
            ];
            let reaction = balance(&inputs, &BalancerSettings::default()).unwrap();
            println!("{}", reaction.equation_string());
            let tasks = vec![
                ("r1", "p2", KnownQuantity::mass(5.4), TargetQuantity::mass()),
                (
                    "r2",
                    "p2",
                    KnownQuantity::solution(250.0, 0.5),
                    TargetQuantity::gas(1.0, PressureUnit::Atm, 25.0),
                ),
                (
                    "p2",
                    "r2",
                    KnownQuantity::gas(2.0, 740.0, PressureUnit::MmHg, 20.0),
                    TargetQuantity::solution(1.0, VolumeUnit::ML),
                ),
                ("r1", "p1", KnownQuantity::moles(0.2), TargetQuantity::moles()),
            ];
            for (known, target, known_quantity, target_quantity) in tasks {
                let result =
                    convert(&reaction, known, target, &known_quantity, &target_quantity).unwrap();
                println!("{}", result.description);
                println!("{}", result.trace);
                println!("cancelled units: {:?}", result.trace.cancelled_units());
            }
        }
        3 => {
            // session with settings from a config file
            use crate::Conversion::quantities::{KnownQuantity, TargetQuantity};
            use crate::Stoichiometry::stoich_matrix::SpeciesInput;
            use crate::session::ReactionSession;
            use crate::settings::SettingsManager;
            let manager = SettingsManager::new();
            println!("settings from {}: {:?}", manager.config_file(), manager.settings());
            let mut session = ReactionSession::new(manager.settings().clone());
            let reaction = session
                .balance(vec![
                    SpeciesInput::reactant("N2"),
                    SpeciesInput::reactant("H2"),
                    SpeciesInput::product("NH3"),
                ])
                .unwrap();
            println!("{}", reaction.to_json().unwrap());
            let result = session
                .convert("r1", "p1", &KnownQuantity::mass(28.0), &TargetQuantity::mass())
                .unwrap();
            println!("{}", result.description);
            assert!((result.value - 34.0).abs() < 0.1);
        }
        _ => {
            println!("No such task");
        }
    }
}
