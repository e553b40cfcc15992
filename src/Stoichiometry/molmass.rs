use super::formula_parser::{Composition, parse_formula};
use super::stoich_errors::StoichError;
use log::debug;

// Define a struct to hold element data
pub struct Element {
    pub name: &'static str,
    pub atomic_mass: f64,
}

// Define a list of elements and their atomic masses (g/mol)
pub const ELEMENTS: &[Element] = &[
    Element { name: "H", atomic_mass: 1.008 },
    Element { name: "He", atomic_mass: 4.0026 },
    Element { name: "Li", atomic_mass: 6.94 },
    Element { name: "Be", atomic_mass: 9.0122 },
    Element { name: "B", atomic_mass: 10.81 },
    Element { name: "C", atomic_mass: 12.011 },
    Element { name: "N", atomic_mass: 14.007 },
    Element { name: "O", atomic_mass: 15.999 },
    Element { name: "F", atomic_mass: 18.998 },
    Element { name: "Ne", atomic_mass: 20.18 },
    Element { name: "Na", atomic_mass: 22.99 },
    Element { name: "Mg", atomic_mass: 24.305 },
    Element { name: "Al", atomic_mass: 26.982 },
    Element { name: "Si", atomic_mass: 28.085 },
    Element { name: "P", atomic_mass: 30.974 },
    Element { name: "S", atomic_mass: 32.06 },
    Element { name: "Cl", atomic_mass: 35.45 },
    Element { name: "Ar", atomic_mass: 39.948 },
    Element { name: "K", atomic_mass: 39.098 },
    Element { name: "Ca", atomic_mass: 40.078 },
    Element { name: "Sc", atomic_mass: 44.956 },
    Element { name: "Ti", atomic_mass: 47.867 },
    Element { name: "V", atomic_mass: 50.942 },
    Element { name: "Cr", atomic_mass: 51.996 },
    Element { name: "Mn", atomic_mass: 54.938 },
    Element { name: "Fe", atomic_mass: 55.845 },
    Element { name: "Co", atomic_mass: 58.933 },
    Element { name: "Ni", atomic_mass: 58.693 },
    Element { name: "Cu", atomic_mass: 63.546 },
    Element { name: "Zn", atomic_mass: 65.38 },
    Element { name: "Ga", atomic_mass: 69.723 },
    Element { name: "Ge", atomic_mass: 72.63 },
    Element { name: "As", atomic_mass: 74.922 },
    Element { name: "Se", atomic_mass: 78.971 },
    Element { name: "Br", atomic_mass: 79.904 },
    Element { name: "Kr", atomic_mass: 83.798 },
    Element { name: "Rb", atomic_mass: 85.468 },
    Element { name: "Sr", atomic_mass: 87.62 },
    Element { name: "Ag", atomic_mass: 107.8682 },
    Element { name: "Cd", atomic_mass: 112.414 },
    Element { name: "Sn", atomic_mass: 118.71 },
    Element { name: "Sb", atomic_mass: 121.76 },
    Element { name: "I", atomic_mass: 126.904 },
    Element { name: "Ba", atomic_mass: 137.327 },
    Element { name: "Pt", atomic_mass: 195.084 },
    Element { name: "Au", atomic_mass: 196.967 },
    Element { name: "Hg", atomic_mass: 200.592 },
    Element { name: "Pb", atomic_mass: 207.2 },
];

/// atomic mass of an element symbol, None if the element is not in the table
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|e| e.name == symbol)
        .map(|e| e.atomic_mass)
}

/// Molar mass (g/mol) of an already parsed composition.
/// Fails on the first element (in composition order) missing from the table.
pub fn molar_mass(composition: &Composition) -> Result<f64, StoichError> {
    let mut molar_mass = 0.0;
    for (element, count) in composition.iter() {
        let mass = atomic_mass(element)
            .ok_or_else(|| StoichError::UnknownElement(element.to_string()))?;
        molar_mass += mass * count as f64;
    }
    Ok(molar_mass)
}

// Function to calculate the molar mass of a substance given its chemical formula
pub fn calculate_molar_mass(formula: &str) -> Result<(f64, Composition), StoichError> {
    let counts = parse_formula(formula)?;
    let molar_mass = molar_mass(&counts)?;
    debug!("molar mass of {}: {} g/mol", formula, molar_mass);
    Ok((molar_mass, counts))
}

// Function to calculate the molar mass of a vector of chemical formulas
pub fn calculate_molar_mass_of_vector_of_subs(
    vec_of_formulae: &[&str],
) -> Result<Vec<f64>, StoichError> {
    vec_of_formulae
        .iter()
        .map(|formula| calculate_molar_mass(formula).map(|(mass, _)| mass))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_calculate_molar_mass() {
        let (molar_mass, composition) = calculate_molar_mass("H2O").unwrap();
        assert_relative_eq!(molar_mass, 18.015, epsilon = 1e-9);
        assert_eq!(composition.get("H"), Some(2));

        let (molar_mass, _) = calculate_molar_mass("NaCl").unwrap();
        assert_relative_eq!(molar_mass, 58.44, epsilon = 1e-9);

        let (molar_mass, _) = calculate_molar_mass("C6H8O6").unwrap();
        assert!((molar_mass - 176.12).abs() < 1e-2);

        let (molar_mass, _) = calculate_molar_mass("Ca(NO3)2").unwrap();
        assert!((molar_mass - 164.086).abs() < 1e-2);

        let (molar_mass, _) = calculate_molar_mass("H2").unwrap();
        assert_relative_eq!(molar_mass, 2.016, epsilon = 1e-12);
    }

    #[test]
    fn test_calculate_molar_mass_of_vector_of_substances() {
        let vec_of_formulae = vec!["H2O", "NaCl", "C6H8O6", "Fe2(SO4)3"];
        let expected_molar_masses = vec![18.015, 58.44, 176.12, 399.858];

        let calculated_molar_masses =
            calculate_molar_mass_of_vector_of_subs(&vec_of_formulae).unwrap();

        for (i, &expected_molar_mass) in expected_molar_masses.iter().enumerate() {
            assert!((calculated_molar_masses[i] - expected_molar_mass).abs() < 1e-2);
        }
    }

    #[test]
    fn test_unknown_element() {
        assert_eq!(
            calculate_molar_mass("XeF4").unwrap_err(),
            StoichError::UnknownElement("Xe".to_string())
        );
        assert_eq!(atomic_mass("Xe"), None);
        assert_eq!(atomic_mass("Pb"), Some(207.2));
    }

    #[test]
    fn test_element_table_is_consistent() {
        for (i, e) in ELEMENTS.iter().enumerate() {
            assert!(e.atomic_mass > 0.0);
            assert!(ELEMENTS[i + 1..].iter().all(|other| other.name != e.name));
        }
    }
}
