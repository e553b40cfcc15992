use super::stoich_errors::StoichError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Atomic composition of a formula: element -> number of atoms.
/// Elements are kept in the order they were first met in the formula, so everything
/// built on top of a composition (element rows of the stoichiometric matrix) is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    entries: Vec<(String, usize)>,
}

impl Composition {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
    /// adds `count` atoms of `element`, None on overflow
    pub fn add(&mut self, element: &str, count: usize) -> Option<()> {
        if let Some(entry) = self.entries.iter_mut().find(|(el, _)| el == element) {
            entry.1 = entry.1.checked_add(count)?;
        } else {
            self.entries.push((element.to_string(), count));
        }
        Some(())
    }

    pub fn get(&self, element: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(el, _)| el == element)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(el, count)| (el.as_str(), *count))
    }

    pub fn elements(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(el, _)| el.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_hashmap(&self) -> HashMap<String, usize> {
        self.entries.iter().cloned().collect()
    }
    /// flat formula text, e.g. {Fe:2, S:3, O:12} -> "Fe2S3O12"
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(el, count)| {
                if *count == 1 {
                    el.clone()
                } else {
                    format!("{}{}", el, count)
                }
            })
            .collect()
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

// literal compositions for tests
#[cfg(test)]
impl<'a> FromIterator<(&'a str, usize)> for Composition {
    fn from_iter<I: IntoIterator<Item = (&'a str, usize)>>(iter: I) -> Self {
        let mut composition = Composition::new();
        for (el, count) in iter {
            if composition.add(el, count).is_none() {
                panic!("atom count of {} overflows", el);
            }
        }
        composition
    }
}

/// turns unicode subscript digits (H₂O) into ascii ones (H2O)
pub fn normalize_subscripts(formula: &str) -> String {
    formula
        .chars()
        .map(|c| match c {
            '\u{2080}'..='\u{2089}' => {
                char::from_digit(c as u32 - '\u{2080}' as u32, 10).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

// reads an optional run of digits starting at `start`; no digits means 1
fn read_count(chars: &[char], start: usize, formula: &str) -> Result<(usize, usize), StoichError> {
    let mut end = start;
    while end < chars.len() && chars[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return Ok((1, start));
    }
    let digits: String = chars[start..end].iter().collect();
    let count: usize = digits
        .parse()
        .map_err(|_| StoichError::parse(formula, start, "number is too large"))?;
    if count == 0 {
        return Err(StoichError::parse(formula, start, "zero atom count"));
    }
    Ok((count, end))
}

/// Parses a chemical formula with nested parenthetical groups into its atomic composition.
///
/// Supported syntax: element symbols (an uppercase letter optionally followed by one lowercase letter),
/// decimal counts after elements and after closing brackets, `(` `)` groups nested to any depth,
/// unicode subscript digits and whitespace anywhere. Charges, hydrate dots, phase marks and other
/// characters are rejected.
pub fn parse_formula(formula: &str) -> Result<Composition, StoichError> {
    let normalized = normalize_subscripts(formula);
    let cleaned: Vec<char> = normalized.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned_str: String = cleaned.iter().collect();
    if cleaned.is_empty() {
        return Err(StoichError::parse(formula, 0, "empty formula"));
    }
    // one accumulator per open bracket depth
    let mut stack: Vec<Composition> = vec![Composition::new()];
    let mut i = 0;
    while i < cleaned.len() {
        let ch = cleaned[i];
        match ch {
            '(' => {
                stack.push(Composition::new());
                i += 1;
            }
            ')' => {
                if stack.len() < 2 {
                    return Err(StoichError::parse(&cleaned_str, i, "unmatched ')'"));
                }
                let bracket_position = i;
                let (multiplier, next) = read_count(&cleaned, i + 1, &cleaned_str)?;
                i = next;
                let group = stack
                    .pop()
                    .ok_or_else(|| StoichError::parse(&cleaned_str, bracket_position, "unmatched ')'"))?;
                if group.is_empty() {
                    return Err(StoichError::parse(&cleaned_str, bracket_position, "empty group"));
                }
                let top = stack
                    .last_mut()
                    .ok_or_else(|| StoichError::parse(&cleaned_str, bracket_position, "unmatched ')'"))?;
                for (element, count) in group.iter() {
                    count
                        .checked_mul(multiplier)
                        .and_then(|scaled| top.add(element, scaled))
                        .ok_or_else(|| {
                            StoichError::parse(&cleaned_str, bracket_position, "number is too large")
                        })?;
                }
            }
            c if c.is_ascii_uppercase() => {
                let symbol_position = i;
                let mut symbol = c.to_string();
                i += 1;
                if i < cleaned.len() && cleaned[i].is_ascii_lowercase() {
                    symbol.push(cleaned[i]);
                    i += 1;
                }
                let (count, next) = read_count(&cleaned, i, &cleaned_str)?;
                i = next;
                let top = stack
                    .last_mut()
                    .ok_or_else(|| StoichError::parse(&cleaned_str, symbol_position, "unmatched ')'"))?;
                top.add(&symbol, count).ok_or_else(|| {
                    StoichError::parse(&cleaned_str, symbol_position, "number is too large")
                })?;
            }
            other => {
                let reason = match other {
                    '+' | '-' => "ionic charges are not supported".to_string(),
                    '.' | '·' | '*' => "hydrates are not supported".to_string(),
                    c if c.is_ascii_digit() => "a count must follow an element or ')'".to_string(),
                    c if c.is_lowercase() => {
                        format!("element symbols start with an uppercase letter, found '{}'", c)
                    }
                    c => format!("unexpected character '{}'", c),
                };
                return Err(StoichError::parse(&cleaned_str, i, &reason));
            }
        }
    }
    if stack.len() != 1 {
        return Err(StoichError::parse(&cleaned_str, cleaned.len(), "unclosed '('"));
    }
    let composition = stack
        .pop()
        .ok_or_else(|| StoichError::parse(&cleaned_str, 0, "empty formula"))?;
    debug!("parsed formula {} into {:?}", cleaned_str, composition);
    Ok(composition)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comp(pairs: &[(&str, usize)]) -> Composition {
        pairs.iter().map(|(el, c)| (*el, *c)).collect()
    }

    #[test]
    fn test_parse_formula() {
        assert_eq!(parse_formula("H2O").unwrap(), comp(&[("H", 2), ("O", 1)]));
        assert_eq!(
            parse_formula("C6H8O6").unwrap(),
            comp(&[("C", 6), ("H", 8), ("O", 6)])
        );
        assert_eq!(
            parse_formula("C5H6OOH").unwrap(),
            comp(&[("C", 5), ("H", 7), ("O", 2)])
        );
        assert_eq!(parse_formula("NaCl").unwrap(), comp(&[("Na", 1), ("Cl", 1)]));
    }

    #[test]
    fn test_parse_formula_with_brackets() {
        assert_eq!(
            parse_formula("Fe2(SO4)3").unwrap(),
            comp(&[("Fe", 2), ("S", 3), ("O", 12)])
        );
        assert_eq!(
            parse_formula("Na(NO3)2").unwrap(),
            comp(&[("Na", 1), ("N", 2), ("O", 6)])
        );
        assert_eq!(
            parse_formula("Ca(OH)2").unwrap(),
            comp(&[("Ca", 1), ("O", 2), ("H", 2)])
        );
        // nested groups
        assert_eq!(
            parse_formula("K4(Fe(CN)6)").unwrap(),
            comp(&[("K", 4), ("Fe", 1), ("C", 6), ("N", 6)])
        );
        assert_eq!(
            parse_formula("((CH3)3C)2O").unwrap(),
            comp(&[("C", 8), ("H", 18), ("O", 1)])
        );
    }

    #[test]
    fn test_parse_formula_subscripts_and_spaces() {
        assert_eq!(parse_formula("H₂O").unwrap(), comp(&[("H", 2), ("O", 1)]));
        assert_eq!(
            parse_formula(" Fe₂ (SO₄)₃ ").unwrap(),
            comp(&[("Fe", 2), ("S", 3), ("O", 12)])
        );
        assert_eq!(normalize_subscripts("C₆H₁₂O₆"), "C6H12O6");
    }

    #[test]
    fn test_parse_formula_errors() {
        for bad in [
            "", "  ", "Na+", "SO4-2", "CuSO4·5H2O", "CuSO4.5H2O", "h2o", "(H2", "H2)", "()",
            "H0", "2H2O", "H2O[", "Fe(SO4)0",
        ] {
            let res = parse_formula(bad);
            assert!(
                matches!(res, Err(StoichError::Parse { .. })),
                "formula {:?} should be rejected, got {:?}",
                bad,
                res
            );
        }
    }

    #[test]
    fn test_parse_error_position() {
        match parse_formula("NaCl+") {
            Err(StoichError::Parse { position, .. }) => assert_eq!(position, 4),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_render_round_trip() {
        for pairs in [
            vec![("H", 2), ("O", 1)],
            vec![("Fe", 2), ("S", 3), ("O", 12)],
            vec![("C", 6), ("H", 12), ("O", 6)],
            vec![("Na", 1), ("Cl", 1)],
        ] {
            let composition = comp(&pairs);
            let text = composition.render();
            assert_eq!(parse_formula(&text).unwrap(), composition);
        }
        assert_eq!(comp(&[("Fe", 2), ("S", 3), ("O", 12)]).render(), "Fe2S3O12");
    }

    #[test]
    #[should_panic(expected = "atom count of H overflows")]
    fn test_literal_composition_overflow_panics() {
        let _ = comp(&[("H", usize::MAX), ("H", 1)]);
    }

    #[test]
    fn test_add_reports_overflow() {
        let mut c = Composition::new();
        assert_eq!(c.add("H", usize::MAX), Some(()));
        assert_eq!(c.add("H", 1), None);
        assert_eq!(c.get("H"), Some(usize::MAX));
    }

    #[test]
    fn test_composition_accessors() {
        let c = parse_formula("CH3COOH").unwrap();
        assert_eq!(c.get("C"), Some(2));
        assert_eq!(c.get("H"), Some(4));
        assert_eq!(c.get("O"), Some(2));
        assert_eq!(c.get("N"), None);
        assert_eq!(c.elements().collect::<Vec<_>>(), vec!["C", "H", "O"]);
        assert_eq!(c.to_hashmap().len(), 3);
    }
}
