use crate::Conversion::conversion_errors::ConversionError;
use regex::Regex;
use std::sync::OnceLock;

fn whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

fn decimal_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("valid number pattern")
    })
}

/// Reads a decimal number typed by a user. Whitespace is ignored anywhere and a decimal
/// comma is accepted as well as a point: "2,5", " 2.5 " and "1 000" are all numbers.
pub fn parse_decimal(input: &str) -> Result<f64, ConversionError> {
    let compact = whitespace().replace_all(input.trim(), "");
    let normalized = compact.replacen(',', ".", 1);
    if !decimal_number().is_match(&normalized) {
        return Err(ConversionError::InvalidQuantity(format!(
            "'{}' is not a number",
            input.trim()
        )));
    }
    normalized
        .parse::<f64>()
        .map_err(|e| ConversionError::InvalidQuantity(format!("'{}': {}", input.trim(), e)))
}

/// same as `parse_decimal` but an empty input gives `default`
pub fn parse_decimal_or(input: &str, default: f64) -> Result<f64, ConversionError> {
    if input.trim().is_empty() {
        Ok(default)
    } else {
        parse_decimal(input)
    }
}
