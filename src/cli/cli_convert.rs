use super::cli_main::{get_user_input, prompt};
use crate::Conversion::conversion_errors::ConversionError;
use crate::Conversion::quantities::{KnownQuantity, TargetQuantity};
use crate::Conversion::units::{PressureUnit, VolumeUnit};
use crate::Utils::number_input::{parse_decimal, parse_decimal_or};
use crate::session::ReactionSession;

// closed stdin reads as an empty answer, which every question rejects or defaults
fn ask(text: &str) -> String {
    prompt(text);
    get_user_input()
        .map(|line| line.trim().to_string())
        .unwrap_or_default()
}

fn ask_number(text: &str) -> Result<f64, ConversionError> {
    parse_decimal(&ask(text))
}

fn ask_pressure_unit() -> Result<PressureUnit, ConversionError> {
    let unit = ask("Pressure unit (atm, kPa, mmHg) [atm]: ");
    if unit.is_empty() {
        Ok(PressureUnit::Atm)
    } else {
        unit.parse()
    }
}

fn ask_known_quantity() -> Result<KnownQuantity, ConversionError> {
    println!("Known quantity: 1. mass  2. moles  3. solution volume  4. gas volume");
    match ask("Enter your choice: ").as_str() {
        "1" => Ok(KnownQuantity::mass(ask_number("Mass, g: ")?)),
        "2" => Ok(KnownQuantity::moles(ask_number("Amount, mol: ")?)),
        "3" => {
            let volume_ml = ask_number("Volume, mL: ")?;
            let molarity = ask_number("Concentration, mol/L: ")?;
            Ok(KnownQuantity::solution(volume_ml, molarity))
        }
        "4" => {
            let volume_l = ask_number("Volume, L: ")?;
            let pressure = ask_number("Pressure: ")?;
            let unit = ask_pressure_unit()?;
            let temperature_c = parse_decimal_or(&ask("Temperature, °C [25]: "), 25.0)?;
            Ok(KnownQuantity::gas(volume_l, pressure, unit, temperature_c))
        }
        other => Err(ConversionError::InvalidQuantity(format!(
            "unknown quantity type '{}'",
            other
        ))),
    }
}

fn ask_target_quantity() -> Result<TargetQuantity, ConversionError> {
    println!("Calculate: 1. mass  2. moles  3. solution volume  4. gas volume");
    match ask("Enter your choice: ").as_str() {
        "1" => Ok(TargetQuantity::mass()),
        "2" => Ok(TargetQuantity::moles()),
        "3" => {
            let molarity = ask_number("Concentration, mol/L: ")?;
            let unit = ask("Volume unit (L, mL) [mL]: ");
            let unit = if unit.is_empty() {
                VolumeUnit::ML
            } else {
                unit.parse()?
            };
            Ok(TargetQuantity::solution(molarity, unit))
        }
        "4" => {
            let pressure = ask_number("Pressure: ")?;
            let unit = ask_pressure_unit()?;
            let temperature_c = parse_decimal_or(&ask("Temperature, °C [25]: "), 25.0)?;
            Ok(TargetQuantity::gas(pressure, unit, temperature_c))
        }
        other => Err(ConversionError::InvalidQuantity(format!(
            "unknown quantity type '{}'",
            other
        ))),
    }
}

fn run_conversion(session: &ReactionSession) -> Result<(), ConversionError> {
    let reaction = session
        .current()
        .ok_or(ConversionError::NoBalancedReaction)?;
    println!("{}", reaction.equation_string());
    for s in &reaction.species {
        println!(
            "  {}: {} (coefficient {}, {:.3} g/mol)",
            s.id, s.formula, s.coefficient, s.molar_mass
        );
    }
    let known_id = ask("Known species id: ");
    let target_id = ask("Species to calculate, id: ");
    let known_quantity = ask_known_quantity()?;
    let target_quantity = ask_target_quantity()?;

    let result = session.convert(&known_id, &target_id, &known_quantity, &target_quantity)?;
    println!("\x1b[32m{}\x1b[0m", result.description);
    println!("{}", result.trace);
    let cancelled = result.trace.cancelled_units();
    if !cancelled.is_empty() {
        println!("cancelled units: {}", cancelled.join(", "));
    }
    Ok(())
}

pub fn convert_menu(session: &ReactionSession) {
    println!("\n=== Convert a quantity ===");
    if let Err(e) = run_conversion(session) {
        println!("\x1b[31mError: {}\x1b[0m", e);
    }
}
