use super::conversion_errors::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// universal gas constant, L·atm/(mol·K)
pub const R_GAS: f64 = 0.082057;
pub const R_GAS_UNIT: &str = "L·atm/(mol·K)";
/// 0 °C in K
pub const ZERO_CELSIUS: f64 = 273.15;
pub const KPA_PER_ATM: f64 = 101.325;
pub const MMHG_PER_ATM: f64 = 760.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Atm,
    KPa,
    MmHg,
}

impl PressureUnit {
    /// how many of this unit make one atmosphere
    pub fn per_atm(&self) -> f64 {
        match self {
            PressureUnit::Atm => 1.0,
            PressureUnit::KPa => KPA_PER_ATM,
            PressureUnit::MmHg => MMHG_PER_ATM,
        }
    }

    pub fn to_atm(&self, value: f64) -> f64 {
        value / self.per_atm()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Atm => "atm",
            PressureUnit::KPa => "kPa",
            PressureUnit::MmHg => "mmHg",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for PressureUnit {
    type Err = ConversionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "atm" => Ok(PressureUnit::Atm),
            "kpa" => Ok(PressureUnit::KPa),
            "mmhg" | "torr" => Ok(PressureUnit::MmHg),
            other => Err(ConversionError::InvalidQuantity(format!(
                "unknown pressure unit '{}'",
                other
            ))),
        }
    }
}

/// output unit of a solution volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    L,
    ML,
}

impl VolumeUnit {
    pub fn from_liters(&self, liters: f64) -> f64 {
        match self {
            VolumeUnit::L => liters,
            VolumeUnit::ML => liters * 1000.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::L => "L",
            VolumeUnit::ML => "mL",
        }
    }
}

impl FromStr for VolumeUnit {
    type Err = ConversionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "l" => Ok(VolumeUnit::L),
            "ml" => Ok(VolumeUnit::ML),
            other => Err(ConversionError::InvalidQuantity(format!(
                "unknown volume unit '{}'",
                other
            ))),
        }
    }
}

pub fn celsius_to_kelvin(t_c: f64) -> f64 {
    t_c + ZERO_CELSIUS
}

/// Checks that a user supplied number is finite and strictly positive.
pub fn positive(value: f64, what: &str) -> Result<f64, ConversionError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConversionError::InvalidQuantity(format!(
            "{} must be a positive number, got {}",
            what, value
        )))
    }
}

/// Pressure and temperature of an ideal gas, validated and converted to atm and K.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasConditions {
    pub pressure: f64,
    pub pressure_unit: PressureUnit,
    pub temperature_c: f64,
}

impl GasConditions {
    pub fn new(pressure: f64, pressure_unit: PressureUnit, temperature_c: f64) -> Self {
        Self {
            pressure,
            pressure_unit,
            temperature_c,
        }
    }

    /// 1 atm and 0 °C
    pub fn stp() -> Self {
        Self::new(1.0, PressureUnit::Atm, 0.0)
    }

    pub fn pressure_atm(&self) -> Result<f64, ConversionError> {
        let p = positive(self.pressure, "pressure")?;
        Ok(self.pressure_unit.to_atm(p))
    }

    pub fn temperature_k(&self) -> Result<f64, ConversionError> {
        if !self.temperature_c.is_finite() {
            return Err(ConversionError::InvalidQuantity(format!(
                "temperature must be a finite number, got {}",
                self.temperature_c
            )));
        }
        let t_k = celsius_to_kelvin(self.temperature_c);
        if t_k <= 0.0 {
            return Err(ConversionError::InvalidQuantity(format!(
                "temperature {} °C is below absolute zero",
                self.temperature_c
            )));
        }
        Ok(t_k)
    }

    /// n = PV / RT
    pub fn moles_in(&self, volume_l: f64) -> Result<f64, ConversionError> {
        let v = positive(volume_l, "gas volume")?;
        Ok(self.pressure_atm()? * v / (R_GAS * self.temperature_k()?))
    }

    /// V = nRT / P, liters
    pub fn volume_of(&self, moles: f64) -> Result<f64, ConversionError> {
        Ok(moles * R_GAS * self.temperature_k()? / self.pressure_atm()?)
    }
}
