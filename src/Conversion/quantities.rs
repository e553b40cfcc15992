use super::conversion_errors::ConversionError;
use super::trace::{ConversionTrace, Term};
use super::units::{GasConditions, PressureUnit, R_GAS, R_GAS_UNIT, VolumeUnit, positive};
use crate::Stoichiometry::reaction::BalancedSpecies;
use enum_dispatch::enum_dispatch;

/// Known amount of a species: everything that can be turned into moles.
#[enum_dispatch]
pub trait KnownQuantityCalc {
    /// moles of `species`, the factors used are appended to `trace`
    fn to_moles(
        &self,
        species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError>;
}

/// Requested amount of a species: everything that can be computed from moles.
#[enum_dispatch]
pub trait TargetQuantityCalc {
    /// value in `unit()`, the factors used and the final "= value" are appended to `trace`
    fn from_moles(
        &self,
        moles: f64,
        species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError>;
    fn unit(&self) -> &'static str;
    /// human readable result, e.g. "35.744 g of H2O"
    fn describe(&self, value: f64, species: &BalancedSpecies) -> String;
}

fn mol_of(species: &BalancedSpecies) -> String {
    format!("mol {}", species.formula)
}

fn g_of(species: &BalancedSpecies) -> String {
    format!("g {}", species.formula)
}

// pressure conversion factor, only written out for units other than atm
fn push_to_atm(trace: &mut ConversionTrace, unit: PressureUnit) {
    if unit != PressureUnit::Atm {
        trace.multiply_fraction(
            Term::new(1.0, "atm", 0),
            Term::new(unit.per_atm(), unit.symbol(), 3),
        );
    }
}

////////////////////////////////////////KNOWN QUANTITIES////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownMass {
    pub grams: f64,
}

impl KnownQuantityCalc for KnownMass {
    fn to_moles(
        &self,
        species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError> {
        let m = positive(self.grams, "mass")?;
        trace.multiply(Term::new(m, &g_of(species), 3));
        trace.multiply_fraction(
            Term::new(1.0, &mol_of(species), 0),
            Term::new(species.molar_mass, &g_of(species), 3),
        );
        Ok(m / species.molar_mass)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownMoles {
    pub moles: f64,
}

impl KnownQuantityCalc for KnownMoles {
    fn to_moles(
        &self,
        species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError> {
        let n = positive(self.moles, "amount of substance")?;
        trace.multiply(Term::new(n, &mol_of(species), 6));
        Ok(n)
    }
}

/// volume of a solution of known molarity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownSolution {
    pub volume_ml: f64,
    /// mol/L
    pub molarity: f64,
}

impl KnownQuantityCalc for KnownSolution {
    fn to_moles(
        &self,
        species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError> {
        let v_ml = positive(self.volume_ml, "solution volume")?;
        let molarity = positive(self.molarity, "molarity")?;
        let v_l = v_ml / 1000.0;
        let n = molarity * v_l;
        trace.multiply(Term::new(molarity, "mol/L", 6));
        trace.multiply(Term::new(v_l, "L", 6));
        trace.equals(Term::new(n, &mol_of(species), 6));
        Ok(n)
    }
}

/// volume of an ideal gas at given pressure and temperature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownGas {
    pub volume_l: f64,
    pub pressure: f64,
    pub pressure_unit: PressureUnit,
    pub temperature_c: f64,
}

impl KnownGas {
    pub fn conditions(&self) -> GasConditions {
        GasConditions::new(self.pressure, self.pressure_unit, self.temperature_c)
    }
}

impl KnownQuantityCalc for KnownGas {
    fn to_moles(
        &self,
        species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError> {
        let conditions = self.conditions();
        let n = conditions.moles_in(self.volume_l)?;
        let t_k = conditions.temperature_k()?;
        trace.multiply(Term::new(self.pressure, self.pressure_unit.symbol(), 3));
        push_to_atm(trace, self.pressure_unit);
        trace.multiply(Term::new(self.volume_l, "L", 3));
        trace.divide(Term::new(R_GAS, R_GAS_UNIT, 6));
        trace.divide(Term::new(t_k, "K", 2));
        trace.equals(Term::new(n, &mol_of(species), 6));
        Ok(n)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[enum_dispatch(KnownQuantityCalc)]
pub enum KnownQuantity {
    Mass(KnownMass),
    Moles(KnownMoles),
    SolutionVolume(KnownSolution),
    GasVolume(KnownGas),
}

impl KnownQuantity {
    pub fn mass(grams: f64) -> Self {
        KnownMass { grams }.into()
    }

    pub fn moles(moles: f64) -> Self {
        KnownMoles { moles }.into()
    }

    pub fn solution(volume_ml: f64, molarity: f64) -> Self {
        KnownSolution {
            volume_ml,
            molarity,
        }
        .into()
    }

    pub fn gas(volume_l: f64, pressure: f64, pressure_unit: PressureUnit, temperature_c: f64) -> Self {
        KnownGas {
            volume_l,
            pressure,
            pressure_unit,
            temperature_c,
        }
        .into()
    }
}

////////////////////////////////////////TARGET QUANTITIES///////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetMass;

impl TargetQuantityCalc for TargetMass {
    fn from_moles(
        &self,
        moles: f64,
        species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError> {
        let m = moles * species.molar_mass;
        trace.multiply_fraction(
            Term::new(species.molar_mass, &g_of(species), 3),
            Term::new(1.0, &mol_of(species), 0),
        );
        trace.equals(Term::new(m, &g_of(species), 3));
        Ok(m)
    }

    fn unit(&self) -> &'static str {
        "g"
    }

    fn describe(&self, value: f64, species: &BalancedSpecies) -> String {
        format!("{:.3} g of {}", value, species.formula)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetMoles;

impl TargetQuantityCalc for TargetMoles {
    fn from_moles(
        &self,
        moles: f64,
        species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError> {
        trace.equals(Term::new(moles, &mol_of(species), 6));
        Ok(moles)
    }

    fn unit(&self) -> &'static str {
        "mol"
    }

    fn describe(&self, value: f64, species: &BalancedSpecies) -> String {
        format!("{:.6} mol of {}", value, species.formula)
    }
}

/// volume of a solution of given molarity that holds the moles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSolution {
    /// mol/L
    pub molarity: f64,
    pub volume_unit: VolumeUnit,
}

impl TargetQuantityCalc for TargetSolution {
    fn from_moles(
        &self,
        moles: f64,
        _species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError> {
        let molarity = positive(self.molarity, "target molarity")?;
        let v_l = moles / molarity;
        trace.divide(Term::new(molarity, "mol/L", 6));
        if self.volume_unit == VolumeUnit::ML {
            trace.multiply_fraction(Term::new(1000.0, "mL", 0), Term::new(1.0, "L", 0));
        }
        let v = self.volume_unit.from_liters(v_l);
        trace.equals(Term::new(v, self.volume_unit.symbol(), 3));
        Ok(v)
    }

    fn unit(&self) -> &'static str {
        self.volume_unit.symbol()
    }

    fn describe(&self, value: f64, species: &BalancedSpecies) -> String {
        format!(
            "{:.3} {} of {} solution",
            value,
            self.volume_unit.symbol(),
            species.formula
        )
    }
}

/// volume of the moles as an ideal gas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetGas {
    pub pressure: f64,
    pub pressure_unit: PressureUnit,
    pub temperature_c: f64,
}

impl TargetGas {
    pub fn conditions(&self) -> GasConditions {
        GasConditions::new(self.pressure, self.pressure_unit, self.temperature_c)
    }
}

impl TargetQuantityCalc for TargetGas {
    fn from_moles(
        &self,
        moles: f64,
        _species: &BalancedSpecies,
        trace: &mut ConversionTrace,
    ) -> Result<f64, ConversionError> {
        let conditions = self.conditions();
        let v_l = conditions.volume_of(moles)?;
        let t_k = conditions.temperature_k()?;
        trace.multiply(Term::new(R_GAS, R_GAS_UNIT, 6));
        trace.multiply(Term::new(t_k, "K", 2));
        trace.divide(Term::new(self.pressure, self.pressure_unit.symbol(), 3));
        if self.pressure_unit != PressureUnit::Atm {
            trace.multiply_fraction(
                Term::new(self.pressure_unit.per_atm(), self.pressure_unit.symbol(), 3),
                Term::new(1.0, "atm", 0),
            );
        }
        trace.equals(Term::new(v_l, "L", 3));
        Ok(v_l)
    }

    fn unit(&self) -> &'static str {
        "L"
    }

    fn describe(&self, value: f64, species: &BalancedSpecies) -> String {
        format!("{:.3} L of {} (ideal gas)", value, species.formula)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[enum_dispatch(TargetQuantityCalc)]
pub enum TargetQuantity {
    Mass(TargetMass),
    Moles(TargetMoles),
    SolutionVolume(TargetSolution),
    GasVolume(TargetGas),
}

impl TargetQuantity {
    pub fn mass() -> Self {
        TargetMass.into()
    }

    pub fn moles() -> Self {
        TargetMoles.into()
    }

    pub fn solution(molarity: f64, volume_unit: VolumeUnit) -> Self {
        TargetSolution {
            molarity,
            volume_unit,
        }
        .into()
    }

    pub fn gas(pressure: f64, pressure_unit: PressureUnit, temperature_c: f64) -> Self {
        TargetGas {
            pressure,
            pressure_unit,
            temperature_c,
        }
        .into()
    }
}
