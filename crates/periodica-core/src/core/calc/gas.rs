use super::{CalcError, require_positive};
use serde::Serialize;
use std::fmt;

/// Ideal gas constant in L·kPa/(mol·K).
pub const GAS_CONSTANT: f64 = 8.314;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GasQuantity {
    Pressure,
    Volume,
    Moles,
    Temperature,
}

impl GasQuantity {
    pub fn unit(&self) -> &'static str {
        match self {
            GasQuantity::Pressure => "kPa",
            GasQuantity::Volume => "L",
            GasQuantity::Moles => "mol",
            GasQuantity::Temperature => "K",
        }
    }
}

impl fmt::Display for GasQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GasQuantity::Pressure => "pressure",
            GasQuantity::Volume => "volume",
            GasQuantity::Moles => "moles",
            GasQuantity::Temperature => "temperature",
        })
    }
}

/// A `PV = nRT` problem with exactly one unknown.
///
/// Pressure is in kPa, volume in litres, amount in moles and temperature in
/// Kelvin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IdealGas {
    pub pressure: Option<f64>,
    pub volume: Option<f64>,
    pub moles: Option<f64>,
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GasSolution {
    pub pressure: f64,
    pub volume: f64,
    pub moles: f64,
    pub temperature: f64,
    pub solved_for: GasQuantity,
}

impl GasSolution {
    pub fn solved_value(&self) -> f64 {
        match self.solved_for {
            GasQuantity::Pressure => self.pressure,
            GasQuantity::Volume => self.volume,
            GasQuantity::Moles => self.moles,
            GasQuantity::Temperature => self.temperature,
        }
    }
}

impl IdealGas {
    /// Fills in the missing quantity. Every known quantity must be positive.
    pub fn solve(&self) -> Result<GasSolution, CalcError> {
        let unknowns = [self.pressure, self.volume, self.moles, self.temperature]
            .iter()
            .filter(|value| value.is_none())
            .count();
        if unknowns != 1 {
            return Err(CalcError::UnknownCount(unknowns));
        }

        let known = |name, value: Option<f64>| value.map(|v| require_positive(name, v)).transpose();
        let pressure = known("pressure", self.pressure)?;
        let volume = known("volume", self.volume)?;
        let moles = known("moles", self.moles)?;
        let temperature = known("temperature", self.temperature)?;

        let solution = match (pressure, volume, moles, temperature) {
            (None, Some(v), Some(n), Some(t)) => GasSolution {
                pressure: n * GAS_CONSTANT * t / v,
                volume: v,
                moles: n,
                temperature: t,
                solved_for: GasQuantity::Pressure,
            },
            (Some(p), None, Some(n), Some(t)) => GasSolution {
                pressure: p,
                volume: n * GAS_CONSTANT * t / p,
                moles: n,
                temperature: t,
                solved_for: GasQuantity::Volume,
            },
            (Some(p), Some(v), None, Some(t)) => GasSolution {
                pressure: p,
                volume: v,
                moles: p * v / (GAS_CONSTANT * t),
                temperature: t,
                solved_for: GasQuantity::Moles,
            },
            (Some(p), Some(v), Some(n), None) => GasSolution {
                pressure: p,
                volume: v,
                moles: n,
                temperature: p * v / (n * GAS_CONSTANT),
                solved_for: GasQuantity::Temperature,
            },
            _ => return Err(CalcError::UnknownCount(unknowns)),
        };
        Ok(solution)
    }
}
