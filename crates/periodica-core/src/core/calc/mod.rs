//! Formula calculators used by the thermochemistry and states-of-matter lessons.

pub mod gas;
pub mod heat;
pub mod temperature;

pub use gas::{GAS_CONSTANT, GasQuantity, GasSolution, IdealGas};
pub use heat::heat_transfer;
pub use temperature::{celsius_to_kelvin, kelvin_to_celsius};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum CalcError {
    #[error("{name} must be a finite number, got {value}")]
    NotFinite { name: &'static str, value: f64 },
    #[error("{name} must be greater than zero, got {value}")]
    NotPositive { name: &'static str, value: f64 },
    #[error("Temperature below absolute zero: {kelvin} K")]
    BelowAbsoluteZero { kelvin: f64 },
    #[error("Exactly one ideal-gas quantity must be unknown, found {0}")]
    UnknownCount(usize),
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NotFinite { name, value })
    }
}

pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, CalcError> {
    let value = require_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::NotPositive { name, value })
    }
}
