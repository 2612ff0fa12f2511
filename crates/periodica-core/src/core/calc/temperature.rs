use super::{CalcError, require_finite};

const KELVIN_OFFSET: f64 = 273.15;

pub fn celsius_to_kelvin(celsius: f64) -> Result<f64, CalcError> {
    let kelvin = require_finite("temperature", celsius)? + KELVIN_OFFSET;
    if kelvin < 0.0 {
        return Err(CalcError::BelowAbsoluteZero { kelvin });
    }
    Ok(kelvin)
}

pub fn kelvin_to_celsius(kelvin: f64) -> Result<f64, CalcError> {
    let kelvin = require_finite("temperature", kelvin)?;
    if kelvin < 0.0 {
        return Err(CalcError::BelowAbsoluteZero { kelvin });
    }
    Ok(kelvin - KELVIN_OFFSET)
}
