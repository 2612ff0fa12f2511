use super::{CalcError, require_finite, require_positive};

/// Heat absorbed or released, `q = m·c·ΔT`, in joules.
///
/// `mass_g` in grams and `specific_heat` in J/(g·K) must be positive;
/// `delta_t` (K or °C) may be negative, giving a negative `q` for cooling.
pub fn heat_transfer(mass_g: f64, specific_heat: f64, delta_t: f64) -> Result<f64, CalcError> {
    let mass = require_positive("mass", mass_g)?;
    let specific_heat = require_positive("specific heat", specific_heat)?;
    let delta_t = require_finite("temperature change", delta_t)?;
    Ok(mass * specific_heat * delta_t)
}
