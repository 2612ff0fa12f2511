//! # Derived Property Estimator
//!
//! Pure, deterministic functions that approximate secondary properties of an
//! element from its catalog fields and a handful of static constant tables.
//!
//! ## Key Components
//!
//! - [`shells`] - Electron counts per shell, filled greedily by capacity
//! - [`radius`] - Atomic and ionic radius estimates in picometers
//! - [`energy`] - Ionization energy and electron affinity estimates in kJ/mol
//! - [`phase`] - Solid/liquid/gas classification at a given temperature
//! - [`hazards`] - Fixed membership sets for hazard flags
//! - [`derived`] - The `DerivedProperties` bundle shown for a selected element
//!
//! None of these functions fail. Estimates that need a missing catalog field
//! return `None` (displayed as `"N/A"`), and the phase falls back to
//! `RoomTemperatureState::Unknown`.

pub mod derived;
pub mod energy;
pub mod hazards;
pub mod phase;
pub mod radius;
pub mod shells;

/// Renders an optional estimate, using `"N/A"` for missing values.
pub fn display_or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_or_na_formats_present_and_missing_values() {
        assert_eq!(display_or_na(Some(42)), "42");
        assert_eq!(display_or_na::<f64>(None), "N/A");
    }
}
