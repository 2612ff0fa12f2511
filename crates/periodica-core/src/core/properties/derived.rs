use super::energy::{estimate_electron_affinity, estimate_ionization_energy};
use super::hazards::HazardFlags;
use super::phase::{RoomTemperatureState, state_at_room_temperature};
use super::radius::{estimate_atomic_radius, estimate_ionic_radius};
use super::shells::electron_shell_configuration;
use crate::core::models::element::Element;
use serde::Serialize;

/// Every estimate for one element, computed on demand and never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedProperties {
    pub shells: Vec<u32>,
    /// Picometers.
    pub atomic_radius: u32,
    /// Picometers. `None` when the oxidation states are missing or malformed.
    pub ionic_radius: Option<u32>,
    /// kJ/mol.
    pub ionization_energy: f64,
    /// kJ/mol. `None` when the electronegativity is missing.
    pub electron_affinity: Option<f64>,
    pub room_temperature_state: RoomTemperatureState,
    pub hazards: HazardFlags,
}

impl DerivedProperties {
    pub fn of(element: &Element) -> Self {
        Self {
            shells: electron_shell_configuration(element.atomic_number),
            atomic_radius: estimate_atomic_radius(element),
            ionic_radius: estimate_ionic_radius(element),
            ionization_energy: estimate_ionization_energy(element),
            electron_affinity: estimate_electron_affinity(element),
            room_temperature_state: state_at_room_temperature(
                element.melting_point,
                element.boiling_point,
            ),
            hazards: HazardFlags::of(element),
        }
    }

    /// Shell counts joined the way the detail panel shows them, e.g. `"2, 8, 1"`.
    pub fn shells_label(&self) -> String {
        self.shells
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
