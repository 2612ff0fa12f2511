use serde::Serialize;
use std::fmt;

/// 298 K, the reference temperature used by the explorer.
pub const ROOM_TEMPERATURE_K: f64 = 298.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RoomTemperatureState {
    Solid,
    Liquid,
    Gas,
    Unknown,
}

impl fmt::Display for RoomTemperatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RoomTemperatureState::Solid => "Solid",
            RoomTemperatureState::Liquid => "Liquid",
            RoomTemperatureState::Gas => "Gas",
            RoomTemperatureState::Unknown => "Unknown",
        };
        f.write_str(text)
    }
}

pub fn state_at_room_temperature(
    melting_point: Option<f64>,
    boiling_point: Option<f64>,
) -> RoomTemperatureState {
    state_at_temperature(ROOM_TEMPERATURE_K, melting_point, boiling_point)
}

/// Classifies the phase at `temperature_k` from the melting and boiling
/// points (both Kelvin). `Unknown` unless both points are known.
///
/// The states-of-matter lesson drives this with a temperature slider; the
/// explorer pins it at [`ROOM_TEMPERATURE_K`].
pub fn state_at_temperature(
    temperature_k: f64,
    melting_point: Option<f64>,
    boiling_point: Option<f64>,
) -> RoomTemperatureState {
    match (melting_point, boiling_point) {
        (Some(mp), Some(_)) if mp > temperature_k => RoomTemperatureState::Solid,
        (Some(_), Some(bp)) if bp < temperature_k => RoomTemperatureState::Gas,
        (Some(_), Some(_)) => RoomTemperatureState::Liquid,
        _ => RoomTemperatureState::Unknown,
    }
}
