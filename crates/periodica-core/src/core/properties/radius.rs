use crate::core::models::element::{Category, Element};

const BASE_ATOMIC_RADIUS_PM: i32 = 150;
const PERIOD_STEP_PM: i32 = 20;
const GROUP_STEP_PM: i32 = 5;
const GROUP_CONTRACTION_CAP: i32 = 10;
/// Used in place of a missing group (lanthanides and actinides).
const DEFAULT_GROUP: u8 = 18;
const MIN_ATOMIC_RADIUS_PM: i32 = 50;

const CATION_SHRINK_PER_CHARGE_PM: i64 = 15;
const ANION_GROWTH_PER_CHARGE_PM: i64 = 20;
const MIN_IONIC_RADIUS_PM: i64 = 30;

fn category_offset_pm(category: Category) -> i32 {
    match category {
        Category::AlkaliMetal => 30,
        Category::NobleGas => -30,
        _ => 0,
    }
}

/// Estimated atomic radius in picometers.
///
/// Radii grow by 20 pm per period below the first and contract by 5 pm per
/// group (capped after group 10), with alkali metals nudged up and noble gases
/// nudged down. The result never drops below 50 pm.
pub fn estimate_atomic_radius(element: &Element) -> u32 {
    atomic_radius_from(element.period, element.group, element.category)
}

pub fn atomic_radius_from(period: u8, group: Option<u8>, category: Category) -> u32 {
    let period_term = PERIOD_STEP_PM * (i32::from(period) - 1);
    let group = i32::from(group.unwrap_or(DEFAULT_GROUP));
    let group_term = GROUP_STEP_PM * group.min(GROUP_CONTRACTION_CAP);

    let radius = BASE_ATOMIC_RADIUS_PM + period_term - group_term + category_offset_pm(category);
    radius.max(MIN_ATOMIC_RADIUS_PM) as u32
}

/// Estimated radius in picometers of the ion formed in the element's most
/// common oxidation state (the last one listed).
///
/// Returns `None` when the oxidation states are missing or the most common one
/// cannot be parsed.
pub fn estimate_ionic_radius(element: &Element) -> Option<u32> {
    let charge = element.dominant_oxidation_state()?;
    Some(ionic_radius_from(estimate_atomic_radius(element), charge))
}

/// Cations shrink by 15 pm per unit of charge, anions grow by 20 pm per unit.
/// The result never drops below 30 pm and saturates at `u32::MAX` for
/// absurd anion charges.
pub fn ionic_radius_from(atomic_radius_pm: u32, charge: i32) -> u32 {
    let atomic = i64::from(atomic_radius_pm);
    let charge = i64::from(charge);
    let radius = if charge > 0 {
        atomic - CATION_SHRINK_PER_CHARGE_PM * charge
    } else {
        atomic + ANION_GROWTH_PER_CHARGE_PM * charge.abs()
    };
    u32::try_from(radius.max(MIN_IONIC_RADIUS_PM)).unwrap_or(u32::MAX)
}
