use crate::core::models::element::{Category, Element};

const IONIZATION_DECREMENT_PER_PERIOD: f64 = 30.0;
const MIN_IONIZATION_ENERGY: f64 = 300.0;
const AFFINITY_DECREMENT_PER_PERIOD: f64 = 5.0;

/// First ionization energy (kJ/mol) of a period-1 member of each family.
fn ionization_base(category: Category) -> f64 {
    match category {
        Category::AlkaliMetal => 520.0,
        Category::AlkalineEarthMetal => 900.0,
        Category::TransitionMetal => 760.0,
        Category::PostTransitionMetal => 600.0,
        Category::Metalloid => 860.0,
        Category::Nonmetal => 1300.0,
        Category::Halogen => 1400.0,
        Category::NobleGas => 2100.0,
        Category::Lanthanide => 550.0,
        Category::Actinide => 600.0,
    }
}

/// Electron affinity (kJ/mol) of a period-1 member of each family.
fn affinity_base(category: Category) -> f64 {
    match category {
        Category::AlkaliMetal => 60.0,
        Category::AlkalineEarthMetal => 10.0,
        Category::TransitionMetal => 80.0,
        Category::PostTransitionMetal => 60.0,
        Category::Metalloid => 100.0,
        Category::Nonmetal => 150.0,
        Category::Halogen => 340.0,
        Category::NobleGas => 0.0,
        Category::Lanthanide => 50.0,
        Category::Actinide => 50.0,
    }
}

fn periods_below_first(period: u8) -> f64 {
    f64::from(period.saturating_sub(1))
}

/// Estimated first ionization energy in kJ/mol.
pub fn estimate_ionization_energy(element: &Element) -> f64 {
    ionization_energy_from(element.category, element.period)
}

pub fn ionization_energy_from(category: Category, period: u8) -> f64 {
    let energy =
        ionization_base(category) - IONIZATION_DECREMENT_PER_PERIOD * periods_below_first(period);
    energy.max(MIN_IONIZATION_ENERGY)
}

/// Estimated electron affinity in kJ/mol, or `None` when the element has no
/// recorded electronegativity.
pub fn estimate_electron_affinity(element: &Element) -> Option<f64> {
    electron_affinity_from(element.category, element.period, element.electronegativity)
}

pub fn electron_affinity_from(
    category: Category,
    period: u8,
    electronegativity: Option<f64>,
) -> Option<f64> {
    electronegativity?;
    let affinity =
        affinity_base(category) - AFFINITY_DECREMENT_PER_PERIOD * periods_below_first(period);
    Some(affinity.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    #[test]
    fn ionization_energy_decreases_down_a_family() {
        assert_eq!(ionization_energy_from(Category::AlkaliMetal, 3), 460.0);
        assert_eq!(ionization_energy_from(Category::AlkaliMetal, 6), 370.0);
        assert!(
            ionization_energy_from(Category::Halogen, 2)
                > ionization_energy_from(Category::Halogen, 5)
        );
    }

    #[test]
    fn noble_gases_have_the_highest_base_ionization_energy() {
        let helium = ionization_energy_from(Category::NobleGas, 1);
        for category in Category::ALL {
            assert!(ionization_energy_from(category, 1) <= helium);
        }
    }

    #[test]
    fn ionization_energy_is_floored() {
        assert_eq!(ionization_energy_from(Category::AlkaliMetal, 10), 300.0);
    }

    #[test]
    fn electron_affinity_requires_electronegativity() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(estimate_electron_affinity(catalog.by_symbol("He").unwrap()), None);
        assert_eq!(
            estimate_electron_affinity(catalog.by_symbol("Cl").unwrap()),
            Some(330.0)
        );
    }

    #[test]
    fn electron_affinity_is_never_negative() {
        assert_eq!(
            electron_affinity_from(Category::NobleGas, 4, Some(3.0)),
            Some(0.0)
        );
    }
}
