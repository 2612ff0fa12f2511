use crate::core::models::element::Element;
use phf::{Set, phf_set};
use serde::Serialize;

/// Technetium, promethium and everything from polonium onward.
#[rustfmt::skip]
static RADIOACTIVE_NUMBERS: Set<u32> = phf_set! {
    43u32, 61u32, 84u32, 85u32, 86u32, 87u32, 88u32, 89u32, 90u32, 91u32,
    92u32, 93u32, 94u32, 95u32, 96u32, 97u32, 98u32, 99u32, 100u32, 101u32,
    102u32, 103u32, 104u32, 105u32, 106u32, 107u32, 108u32, 109u32, 110u32, 111u32,
    112u32, 113u32, 114u32, 115u32, 116u32, 117u32, 118u32,
};

#[rustfmt::skip]
static FLAMMABLE_SYMBOLS: Set<&'static str> = phf_set! {
    "H", "Li", "Na", "K", "Rb", "Cs", "Fr", "Mg", "Ca", "P", "S", "Zr", "Hf",
};

#[rustfmt::skip]
static EXPLOSIVE_SYMBOLS: Set<&'static str> = phf_set! {
    "H", "Na", "K", "Rb", "Cs", "Fr",
};

#[rustfmt::skip]
static POISONOUS_SYMBOLS: Set<&'static str> = phf_set! {
    "Be", "F", "P", "Cl", "Cr", "As", "Se", "Br", "Cd", "Sb", "Te", "Hg", "Tl", "Pb", "Po",
    "Pu",
};

#[rustfmt::skip]
static REACTIVE_SYMBOLS: Set<&'static str> = phf_set! {
    "Li", "Na", "K", "Rb", "Cs", "Fr", "Ca", "Sr", "Ba", "Ra", "F", "Cl", "Br", "P", "O",
};

pub fn is_radioactive(atomic_number: u32) -> bool {
    RADIOACTIVE_NUMBERS.contains(&atomic_number)
}

pub fn is_flammable(symbol: &str) -> bool {
    FLAMMABLE_SYMBOLS.contains(symbol.trim())
}

pub fn is_explosive(symbol: &str) -> bool {
    EXPLOSIVE_SYMBOLS.contains(symbol.trim())
}

pub fn is_poisonous(symbol: &str) -> bool {
    POISONOUS_SYMBOLS.contains(symbol.trim())
}

pub fn is_reactive(symbol: &str) -> bool {
    REACTIVE_SYMBOLS.contains(symbol.trim())
}

/// The five hazard predicates evaluated for one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HazardFlags {
    pub radioactive: bool,
    pub flammable: bool,
    pub explosive: bool,
    pub poisonous: bool,
    pub reactive: bool,
}

impl HazardFlags {
    pub fn of(element: &Element) -> Self {
        let symbol = element.symbol.as_str();
        Self {
            radioactive: is_radioactive(element.atomic_number),
            flammable: is_flammable(symbol),
            explosive: is_explosive(symbol),
            poisonous: is_poisonous(symbol),
            reactive: is_reactive(symbol),
        }
    }

    pub fn any(&self) -> bool {
        self.labels().next().is_some()
    }

    /// Names of the raised flags, in a fixed order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> {
        [
            (self.radioactive, "Radioactive"),
            (self.flammable, "Flammable"),
            (self.explosive, "Explosive"),
            (self.poisonous, "Poisonous"),
            (self.reactive, "Reactive"),
        ]
        .into_iter()
        .filter_map(|(raised, label)| raised.then_some(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;

    #[test]
    fn radioactivity_is_keyed_by_atomic_number() {
        assert!(is_radioactive(43));
        assert!(is_radioactive(61));
        assert!(is_radioactive(92));
        assert!(is_radioactive(118));
        assert!(!is_radioactive(82));
        assert!(!is_radioactive(0));
        assert!(!is_radioactive(500));
    }

    #[test]
    fn symbol_sets_are_case_sensitive_and_total() {
        assert!(is_flammable("Na"));
        assert!(!is_flammable("NA"));
        assert!(is_poisonous("Hg"));
        assert!(!is_poisonous("Xx"));
        assert!(!is_explosive(""));
    }

    #[test]
    fn flags_for_sodium_and_helium() {
        let catalog = Catalog::builtin().unwrap();

        let sodium = HazardFlags::of(catalog.by_symbol("Na").unwrap());
        assert_eq!(
            sodium.labels().collect::<Vec<_>>(),
            vec!["Flammable", "Explosive", "Reactive"]
        );

        let helium = HazardFlags::of(catalog.by_symbol("He").unwrap());
        assert_eq!(helium, HazardFlags::default());
        assert!(!helium.any());
    }

    #[test]
    fn uranium_is_only_radioactive() {
        let catalog = Catalog::builtin().unwrap();
        let uranium = HazardFlags::of(catalog.by_symbol("U").unwrap());
        assert_eq!(uranium.labels().collect::<Vec<_>>(), vec!["Radioactive"]);
    }
}
