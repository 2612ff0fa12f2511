use phf::{Map, phf_map};
use serde::Serialize;

/// Shown in place of compounds, uses and isotopes for elements without a sheet.
pub const UNAVAILABLE_MESSAGE: &str =
    "Detailed information about this element's compounds, uses and isotopes is not yet available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactSheet {
    pub compounds: &'static [&'static str],
    pub uses: &'static [&'static str],
    pub isotopes: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum ElementFacts {
    Known(FactSheet),
    Unavailable { message: &'static str },
}

impl ElementFacts {
    pub fn sheet(&self) -> Option<&FactSheet> {
        match self {
            ElementFacts::Known(sheet) => Some(sheet),
            ElementFacts::Unavailable { .. } => None,
        }
    }
}

#[rustfmt::skip]
static FACT_SHEETS: Map<&'static str, FactSheet> = phf_map! {
    "H" => FactSheet {
        compounds: &["Water (H2O)", "Ammonia (NH3)", "Methane (CH4)"],
        uses: &["Ammonia production", "Petroleum refining", "Fuel cells"],
        isotopes: &["Protium (1H)", "Deuterium (2H)", "Tritium (3H)"],
    },
    "He" => FactSheet {
        compounds: &["Practically none under normal conditions"],
        uses: &["Cryogenics for MRI magnets", "Balloons and airships", "Shielding gas for welding"],
        isotopes: &["Helium-3", "Helium-4"],
    },
    "Li" => FactSheet {
        compounds: &["Lithium carbonate (Li2CO3)", "Lithium hydroxide (LiOH)"],
        uses: &["Rechargeable batteries", "Mood-stabilizing medication", "Heat-resistant glass"],
        isotopes: &["Lithium-6", "Lithium-7"],
    },
    "C" => FactSheet {
        compounds: &["Carbon dioxide (CO2)", "Methane (CH4)", "Glucose (C6H12O6)"],
        uses: &["Steelmaking", "Fuels", "Graphite electrodes", "Radiocarbon dating"],
        isotopes: &["Carbon-12", "Carbon-13", "Carbon-14"],
    },
    "N" => FactSheet {
        compounds: &["Ammonia (NH3)", "Nitric acid (HNO3)", "Nitrous oxide (N2O)"],
        uses: &["Fertilizers", "Inert atmosphere for food packaging", "Cryogenic freezing"],
        isotopes: &["Nitrogen-14", "Nitrogen-15"],
    },
    "O" => FactSheet {
        compounds: &["Water (H2O)", "Carbon dioxide (CO2)", "Silicon dioxide (SiO2)"],
        uses: &["Respiration and medical oxygen", "Steelmaking", "Rocket oxidizer"],
        isotopes: &["Oxygen-16", "Oxygen-17", "Oxygen-18"],
    },
    "Na" => FactSheet {
        compounds: &["Sodium chloride (NaCl)", "Sodium bicarbonate (NaHCO3)", "Sodium hydroxide (NaOH)"],
        uses: &["Table salt", "Street lamps", "Coolant in fast reactors"],
        isotopes: &["Sodium-23"],
    },
    "Mg" => FactSheet {
        compounds: &["Magnesium oxide (MgO)", "Magnesium sulfate (MgSO4)"],
        uses: &["Lightweight alloys", "Flares and fireworks", "Antacids"],
        isotopes: &["Magnesium-24", "Magnesium-25", "Magnesium-26"],
    },
    "Al" => FactSheet {
        compounds: &["Aluminium oxide (Al2O3)", "Aluminium sulfate (Al2(SO4)3)"],
        uses: &["Aircraft and vehicle bodies", "Cans and foil", "Power lines"],
        isotopes: &["Aluminium-27"],
    },
    "Si" => FactSheet {
        compounds: &["Silicon dioxide (SiO2)", "Silicon carbide (SiC)"],
        uses: &["Semiconductors", "Solar cells", "Glass and concrete"],
        isotopes: &["Silicon-28", "Silicon-29", "Silicon-30"],
    },
    "Cl" => FactSheet {
        compounds: &["Sodium chloride (NaCl)", "Hydrochloric acid (HCl)", "PVC"],
        uses: &["Water disinfection", "Bleach", "Plastics manufacturing"],
        isotopes: &["Chlorine-35", "Chlorine-37"],
    },
    "Ca" => FactSheet {
        compounds: &["Calcium carbonate (CaCO3)", "Calcium oxide (CaO)"],
        uses: &["Cement and mortar", "Dietary supplements", "Steel desulfurization"],
        isotopes: &["Calcium-40", "Calcium-44"],
    },
    "Fe" => FactSheet {
        compounds: &["Iron(III) oxide (Fe2O3)", "Iron(II) sulfate (FeSO4)"],
        uses: &["Steel", "Cast iron cookware", "Hemoglobin in blood"],
        isotopes: &["Iron-54", "Iron-56", "Iron-57", "Iron-58"],
    },
    "Cu" => FactSheet {
        compounds: &["Copper(II) sulfate (CuSO4)", "Copper(I) oxide (Cu2O)"],
        uses: &["Electrical wiring", "Plumbing", "Brass and bronze"],
        isotopes: &["Copper-63", "Copper-65"],
    },
    "Ag" => FactSheet {
        compounds: &["Silver nitrate (AgNO3)", "Silver chloride (AgCl)"],
        uses: &["Jewelry", "Electrical contacts", "Antibacterial coatings"],
        isotopes: &["Silver-107", "Silver-109"],
    },
    "Au" => FactSheet {
        compounds: &["Gold(III) chloride (AuCl3)"],
        uses: &["Jewelry", "Electronics", "Monetary reserves"],
        isotopes: &["Gold-197"],
    },
    "Hg" => FactSheet {
        compounds: &["Mercury(II) chloride (HgCl2)", "Cinnabar (HgS)"],
        uses: &["Thermometers and barometers", "Fluorescent lamps"],
        isotopes: &["Mercury-200", "Mercury-202"],
    },
    "U" => FactSheet {
        compounds: &["Uranium dioxide (UO2)", "Uranium hexafluoride (UF6)"],
        uses: &["Nuclear reactor fuel", "Radiation shielding"],
        isotopes: &["Uranium-235", "Uranium-238"],
    },
};

/// Looks up the fact sheet for an exact, case-sensitive element symbol.
pub fn facts_for(symbol: &str) -> ElementFacts {
    match FACT_SHEETS.get(symbol.trim()) {
        Some(sheet) => ElementFacts::Known(*sheet),
        None => ElementFacts::Unavailable {
            message: UNAVAILABLE_MESSAGE,
        },
    }
}
