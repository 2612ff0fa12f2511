use super::grid::GridPosition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The periodic-table family an element belongs to.
///
/// Every element carries exactly one category; there is no multi-category
/// membership. The kebab-case spelling (`"noble-gas"`) is the canonical text
/// form used by the catalog file and by `Display`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::AlkaliMetal,
        Category::AlkalineEarthMetal,
        Category::TransitionMetal,
        Category::PostTransitionMetal,
        Category::Metalloid,
        Category::Nonmetal,
        Category::Halogen,
        Category::NobleGas,
        Category::Lanthanide,
        Category::Actinide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AlkaliMetal => "alkali-metal",
            Category::AlkalineEarthMetal => "alkaline-earth-metal",
            Category::TransitionMetal => "transition-metal",
            Category::PostTransitionMetal => "post-transition-metal",
            Category::Metalloid => "metalloid",
            Category::Nonmetal => "nonmetal",
            Category::Halogen => "halogen",
            Category::NobleGas => "noble-gas",
            Category::Lanthanide => "lanthanide",
            Category::Actinide => "actinide",
        }
    }

    /// Human-readable name for legends and headings.
    pub fn label(&self) -> &'static str {
        match self {
            Category::AlkaliMetal => "Alkali Metal",
            Category::AlkalineEarthMetal => "Alkaline Earth Metal",
            Category::TransitionMetal => "Transition Metal",
            Category::PostTransitionMetal => "Post-Transition Metal",
            Category::Metalloid => "Metalloid",
            Category::Nonmetal => "Nonmetal",
            Category::Halogen => "Halogen",
            Category::NobleGas => "Noble Gas",
            Category::Lanthanide => "Lanthanide",
            Category::Actinide => "Actinide",
        }
    }

    /// One-sentence description of the family shown next to the category legend.
    pub fn summary(&self) -> &'static str {
        match self {
            Category::AlkaliMetal => {
                "Soft, highly reactive metals with a single valence electron that form +1 ions."
            }
            Category::AlkalineEarthMetal => {
                "Reactive metals with two valence electrons that readily form +2 ions."
            }
            Category::TransitionMetal => {
                "Hard, dense metals with partially filled d orbitals and several oxidation states."
            }
            Category::PostTransitionMetal => {
                "Soft metals with low melting points found to the right of the transition block."
            }
            Category::Metalloid => {
                "Elements with properties between metals and nonmetals, often semiconductors."
            }
            Category::Nonmetal => {
                "Poor conductors that tend to gain or share electrons in covalent bonds."
            }
            Category::Halogen => {
                "Highly reactive nonmetals one electron short of a full shell that form -1 ions."
            }
            Category::NobleGas => {
                "Unreactive gases with a complete valence shell."
            }
            Category::Lanthanide => {
                "Rare-earth metals filling the 4f orbitals, chemically similar to one another."
            }
            Category::Actinide => {
                "Radioactive metals filling the 5f orbitals, mostly synthetic beyond uranium."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown element category: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the kebab-case name as well as space or underscore separated
    /// spellings, case-insensitively (`"Noble Gas"`, `"noble_gas"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// The orbital block an element's highest-energy electron occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Block {
    S,
    P,
    D,
    F,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Block::S => "s",
            Block::P => "p",
            Block::D => "d",
            Block::F => "f",
        };
        f.write_str(letter)
    }
}

/// A single catalog record.
///
/// Records are immutable once loaded. Optional fields are `None` where the
/// catalog has no data; display code renders them as `"N/A"` or `"Unknown"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    pub category: Category,
    pub period: u8,
    /// `None` for lanthanides and actinides, which sit outside the 18 columns.
    pub group: Option<u8>,
    pub block: Block,
    /// Kelvin.
    pub melting_point: Option<f64>,
    /// Kelvin.
    pub boiling_point: Option<f64>,
    /// g/cm³.
    pub density: Option<f64>,
    /// Pauling scale.
    pub electronegativity: Option<f64>,
    /// Comma-separated signed integers, most common state listed last.
    pub oxidation_states: Option<String>,
    pub year_discovered: Option<i32>,
    pub discoverer: Option<String>,
    pub electron_configuration: String,
    pub description: String,
}

impl Element {
    /// Every oxidation state in the raw field that parses as a signed integer,
    /// in listed order. Malformed entries are skipped.
    pub fn oxidation_states(&self) -> Vec<i32> {
        self.oxidation_states
            .as_deref()
            .map(|raw| raw.split(',').filter_map(parse_oxidation_state).collect())
            .unwrap_or_default()
    }

    /// The most common oxidation state, which by convention is the last one
    /// listed. `None` when the field is missing or its last entry is malformed.
    pub fn dominant_oxidation_state(&self) -> Option<i32> {
        self.oxidation_states
            .as_deref()
            .and_then(|raw| raw.split(',').next_back())
            .and_then(parse_oxidation_state)
    }

    pub fn grid_position(&self) -> Option<GridPosition> {
        GridPosition::of(self)
    }
}

fn parse_oxidation_state(token: &str) -> Option<i32> {
    let token = token.trim().replace('\u{2212}', "-");
    if token.is_empty() {
        return None;
    }
    token.parse::<i32>().ok()
}
