use crate::core::models::element::Element;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortField {
    #[default]
    AtomicNumber,
    Name,
    AtomicMass,
    Category,
    YearDiscovered,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::AtomicNumber,
        SortField::Name,
        SortField::AtomicMass,
        SortField::Category,
        SortField::YearDiscovered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::AtomicNumber => "atomic-number",
            SortField::Name => "name",
            SortField::AtomicMass => "atomic-mass",
            SortField::Category => "category",
            SortField::YearDiscovered => "year-discovered",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SortParseError {
    #[error("Unknown sort field: '{0}' (expected number, name, mass, category or year)")]
    Field(String),
    #[error("Unknown sort direction: '{0}' (expected asc or desc)")]
    Direction(String),
}

impl FromStr for SortField {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "atomic-number" | "number" | "z" => Ok(SortField::AtomicNumber),
            "name" => Ok(SortField::Name),
            "atomic-mass" | "mass" => Ok(SortField::AtomicMass),
            "category" => Ok(SortField::Category),
            "year-discovered" | "year" => Ok(SortField::YearDiscovered),
            _ => Err(SortParseError::Field(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        })
    }
}

impl FromStr for SortDirection {
    type Err = SortParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(SortParseError::Direction(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Orders two elements by this field and direction.
    ///
    /// Missing discovery years sort after every known year in both
    /// directions; only the order among known years follows `direction`.
    pub fn compare(&self, a: &Element, b: &Element) -> Ordering {
        match self.field {
            SortField::AtomicNumber => self.direction.apply(a.atomic_number.cmp(&b.atomic_number)),
            SortField::Name => self.direction.apply(compare_text(&a.name, &b.name)),
            SortField::AtomicMass => self.direction.apply(a.atomic_mass.total_cmp(&b.atomic_mass)),
            SortField::Category => self
                .direction
                .apply(a.category.as_str().cmp(b.category.as_str())),
            SortField::YearDiscovered => match (a.year_discovered, b.year_discovered) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(x), Some(y)) => self.direction.apply(x.cmp(&y)),
            },
        }
    }
}

/// Case-insensitive comparison with a case-sensitive tie-break.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Stable sort: elements that compare equal keep their current relative order.
pub fn sort_elements(elements: &mut [&Element], spec: SortSpec) {
    elements.sort_by(|a, b| spec.compare(a, b));
}
