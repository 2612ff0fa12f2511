//! The immutable element catalog.
//!
//! The catalog is the read-only source of truth every other component consumes.
//! It ships with an embedded table of all 118 known elements and can also be
//! loaded from an external CSV file with the same header. Loading validates
//! that atomic numbers are unique and form the dense range `1..=N`; the
//! elements are then kept in atomic-number order, which is the "catalog order"
//! that searches preserve.

use crate::core::models::element::Element;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

const BUILTIN_ELEMENTS_CSV: &str = include_str!("../../data/elements.csv");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{origin}': {source}")]
    Csv { origin: String, source: csv::Error },
    #[error("Catalog '{origin}' contains no elements")]
    Empty { origin: String },
    #[error("Atomic number {0} appears more than once")]
    DuplicateNumber(u32),
    #[error("Atomic numbers must be contiguous from 1: expected {expected}, found {found}")]
    Gap { expected: u32, found: u32 },
    #[error("Symbol '{0}' appears more than once")]
    DuplicateSymbol(String),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    elements: Vec<Element>,
    symbol_index: HashMap<String, usize>,
}

impl Catalog {
    /// Parses the embedded table of the 118 known elements.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_reader(BUILTIN_ELEMENTS_CSV.as_bytes(), "<builtin>")
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path).map_err(|e| CatalogError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Self::from_reader(file, &path.to_string_lossy())
    }

    pub fn from_reader<R: Read>(reader: R, origin: &str) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut elements = Vec::new();
        for result in csv_reader.deserialize::<Element>() {
            let element = result.map_err(|e| CatalogError::Csv {
                origin: origin.to_string(),
                source: e,
            })?;
            elements.push(element);
        }

        if elements.is_empty() {
            return Err(CatalogError::Empty {
                origin: origin.to_string(),
            });
        }

        let catalog = Self::from_elements(elements)?;
        debug!(
            "Loaded {} elements from catalog '{}'.",
            catalog.len(),
            origin
        );
        Ok(catalog)
    }

    /// Builds a catalog from records in any order, enforcing the dense
    /// numbering and unique symbol invariants.
    pub fn from_elements(mut elements: Vec<Element>) -> Result<Self, CatalogError> {
        elements.sort_by_key(|element| element.atomic_number);

        if let Some(first) = elements.first() {
            if first.atomic_number != 1 {
                return Err(CatalogError::Gap {
                    expected: 1,
                    found: first.atomic_number,
                });
            }
        }

        for (index, pair) in elements.windows(2).enumerate() {
            if pair[0].atomic_number == pair[1].atomic_number {
                return Err(CatalogError::DuplicateNumber(pair[0].atomic_number));
            }
            let expected = index as u32 + 2;
            if pair[1].atomic_number != expected {
                return Err(CatalogError::Gap {
                    expected,
                    found: pair[1].atomic_number,
                });
            }
        }

        let mut symbol_index = HashMap::with_capacity(elements.len());
        for (index, element) in elements.iter().enumerate() {
            let key = element.symbol.to_ascii_lowercase();
            if symbol_index.insert(key, index).is_some() {
                return Err(CatalogError::DuplicateSymbol(element.symbol.clone()));
            }
        }

        Ok(Self {
            elements,
            symbol_index,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn get(&self, atomic_number: u32) -> Option<&Element> {
        let index = atomic_number.checked_sub(1)? as usize;
        self.elements.get(index)
    }

    /// Case-insensitive symbol lookup.
    pub fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.symbol_index
            .get(&symbol.trim().to_ascii_lowercase())
            .map(|&index| &self.elements[index])
    }

    /// Resolves user input that may be an atomic number, a symbol or a full
    /// element name.
    pub fn resolve(&self, key: &str) -> Option<&Element> {
        let key = key.trim();
        if let Ok(number) = key.parse::<u32>() {
            return self.get(number);
        }
        self.by_symbol(key).or_else(|| {
            self.elements
                .iter()
                .find(|element| element.name.eq_ignore_ascii_case(key))
        })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::element::{Block, Category};
    use crate::core::models::element::tests::element;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    const HEADER: &str = "atomic_number,symbol,name,atomic_mass,category,period,group,block,melting_point,boiling_point,density,electronegativity,oxidation_states,year_discovered,discoverer,electron_configuration,description";

    #[test]
    fn builtin_catalog_numbers_are_unique_and_contiguous_from_one() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 118);
        for (index, element) in catalog.iter().enumerate() {
            assert_eq!(element.atomic_number, index as u32 + 1);
        }
    }

    #[test]
    fn builtin_catalog_parses_optional_fields() {
        let catalog = Catalog::builtin().unwrap();

        let helium = catalog.get(2).unwrap();
        assert_eq!(helium.symbol, "He");
        assert_eq!(helium.category, Category::NobleGas);
        assert_eq!(helium.electronegativity, None);

        let carbon = catalog.get(6).unwrap();
        assert_eq!(carbon.year_discovered, None);
        assert_eq!(carbon.discoverer, None);
        assert_eq!(carbon.oxidation_states.as_deref(), Some("-4,+2,+4"));

        let lanthanum = catalog.get(57).unwrap();
        assert_eq!(lanthanum.group, None);
        assert_eq!(lanthanum.block, Block::F);

        let oganesson = catalog.get(118).unwrap();
        assert_eq!(oganesson.melting_point, None);
        assert_eq!(oganesson.oxidation_states, None);
    }

    #[test]
    fn every_builtin_element_has_a_grid_position() {
        let catalog = Catalog::builtin().unwrap();
        let mut seen = std::collections::HashSet::new();
        for element in &catalog {
            let position = element
                .grid_position()
                .unwrap_or_else(|| panic!("{} has no grid position", element.symbol));
            assert!(seen.insert(position), "{} overlaps", element.symbol);
        }
    }

    #[test]
    fn lookups_by_number_symbol_and_name() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.get(11).unwrap().symbol, "Na");
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(119).is_none());
        assert_eq!(catalog.by_symbol("na").unwrap().name, "Sodium");
        assert_eq!(catalog.resolve("26").unwrap().symbol, "Fe");
        assert_eq!(catalog.resolve("Fe").unwrap().atomic_number, 26);
        assert_eq!(catalog.resolve("gold").unwrap().symbol, "Au");
        assert!(catalog.resolve("unobtainium").is_none());
    }

    #[test]
    fn from_elements_sorts_records_into_catalog_order() {
        let catalog = Catalog::from_elements(vec![
            element(2, "He", Category::NobleGas),
            element(1, "H", Category::Nonmetal),
        ])
        .unwrap();
        let symbols: Vec<_> = catalog.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["H", "He"]);
    }

    #[test]
    fn from_elements_rejects_gaps() {
        let result = Catalog::from_elements(vec![
            element(1, "H", Category::Nonmetal),
            element(3, "Li", Category::AlkaliMetal),
        ]);
        assert!(matches!(
            result,
            Err(CatalogError::Gap {
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn from_elements_rejects_catalog_not_starting_at_one() {
        let result = Catalog::from_elements(vec![element(2, "He", Category::NobleGas)]);
        assert!(matches!(
            result,
            Err(CatalogError::Gap {
                expected: 1,
                found: 2
            })
        ));
    }

    #[test]
    fn from_elements_rejects_duplicates() {
        let numbers = Catalog::from_elements(vec![
            element(1, "H", Category::Nonmetal),
            element(1, "D", Category::Nonmetal),
        ]);
        assert!(matches!(numbers, Err(CatalogError::DuplicateNumber(1))));

        let symbols = Catalog::from_elements(vec![
            element(1, "H", Category::Nonmetal),
            element(2, "h", Category::NobleGas),
        ]);
        assert!(matches!(symbols, Err(CatalogError::DuplicateSymbol(s)) if s == "h"));
    }

    #[test]
    fn load_reads_an_external_csv_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("mini.csv");
        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(
            file,
            r#"1,H,Hydrogen,1.008,nonmetal,1,1,s,13.99,20.27,0.00008988,2.2,"-1,+1",1766,Henry Cavendish,1s1,Lightest element."#
        )
        .unwrap();
        writeln!(
            file,
            "2,He,Helium,4.0026,noble-gas,1,18,s,0.95,4.22,,,0,1868,,1s2,Inert gas."
        )
        .unwrap();

        let catalog = Catalog::load(&file_path).unwrap();
        assert_eq!(catalog.len(), 2);
        let helium = catalog.by_symbol("He").unwrap();
        assert_eq!(helium.density, None);
        assert_eq!(helium.discoverer, None);
        assert_eq!(
            catalog.get(1).unwrap().dominant_oxidation_state(),
            Some(1)
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let result = Catalog::load(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn from_reader_reports_malformed_rows() {
        let data = format!("{}\n1,H,Hydrogen,heavy,nonmetal,1,1,s,,,,,,,,1s1,x\n", HEADER);
        let result = Catalog::from_reader(data.as_bytes(), "inline");
        assert!(matches!(result, Err(CatalogError::Csv { .. })));
    }

    #[test]
    fn from_reader_rejects_empty_input() {
        let result = Catalog::from_reader(format!("{}\n", HEADER).as_bytes(), "inline");
        assert!(matches!(result, Err(CatalogError::Empty { .. })));
    }
}
