use crate::core::catalog::Catalog;
use crate::core::models::element::Element;

/// Case-insensitive substring match against name, symbol or the atomic number
/// as text. An empty (or whitespace-only) query matches every element. Matches
/// keep catalog order.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Element> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.iter().collect();
    }
    catalog
        .iter()
        .filter(|element| matches_query(element, &needle))
        .collect()
}

/// `needle` must already be trimmed and lowercased.
pub fn matches_query(element: &Element, needle: &str) -> bool {
    element.name.to_lowercase().contains(needle)
        || element.symbol.to_lowercase().contains(needle)
        || element.atomic_number.to_string().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(elements: &[&Element]) -> Vec<String> {
        elements.iter().map(|e| e.symbol.clone()).collect()
    }

    #[test]
    fn empty_query_returns_full_catalog_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let all = search(&catalog, "");
        assert_eq!(all.len(), 118);
        for (index, element) in all.iter().enumerate() {
            assert_eq!(element.atomic_number, index as u32 + 1);
        }
        assert_eq!(search(&catalog, "   ").len(), 118);
    }

    #[test]
    fn query_matches_symbol_and_name_case_insensitively() {
        let catalog = Catalog::builtin().unwrap();
        let results = search(&catalog, "H");
        let names: Vec<_> = results.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"Hydrogen"));
        assert!(names.contains(&"Helium"));
    }

    #[test]
    fn sodium_query_matches_sodium_and_vanadium_only() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(symbols(&search(&catalog, "Na")), vec!["Na", "V"]);
        assert_eq!(search(&catalog, "Na")[0].atomic_number, 11);
    }

    #[test]
    fn query_matches_atomic_number_text() {
        let catalog = Catalog::builtin().unwrap();
        let results = search(&catalog, "118");
        assert_eq!(symbols(&results), vec!["Og"]);

        let results = search(&catalog, "26");
        assert!(results.iter().any(|e| e.symbol == "Fe"));
    }

    #[test]
    fn query_without_matches_is_empty() {
        let catalog = Catalog::builtin().unwrap();
        assert!(search(&catalog, "qqq").is_empty());
    }
}
