//! # Catalog Query Engine
//!
//! Produces the filtered and sorted views of the catalog that list and table
//! displays render. Everything here is a pure function over the immutable
//! catalog and is cheap enough to rerun on every keystroke.
//!
//! - [`search`] - Case-insensitive substring match over name, symbol and number
//! - [`sort`] - Ordering by one field with a direction-invariant null policy
//! - [`filter`] - The category toggle used to dim non-matching grid cells

pub mod filter;
pub mod search;
pub mod sort;

pub use filter::CategoryFilter;
pub use search::search;
pub use sort::{SortDirection, SortField, SortSpec, sort_elements};

use crate::core::catalog::Catalog;
use crate::core::models::element::Element;

/// Searches the catalog, then orders the matches by `sort`.
pub fn query<'a>(catalog: &'a Catalog, text: &str, sort: SortSpec) -> Vec<&'a Element> {
    let mut matches = search(catalog, text);
    sort_elements(&mut matches, sort);
    matches
}
