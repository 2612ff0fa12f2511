//! # Core Models Module
//!
//! Data structures describing a chemical element as it appears in the catalog.
//!
//! - [`element`] - The `Element` record with its `Category` and `Block` classifications
//! - [`grid`] - Fixed periodic-table cell placement for an element
//!
//! ```
//! use periodica::core::catalog::Catalog;
//! use periodica::core::models::element::Category;
//!
//! let catalog = Catalog::builtin().unwrap();
//! let sodium = catalog.by_symbol("Na").unwrap();
//! assert_eq!(sodium.atomic_number, 11);
//! assert_eq!(sodium.category, Category::AlkaliMetal);
//! ```

pub mod element;
pub mod grid;
