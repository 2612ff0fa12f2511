//! # Core Module
//!
//! Stateless building blocks: element data, the estimates derived from it, the
//! catalog query engine, lesson definitions and the lesson formula calculators.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - `Element`, `Category`, `Block` and grid placement
//! - **Element Catalog** ([`catalog`]) - The validated, immutable list of elements
//! - **Derived Properties** ([`properties`]) - Heuristic estimates computed on demand
//! - **Reference Tables** ([`reference`]) - Symbol-keyed facts with explicit fallbacks
//! - **Queries** ([`query`]) - Search, sort and category filtering over the catalog
//! - **Lessons** ([`lessons`]) - Lesson sections and multiple-choice questions
//! - **Calculators** ([`calc`]) - q = mcΔT, PV = nRT and temperature conversions
//!
//! Derived quantities are never stored on an [`models::element::Element`]; the
//! catalog is immutable for the lifetime of the process, so every estimate is
//! recomputed from catalog fields when it is asked for.

pub mod calc;
pub mod catalog;
pub mod lessons;
pub mod models;
pub mod properties;
pub mod query;
pub mod reference;
