//! Symbol-keyed reference tables shown alongside an element's details.
//!
//! Lookups never fail: a symbol without an entry yields an explicit
//! "unavailable" value that carries the message to show instead.

pub mod facts;

pub use facts::{ElementFacts, FactSheet, facts_for};
