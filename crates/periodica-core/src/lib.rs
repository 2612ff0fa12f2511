//! # Periodica Core Library
//!
//! The computational heart of an interactive periodic table explorer and its
//! guided chemistry lessons.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the pure data and
//! formulas stay independent from the small amount of interactive state.
//!
//! - **[`core`]: The Foundation.** The immutable element [`core::catalog::Catalog`],
//!   the derived property estimator, symbol-keyed reference tables, the catalog
//!   query engine, lesson definitions and the formula calculators. Everything in
//!   this layer is a pure function of its inputs.
//!
//! - **[`engine`]: The State Machines.** The generic quiz engine, the lesson
//!   section navigator, a typed event bus for cross-view notifications and the
//!   scoped render loop that drives decorative animations.
//!
//! - **[`workflows`]: The Public API.** View-models that combine the other two
//!   layers into what a presentation layer renders: the periodic table explorer
//!   and a lesson session.

pub mod core;
pub mod engine;
pub mod workflows;
