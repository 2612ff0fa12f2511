//! # Workflows Module
//!
//! View-models that tie the catalog, estimators, query engine and state
//! machines together into what a presentation layer renders.
//!
//! - **Periodic Table Explorer** ([`explorer`]) - Search, sort, category
//!   highlighting, the fixed grid and the selected element's detail bundle,
//!   driven directly or through an `EventBus<ExplorerEvent>`.
//! - **Lesson Session** ([`lesson`]) - One reader's pass through a lesson:
//!   section navigation plus the lesson's quiz.

pub mod explorer;
pub mod lesson;
