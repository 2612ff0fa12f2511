//! Lesson content: ordered sections plus a multiple-choice quiz.
//!
//! - [`question`] - The `Question` contract the quiz engine scores against
//! - [`library`] - `Lesson`, `MultipleChoice` and the TOML-backed `LessonLibrary`

pub mod library;
pub mod question;

pub use library::{JumpPolicy, Lesson, LessonLibrary, LessonLoadError, MultipleChoice, Section};
pub use question::Question;
