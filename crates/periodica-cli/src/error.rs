use periodica::core::calc::CalcError;
use periodica::core::catalog::CatalogError;
use periodica::core::lessons::LessonLoadError;
use periodica::engine::error::{NavigationError, QuizError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Lessons(#[from] LessonLoadError),

    #[error("Calculation failed: {0}")]
    Calc(#[from] CalcError),

    #[error("Quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("Lesson navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse file '{path}': {source}", path = path.display())]
    FileParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
