pub mod calc;
pub mod elements;
pub mod lessons;

use crate::config::AppConfig;
use crate::error::Result;
use periodica::core::catalog::Catalog;
use periodica::core::lessons::LessonLibrary;
use tracing::info;

pub(crate) fn load_catalog(config: &AppConfig) -> Result<Catalog> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("Loading element catalog from {:?}.", path);
            Catalog::load(path)?
        }
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}

pub(crate) fn load_lessons(config: &AppConfig) -> Result<LessonLibrary> {
    let library = match &config.lessons_path {
        Some(path) => {
            info!("Loading lessons from {:?}.", path);
            LessonLibrary::load(path)?
        }
        None => LessonLibrary::builtin()?,
    };
    Ok(library)
}
