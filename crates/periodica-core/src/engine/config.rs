use crate::core::models::element::Category;
use crate::core::query::{SortDirection, SortField, SortSpec};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

/// Initial state of a [`PeriodicTableExplorer`](crate::workflows::explorer::PeriodicTableExplorer).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExplorerConfig {
    pub sort: SortSpec,
    pub search: String,
    pub category: Option<Category>,
}

#[derive(Default)]
pub struct ExplorerConfigBuilder {
    sort_field: Option<SortField>,
    sort_direction: Option<SortDirection>,
    search: Option<String>,
    category: Option<Category>,
}

impl ExplorerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_field(mut self, field: SortField) -> Self {
        self.sort_field = Some(field);
        self
    }
    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }
    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// The sort field and direction are required; search text and the
    /// category highlight default to empty.
    pub fn build(self) -> Result<ExplorerConfig, ConfigError> {
        let sort = SortSpec {
            field: self
                .sort_field
                .ok_or(ConfigError::MissingParameter("sort_field"))?,
            direction: self
                .sort_direction
                .ok_or(ConfigError::MissingParameter("sort_direction"))?,
        };
        Ok(ExplorerConfig {
            sort,
            search: self.search.unwrap_or_default(),
            category: self.category,
        })
    }
}
