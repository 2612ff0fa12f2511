use crate::core::models::element::{Category, Element};

/// The category highlight applied to the periodic-table grid.
///
/// An inactive filter matches every element. Filtering only decides which
/// cells are dimmed; it never removes elements or moves grid positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    active: Option<Category>,
}

impl CategoryFilter {
    pub fn new(active: Option<Category>) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Option<Category> {
        self.active
    }

    /// Selects `category`, or clears the filter when it is already selected.
    pub fn toggle(&mut self, category: Category) {
        self.active = if self.active == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.active.is_none_or(|category| element.category == category)
    }
}
