use crate::core::catalog::Catalog;
use crate::core::models::element::{Category, Element};
use crate::core::models::grid::GridPosition;
use crate::core::properties::derived::DerivedProperties;
use crate::core::query::{CategoryFilter, SortDirection, SortField, SortSpec, query};
use crate::core::reference::{ElementFacts, facts_for};
use crate::engine::config::ExplorerConfig;
use crate::engine::events::{EventBus, Subscription};
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Input events a control can send to the explorer.
#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerEvent {
    SearchChanged(String),
    /// Selecting the active category again clears the highlight.
    CategorySelected(Category),
    SortChanged(SortSpec),
    ElementSelected(u32),
    SelectionCleared,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridCell<'a> {
    pub element: &'a Element,
    pub position: GridPosition,
    /// True when a category highlight is active and this element is outside it.
    pub dimmed: bool,
}

/// Everything the detail panel shows for the selected element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementDetails<'a> {
    pub element: &'a Element,
    pub derived: DerivedProperties,
    pub facts: ElementFacts,
    pub category_summary: &'static str,
}

impl<'a> ElementDetails<'a> {
    pub fn of(element: &'a Element) -> Self {
        Self {
            element,
            derived: DerivedProperties::of(element),
            facts: facts_for(&element.symbol),
            category_summary: element.category.summary(),
        }
    }
}

/// State behind the periodic table page.
///
/// Views are recomputed from the catalog on every call; nothing derived is
/// cached between events.
#[derive(Debug, Clone)]
pub struct PeriodicTableExplorer {
    catalog: Arc<Catalog>,
    search: String,
    sort: SortSpec,
    filter: CategoryFilter,
    selected: Option<u32>,
}

impl PeriodicTableExplorer {
    pub fn new(catalog: Arc<Catalog>, config: ExplorerConfig) -> Self {
        Self {
            catalog,
            search: config.search,
            sort: config.sort,
            filter: CategoryFilter::new(config.category),
            selected: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Column-header behavior: the current field flips direction, a new
    /// field starts ascending.
    pub fn sort_by_column(&mut self, field: SortField) {
        self.sort = if self.sort.field == field {
            SortSpec::new(field, self.sort.direction.toggled())
        } else {
            SortSpec::new(field, SortDirection::Ascending)
        };
    }

    pub fn toggle_category(&mut self, category: Category) {
        self.filter.toggle(category);
    }

    /// Selects by atomic number. Unknown numbers leave the selection as is.
    pub fn select(&mut self, atomic_number: u32) -> bool {
        if self.catalog.get(atomic_number).is_none() {
            debug!("Ignoring selection of unknown atomic number {}.", atomic_number);
            return false;
        }
        self.selected = Some(atomic_number);
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|number| self.catalog.get(number))
    }

    /// The searched and sorted list view.
    pub fn visible(&self) -> Vec<&Element> {
        query(&self.catalog, &self.search, self.sort)
    }

    /// Every placeable element at its fixed cell, in catalog order.
    pub fn grid(&self) -> Vec<GridCell<'_>> {
        self.catalog
            .iter()
            .filter_map(|element| {
                let position = element.grid_position()?;
                Some(GridCell {
                    element,
                    position,
                    dimmed: !self.filter.matches(element),
                })
            })
            .collect()
    }

    pub fn details(&self) -> Option<ElementDetails<'_>> {
        self.selected().map(ElementDetails::of)
    }

    pub fn apply(&mut self, event: &ExplorerEvent) {
        debug!("Applying explorer event {:?}.", event);
        match event {
            ExplorerEvent::SearchChanged(text) => self.set_search(text.clone()),
            ExplorerEvent::CategorySelected(category) => self.toggle_category(*category),
            ExplorerEvent::SortChanged(sort) => self.set_sort(*sort),
            ExplorerEvent::ElementSelected(number) => {
                self.select(*number);
            }
            ExplorerEvent::SelectionCleared => self.clear_selection(),
        }
    }

    /// Routes every event published on `bus` into `explorer` for as long as
    /// the returned subscription is alive.
    pub fn connect(
        explorer: &Arc<Mutex<Self>>,
        bus: &EventBus<ExplorerEvent>,
    ) -> Subscription {
        let explorer = Arc::clone(explorer);
        bus.subscribe(move |event| {
            explorer
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .apply(event);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::properties::phase::RoomTemperatureState;

    fn explorer() -> PeriodicTableExplorer {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        PeriodicTableExplorer::new(catalog, ExplorerConfig::default())
    }

    #[test]
    fn default_view_lists_the_whole_catalog() {
        let explorer = explorer();
        assert_eq!(explorer.visible().len(), 118);
        assert!(explorer.grid().iter().all(|cell| !cell.dimmed));
        assert!(explorer.details().is_none());
    }

    #[test]
    fn selecting_noble_gas_twice_clears_the_highlight() {
        let mut explorer = explorer();
        explorer.apply(&ExplorerEvent::CategorySelected(Category::NobleGas));
        let lit: Vec<_> = explorer
            .grid()
            .into_iter()
            .filter(|cell| !cell.dimmed)
            .map(|cell| cell.element.symbol.as_str())
            .collect();
        assert_eq!(lit, vec!["He", "Ne", "Ar", "Kr", "Xe", "Rn", "Og"]);

        explorer.apply(&ExplorerEvent::CategorySelected(Category::NobleGas));
        assert_eq!(explorer.category_filter().active(), None);
        assert!(explorer.grid().iter().all(|cell| !cell.dimmed));
    }

    #[test]
    fn highlighting_never_moves_grid_cells() {
        let mut explorer = explorer();
        let before: Vec<_> = explorer.grid().iter().map(|cell| cell.position).collect();
        explorer.toggle_category(Category::Halogen);
        let after: Vec<_> = explorer.grid().iter().map(|cell| cell.position).collect();
        assert_eq!(before, after);
        assert_eq!(before.len(), 118);
    }

    #[test]
    fn sort_by_column_flips_same_field_and_resets_new_field() {
        let mut explorer = explorer();
        explorer.sort_by_column(SortField::Name);
        assert_eq!(
            explorer.sort(),
            SortSpec::new(SortField::Name, SortDirection::Ascending)
        );
        explorer.sort_by_column(SortField::Name);
        assert_eq!(explorer.sort().direction, SortDirection::Descending);
        explorer.sort_by_column(SortField::AtomicMass);
        assert_eq!(
            explorer.sort(),
            SortSpec::new(SortField::AtomicMass, SortDirection::Ascending)
        );
    }

    #[test]
    fn search_narrows_the_list_view() {
        let mut explorer = explorer();
        explorer.apply(&ExplorerEvent::SearchChanged("Na".to_string()));
        let symbols: Vec<_> = explorer.visible().iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["Na", "V"]);
        assert_eq!(explorer.grid().len(), 118);
    }

    #[test]
    fn details_bundle_derived_properties_and_facts() {
        let mut explorer = explorer();
        explorer.apply(&ExplorerEvent::ElementSelected(80));
        let details = explorer.details().unwrap();
        assert_eq!(details.element.symbol, "Hg");
        assert_eq!(
            details.derived.room_temperature_state,
            RoomTemperatureState::Liquid
        );
        assert!(details.facts.sheet().is_some());
        assert_eq!(details.category_summary, Category::TransitionMetal.summary());

        explorer.apply(&ExplorerEvent::ElementSelected(500));
        assert_eq!(explorer.selected().unwrap().symbol, "Hg");

        explorer.apply(&ExplorerEvent::SelectionCleared);
        assert!(explorer.details().is_none());
    }

    #[test]
    fn events_published_on_a_bus_reach_the_explorer() {
        let shared = Arc::new(Mutex::new(explorer()));
        let bus = EventBus::new();
        let subscription = PeriodicTableExplorer::connect(&shared, &bus);

        bus.publish(&ExplorerEvent::SortChanged(SortSpec::new(
            SortField::AtomicNumber,
            SortDirection::Descending,
        )));
        assert_eq!(shared.lock().unwrap().visible()[0].symbol, "Og");

        drop(subscription);
        bus.publish(&ExplorerEvent::SearchChanged("iron".to_string()));
        assert_eq!(shared.lock().unwrap().search(), "");
    }
}
