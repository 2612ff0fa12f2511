use crate::cli::{ElementsArgs, GridArgs, ShowArgs};
use crate::commands::load_catalog;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::ui;
use periodica::core::query::SortField;
use periodica::workflows::explorer::{ExplorerEvent, PeriodicTableExplorer};
use std::sync::Arc;
use tracing::debug;

fn explorer(
    config: &AppConfig,
    sort_field: Option<SortField>,
    descending: bool,
) -> Result<PeriodicTableExplorer> {
    let catalog = Arc::new(load_catalog(config)?);
    let explorer_config = config.explorer_config(sort_field, descending)?;
    Ok(PeriodicTableExplorer::new(catalog, explorer_config))
}

pub fn run_list(args: ElementsArgs, config: &AppConfig) -> Result<()> {
    let mut explorer = explorer(config, args.sort, args.desc)?;
    if let Some(search) = args.search {
        explorer.apply(&ExplorerEvent::SearchChanged(search));
    }
    if let Some(category) = args.category {
        explorer.apply(&ExplorerEvent::CategorySelected(category));
    }
    debug!("Listing elements with sort {:?}.", explorer.sort());

    let visible = explorer.visible();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }
    if visible.is_empty() {
        println!("No elements match '{}'.", explorer.search());
        return Ok(());
    }
    println!("{}", ui::elements_table(&visible, explorer.category_filter()));
    println!(
        "{} of {} elements, sorted by {} ({}).",
        visible.len(),
        explorer.catalog().len(),
        explorer.sort().field,
        explorer.sort().direction
    );
    Ok(())
}

pub fn run_show(args: ShowArgs, config: &AppConfig) -> Result<()> {
    let mut explorer = explorer(config, None, false)?;
    let number = explorer
        .catalog()
        .resolve(&args.element)
        .map(|element| element.atomic_number)
        .ok_or_else(|| {
            CliError::Argument(format!(
                "No element matches '{}'. Use an atomic number, symbol or name.",
                args.element
            ))
        })?;
    explorer.apply(&ExplorerEvent::ElementSelected(number));

    let details = explorer
        .details()
        .ok_or_else(|| CliError::Argument(format!("Element {} could not be selected.", number)))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
        return Ok(());
    }

    println!("{}", ui::details_table(&details));
    println!("\n{}", details.element.description);
    println!("{}: {}", details.element.category.label(), details.category_summary);
    println!("\n{}", ui::facts_text(&details.facts));
    Ok(())
}

pub fn run_grid(args: GridArgs, config: &AppConfig) -> Result<()> {
    let mut explorer = explorer(config, None, false)?;
    if let Some(category) = args.category {
        explorer.apply(&ExplorerEvent::CategorySelected(category));
    }
    print!("{}", ui::render_grid(&explorer.grid()));
    println!("\n{}", ui::category_legend(explorer.category_filter().active()));
    Ok(())
}
