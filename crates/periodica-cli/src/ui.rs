use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use periodica::core::lessons::{Lesson, LessonLibrary};
use periodica::core::models::element::{Category, Element};
use periodica::core::models::grid::{GRID_COLUMNS, GRID_ROWS};
use periodica::core::properties::display_or_na;
use periodica::core::query::CategoryFilter;
use periodica::core::reference::ElementFacts;
use periodica::engine::quiz::QuestionResult;
use periodica::workflows::explorer::{ElementDetails, GridCell};
use std::collections::HashMap;

const GRID_CELL_WIDTH: usize = 4;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell(text: impl ToString) -> Cell {
    Cell::new(text).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn format_mass(mass: f64) -> String {
    format!("{mass:.3}")
}

fn format_year(year: Option<i32>) -> String {
    year.map_or_else(|| "Ancient".to_string(), |y| y.to_string())
}

/// The element list, dimming rows outside the active category highlight.
pub fn elements_table(elements: &[&Element], filter: CategoryFilter) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("#"),
        header_cell("Symbol"),
        header_cell("Name"),
        header_cell("Mass"),
        header_cell("Category"),
        header_cell("Discovered"),
    ]);
    for element in elements {
        let values = [
            element.atomic_number.to_string(),
            element.symbol.clone(),
            element.name.clone(),
            format_mass(element.atomic_mass),
            element.category.label().to_string(),
            format_year(element.year_discovered),
        ];
        let row: Vec<Cell> = if filter.matches(element) {
            values.into_iter().map(Cell::new).collect()
        } else {
            values.into_iter().map(dim_cell).collect()
        };
        table.add_row(row);
    }
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

fn property_row(table: &mut Table, label: &str, value: impl ToString) {
    table.add_row(vec![header_cell(label), Cell::new(value)]);
}

/// Catalog fields followed by the derived estimates.
pub fn details_table(details: &ElementDetails<'_>) -> Table {
    let element = details.element;
    let derived = &details.derived;
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell(&format!("{} ({})", element.name, element.symbol)),
        header_cell(&format!("#{}", element.atomic_number)),
    ]);

    property_row(&mut table, "Category", element.category.label());
    property_row(&mut table, "Atomic mass", format_mass(element.atomic_mass));
    property_row(
        &mut table,
        "Period / Group",
        format!("{} / {}", element.period, display_or_na(element.group)),
    );
    property_row(&mut table, "Block", element.block);
    property_row(&mut table, "Electron configuration", &element.electron_configuration);
    property_row(&mut table, "Melting point (K)", display_or_na(element.melting_point));
    property_row(&mut table, "Boiling point (K)", display_or_na(element.boiling_point));
    property_row(&mut table, "Density (g/cm³)", display_or_na(element.density));
    property_row(&mut table, "Electronegativity", display_or_na(element.electronegativity));
    property_row(
        &mut table,
        "Oxidation states",
        element.oxidation_states.as_deref().unwrap_or("N/A"),
    );
    property_row(
        &mut table,
        "Discovered",
        match (&element.discoverer, element.year_discovered) {
            (Some(who), Some(year)) => format!("{year} by {who}"),
            (None, Some(year)) => year.to_string(),
            (Some(who), None) => who.clone(),
            (None, None) => "Known since antiquity".to_string(),
        },
    );

    property_row(&mut table, "Electron shells", derived.shells_label());
    property_row(&mut table, "Atomic radius (pm, est.)", derived.atomic_radius);
    property_row(
        &mut table,
        "Ionic radius (pm, est.)",
        display_or_na(derived.ionic_radius),
    );
    property_row(
        &mut table,
        "Ionization energy (kJ/mol, est.)",
        format!("{:.0}", derived.ionization_energy),
    );
    property_row(
        &mut table,
        "Electron affinity (kJ/mol, est.)",
        display_or_na(derived.electron_affinity.map(|a| format!("{a:.0}"))),
    );
    property_row(&mut table, "State at 298 K", derived.room_temperature_state);
    let hazards: Vec<_> = derived.hazards.labels().collect();
    property_row(
        &mut table,
        "Hazards",
        if hazards.is_empty() {
            "None".to_string()
        } else {
            hazards.join(", ")
        },
    );
    table
}

/// Reference facts, or the fallback message when none are recorded.
pub fn facts_text(facts: &ElementFacts) -> String {
    match facts {
        ElementFacts::Known(sheet) => format!(
            "Common compounds: {}\nUses: {}\nIsotopes: {}",
            sheet.compounds.join(", "),
            sheet.uses.join(", "),
            sheet.isotopes.join(", ")
        ),
        ElementFacts::Unavailable { message } => message.to_string(),
    }
}

/// Draws the fixed 18-column layout. Dimmed cells show `·` instead of the
/// symbol so the highlight survives without colour.
pub fn render_grid(cells: &[GridCell<'_>]) -> String {
    let by_position: HashMap<(u8, u8), &GridCell<'_>> = cells
        .iter()
        .map(|cell| ((cell.position.row, cell.position.column), cell))
        .collect();

    let mut out = String::new();
    for row in 1..=GRID_ROWS {
        let mut line = String::new();
        for column in 1..=GRID_COLUMNS {
            let text = match by_position.get(&(row, column)) {
                Some(cell) if cell.dimmed => "·",
                Some(cell) => cell.element.symbol.as_str(),
                None => "",
            };
            line.push_str(&format!("{text:<width$}", width = GRID_CELL_WIDTH));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn category_legend(active: Option<Category>) -> String {
    Category::ALL
        .iter()
        .map(|category| {
            let marker = if active == Some(*category) { "*" } else { " " };
            format!("{marker} {:<22} {}", category.as_str(), category.summary())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn lessons_table(library: &LessonLibrary) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Title"),
        header_cell("Sections"),
        header_cell("Questions"),
        header_cell("Navigation"),
    ]);
    for lesson in library.iter() {
        table.add_row(lesson_row(lesson));
    }
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    table
}

fn lesson_row(lesson: &Lesson) -> Vec<Cell> {
    vec![
        Cell::new(&lesson.id),
        Cell::new(&lesson.title),
        Cell::new(lesson.sections.len()),
        Cell::new(lesson.questions.len()),
        Cell::new(format!("{:?}", lesson.navigation).to_lowercase()),
    ]
}

/// Per-question outcome; explanations appear only where they were toggled on.
pub fn quiz_results_table(results: &[QuestionResult<'_>]) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Question"),
        header_cell("Your answer"),
        header_cell("Result"),
        header_cell("Explanation"),
    ]);
    for result in results {
        let verdict = if result.is_correct {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            Cell::new(format!("✗ ({})", result.correct_answer)).fg(Color::Red)
        };
        let explanation = if result.explanation_visible {
            Cell::new(result.explanation)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(result.prompt),
            Cell::new(result.selected.unwrap_or("-")),
            verdict,
            explanation,
        ]);
    }
    table
}
