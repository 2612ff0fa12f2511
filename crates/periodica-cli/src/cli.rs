use clap::{Args, Parser, Subcommand};
use periodica::core::models::element::Category;
use periodica::core::query::SortField;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Periodica Contributors",
    version,
    about = "Periodica - explore the periodic table, estimate element properties and take chemistry lesson quizzes from the terminal.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    /// Defaults to `config.toml` in the user configuration directory, if present.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S explorer.sort-field=mass
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List elements, optionally searched, sorted and highlighted by category.
    Elements(ElementsArgs),
    /// Show one element with its estimated properties and reference facts.
    Show(ShowArgs),
    /// Draw the periodic table grid.
    Grid(GridArgs),
    /// List the available lessons.
    Lessons,
    /// Read a lesson and take its quiz interactively.
    Quiz(QuizArgs),
    /// Solve the formulas used in the lessons.
    Calc(CalcArgs),
}

/// Arguments for the `elements` subcommand.
#[derive(Args, Debug)]
pub struct ElementsArgs {
    /// Case-insensitive text matched against name, symbol and atomic number.
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Sort field: number, name, mass, category or year.
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// Sort in descending order.
    #[arg(long)]
    pub desc: bool,

    /// Highlight one category (e.g. noble-gas); other rows are dimmed.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` subcommand.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Atomic number, symbol or name of the element.
    #[arg(value_name = "ELEMENT")]
    pub element: String,

    /// Print JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `grid` subcommand.
#[derive(Args, Debug)]
pub struct GridArgs {
    /// Highlight one category; other cells are dimmed.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<Category>,
}

/// Arguments for the `quiz` subcommand.
#[derive(Args, Debug)]
pub struct QuizArgs {
    /// Identifier of the lesson (see `periodica lessons`).
    #[arg(value_name = "LESSON_ID")]
    pub lesson: String,

    /// Go straight to the questions without reading the sections.
    #[arg(long)]
    pub skip_reading: bool,
}

/// Arguments for the `calc` subcommand.
#[derive(Args, Debug)]
pub struct CalcArgs {
    #[command(subcommand)]
    pub command: CalcCommands,
}

#[derive(Subcommand, Debug)]
pub enum CalcCommands {
    /// Heat transferred, q = mcΔT.
    Heat {
        /// Mass in grams.
        #[arg(long, value_name = "GRAMS")]
        mass: f64,
        /// Specific heat in J/(g·K).
        #[arg(long, value_name = "J_PER_G_K")]
        specific_heat: f64,
        /// Temperature change in K (negative for cooling).
        #[arg(long, value_name = "KELVIN", allow_negative_numbers = true)]
        delta_t: f64,
    },
    /// Ideal gas law, PV = nRT. Give exactly three of the four quantities.
    Gas {
        /// Pressure in kPa.
        #[arg(short, long, value_name = "KPA")]
        pressure: Option<f64>,
        /// Volume in litres.
        #[arg(long, value_name = "LITRES")]
        volume: Option<f64>,
        /// Amount in moles.
        #[arg(short = 'n', long, value_name = "MOL")]
        moles: Option<f64>,
        /// Temperature in Kelvin.
        #[arg(short, long, value_name = "KELVIN")]
        temperature: Option<f64>,
    },
    /// Convert a temperature between Celsius and Kelvin.
    Temperature {
        #[command(flatten)]
        input: TemperatureInput,
    },
}

#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct TemperatureInput {
    /// Temperature in degrees Celsius.
    #[arg(long, value_name = "DEGREES", allow_negative_numbers = true)]
    pub celsius: Option<f64>,
    /// Temperature in Kelvin.
    #[arg(long, value_name = "KELVIN", allow_negative_numbers = true)]
    pub kelvin: Option<f64>,
}
