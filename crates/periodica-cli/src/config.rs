use crate::error::{CliError, Result};
use directories::ProjectDirs;
use periodica::core::lessons::JumpPolicy;
use periodica::core::query::{SortDirection, SortField, SortSpec};
use periodica::engine::config::{ExplorerConfig, ExplorerConfigBuilder};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialCatalogConfig {
    path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialExplorerConfig {
    #[serde(rename = "sort-field")]
    sort_field: Option<String>,
    #[serde(rename = "sort-direction")]
    sort_direction: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialLessonsConfig {
    path: Option<PathBuf>,
    navigation: Option<String>,
}

/// The configuration file as written, with every key optional.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialAppConfig {
    catalog: Option<PartialCatalogConfig>,
    explorer: Option<PartialExplorerConfig>,
    lessons: Option<PartialLessonsConfig>,
}

/// Fully resolved settings shared by every command.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// External catalog CSV; the embedded catalog is used when `None`.
    pub catalog_path: Option<PathBuf>,
    /// External lesson file; the embedded lessons are used when `None`.
    pub lessons_path: Option<PathBuf>,
    pub sort: SortSpec,
    /// Overrides every lesson's own jump policy when set.
    pub navigation: Option<JumpPolicy>,
}

impl AppConfig {
    /// Explorer settings for a command, letting explicit flags win over the
    /// configured sort.
    pub fn explorer_config(
        &self,
        sort_field: Option<SortField>,
        descending: bool,
    ) -> Result<ExplorerConfig> {
        let direction = if descending {
            SortDirection::Descending
        } else {
            self.sort.direction
        };
        ExplorerConfigBuilder::new()
            .sort_field(sort_field.unwrap_or(self.sort.field))
            .sort_direction(direction)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))
    }
}

impl PartialAppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Reads `explicit` if given, otherwise the default config file if one
    /// exists, otherwise starts empty.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No configuration file found; using defaults.");
                Ok(Self::default())
            }
        }
    }

    pub fn merge_with_cli(mut self, set_values: &[String]) -> Result<AppConfig> {
        self.apply_set_values(set_values)?;

        let catalog = self.catalog.take().unwrap_or_default();
        let explorer = self.explorer.take().unwrap_or_default();
        let lessons = self.lessons.take().unwrap_or_default();

        let field = match explorer.sort_field {
            Some(raw) => raw
                .parse::<SortField>()
                .map_err(|e| CliError::Config(e.to_string()))?,
            None => SortField::default(),
        };
        let direction = match explorer.sort_direction {
            Some(raw) => raw
                .parse::<SortDirection>()
                .map_err(|e| CliError::Config(e.to_string()))?,
            None => SortDirection::default(),
        };
        let navigation = lessons
            .navigation
            .as_deref()
            .map(parse_jump_policy)
            .transpose()?;

        Ok(AppConfig {
            catalog_path: catalog.path,
            lessons_path: lessons.path,
            sort: SortSpec::new(field, direction),
            navigation,
        })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let value = value.trim().to_string();

            match key.trim() {
                "catalog.path" => {
                    self.catalog.get_or_insert_with(Default::default).path =
                        Some(PathBuf::from(value));
                }
                "explorer.sort-field" => {
                    self.explorer
                        .get_or_insert_with(Default::default)
                        .sort_field = Some(value);
                }
                "explorer.sort-direction" => {
                    self.explorer
                        .get_or_insert_with(Default::default)
                        .sort_direction = Some(value);
                }
                "lessons.path" => {
                    self.lessons.get_or_insert_with(Default::default).path =
                        Some(PathBuf::from(value));
                }
                "lessons.navigation" => {
                    self.lessons.get_or_insert_with(Default::default).navigation = Some(value);
                }
                other => {
                    return Err(CliError::Config(format!(
                        "Unknown configuration key '{}' in --set.",
                        other
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_jump_policy(raw: &str) -> Result<JumpPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "free" => Ok(JumpPolicy::Free),
        "gated" => Ok(JumpPolicy::Gated),
        _ => Err(CliError::Config(format!(
            "Invalid value for lessons.navigation: '{}' (expected free or gated).",
            raw
        ))),
    }
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "periodica", "periodica")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn set(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_config_resolves_to_defaults() {
        let config = PartialAppConfig::default().merge_with_cli(&[]).unwrap();
        assert_eq!(config.catalog_path, None);
        assert_eq!(config.lessons_path, None);
        assert_eq!(config.sort, SortSpec::default());
        assert_eq!(config.navigation, None);
    }

    #[test]
    fn file_values_are_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [catalog]
            path = "/data/elements.csv"

            [explorer]
            sort-field = "year"
            sort-direction = "desc"

            [lessons]
            navigation = "gated"
            "#,
        )
        .unwrap();

        let config = PartialAppConfig::discover(Some(&path))
            .unwrap()
            .merge_with_cli(&[])
            .unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/data/elements.csv")));
        assert_eq!(
            config.sort,
            SortSpec::new(SortField::YearDiscovered, SortDirection::Descending)
        );
        assert_eq!(config.navigation, Some(JumpPolicy::Gated));
    }

    #[test]
    fn set_values_override_file_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[explorer]\nsort-field = \"name\"\n").unwrap();

        let config = PartialAppConfig::from_file(&path)
            .unwrap()
            .merge_with_cli(&set(&[
                "explorer.sort-field=mass",
                "lessons.navigation = free",
                "lessons.path=/tmp/lessons.toml",
            ]))
            .unwrap();
        assert_eq!(config.sort.field, SortField::AtomicMass);
        assert_eq!(config.navigation, Some(JumpPolicy::Free));
        assert_eq!(config.lessons_path, Some(PathBuf::from("/tmp/lessons.toml")));
    }

    #[test]
    fn flags_override_configured_sort() {
        let config = PartialAppConfig::default()
            .merge_with_cli(&set(&["explorer.sort-field=name", "explorer.sort-direction=desc"]))
            .unwrap();

        let from_config = config.explorer_config(None, false).unwrap();
        assert_eq!(
            from_config.sort,
            SortSpec::new(SortField::Name, SortDirection::Descending)
        );

        let from_flags = config
            .explorer_config(Some(SortField::AtomicMass), true)
            .unwrap();
        assert_eq!(
            from_flags.sort,
            SortSpec::new(SortField::AtomicMass, SortDirection::Descending)
        );
    }

    #[test]
    fn invalid_values_are_reported_as_config_errors() {
        let bad_field = PartialAppConfig::default().merge_with_cli(&set(&["explorer.sort-field=weight"]));
        assert!(matches!(bad_field, Err(CliError::Config(_))));

        let bad_policy = PartialAppConfig::default().merge_with_cli(&set(&["lessons.navigation=linear"]));
        assert!(matches!(bad_policy, Err(CliError::Config(_))));

        let bad_format = PartialAppConfig::default().merge_with_cli(&set(&["explorer.sort-field"]));
        assert!(matches!(bad_format, Err(CliError::Config(_))));

        let bad_key = PartialAppConfig::default().merge_with_cli(&set(&["explorer.colour=red"]));
        assert!(matches!(bad_key, Err(CliError::Config(_))));
    }

    #[test]
    fn unknown_file_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[explorer]\ntheme = \"dark\"\n").unwrap();
        assert!(matches!(
            PartialAppConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            PartialAppConfig::discover(Some(&dir.path().join("absent.toml"))),
            Err(CliError::Io(_))
        ));
    }
}
