//! Configuration management for the lunch wheel.
//!
//! Loads configuration from ${LUNCH_HOME}/config.toml with sensible defaults.
//! Nothing is ever written back during a session: edits made on the wheel
//! live only as long as the session.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::defaults::{default_entries, default_palette};
use crate::labels::{LabelOptions, parse_hex_color};
use crate::wheel::Entry;

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, run `cargo xtask update-default-config`.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                // Restaurant lists are replaced wholesale; the leading comment stays.
                let mut replacement = src_arr.clone();
                if let Some(Item::ArrayOfTables(existing)) = target.get(key)
                    && let (Some(first), Some(new_first)) = (existing.get(0), replacement.get_mut(0))
                {
                    *new_first.decor_mut() = first.decor().clone();
                }
                target[key] = Item::ArrayOfTables(replacement);
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for lunch configuration and data directories.
    //!
    //! LUNCH_HOME resolution order:
    //! 1. LUNCH_HOME environment variable (if set)
    //! 2. ~/.config/lunch (default)

    use std::path::PathBuf;

    /// Returns the lunch home directory.
    pub fn lunch_home() -> PathBuf {
        if let Ok(home) = std::env::var("LUNCH_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".lunch"),
            |h| h.join(".config").join("lunch"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        lunch_home().join("config.toml")
    }

    /// Returns the directory holding rolling log files.
    pub fn logs_dir() -> PathBuf {
        lunch_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spin animation length in milliseconds
    pub spin_duration_ms: u64,

    /// Wrap slice labels onto multiple lines
    pub wrap_labels: bool,

    /// Max columns per label line
    pub label_width: usize,

    /// Max lines per label
    pub label_lines: usize,

    /// Slice colors as #RRGGBB, cycled in wheel order
    pub palette: Vec<String>,

    /// Log filter used when LUNCH_LOG is unset
    pub log_level: String,

    /// Session default restaurants, in slice order
    pub restaurants: Vec<Entry>,
}

impl Config {
    const DEFAULT_SPIN_DURATION_MS: u64 = 2400;
    const DEFAULT_LABEL_WIDTH: usize = 12;
    const DEFAULT_LABEL_LINES: usize = 2;
    const DEFAULT_LOG_LEVEL: &str = "info";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    /// Checks restaurants, palette and label settings.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (i, restaurant) in self.restaurants.iter().enumerate() {
            let entry = Entry::new(&restaurant.name, &restaurant.items)
                .with_context(|| format!("restaurant #{}", i + 1))?;
            if !seen.insert(entry.name.clone()) {
                anyhow::bail!("duplicate restaurant '{}'", entry.name);
            }
        }

        if self.palette.is_empty() {
            anyhow::bail!("palette must contain at least one color");
        }
        for color in &self.palette {
            if parse_hex_color(color).is_none() {
                anyhow::bail!("invalid palette color '{color}' (expected #RRGGBB)");
            }
        }

        if self.label_width == 0 || self.label_lines == 0 {
            anyhow::bail!("label_width and label_lines must be at least 1");
        }

        Ok(())
    }

    /// Session default entries, normalized (names and items trimmed).
    pub fn default_entries(&self) -> Vec<Entry> {
        self.restaurants
            .iter()
            .filter_map(|r| Entry::new(&r.name, &r.items).ok())
            .collect()
    }

    pub fn label_options(&self) -> LabelOptions {
        LabelOptions {
            wrap: self.wrap_labels,
            width: self.label_width,
            max_lines: self.label_lines,
        }
    }

    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Generates a fresh config TOML from Rust defaults.
    ///
    /// Uses the embedded template for structure/comments and merges
    /// generated values from `Config::default()` into it.
    pub fn generate() -> Result<String> {
        use toml_edit::DocumentMut;

        let generated_toml = toml::to_string(&Config::default())
            .context("Failed to serialize default config to TOML")?;

        let mut doc: DocumentMut = default_config_template()
            .parse()
            .context("Failed to parse default config template")?;
        let generated_doc: DocumentMut = generated_toml
            .parse()
            .context("Failed to parse generated config")?;

        merge_items(doc.as_table_mut(), generated_doc.as_table());

        Ok(doc.to_string())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spin_duration_ms: Self::DEFAULT_SPIN_DURATION_MS,
            wrap_labels: true,
            label_width: Self::DEFAULT_LABEL_WIDTH,
            label_lines: Self::DEFAULT_LABEL_LINES,
            palette: default_palette(),
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            restaurants: default_entries(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.restaurants.len(), 17);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "spin_duration_ms = 500\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.spin_duration(), Duration::from_millis(500));
        assert_eq!(config.label_width, 12);
        assert_eq!(config.restaurants, default_entries());
    }

    #[test]
    fn test_restaurants_replace_defaults_in_order() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"
[[restaurants]]
name = "Noodle Bar"
items = ["Ramen"]

[[restaurants]]
name = " Taco Stand "
items = ["Al pastor", "  "]
"#,
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        let entries = config.default_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Noodle Bar");
        assert_eq!(entries[1].name, "Taco Stand");
        assert_eq!(entries[1].items, vec!["Al pastor"]);
    }

    #[test]
    fn test_invalid_restaurant_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "[[restaurants]]\nname = \"Empty\"\nitems = []\n").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(format!("{err:#}").contains("at least one menu item"));
    }

    #[test]
    fn test_duplicate_restaurant_is_rejected() {
        let config = Config {
            restaurants: vec![
                Entry::new("Zatar", ["Bowl"]).unwrap(),
                Entry::new("Zatar ", ["Wrap"]).unwrap(),
            ],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_bad_palette_is_rejected() {
        let config = Config {
            palette: vec!["#12345".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            palette: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_label_width_is_rejected() {
        let config = Config {
            label_width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        assert!(config_path.exists());
        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("spin_duration_ms ="));
        assert!(contents.contains("# Restaurants shown on the wheel"));
        assert_eq!(Config::load_from(&config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_generate_matches_defaults_and_keeps_comments() {
        let generated = Config::generate().unwrap();
        assert!(generated.contains("# How long the wheel animation runs"));
        assert!(generated.contains("# Restaurants shown on the wheel"));

        let parsed: Config = toml::from_str(&generated).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_label_options_from_config() {
        let config = Config {
            wrap_labels: false,
            label_width: 20,
            label_lines: 3,
            ..Default::default()
        };
        let options = config.label_options();
        assert!(!options.wrap);
        assert_eq!(options.width, 20);
        assert_eq!(options.max_lines, 3);
    }
}
