use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ChangelogError, Result};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "changelog.toml";

/// Represents the complete configuration for git-changelog.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

/// Maps a title prefix to a label. Rules are scanned in declaration order.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LabelRule {
    pub label: String,
    /// Case-sensitive prefix the commit title must start with
    pub title: String,
}

impl LabelRule {
    pub fn new(label: impl Into<String>, title: impl Into<String>) -> Self {
        LabelRule {
            label: label.into(),
            title: title.into(),
        }
    }
}

/// Literal search/replace applied to every commit title before rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReplacementRule {
    pub search: String,
    #[serde(default)]
    pub replace: String,
}

impl ReplacementRule {
    pub fn new(search: impl Into<String>, replace: impl Into<String>) -> Self {
        ReplacementRule {
            search: search.into(),
            replace: replace.into(),
        }
    }
}

/// A named bucket of labels rendered as one heading.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub labels: BTreeSet<String>,
    pub order: i64,
}

impl Category {
    pub fn new<I, S>(key: impl Into<String>, title: impl Into<String>, labels: I, order: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Category {
            key: key.into(),
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            order,
        }
    }

    pub fn accepts(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}

/// Contributor section settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ContributorsConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_contributors_title")]
    pub title: String,

    #[serde(default = "default_contributor_format")]
    pub format: String,
}

fn default_contributors_title() -> String {
    "## Contributors".to_string()
}

fn default_contributor_format() -> String {
    "{{contributorName}}".to_string()
}

impl Default for ContributorsConfig {
    fn default() -> Self {
        ContributorsConfig {
            enabled: false,
            title: default_contributors_title(),
            format: default_contributor_format(),
        }
    }
}

/// Rules that drive labeling, title rewriting, grouping and rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ChangelogConfig {
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_category_title_format")]
    pub category_title_format: String,

    #[serde(default)]
    pub contributors: ContributorsConfig,

    #[serde(default = "default_labelers")]
    pub labelers: Vec<LabelRule>,

    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,

    #[serde(default = "default_replacers")]
    pub replacers: Vec<ReplacementRule>,
}

/// Returns the default commit line template.
fn default_format() -> String {
    "- {{commitShortHash}} {{commitTitle}}".to_string()
}

/// Returns the default category heading template.
fn default_category_title_format() -> String {
    "## {{categoryTitle}}".to_string()
}

/// Returns the default label rules, one per conventional commit prefix.
fn default_labelers() -> Vec<LabelRule> {
    vec![
        LabelRule::new("feature", "feat:"),
        LabelRule::new("bug", "fix:"),
        LabelRule::new("task", "chore:"),
        LabelRule::new("task", "ci:"),
        LabelRule::new("doc", "docs:"),
    ]
}

/// Returns the default categories.
fn default_categories() -> Vec<Category> {
    vec![
        Category::new("feature", "🚀 New Features", ["feature"], 1),
        Category::new("bug", "🐞 Bug Fixes", ["bug"], 2),
        Category::new("task", "🔨 Tasks", ["task"], 3),
        Category::new("doc", "📔 Docs", ["doc"], 4),
    ]
}

/// Returns the default replacers, stripping the prefixes the labelers match.
fn default_replacers() -> Vec<ReplacementRule> {
    ["feat: ", "fix: ", "chore: ", "ci: ", "docs: "]
        .into_iter()
        .map(|search| ReplacementRule::new(search, ""))
        .collect()
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            format: default_format(),
            category_title_format: default_category_title_format(),
            contributors: ContributorsConfig::default(),
            labelers: default_labelers(),
            categories: default_categories(),
            replacers: default_replacers(),
        }
    }
}

impl ChangelogConfig {
    /// Rejects category sets the engine cannot order or address unambiguously.
    ///
    /// Two categories sharing an `order` value, or sharing a `key`, are
    /// configuration errors rather than ties to be resolved later.
    pub fn validate(&self) -> Result<()> {
        let mut orders: HashMap<i64, &str> = HashMap::new();
        let mut keys: HashMap<&str, usize> = HashMap::new();

        for (index, category) in self.categories.iter().enumerate() {
            if let Some(first) = orders.insert(category.order, &category.key) {
                return Err(ChangelogError::DuplicateCategoryOrder {
                    order: category.order,
                    first: first.to_string(),
                    second: category.key.clone(),
                });
            }
            if keys.insert(&category.key, index).is_some() {
                return Err(ChangelogError::config(format!(
                    "category key '{}' is declared more than once",
                    category.key
                )));
            }
        }

        Ok(())
    }
}

impl Config {
    /// Parses and validates a TOML configuration document.
    pub fn from_toml_str(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        config.changelog.validate()?;
        Ok(config)
    }

    /// Categories sorted by ascending `order`.
    pub fn sorted_categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.changelog.categories.iter().collect();
        categories.sort_by_key(|c| c.order);
        categories
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog.toml` in current directory
/// 3. `~/.config/.changelog.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated, or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        debug!(path, "loading configuration from explicit path");
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        debug!(path = CONFIG_FILE_NAME, "loading configuration from working directory");
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            debug!(path = %config_path.display(), "loading configuration from user config directory");
            fs::read_to_string(config_path)?
        } else {
            debug!("no configuration file found, using defaults");
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml_str(&config_str)
}
