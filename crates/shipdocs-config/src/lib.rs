//! Configuration management for shipdocs.
//!
//! Parses `shipdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. The `[site]` table
//! becomes an immutable [`SiteConfig`], built once and passed by reference
//! to everything that resolves navigation.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `docs.source_dir`
//! - `build.dest`
//! - `site.title`
//! - `site.description`
//! - `site.base`

mod expand;
mod path;
mod raw;
mod site;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use path::{normalize_path, normalize_prefix, resolve_entry_path, title_from_path, with_base};
pub use site::{
    Entry, HeadTag, LinkTarget, NavItem, NavLink, SidebarGroup, SidebarSection, SiteConfig,
    SiteConfigBuilder, ThemeConfig,
};

use raw::SiteRaw;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override build output directory.
    pub dest: Option<PathBuf>,
    /// Override site base path.
    pub base: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "shipdocs.toml";

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    /// Resolved docs configuration.
    pub docs: DocsConfig,
    /// Resolved build configuration.
    pub build: BuildConfig,
    /// Validated site configuration.
    pub site: SiteConfig,
    /// Path to the config file (None when running on defaults).
    pub config_path: Option<PathBuf>,
}

/// Raw configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigRaw {
    docs: DocsConfigRaw,
    build: BuildConfigRaw,
    site: SiteRaw,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    dest: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Debug)]
pub struct DocsConfig {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// Resolved build configuration with absolute paths.
#[derive(Debug)]
pub struct BuildConfig {
    /// Output directory for generated navigation data.
    pub dest: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Two sidebar sections normalise to the same path prefix.
    #[error("Configuration error: sidebar prefix {0} is declared more than once")]
    DuplicatePrefix(String),
    /// A sidebar section lists the same document twice.
    #[error("Configuration error: {path} appears more than once in sidebar section {section}")]
    DuplicateEntry {
        /// Section prefix.
        section: String,
        /// Duplicated document path.
        path: String,
    },
    /// Malformed external link.
    #[error("Configuration error: {field} is not a valid link '{url}': {reason}")]
    InvalidUrl {
        /// Config field path (e.g., "`site.nav[2].link`").
        field: String,
        /// Offending value.
        url: String,
        /// Parser message.
        reason: String,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base`").
        field: String,
        /// Error message (e.g., "${`DOCS_BASE`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `shipdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after path resolution and before the site
    /// configuration is validated, so an overridden base path is checked too.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the site configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path, cli_settings)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered, cli_settings)
        } else {
            let cwd = std::env::current_dir().unwrap_or_default();
            Self::from_raw(ConfigRaw::default(), &cwd, cli_settings)
        }
    }

    /// Parse configuration from a TOML string, resolving paths against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(
        content: &str,
        base_dir: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let raw: ConfigRaw = toml::from_str(content)?;
        Self::from_raw(raw, base_dir, cli_settings)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path, cli_settings: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let mut config = Self::from_toml_str(&content, config_dir, cli_settings)?;
        config.config_path = Some(path.to_path_buf());
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Expand, resolve, apply overrides and validate.
    fn from_raw(
        mut raw: ConfigRaw,
        config_dir: &Path,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        raw.expand_env_vars()?;

        let mut docs = DocsConfig {
            source_dir: config_dir.join(raw.docs.source_dir.as_deref().unwrap_or("docs")),
        };
        let mut build = BuildConfig {
            dest: config_dir.join(raw.build.dest.as_deref().unwrap_or(".shipdocs/build")),
        };

        if let Some(settings) = cli_settings {
            if let Some(source_dir) = &settings.source_dir {
                docs.source_dir.clone_from(source_dir);
            }
            if let Some(dest) = &settings.dest {
                build.dest.clone_from(dest);
            }
            if let Some(base) = &settings.base {
                raw.site.base = Some(base.clone());
            }
        }

        let site = raw.site.into_builder()?.build()?;

        Ok(Self {
            docs,
            build,
            site,
            config_path: None,
        })
    }
}

impl ConfigRaw {
    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.docs.source_dir = expand::expand_opt(self.docs.source_dir.take(), "docs.source_dir")?;
        self.build.dest = expand::expand_opt(self.build.dest.take(), "build.dest")?;
        self.site.expand_env_vars()
    }
}
