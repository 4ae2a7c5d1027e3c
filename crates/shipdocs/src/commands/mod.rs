//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod resolve;

use std::path::{Path, PathBuf};

use shipdocs_config::{CliSettings, Config};
use shipdocs_content::{Document, Scanner};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use resolve::ResolveArgs;

/// Loaded configuration plus the documents found in its source directory.
pub(crate) struct Workspace {
    pub config: Config,
    pub documents: Vec<Document>,
}

impl Workspace {
    /// Load config (explicit path or auto-discovered) and scan its docs.
    pub(crate) fn load(
        config_path: Option<&Path>,
        cli_settings: &CliSettings,
        output: &Output,
    ) -> Result<Self, CliError> {
        let config = Config::load(config_path, Some(cli_settings))?;
        match &config.config_path {
            Some(path) => output.info(&format!("Config: {}", path.display())),
            None => output.info("Config: defaults (no shipdocs.toml found)"),
        }
        output.info(&format!("Source: {}", config.docs.source_dir.display()));

        let documents = Scanner::new(config.docs.source_dir.clone()).scan()?;
        Ok(Self { config, documents })
    }

    /// `(path, title)` pairs for label fallback.
    pub(crate) fn titles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|d| (d.path.as_str(), d.title.as_str()))
    }
}

/// Build CLI settings from the shared source-dir override.
pub(crate) fn source_settings(source_dir: Option<PathBuf>) -> CliSettings {
    CliSettings {
        source_dir,
        ..CliSettings::default()
    }
}
