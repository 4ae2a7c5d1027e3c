//! `shipdocs check` command implementation.

use std::path::PathBuf;

use clap::Args;
use shipdocs_site::{Audit, Navigator};

use super::{Workspace, source_settings};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover shipdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Fail when sidebar entries and documents do not match.
    #[arg(long)]
    strict: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// Configuration errors are always fatal; content mismatches only with `--strict`.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let workspace = Workspace::load(
            self.config.as_deref(),
            &source_settings(self.source_dir),
            &output,
        )?;

        let navigator = Navigator::new(&workspace.config.site);
        let audit = Audit::run(
            &navigator,
            workspace.documents.iter().map(|d| d.path.as_str()),
        );

        for path in &audit.missing {
            output.warning(&format!("Sidebar entry has no document: {path}"));
        }
        for path in &audit.orphans {
            output.warning(&format!("Document is not in navigation: {path}"));
        }
        for path in &audit.dangling_nav {
            output.warning(&format!("Navigation link has no document: {path}"));
        }

        let sections = workspace.config.site.sidebar().len();
        let entries = navigator.documents().count();
        if audit.is_clean() {
            output.success(&format!(
                "Configuration OK: {sections} sections, {entries} sidebar entries, {} documents",
                workspace.documents.len()
            ));
            return Ok(());
        }

        let summary = format!(
            "{} missing document(s), {} document(s) outside navigation, {} dangling nav link(s)",
            audit.missing.len(),
            audit.orphans.len(),
            audit.dangling_nav.len()
        );
        if self.strict {
            return Err(CliError::Validation(summary));
        }
        output.success(&format!(
            "Configuration OK: {sections} sections, {entries} sidebar entries ({summary})"
        ));
        Ok(())
    }
}
