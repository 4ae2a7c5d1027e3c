//! `shipdocs build` command implementation.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use shipdocs_config::{CliSettings, SiteConfig};
use shipdocs_site::{Navigator, PageContext};

use super::Workspace;
use crate::error::CliError;
use crate::output::Output;

/// Name of the generated navigation file.
const MANIFEST_FILENAME: &str = "navigation.json";

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory (default: build.dest from config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Documentation source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base path, e.g. /1.x/ (overrides config).
    #[arg(long)]
    base: Option<String>,

    /// Path to configuration file (default: auto-discover shipdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Navigation data for the whole site.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Manifest<'a> {
    title: &'a str,
    description: &'a str,
    base: &'a str,
    /// Rendered `<head>` tags.
    head: Vec<String>,
    sidebar_depth: u8,
    plugins: &'a [String],
    pages: BTreeMap<String, PageEntry>,
}

#[derive(Serialize)]
struct PageEntry {
    title: String,
    #[serde(flatten)]
    context: PageContext,
}

impl<'a> Manifest<'a> {
    fn new(site: &'a SiteConfig) -> Self {
        Self {
            title: site.title(),
            description: site.description(),
            base: site.base(),
            head: site.head().iter().map(shipdocs_config::HeadTag::to_html).collect(),
            sidebar_depth: site.theme().sidebar_depth,
            plugins: site.plugins(),
            pages: BTreeMap::new(),
        }
    }
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            dest: self.output_dir,
            base: self.base,
        };
        let workspace = Workspace::load(self.config.as_deref(), &cli_settings, &output)?;
        let output_dir = workspace.config.build.dest.clone();
        output.info(&format!("Output: {}", output_dir.display()));

        let site = &workspace.config.site;
        let navigator = Navigator::new(site).with_titles(workspace.titles());

        let mut manifest = Manifest::new(site);
        let mut without_sidebar = 0usize;
        for document in &workspace.documents {
            let context = navigator.page(&document.path);
            if context.sidebar.is_none() {
                without_sidebar += 1;
            }
            tracing::debug!(path = %document.path, sidebar = context.sidebar.is_some(), "Resolved page");
            manifest.pages.insert(
                document.path.clone(),
                PageEntry {
                    title: document.title.clone(),
                    context,
                },
            );
        }

        fs::create_dir_all(&output_dir)?;
        let manifest_path = output_dir.join(MANIFEST_FILENAME);
        let mut writer = BufWriter::new(File::create(&manifest_path)?);
        serde_json::to_writer_pretty(&mut writer, &manifest)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        if without_sidebar > 0 {
            output.warning(&format!(
                "{without_sidebar} document(s) rendered without sidebar"
            ));
        }
        output.success(&format!(
            "Wrote navigation for {} documents to {}",
            manifest.pages.len(),
            manifest_path.display()
        ));
        Ok(())
    }
}
