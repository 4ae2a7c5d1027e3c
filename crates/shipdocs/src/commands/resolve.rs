//! `shipdocs resolve` command implementation.

use std::path::PathBuf;

use clap::Args;
use shipdocs_site::{NavContext, NavState, Navigator, PageContext, PageLink};

use super::{Workspace, source_settings};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Document path (e.g. /guide/connections or guide/connections.md).
    path: String,

    /// Path to configuration file (default: auto-discover shipdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Documentation source directory, used for document titles (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Print the page context as JSON.
    #[arg(long)]
    json: bool,
}

impl ResolveArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let workspace = Workspace::load(
            self.config.as_deref(),
            &source_settings(self.source_dir),
            &output,
        )?;

        let navigator = Navigator::new(&workspace.config.site).with_titles(workspace.titles());
        let page = navigator.page(&self.path);

        if page.sidebar.is_none() {
            output.warning(&format!(
                "{} is not in navigation; rendering without sidebar",
                page.path
            ));
        }

        if self.json {
            output.result(&serde_json::to_string_pretty(&page)?);
        } else {
            print_page(&output, &page);
        }
        Ok(())
    }
}

fn print_page(output: &Output, page: &PageContext) {
    match &page.sidebar {
        Some(context) => print_context(output, context),
        None => output.highlight(&page.path),
    }
    output.field("Nav", &format_nav(&page.nav));
}

fn print_context(output: &Output, context: &NavContext) {
    output.highlight(&format!(
        "{} ({}, {} of {})",
        context.path,
        context.section_title,
        context.position + 1,
        context.total
    ));
    output.field("Title", &context.title);

    let crumbs: Vec<_> = context.breadcrumbs.iter().map(|b| b.title.as_str()).collect();
    output.field("Breadcrumb", &crumbs.join(" > "));

    let link = |l: Option<&PageLink>| {
        l.map_or_else(|| "-".to_owned(), |l| format!("{} ({})", l.title, l.href))
    };
    output.field("Previous", &link(context.prev.as_ref()));
    output.field("Next", &link(context.next.as_ref()));
}

/// Nav labels with the active ones bracketed.
fn format_nav(nav: &[NavState]) -> String {
    nav.iter()
        .map(|n| {
            if n.active {
                format!("[{}]", n.label)
            } else {
                n.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn nav(label: &str, active: bool) -> NavState {
        NavState {
            label: label.to_owned(),
            href: None,
            external: false,
            active,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_format_nav_brackets_active() {
        let formatted = format_nav(&[nav("Guide", true), nav("Reference", false)]);
        assert_eq!(formatted, "[Guide]  Reference");
    }

    #[test]
    fn test_format_nav_empty() {
        assert_eq!(format_nav(&[]), "");
    }
}
