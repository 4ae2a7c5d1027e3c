//! Cross-check of the sidebar against discovered documents.

use std::collections::HashSet;

use serde::Serialize;
use shipdocs_config::{NavItem, NavLink, normalize_path};

use crate::Navigator;

/// Mismatches between the sidebar and the content.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct Audit {
    /// Sidebar paths with no matching document, in sidebar order.
    pub missing: Vec<String>,
    /// Documents not reachable from any sidebar section, in input order.
    pub orphans: Vec<String>,
    /// Internal top navigation targets with no matching document.
    pub dangling_nav: Vec<String>,
}

impl Audit {
    /// Compare the navigator's sidebar with a set of document paths.
    ///
    /// The site root is the home page and is never reported as an orphan.
    pub fn run<'p>(navigator: &Navigator<'_>, documents: impl IntoIterator<Item = &'p str>) -> Self {
        let documents: Vec<String> = documents.into_iter().map(normalize_path).collect();
        let known: HashSet<&str> = documents.iter().map(String::as_str).collect();

        let missing = navigator
            .documents()
            .filter(|path| !known.contains(path))
            .map(str::to_owned)
            .collect();

        let orphans = documents
            .iter()
            .filter(|path| path.as_str() != "/" && navigator.resolve(path).is_err())
            .cloned()
            .collect();

        let mut dangling_nav = Vec::new();
        for item in navigator.config().nav() {
            let links: &[NavLink] = match item {
                NavItem::Link(link) => std::slice::from_ref(link),
                NavItem::Menu { items, .. } => items,
            };
            for path in links.iter().filter_map(|l| l.target.internal_path()) {
                if !known.contains(path) && !dangling_nav.iter().any(|d| d == path) {
                    dangling_nav.push(path.to_owned());
                }
            }
        }

        Self {
            missing,
            orphans,
            dangling_nav,
        }
    }

    /// True when sidebar, top navigation and documents all agree.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.orphans.is_empty() && self.dangling_nav.is_empty()
    }
}
