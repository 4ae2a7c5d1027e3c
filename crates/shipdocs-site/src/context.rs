//! Navigation context types handed to the rendering layer.

use serde::Serialize;

/// Link to a neighbouring document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Display title.
    pub title: String,
    /// Normalised document path (e.g. `/guide/intro`).
    pub path: String,
    /// Path with the site base applied.
    pub href: String,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display title.
    pub title: String,
    /// Link target path, `None` for groups without a page of their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Link target with base applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Sidebar tree node with state for the current document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarNode {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Node is the current document.
    pub active: bool,
    pub collapsible: bool,
    /// Group is expanded (not collapsible, or contains the current document).
    pub open: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarNode>,
}

/// Top navigation entry with its active state for the current document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub label: String,
    /// Resolved link, `None` for menus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub external: bool,
    pub active: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavState>,
}

/// Resolved sidebar context of one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavContext {
    /// Normalised document path.
    pub path: String,
    /// Document title as shown in the sidebar.
    pub title: String,
    /// Prefix of the matched sidebar section.
    pub section: String,
    pub section_title: String,
    /// Whether the section's sidebar may be collapsed by the reader.
    pub section_collapsible: bool,
    /// Zero-based index in the flattened section.
    pub position: usize,
    /// Number of documents in the flattened section.
    pub total: usize,
    /// Chain from the site root to the containing group, excluding the document.
    pub breadcrumbs: Vec<BreadcrumbItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
    pub sidebar: Vec<SidebarNode>,
}

/// Everything the page template needs about navigation.
///
/// `sidebar` is `None` for documents outside every sidebar section; the page
/// is then rendered with the top navigation only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub path: String,
    pub nav: Vec<NavState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar: Option<NavContext>,
}

/// Navigation lookup error.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// The document is not listed in any sidebar section.
    #[error("{path} is not in navigation{}", section_suffix(.section.as_deref()))]
    NotInNavigation {
        /// Normalised document path.
        path: String,
        /// Prefix of the section whose prefix matched, if any.
        section: Option<String>,
    },
}

fn section_suffix(section: Option<&str>) -> String {
    section.map_or_else(String::new, |s| format!(" (section {s})"))
}
