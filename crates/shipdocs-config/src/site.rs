//! Site configuration data model.
//!
//! [`SiteConfig`] is the immutable description of a documentation site: title,
//! base path, head tags, top-level navigation and the sidebar sections. It can
//! only be obtained from [`SiteConfigBuilder::build`], which resolves relative
//! sidebar paths and rejects ambiguous or malformed configuration.

use std::collections::{BTreeMap, HashSet};

use url::Url;

use crate::ConfigError;
use crate::path::{normalize_path, normalize_prefix, resolve_entry_path, with_base};

/// Maximum accepted `theme.sidebar_depth`.
const MAX_SIDEBAR_DEPTH: u8 = 6;

/// Target of a navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Normalised site-internal document path (e.g. `/guide/`).
    Internal(String),
    /// Absolute external URL, kept verbatim.
    External(String),
}

impl LinkTarget {
    /// Parse a raw link.
    ///
    /// A leading `/` marks an internal path. Anything else must be an absolute
    /// `http`, `https` or `mailto` URL.
    pub fn parse(raw: &str, field: &str) -> Result<Self, ConfigError> {
        if raw.starts_with('/') {
            return Ok(Self::Internal(normalize_path(raw)));
        }

        let invalid = |reason: String| ConfigError::InvalidUrl {
            field: field.to_owned(),
            url: raw.to_owned(),
            reason,
        };

        let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {
                if url.host_str().is_none_or(str::is_empty) {
                    return Err(invalid("missing host".to_owned()));
                }
            }
            "mailto" => {}
            other => return Err(invalid(format!("unsupported scheme '{other}'"))),
        }

        Ok(Self::External(raw.to_owned()))
    }

    /// Link as rendered in HTML, with the base path applied to internal targets.
    #[must_use]
    pub fn href(&self, base: &str) -> String {
        match self {
            Self::Internal(path) => with_base(base, path),
            Self::External(url) => url.clone(),
        }
    }

    /// Internal path, if this is not an external link.
    #[must_use]
    pub fn internal_path(&self) -> Option<&str> {
        match self {
            Self::Internal(path) => Some(path),
            Self::External(_) => None,
        }
    }
}

/// A labelled link in the top navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub target: LinkTarget,
}

/// Top-level navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavItem {
    /// Plain link.
    Link(NavLink),
    /// Dropdown menu of links.
    Menu { label: String, items: Vec<NavLink> },
}

impl NavItem {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Link(link) => &link.label,
            Self::Menu { label, .. } => label,
        }
    }
}

/// Sidebar entry.
///
/// Paths may be relative to the section prefix while building; inside a
/// [`SiteConfig`] they are always normalised absolute paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// Document labelled by its own title.
    Document(String),
    /// Document with an explicit sidebar label.
    Link { path: String, label: String },
    /// Nested group of entries.
    Group(SidebarGroup),
}

impl Entry {
    pub fn document(path: impl Into<String>) -> Self {
        Self::Document(path.into())
    }

    pub fn link(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Link {
            path: path.into(),
            label: label.into(),
        }
    }
}

impl From<SidebarGroup> for Entry {
    fn from(group: SidebarGroup) -> Self {
        Self::Group(group)
    }
}

/// Titled group of sidebar entries, optionally backed by its own page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarGroup {
    pub title: String,
    /// Page shown when the group title is clicked.
    pub path: Option<String>,
    pub collapsible: bool,
    pub entries: Vec<Entry>,
}

impl SidebarGroup {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: None,
            collapsible: true,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    #[must_use]
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    #[must_use]
    pub fn entry(mut self, entry: impl Into<Entry>) -> Self {
        self.entries.push(entry.into());
        self
    }
}

/// Sidebar shown for every document under `prefix`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    /// Path prefix, normalised to `/…/` once built.
    pub prefix: String,
    pub title: String,
    pub collapsible: bool,
    pub entries: Vec<Entry>,
}

impl SidebarSection {
    #[must_use]
    pub fn new(prefix: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            title: title.into(),
            collapsible: true,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    #[must_use]
    pub fn entry(mut self, entry: impl Into<Entry>) -> Self {
        self.entries.push(entry.into());
        self
    }
}

/// Tag injected into every page's `<head>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadTag {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub content: Option<String>,
}

impl HeadTag {
    /// Render as an HTML fragment, escaping attribute values and content.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);
        for (name, value) in &self.attrs {
            html.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
        }
        html.push('>');
        if let Some(content) = &self.content {
            html.push_str(&escape_html(content));
            html.push_str(&format!("</{}>", self.tag));
        }
        html
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Theme settings carried for the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeConfig {
    /// Heading depth shown under the active sidebar link.
    pub sidebar_depth: u8,
    /// Source repository URL.
    pub repo: Option<String>,
    pub edit_links: bool,
    pub last_updated: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            sidebar_depth: 2,
            repo: None,
            edit_links: false,
            last_updated: false,
        }
    }
}

/// Immutable site configuration.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    title: String,
    description: String,
    base: String,
    head: Vec<HeadTag>,
    nav: Vec<NavItem>,
    sidebar: Vec<SidebarSection>,
    theme: ThemeConfig,
    plugins: Vec<String>,
}

impl SiteConfig {
    /// Start building a site configuration.
    #[must_use]
    pub fn builder(title: impl Into<String>) -> SiteConfigBuilder {
        SiteConfigBuilder::new(title)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Base path with leading and trailing slash (`/1.x/`).
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn head(&self) -> &[HeadTag] {
        &self.head
    }

    #[must_use]
    pub fn nav(&self) -> &[NavItem] {
        &self.nav
    }

    /// Sidebar sections in declaration order.
    #[must_use]
    pub fn sidebar(&self) -> &[SidebarSection] {
        &self.sidebar
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    #[must_use]
    pub fn plugins(&self) -> &[String] {
        &self.plugins
    }

    /// Apply the base path to an internal document path.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        with_base(&self.base, path)
    }
}

/// Nav entry awaiting validation.
#[derive(Debug)]
enum PendingNav {
    Link {
        label: String,
        link: String,
    },
    Menu {
        label: String,
        items: Vec<(String, String)>,
    },
}

/// Builder for [`SiteConfig`]. All validation happens in [`build`](Self::build).
#[derive(Debug)]
pub struct SiteConfigBuilder {
    title: String,
    description: String,
    base: String,
    head: Vec<HeadTag>,
    nav: Vec<PendingNav>,
    sidebar: Vec<SidebarSection>,
    theme: ThemeConfig,
    plugins: Vec<String>,
}

impl SiteConfigBuilder {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            base: "/".to_owned(),
            head: Vec::new(),
            nav: Vec::new(),
            sidebar: Vec::new(),
            theme: ThemeConfig::default(),
            plugins: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    #[must_use]
    pub fn head(mut self, tag: HeadTag) -> Self {
        self.head.push(tag);
        self
    }

    #[must_use]
    pub fn nav_link(mut self, label: impl Into<String>, link: impl Into<String>) -> Self {
        self.nav.push(PendingNav::Link {
            label: label.into(),
            link: link.into(),
        });
        self
    }

    #[must_use]
    pub fn nav_menu(mut self, label: impl Into<String>, items: Vec<(String, String)>) -> Self {
        self.nav.push(PendingNav::Menu {
            label: label.into(),
            items,
        });
        self
    }

    #[must_use]
    pub fn section(mut self, section: SidebarSection) -> Self {
        self.sidebar.push(section);
        self
    }

    #[must_use]
    pub fn theme(mut self, theme: ThemeConfig) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugins.push(plugin.into());
        self
    }

    /// Validate and freeze the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Validation`] for a relative base path, an empty menu,
    ///   an external sidebar entry or an out-of-range sidebar depth
    /// - [`ConfigError::InvalidUrl`] for a malformed nav link or theme repo
    /// - [`ConfigError::DuplicatePrefix`] when two sections share a prefix
    /// - [`ConfigError::DuplicateEntry`] when a section lists a path twice
    pub fn build(self) -> Result<SiteConfig, ConfigError> {
        let base = validate_base(&self.base)?;
        let nav = self
            .nav
            .into_iter()
            .enumerate()
            .map(|(i, pending)| validate_nav(pending, i))
            .collect::<Result<Vec<_>, _>>()?;
        validate_theme(&self.theme)?;

        let mut prefixes = HashSet::new();
        let mut sidebar = Vec::with_capacity(self.sidebar.len());
        for section in self.sidebar {
            let prefix = normalize_prefix(&section.prefix);
            if !prefixes.insert(prefix.clone()) {
                return Err(ConfigError::DuplicatePrefix(prefix));
            }
            let mut seen = HashSet::new();
            let entries = resolve_entries(&prefix, section.entries, &mut seen)?;
            sidebar.push(SidebarSection {
                prefix,
                title: section.title,
                collapsible: section.collapsible,
                entries,
            });
        }

        for section in &sidebar {
            check_routing(section, &section.entries, &prefixes)?;
        }

        tracing::debug!(
            title = %self.title,
            base = %base,
            sections = sidebar.len(),
            nav_items = nav.len(),
            "Site configuration built"
        );

        Ok(SiteConfig {
            title: self.title,
            description: self.description,
            base,
            head: self.head,
            nav,
            sidebar,
            theme: self.theme,
            plugins: self.plugins,
        })
    }
}

fn validate_base(base: &str) -> Result<String, ConfigError> {
    if !base.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "site.base must start with '/', got '{base}'"
        )));
    }
    Ok(normalize_prefix(base))
}

fn validate_nav(pending: PendingNav, index: usize) -> Result<NavItem, ConfigError> {
    match pending {
        PendingNav::Link { label, link } => {
            let target = LinkTarget::parse(&link, &format!("site.nav[{index}].link"))?;
            Ok(NavItem::Link(NavLink { label, target }))
        }
        PendingNav::Menu { label, items } => {
            if items.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "site.nav[{index}] menu '{label}' has no items"
                )));
            }
            let items = items
                .into_iter()
                .enumerate()
                .map(|(j, (item_label, link))| {
                    let field = format!("site.nav[{index}].items[{j}].link");
                    Ok(NavLink {
                        label: item_label,
                        target: LinkTarget::parse(&link, &field)?,
                    })
                })
                .collect::<Result<Vec<_>, ConfigError>>()?;
            Ok(NavItem::Menu { label, items })
        }
    }
}

fn validate_theme(theme: &ThemeConfig) -> Result<(), ConfigError> {
    if theme.sidebar_depth > MAX_SIDEBAR_DEPTH {
        return Err(ConfigError::Validation(format!(
            "site.theme.sidebar_depth cannot exceed {MAX_SIDEBAR_DEPTH}"
        )));
    }
    if let Some(repo) = theme.repo.as_deref().filter(|r| !r.is_empty())
        && let LinkTarget::Internal(_) = LinkTarget::parse(repo, "site.theme.repo")?
    {
        return Err(ConfigError::InvalidUrl {
            field: "site.theme.repo".to_owned(),
            url: repo.to_owned(),
            reason: "expected an external URL".to_owned(),
        });
    }
    Ok(())
}

fn resolve_entries(
    prefix: &str,
    entries: Vec<Entry>,
    seen: &mut HashSet<String>,
) -> Result<Vec<Entry>, ConfigError> {
    entries
        .into_iter()
        .map(|entry| match entry {
            Entry::Document(path) => Ok(Entry::Document(claim_path(prefix, &path, seen)?)),
            Entry::Link { path, label } => Ok(Entry::Link {
                path: claim_path(prefix, &path, seen)?,
                label,
            }),
            Entry::Group(SidebarGroup {
                title,
                path,
                collapsible,
                entries,
            }) => {
                let path = path
                    .map(|p| claim_path(prefix, &p, seen))
                    .transpose()?;
                let entries = resolve_entries(prefix, entries, seen)?;
                Ok(Entry::Group(SidebarGroup {
                    title,
                    path,
                    collapsible,
                    entries,
                }))
            }
        })
        .collect()
}

/// Every sidebar path must route back to the section listing it.
fn check_routing(
    section: &SidebarSection,
    entries: &[Entry],
    prefixes: &HashSet<String>,
) -> Result<(), ConfigError> {
    for entry in entries {
        let path = match entry {
            Entry::Document(path) | Entry::Link { path, .. } => Some(path),
            Entry::Group(group) => {
                check_routing(section, &group.entries, prefixes)?;
                group.path.as_ref()
            }
        };
        let Some(path) = path else { continue };

        let owner = prefixes
            .iter()
            .filter(|p| path.starts_with(p.as_str()))
            .max_by_key(|p| p.len());
        match owner {
            Some(owner) if *owner == section.prefix => {}
            Some(owner) => {
                return Err(ConfigError::Validation(format!(
                    "sidebar entry {path} in section {} is routed to section {owner}",
                    section.prefix
                )));
            }
            None => {
                return Err(ConfigError::Validation(format!(
                    "sidebar entry {path} is outside section {}",
                    section.prefix
                )));
            }
        }
    }
    Ok(())
}

/// Resolve an entry path and register it, rejecting URLs and duplicates.
fn claim_path(prefix: &str, raw: &str, seen: &mut HashSet<String>) -> Result<String, ConfigError> {
    if raw.contains("://") || raw.starts_with("mailto:") {
        return Err(ConfigError::Validation(format!(
            "sidebar entry '{raw}' in section {prefix} must be an internal path"
        )));
    }
    let path = resolve_entry_path(prefix, raw);
    if !seen.insert(path.clone()) {
        return Err(ConfigError::DuplicateEntry {
            section: prefix.to_owned(),
            path,
        });
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn guide_section() -> SidebarSection {
        SidebarSection::new("/guide/", "Guide")
            .collapsible(false)
            .entry(Entry::document(""))
            .entry(Entry::document("connections"))
            .entry(Entry::document("collect"))
    }

    #[test]
    fn test_build_resolves_relative_entries() {
        let config = SiteConfig::builder("Shipshape")
            .section(guide_section())
            .build()
            .unwrap();

        let section = &config.sidebar()[0];
        assert_eq!(section.prefix, "/guide/");
        assert_eq!(
            section.entries,
            vec![
                Entry::document("/guide/"),
                Entry::document("/guide/connections"),
                Entry::document("/guide/collect"),
            ]
        );
    }

    #[test]
    fn test_build_resolves_group_paths() {
        let config = SiteConfig::builder("Shipshape")
            .section(
                SidebarSection::new("/reference", "Reference").entry(
                    SidebarGroup::new("Connection")
                        .with_path("/reference/connection")
                        .entry(Entry::document("/reference/connection/mysql"))
                        .entry(Entry::link("connection/docker-exec.md", "docker-exec")),
                ),
            )
            .build()
            .unwrap();

        let section = &config.sidebar()[0];
        assert_eq!(section.prefix, "/reference/");
        let Entry::Group(group) = &section.entries[0] else {
            panic!("expected group");
        };
        assert_eq!(group.path.as_deref(), Some("/reference/connection"));
        assert_eq!(
            group.entries[1],
            Entry::link("/reference/connection/docker-exec", "docker-exec")
        );
    }

    #[test]
    fn test_base_defaults_and_normalises() {
        let config = SiteConfig::builder("S").build().unwrap();
        assert_eq!(config.base(), "/");

        let config = SiteConfig::builder("S").base("/1.x").build().unwrap();
        assert_eq!(config.base(), "/1.x/");
        assert_eq!(config.href("/guide/"), "/1.x/guide/");
    }

    #[test]
    fn test_relative_base_rejected() {
        let err = SiteConfig::builder("S").base("1.x/").build().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.base"));
    }

    #[test]
    fn test_duplicate_prefix_rejected() {
        let err = SiteConfig::builder("S")
            .section(SidebarSection::new("/guide/", "Guide"))
            .section(SidebarSection::new("/guide", "Guide again"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicatePrefix(ref p) if p == "/guide/"));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let err = SiteConfig::builder("S")
            .section(
                SidebarSection::new("/guide/", "Guide")
                    .entry(Entry::document("intro"))
                    .entry(Entry::link("/guide/intro.md", "Intro")),
            )
            .build()
            .unwrap_err();
        assert!(
            matches!(err, ConfigError::DuplicateEntry { ref path, .. } if path == "/guide/intro")
        );
    }

    #[test]
    fn test_entry_outside_section_rejected() {
        let err = SiteConfig::builder("S")
            .section(
                SidebarSection::new("/guide/", "Guide")
                    .entry(Entry::document("a"))
                    .entry(Entry::document("/other/x"))
                    .entry(Entry::document("c")),
            )
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("/other/x is outside section /guide/"));
    }

    #[test]
    fn test_entry_routed_to_nested_section_rejected() {
        let err = SiteConfig::builder("S")
            .section(
                SidebarSection::new("/guide/", "Guide")
                    .entry(Entry::document("a"))
                    .entry(Entry::document("b"))
                    .entry(Entry::document("sub/page")),
            )
            .section(
                SidebarSection::new("/guide/sub/", "Sub")
                    .entry(Entry::document(""))
                    .entry(Entry::document("page")),
            )
            .build()
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("/guide/sub/page in section /guide/ is routed to section /guide/sub/")
        );
    }

    #[test]
    fn test_group_page_outside_section_rejected() {
        let err = SiteConfig::builder("S")
            .section(
                SidebarSection::new("/reference/", "Reference")
                    .entry(SidebarGroup::new("Guide").with_path("/guide/")),
            )
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("/guide/ is outside section /reference/"));
    }

    #[test]
    fn test_root_section_accepts_any_unclaimed_path() {
        let config = SiteConfig::builder("S")
            .section(
                SidebarSection::new("/", "Home")
                    .entry(Entry::document(""))
                    .entry(Entry::document("about")),
            )
            .section(SidebarSection::new("/guide/", "Guide").entry(Entry::document("intro")))
            .build()
            .unwrap();
        assert_eq!(config.sidebar().len(), 2);
    }

    #[test]
    fn test_external_sidebar_entry_rejected() {
        let err = SiteConfig::builder("S")
            .section(
                SidebarSection::new("/guide/", "Guide")
                    .entry(Entry::document("https://example.com/")),
            )
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("internal path"));
    }

    #[test]
    fn test_nav_link_targets() {
        let config = SiteConfig::builder("S")
            .base("/1.x/")
            .nav_link("Guide", "/guide/")
            .nav_link("GitHub", "https://github.com/salsadigitalauorg/shipshape")
            .nav_menu(
                "1.x",
                vec![(
                    "main".to_owned(),
                    "https://salsadigitalauorg.github.io/shipshape/".to_owned(),
                )],
            )
            .build()
            .unwrap();

        let NavItem::Link(guide) = &config.nav()[0] else {
            panic!("expected link");
        };
        assert_eq!(guide.target, LinkTarget::Internal("/guide/".to_owned()));
        assert_eq!(guide.target.href(config.base()), "/1.x/guide/");

        let NavItem::Link(github) = &config.nav()[1] else {
            panic!("expected link");
        };
        assert_eq!(
            github.target.href(config.base()),
            "https://github.com/salsadigitalauorg/shipshape"
        );
        assert_eq!(config.nav()[2].label(), "1.x");
    }

    #[test]
    fn test_malformed_nav_urls_rejected() {
        for link in ["guide/", "http://", "ftp://example.com/", "not a url"] {
            let err = SiteConfig::builder("S")
                .nav_link("Bad", link)
                .build()
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidUrl { ref field, .. } if field == "site.nav[0].link"),
                "expected InvalidUrl for {link}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_malformed_menu_item_reports_index() {
        let err = SiteConfig::builder("S")
            .nav_menu("Versions", vec![("main".to_owned(), "main".to_owned())])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("site.nav[0].items[0].link"));
    }

    #[test]
    fn test_empty_menu_rejected() {
        let err = SiteConfig::builder("S")
            .nav_menu("Versions", Vec::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_theme_validation() {
        let theme = ThemeConfig {
            sidebar_depth: 7,
            ..ThemeConfig::default()
        };
        let err = SiteConfig::builder("S").theme(theme).build().unwrap_err();
        assert!(err.to_string().contains("sidebar_depth"));

        let theme = ThemeConfig {
            repo: Some("/local".to_owned()),
            ..ThemeConfig::default()
        };
        let err = SiteConfig::builder("S").theme(theme).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));

        let theme = ThemeConfig {
            repo: Some(String::new()),
            ..ThemeConfig::default()
        };
        assert!(SiteConfig::builder("S").theme(theme).build().is_ok());
    }

    #[test]
    fn test_head_tag_to_html() {
        let tag = HeadTag {
            tag: "meta".to_owned(),
            attrs: BTreeMap::from([
                ("name".to_owned(), "theme-color".to_owned()),
                ("content".to_owned(), "#3eaf7c".to_owned()),
            ]),
            content: None,
        };
        assert_eq!(tag.to_html(), r##"<meta content="#3eaf7c" name="theme-color">"##);

        let title = HeadTag {
            tag: "title".to_owned(),
            attrs: BTreeMap::new(),
            content: Some("A & B".to_owned()),
        };
        assert_eq!(title.to_html(), "<title>A &amp; B</title>");
    }
}
