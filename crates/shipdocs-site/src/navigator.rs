//! Site navigator.
//!
//! Resolves the navigation context of a document from a [`SiteConfig`]:
//! the sidebar section it belongs to (longest prefix match), its breadcrumb,
//! previous/next links and the active state of the top navigation.
//!
//! # Architecture
//!
//! Each sidebar section is flattened once, in declaration order, into a list
//! of indexed pages. A group with its own page contributes that page before
//! its children. Every indexed page records the chain of groups containing
//! it, so breadcrumbs are a copy of that chain and prev/next are the
//! neighbouring list slots:
//! - O(s) section matching where s is the number of sections
//! - O(1) document lookups via a per-section `path_index` `HashMap`

use std::collections::HashMap;

use shipdocs_config::{
    Entry, NavItem, NavLink, SidebarSection, SiteConfig, normalize_path, title_from_path,
};

use crate::context::{
    BreadcrumbItem, NavContext, NavError, NavState, PageContext, PageLink, SidebarNode,
};

/// Group containing an indexed page.
#[derive(Clone, Debug)]
struct Crumb {
    title: String,
    path: Option<String>,
}

/// A document slot in a flattened section.
#[derive(Debug)]
struct IndexedPage {
    path: String,
    /// Explicit sidebar label or the title of the group backed by this page.
    label: Option<String>,
    groups: Vec<Crumb>,
}

/// A sidebar section flattened for lookups.
struct IndexedSection<'a> {
    section: &'a SidebarSection,
    pages: Vec<IndexedPage>,
    path_index: HashMap<String, usize>,
}

impl<'a> IndexedSection<'a> {
    fn new(section: &'a SidebarSection) -> Self {
        let mut pages = Vec::new();
        flatten(&section.entries, &mut Vec::new(), &mut pages);

        let mut path_index = HashMap::with_capacity(pages.len());
        for (i, page) in pages.iter().enumerate() {
            path_index.entry(page.path.clone()).or_insert(i);
        }

        Self {
            section,
            pages,
            path_index,
        }
    }
}

/// Flatten entries in declaration order, tracking the enclosing groups.
fn flatten(entries: &[Entry], groups: &mut Vec<Crumb>, out: &mut Vec<IndexedPage>) {
    for entry in entries {
        match entry {
            Entry::Document(path) => out.push(IndexedPage {
                path: path.clone(),
                label: None,
                groups: groups.clone(),
            }),
            Entry::Link { path, label } => out.push(IndexedPage {
                path: path.clone(),
                label: Some(label.clone()),
                groups: groups.clone(),
            }),
            Entry::Group(group) => {
                if let Some(path) = &group.path {
                    out.push(IndexedPage {
                        path: path.clone(),
                        label: Some(group.title.clone()),
                        groups: groups.clone(),
                    });
                }
                groups.push(Crumb {
                    title: group.title.clone(),
                    path: group.path.clone(),
                });
                flatten(&group.entries, groups, out);
                groups.pop();
            }
        }
    }
}

/// Navigation resolver for one site configuration.
///
/// Borrows the configuration; build one per [`SiteConfig`] and reuse it for
/// every document.
pub struct Navigator<'a> {
    config: &'a SiteConfig,
    /// Sections in declaration order.
    sections: Vec<IndexedSection<'a>>,
    /// Indices into `sections`, longest prefix first.
    match_order: Vec<usize>,
    /// Known document titles by normalised path.
    titles: HashMap<String, String>,
}

impl<'a> Navigator<'a> {
    /// Index the sidebar of `config`.
    #[must_use]
    pub fn new(config: &'a SiteConfig) -> Self {
        let sections: Vec<_> = config.sidebar().iter().map(IndexedSection::new).collect();

        let mut match_order: Vec<usize> = (0..sections.len()).collect();
        match_order.sort_by_key(|&i| std::cmp::Reverse(sections[i].section.prefix.len()));

        tracing::debug!(
            sections = sections.len(),
            documents = sections.iter().map(|s| s.pages.len()).sum::<usize>(),
            "Indexed sidebar"
        );

        Self {
            config,
            sections,
            match_order,
            titles: HashMap::new(),
        }
    }

    /// Supply document titles used when the sidebar gives no explicit label.
    #[must_use]
    pub fn with_titles<I, P, T>(mut self, titles: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: AsRef<str>,
        T: Into<String>,
    {
        self.titles.extend(
            titles
                .into_iter()
                .map(|(path, title)| (normalize_path(path.as_ref()), title.into())),
        );
        self
    }

    /// The configuration this navigator resolves against.
    #[must_use]
    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }

    /// All sidebar documents, section by section in declaration order.
    pub fn documents(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .flat_map(|s| s.pages.iter().map(|p| p.path.as_str()))
    }

    /// Sidebar section whose prefix is the longest prefix of `path`.
    #[must_use]
    pub fn section_for(&self, path: &str) -> Option<&'a SidebarSection> {
        self.match_section(&normalize_path(path)).map(|s| s.section)
    }

    fn match_section(&self, path: &str) -> Option<&IndexedSection<'a>> {
        self.match_order
            .iter()
            .map(|&i| &self.sections[i])
            .find(|s| path.starts_with(&s.section.prefix))
    }

    /// Resolve the sidebar context of a document.
    ///
    /// # Errors
    ///
    /// Returns [`NavError::NotInNavigation`] when no section prefix matches
    /// the path, or the matched section does not list it.
    pub fn resolve(&self, path: &str) -> Result<NavContext, NavError> {
        let path = normalize_path(path);

        let Some(indexed) = self.match_section(&path) else {
            return Err(NavError::NotInNavigation {
                path,
                section: None,
            });
        };
        let section = indexed.section;

        let Some(&position) = indexed.path_index.get(&path) else {
            return Err(NavError::NotInNavigation {
                path,
                section: Some(section.prefix.clone()),
            });
        };
        let page = &indexed.pages[position];

        let prev = position
            .checked_sub(1)
            .map(|i| self.page_link(indexed, &indexed.pages[i]));
        let next = indexed
            .pages
            .get(position + 1)
            .map(|p| self.page_link(indexed, p));

        Ok(NavContext {
            title: self.label(section, &page.path, page.label.as_deref()),
            section: section.prefix.clone(),
            section_title: section.title.clone(),
            section_collapsible: section.collapsible,
            position,
            total: indexed.pages.len(),
            breadcrumbs: self.breadcrumbs(indexed, page),
            prev,
            next,
            sidebar: self.sidebar_nodes(section, &section.entries, &path).0,
            path,
        })
    }

    /// Navigation for a page, degrading to top navigation only when the
    /// document is not in any sidebar.
    #[must_use]
    pub fn page(&self, path: &str) -> PageContext {
        let path = normalize_path(path);
        let sidebar = match self.resolve(&path) {
            Ok(context) => Some(context),
            Err(err) => {
                tracing::debug!(%path, error = %err, "Rendering without sidebar");
                None
            }
        };

        PageContext {
            nav: self.nav_state(&path),
            sidebar,
            path,
        }
    }

    /// Top navigation with active flags for `path`.
    ///
    /// An internal link is active when the path starts with the link target.
    /// External links are never active; a menu is active when any item is.
    #[must_use]
    pub fn nav_state(&self, path: &str) -> Vec<NavState> {
        let path = normalize_path(path);
        self.config
            .nav()
            .iter()
            .map(|item| match item {
                NavItem::Link(link) => self.link_state(link, &path),
                NavItem::Menu { label, items } => {
                    let items: Vec<_> = items.iter().map(|l| self.link_state(l, &path)).collect();
                    NavState {
                        label: label.clone(),
                        href: None,
                        external: false,
                        active: items.iter().any(|i| i.active),
                        items,
                    }
                }
            })
            .collect()
    }

    fn link_state(&self, link: &NavLink, path: &str) -> NavState {
        let internal = link.target.internal_path();
        NavState {
            label: link.label.clone(),
            href: Some(link.target.href(self.config.base())),
            external: internal.is_none(),
            active: internal.is_some_and(|prefix| path.starts_with(prefix)),
            items: Vec::new(),
        }
    }

    /// Display title for a sidebar document.
    fn label(&self, section: &SidebarSection, path: &str, explicit: Option<&str>) -> String {
        if let Some(label) = explicit {
            return label.to_owned();
        }
        if let Some(title) = self.titles.get(path) {
            return title.clone();
        }
        if path == section.prefix {
            return section.title.clone();
        }
        title_from_path(path)
    }

    fn page_link(&self, indexed: &IndexedSection<'_>, page: &IndexedPage) -> PageLink {
        PageLink {
            title: self.label(indexed.section, &page.path, page.label.as_deref()),
            href: self.config.href(&page.path),
            path: page.path.clone(),
        }
    }

    fn breadcrumbs(&self, indexed: &IndexedSection<'_>, page: &IndexedPage) -> Vec<BreadcrumbItem> {
        let section = indexed.section;
        let mut breadcrumbs = Vec::with_capacity(page.groups.len() + 2);

        breadcrumbs.push(BreadcrumbItem {
            title: self.config.title().to_owned(),
            path: Some("/".to_owned()),
            href: Some(self.config.href("/")),
        });

        // The section index itself is the section crumb; a root section is the site crumb
        if page.path != section.prefix && section.prefix != "/" {
            let section_path = indexed
                .path_index
                .contains_key(&section.prefix)
                .then(|| section.prefix.clone());
            breadcrumbs.push(BreadcrumbItem {
                title: section.title.clone(),
                href: section_path.as_deref().map(|p| self.config.href(p)),
                path: section_path,
            });
        }

        breadcrumbs.extend(page.groups.iter().map(|crumb| BreadcrumbItem {
            title: crumb.title.clone(),
            href: crumb.path.as_deref().map(|p| self.config.href(p)),
            path: crumb.path.clone(),
        }));

        breadcrumbs
    }

    /// Build the sidebar tree; the flag reports whether `current` is inside.
    fn sidebar_nodes(
        &self,
        section: &SidebarSection,
        entries: &[Entry],
        current: &str,
    ) -> (Vec<SidebarNode>, bool) {
        let mut contains_current = false;
        let nodes = entries
            .iter()
            .map(|entry| {
                let (node, inside) = match entry {
                    Entry::Document(path) => {
                        let node = self.leaf(section, path, None, current);
                        let active = node.active;
                        (node, active)
                    }
                    Entry::Link { path, label } => {
                        let node = self.leaf(section, path, Some(label.as_str()), current);
                        let active = node.active;
                        (node, active)
                    }
                    Entry::Group(group) => {
                        let (children, inside) =
                            self.sidebar_nodes(section, &group.entries, current);
                        let active = group.path.as_deref() == Some(current);
                        let node = SidebarNode {
                            title: group.title.clone(),
                            href: group.path.as_deref().map(|p| self.config.href(p)),
                            path: group.path.clone(),
                            active,
                            collapsible: group.collapsible,
                            open: !group.collapsible || inside || active,
                            children,
                        };
                        (node, inside || active)
                    }
                };
                contains_current |= inside;
                node
            })
            .collect();
        (nodes, contains_current)
    }

    fn leaf(
        &self,
        section: &SidebarSection,
        path: &str,
        label: Option<&str>,
        current: &str,
    ) -> SidebarNode {
        SidebarNode {
            title: self.label(section, path, label),
            path: Some(path.to_owned()),
            href: Some(self.config.href(path)),
            active: path == current,
            collapsible: false,
            open: false,
            children: Vec::new(),
        }
    }
}
