//! Raw `[site]` table as parsed from TOML.
//!
//! Sidebar children are heterogeneous in the file (bare path, `[path, label]`
//! pair or group table). They are read through an untagged enum and converted
//! straight into the typed [`Entry`] tree.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::ConfigError;
use crate::expand::expand_opt;
use crate::site::{Entry, HeadTag, SidebarGroup, SidebarSection, SiteConfigBuilder, ThemeConfig};

/// Title used when `site.title` is absent.
const DEFAULT_TITLE: &str = "Documentation";

fn default_collapsable() -> bool {
    true
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct SiteRaw {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) base: Option<String>,
    head: Vec<HeadTagRaw>,
    nav: Vec<NavItemRaw>,
    sidebar: BTreeMap<String, SectionRaw>,
    theme: ThemeRaw,
    plugins: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct HeadTagRaw {
    tag: String,
    #[serde(default)]
    attrs: BTreeMap<String, String>,
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NavItemRaw {
    text: String,
    link: Option<String>,
    items: Option<Vec<NavLinkRaw>>,
}

#[derive(Debug, Deserialize)]
struct NavLinkRaw {
    text: String,
    link: String,
}

#[derive(Debug, Deserialize)]
struct SectionRaw {
    title: String,
    #[serde(default = "default_collapsable", alias = "collapsible")]
    collapsable: bool,
    #[serde(default)]
    children: Vec<EntryRaw>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntryRaw {
    Path(String),
    Link(String, String),
    Group(GroupRaw),
}

#[derive(Debug, Deserialize)]
struct GroupRaw {
    title: String,
    path: Option<String>,
    #[serde(default = "default_collapsable", alias = "collapsible")]
    collapsable: bool,
    #[serde(default)]
    children: Vec<EntryRaw>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeRaw {
    sidebar_depth: Option<u8>,
    repo: Option<String>,
    edit_links: bool,
    last_updated: bool,
}

impl From<EntryRaw> for Entry {
    fn from(raw: EntryRaw) -> Self {
        match raw {
            EntryRaw::Path(path) => Entry::Document(path),
            EntryRaw::Link(path, label) => Entry::Link { path, label },
            EntryRaw::Group(group) => Entry::Group(SidebarGroup {
                title: group.title,
                path: group.path,
                collapsible: group.collapsable,
                entries: group.children.into_iter().map(Entry::from).collect(),
            }),
        }
    }
}

impl SiteRaw {
    /// Expand environment variables in the free-text fields.
    pub(crate) fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.title = expand_opt(self.title.take(), "site.title")?;
        self.description = expand_opt(self.description.take(), "site.description")?;
        self.base = expand_opt(self.base.take(), "site.base")?;
        Ok(())
    }

    /// Convert into a builder. Validation is left to [`SiteConfigBuilder::build`].
    pub(crate) fn into_builder(self) -> Result<SiteConfigBuilder, ConfigError> {
        let mut builder = SiteConfigBuilder::new(
            self.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
        )
        .description(self.description.unwrap_or_default())
        .base(self.base.unwrap_or_else(|| "/".to_owned()));

        for tag in self.head {
            builder = builder.head(HeadTag {
                tag: tag.tag,
                attrs: tag.attrs,
                content: tag.content,
            });
        }

        for (i, item) in self.nav.into_iter().enumerate() {
            builder = match (item.link, item.items) {
                (Some(link), None) => builder.nav_link(item.text, link),
                (None, Some(items)) => builder.nav_menu(
                    item.text,
                    items.into_iter().map(|l| (l.text, l.link)).collect(),
                ),
                _ => {
                    return Err(ConfigError::Validation(format!(
                        "site.nav[{i}] must set exactly one of 'link' or 'items'"
                    )));
                }
            };
        }

        // TOML tables carry no order; sections follow their prefixes
        for (prefix, section) in self.sidebar {
            let mut sidebar = SidebarSection::new(prefix, section.title)
                .collapsible(section.collapsable);
            sidebar.entries = section.children.into_iter().map(Entry::from).collect();
            builder = builder.section(sidebar);
        }

        let defaults = ThemeConfig::default();
        builder = builder.theme(ThemeConfig {
            sidebar_depth: self.theme.sidebar_depth.unwrap_or(defaults.sidebar_depth),
            repo: self.theme.repo,
            edit_links: self.theme.edit_links,
            last_updated: self.theme.last_updated,
        });

        for plugin in self.plugins {
            builder = builder.plugin(plugin);
        }

        Ok(builder)
    }
}
