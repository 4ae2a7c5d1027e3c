//! Site navigation for shipdocs.
//!
//! This crate provides:
//! - [`Navigator`]: resolves breadcrumbs, previous/next links, the sidebar
//!   tree and active top navigation for any document path
//! - [`Audit`]: cross-checks the sidebar against discovered documents
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use shipdocs_config::{Entry, SidebarSection, SiteConfig};
//! use shipdocs_site::Navigator;
//!
//! let config = SiteConfig::builder("Shipshape")
//!     .nav_link("Guide", "/guide/")
//!     .section(
//!         SidebarSection::new("/guide/", "Guide")
//!             .entry(Entry::document("intro"))
//!             .entry(Entry::document("connections"))
//!             .entry(Entry::document("collect")),
//!     )
//!     .build()?;
//! let navigator = Navigator::new(&config);
//!
//! let context = navigator.resolve("/guide/connections")?;
//! assert_eq!(context.prev.unwrap().path, "/guide/intro");
//! assert_eq!(context.next.unwrap().path, "/guide/collect");
//!
//! // Unknown documents still get top navigation
//! let page = navigator.page("/unknown/page");
//! assert!(page.sidebar.is_none());
//! # Ok(())
//! # }
//! ```

mod audit;
mod context;
mod navigator;

pub use audit::Audit;
pub use context::{
    BreadcrumbItem, NavContext, NavError, NavState, PageContext, PageLink, SidebarNode,
};
pub use navigator::Navigator;

