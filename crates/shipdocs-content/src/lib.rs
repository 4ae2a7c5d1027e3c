//! Markdown document discovery for shipdocs.
//!
//! Walks a documentation source directory and maps every Markdown file to
//! the normalised document path used by the navigation model:
//!
//! | File | Document path |
//! |---|---|
//! | `README.md` | `/` |
//! | `guide/README.md` | `/guide/` |
//! | `guide/connections.md` | `/guide/connections` |

mod scanner;

use std::path::PathBuf;

use serde::Serialize;

pub use scanner::Scanner;

/// A discovered Markdown document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Normalised document path (e.g. `/guide/connections`).
    pub path: String,
    /// First H1 heading, or a title derived from the path.
    pub title: String,
    /// Source file.
    #[serde(skip)]
    pub source: PathBuf,
}

/// Content discovery error.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// Source path exists but is not a directory.
    #[error("Source path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// I/O error reading the source directory.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
