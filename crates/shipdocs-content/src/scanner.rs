//! Document discovery by filesystem walking.

use std::fs;
use std::path::{Path, PathBuf};

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use shipdocs_config::{normalize_path, title_from_path};

use crate::{ContentError, Document};

/// Discovers Markdown documents under a source directory.
///
/// Hidden entries (leading `.`, such as the generator's `.vuepress/`) are
/// skipped. `README.md` and `index.md` stand for their directory.
pub struct Scanner {
    source_dir: PathBuf,
}

impl Scanner {
    /// Create a new Scanner.
    ///
    /// # Arguments
    ///
    /// * `source_dir` - Root directory to scan
    #[must_use]
    pub fn new(source_dir: PathBuf) -> Self {
        Self { source_dir }
    }

    /// Scan the source directory, returning documents sorted by path.
    ///
    /// Returns an empty Vec if the source directory doesn't exist.
    /// Unreadable subdirectories are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotADirectory`] if the source path is a file, or
    /// [`ContentError::Io`] if the source directory itself cannot be read.
    pub fn scan(&self) -> Result<Vec<Document>, ContentError> {
        if !self.source_dir.exists() {
            tracing::warn!(path = %self.source_dir.display(), "Source directory does not exist");
            return Ok(Vec::new());
        }
        if !self.source_dir.is_dir() {
            return Err(ContentError::NotADirectory(self.source_dir.clone()));
        }

        // Fail loudly on the root, leniently below it
        fs::read_dir(&self.source_dir)?;

        let mut documents = Vec::new();
        self.scan_directory(&self.source_dir, &mut documents);
        documents.sort_by(|a, b| a.path.cmp(&b.path));

        tracing::info!(
            path = %self.source_dir.display(),
            documents = documents.len(),
            "Scanned documents"
        );
        Ok(documents)
    }

    fn scan_directory(&self, dir_path: &Path, documents: &mut Vec<Document>) {
        let entries = match fs::read_dir(dir_path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(path = %dir_path.display(), error = %e, "Failed to read directory, skipping");
                return;
            }
        };

        for entry in entries.filter_map(Result::ok) {
            let name = entry.file_name();
            if name.to_string_lossy().starts_with('.') {
                continue;
            }

            let path = entry.path();
            let is_dir = entry.file_type().is_ok_and(|t| t.is_dir());
            if is_dir {
                self.scan_directory(&path, documents);
            } else if path.extension().is_some_and(|e| e == "md") {
                documents.push(self.build_document(path));
            }
        }
    }

    fn build_document(&self, source: PathBuf) -> Document {
        let rel_path = source.strip_prefix(&self.source_dir).unwrap_or(&source);
        let url_path = normalize_path(&rel_path.to_string_lossy().replace('\\', "/"));
        let title = extract_title(&source).unwrap_or_else(|| title_from_path(&url_path));

        Document {
            path: url_path,
            title,
            source,
        }
    }
}

/// Extract the first H1 heading of a Markdown file.
fn extract_title(file_path: &Path) -> Option<String> {
    let content = fs::read_to_string(file_path)
        .inspect_err(|e| {
            tracing::warn!(path = %file_path.display(), error = %e, "Failed to read document");
        })
        .ok()?;
    title_from_markdown(&content)
}

/// Text of the first non-empty level-one heading.
///
/// Parsed as Markdown, so `#` lines inside code blocks are not headings.
fn title_from_markdown(content: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut text = String::new();
    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => {
                in_h1 = true;
                text.clear();
            }
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = text.trim();
                if !title.is_empty() {
                    return Some(title.to_owned());
                }
                in_h1 = false;
            }
            Event::Text(t) | Event::Code(t) if in_h1 => text.push_str(&t),
            _ => {}
        }
    }
    None
}
