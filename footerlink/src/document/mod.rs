// Document I/O - README files and their titles

use crate::error::{FooterlinkError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Title used when a document has no top-level `# ` heading.
pub const DEFAULT_TITLE: &str = "README";

const HEADING_MARKER: &str = "# ";

/// A discovered README with its resolved title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub path: PathBuf,
    pub title: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, content: &str) -> Self {
        Document {
            path: path.into(),
            title: extract_title(content),
        }
    }

    /// Directory the document lives in; links are resolved relative to it.
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Return the text of the first `# ` heading, or `README` when there is none.
/// Deeper headings (`## `, `### `...) never match. A closing `#` run is
/// dropped, so `# Guide #` reads `Guide`.
pub fn extract_title(content: &str) -> String {
    content
        .lines()
        .find_map(|line| line.strip_prefix(HEADING_MARKER))
        .map(heading_text)
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

fn heading_text(raw: &str) -> String {
    let text = raw.trim();
    let unclosed = text.trim_end_matches('#');
    // a closing run only counts when it stands apart from the text, so `C#` stays
    let closed = unclosed.len() < text.len()
        && (unclosed.is_empty() || unclosed.ends_with(char::is_whitespace));
    if closed {
        unclosed.trim().to_string()
    } else {
        text.to_string()
    }
}

/// Read a document as UTF-8, attaching the path to any failure.
pub fn read_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| FooterlinkError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite a document in place.
pub fn write_content(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).map_err(|source| FooterlinkError::Write {
        path: path.to_path_buf(),
        source,
    })
}
