// Discovery - find README files under a root and put them in navigation order

use crate::document::{self, Document};
use crate::error::Result;
use crate::footer;
use crate::relpath;
use crate::sink::{SyncEvent, SyncSink};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name that marks a document, compared case-insensitively.
pub const README_FILE_NAME: &str = "readme.md";

/// The ordered documents of one run.
/// The root README (if any) comes first, the rest follow sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSet {
    documents: Vec<Document>,
    has_root: bool,
}

impl DocumentSet {
    /// Build a set from an already-ordered list.
    pub fn from_ordered(documents: Vec<Document>, has_root: bool) -> Self {
        DocumentSet {
            documents,
            has_root,
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Whether position 0 holds the README found directly under the root.
    pub fn has_root(&self) -> bool {
        self.has_root
    }

    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Neighbor positions of `index` as `(previous, next)`.
    ///
    /// Previous never wraps; next wraps from the last document to the first.
    /// A set of one has no neighbors at all, since the wrap would point the
    /// document at itself.
    pub fn neighbors(&self, index: usize) -> (Option<usize>, Option<usize>) {
        let len = self.documents.len();
        if index >= len {
            return (None, None);
        }
        let previous = index.checked_sub(1);
        let next = if len == 1 { None } else { Some((index + 1) % len) };
        (previous, next)
    }
}

/// Whether the file name is `README.md` in any letter case.
pub fn is_readme(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.eq_ignore_ascii_case(README_FILE_NAME))
}

/// Recursively collect every README under `root` that does not carry the
/// skip marker. Any unreadable directory or file aborts the scan.
///
/// Symlinks are not followed, so each file is reached through one path only
/// and link cycles cannot loop the walk.
pub fn discover<S: SyncSink>(root: &Path, sink: &mut S) -> Result<DocumentSet> {
    let root = relpath::absolutize(root)?;

    let mut candidates: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(&root) {
        let entry = entry?;
        if entry.file_type().is_file() && is_readme(entry.path()) {
            candidates.push(entry.into_path());
        }
    }
    candidates.sort_by_cached_key(|p| p.to_string_lossy().into_owned());

    let mut root_document: Option<Document> = None;
    let mut documents: Vec<Document> = Vec::new();

    for path in candidates {
        let content = document::read_content(&path)?;
        if footer::has_skip_marker(&content) {
            sink.event(&SyncEvent::Skipped { path });
            continue;
        }

        let at_root = root_document.is_none() && path.parent() == Some(root.as_path());
        sink.event(&SyncEvent::Discovered {
            path: path.clone(),
            root: at_root,
        });

        let doc = Document::new(path, &content);
        if at_root {
            root_document = Some(doc);
        } else {
            documents.push(doc);
        }
    }

    let has_root = root_document.is_some();
    if let Some(doc) = root_document {
        documents.insert(0, doc);
    }

    Ok(DocumentSet::from_ordered(documents, has_root))
}
