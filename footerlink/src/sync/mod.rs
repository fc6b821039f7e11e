// Footer synchronization - link every README to its neighbors

use crate::config::Config;
use crate::discovery::{self, DocumentSet};
use crate::document::{self, Document};
use crate::error::Result;
use crate::footer::{self, Link};
use crate::relpath::{self, relative_path};
use crate::sink::{LogSink, SyncEvent, SyncSink};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What happened to one document during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Written,
    WouldWrite,
    Unchanged,
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentReport {
    /// Path relative to the scanned root, `/`-separated
    pub path: String,
    pub title: String,
    pub outcome: Outcome,
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Per-document results of a run, in navigation order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub root: PathBuf,
    pub dry_run: bool,
    pub documents: Vec<DocumentReport>,
}

impl SyncReport {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.documents
            .iter()
            .filter(|d| d.outcome == outcome)
            .count()
    }

    /// Documents that were written, or would be in a dry run.
    pub fn changed(&self) -> usize {
        self.count(Outcome::Written) + self.count(Outcome::WouldWrite)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Discovers the READMEs under a root and keeps their footers in step.
pub struct Synchronizer<S = LogSink> {
    root: PathBuf,
    dry_run: bool,
    sink: S,
}

impl Synchronizer<LogSink> {
    /// Open a synchronizer that reports through the `log` facade.
    pub fn open(config: &Config) -> Result<Self> {
        Self::with_sink(config, LogSink)
    }
}

impl<S: SyncSink> Synchronizer<S> {
    pub fn with_sink(config: &Config, sink: S) -> Result<Self> {
        config.validate()?;
        Ok(Synchronizer {
            root: relpath::absolutize(&config.root)?,
            dry_run: config.dry_run,
            sink,
        })
    }

    /// Compute everything but leave files untouched.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn discover(&mut self) -> Result<DocumentSet> {
        discovery::discover(&self.root, &mut self.sink)
    }

    /// Discover and synchronize in one pass.
    pub fn run(&mut self) -> Result<SyncReport> {
        let documents = self.discover()?;
        self.sync(&documents)
    }

    /// Rewrite the footer of every document in `documents`, stopping at the
    /// first I/O error.
    pub fn sync(&mut self, documents: &DocumentSet) -> Result<SyncReport> {
        let mut reports = Vec::with_capacity(documents.len());
        for (index, doc) in documents.iter().enumerate() {
            reports.push(self.sync_document(documents, index, doc)?);
        }

        Ok(SyncReport {
            root: self.root.clone(),
            dry_run: self.dry_run,
            documents: reports,
        })
    }

    fn sync_document(
        &mut self,
        documents: &DocumentSet,
        index: usize,
        doc: &Document,
    ) -> Result<DocumentReport> {
        self.sink.event(&SyncEvent::Processing {
            title: doc.title.clone(),
        });

        let (previous, next) = documents.neighbors(index);

        let content = document::read_content(&doc.path)?;
        let mut report = DocumentReport {
            path: self.display_path(&doc.path),
            title: doc.title.clone(),
            outcome: Outcome::Skipped,
            previous: None,
            next: None,
        };

        if footer::has_skip_marker(&content) {
            self.sink.event(&SyncEvent::Skipped {
                path: doc.path.clone(),
            });
            return Ok(report);
        }

        if documents.len() == 1 {
            self.sink.event(&SyncEvent::SelfLinkOmitted {
                path: doc.path.clone(),
            });
        }

        let mut links = Vec::with_capacity(2);
        if let Some(prev) = previous.and_then(|i| documents.get(i)) {
            let target = relative_path(doc.directory(), &prev.path)?;
            report.previous = Some(target.clone());
            links.push(Link::previous(prev.title.clone(), target));
        }
        if let Some(next) = next.and_then(|i| documents.get(i)) {
            let target = relative_path(doc.directory(), &next.path)?;
            report.next = Some(target.clone());
            links.push(Link::next(next.title.clone(), target));
        }

        let replaced = match footer::split_footer(&content) {
            (_, Some(old)) => footer::parse_links(old),
            (_, None) => Vec::new(),
        };
        self.sink.event(&SyncEvent::Linked {
            path: doc.path.clone(),
            links: links.clone(),
            replaced,
        });

        let new_content = footer::compose(&content, &links);
        if !footer::content_changed(&content, &new_content) {
            self.sink.event(&SyncEvent::Unchanged {
                path: doc.path.clone(),
            });
            report.outcome = Outcome::Unchanged;
            return Ok(report);
        }

        if self.dry_run {
            report.outcome = Outcome::WouldWrite;
        } else {
            document::write_content(&doc.path, &new_content)?;
            report.outcome = Outcome::Written;
        }
        self.sink.event(&SyncEvent::Written {
            path: doc.path.clone(),
            dry_run: self.dry_run,
        });

        Ok(report)
    }

    fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}
