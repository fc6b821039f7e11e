// Diagnostics sink - where discovery and synchronization report what they do

use crate::footer::Link;
use std::path::{Path, PathBuf};

/// Something worth reporting during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncEvent {
    /// A README candidate was accepted into the document set
    Discovered { path: PathBuf, root: bool },
    /// A document carries the skip marker and was left alone
    Skipped { path: PathBuf },
    /// A document is about to be processed (the per-document progress line)
    Processing { title: String },
    /// Links computed for a document, alongside those its old footer held
    Linked {
        path: PathBuf,
        links: Vec<Link>,
        replaced: Vec<Link>,
    },
    /// A single-document set would link to itself; the next link is dropped
    SelfLinkOmitted { path: PathBuf },
    /// The footer changed and the file was (or in a dry run, would be) written
    Written { path: PathBuf, dry_run: bool },
    /// The file already carries the right footer
    Unchanged { path: PathBuf },
}

/// Receives events from discovery and synchronization.
pub trait SyncSink {
    fn event(&mut self, event: &SyncEvent);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SyncSink for LogSink {
    fn event(&mut self, event: &SyncEvent) {
        match event {
            SyncEvent::Discovered { path, root: true } => {
                log::debug!("Found root README: {}", path.display())
            }
            SyncEvent::Discovered { path, root: false } => {
                log::debug!("Found README: {}", path.display())
            }
            SyncEvent::Skipped { path } => {
                log::debug!("Skipping {} (contains skip marker)", path.display())
            }
            SyncEvent::Processing { title } => log::info!("Processing: {title}"),
            SyncEvent::Linked {
                path,
                links,
                replaced,
            } => {
                log::debug!("Links for {}: [{}]", path.display(), render_all(links));
                if !replaced.is_empty() {
                    log::debug!("Replacing old links: [{}]", render_all(replaced));
                }
            }
            SyncEvent::SelfLinkOmitted { path } => log::warn!(
                "Only one README found ({}); not linking it to itself",
                path.display()
            ),
            SyncEvent::Written { path, dry_run: false } => {
                log::debug!("Updated footer in {}", path.display())
            }
            SyncEvent::Written { path, dry_run: true } => {
                log::debug!("Would update footer in {} (dry run)", path.display())
            }
            SyncEvent::Unchanged { path } => {
                log::debug!("No changes for {}", path.display())
            }
        }
    }
}

fn render_all(links: &[Link]) -> String {
    links.iter().map(Link::render).collect::<Vec<_>>().join(", ")
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SyncSink for NullSink {
    fn event(&mut self, _event: &SyncEvent) {}
}

/// Keeps every event in memory, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<SyncEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles from the progress lines, in processing order.
    pub fn processed_titles(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SyncEvent::Processing { title } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn was_written(&self, path: &Path) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SyncEvent::Written { path: p, .. } if p == path))
    }
}

impl SyncSink for RecordingSink {
    fn event(&mut self, event: &SyncEvent) {
        self.events.push(event.clone());
    }
}

impl<S: SyncSink + ?Sized> SyncSink for &mut S {
    fn event(&mut self, event: &SyncEvent) {
        (**self).event(event);
    }
}
