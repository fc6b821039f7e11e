pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod footer;
pub mod relpath;
pub mod sink;
pub mod sync;

pub use config::Config;
pub use discovery::DocumentSet;
pub use document::Document;
pub use error::{FooterlinkError, Result};
pub use sink::{LogSink, SyncEvent, SyncSink};
pub use sync::{Outcome, SyncReport, Synchronizer};
