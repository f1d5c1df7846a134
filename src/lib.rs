//! # Repocat
//!
//! `repocat` recursively walks a directory tree (typically a source
//! repository), renders a visual tree of its structure, and concatenates the
//! contents of every non-excluded, non-binary file into a single flat
//! document — a human- and LLM-readable snapshot of a codebase.
//!
//! Paths are filtered against an exclusion list (exact base-name match or
//! substring match on the relative path), and each file's leading bytes are
//! sniffed to decide whether its content is emitted or replaced by a binary
//! marker.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use repocat::{RepocatBuilder, repocat, output};
//!
//! let options = RepocatBuilder::new(".")
//!     .exclude(vec![".git".into(), "target".into()])
//!     .build();
//!
//! let snapshot = repocat(options).expect("walk failed");
//!
//! println!("{}", snapshot.tree);
//! output::write_document("snapshot.txt", &snapshot).expect("write failed");
//! ```

mod detect;
mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod types;

pub use engine::repocat;
pub use error::RepocatError;
pub use options::{RepocatBuilder, RepocatOptions};
pub use types::{FileContent, FileEntry, Snapshot};
