//! Task ingestion
//!
//! Converts a raw source into an ordered task list. Two sources are supported:
//! - a plain text file, one task per line
//! - an inline string with tasks separated by delimiter characters
//!
//! Each entry point runs its validator first and fails with a fatal
//! [`IngestError`](crate::IngestError) when the source is unusable.

mod file;
mod task_string;

pub use file::parse_file;
pub use task_string::{TaskStringParser, DEFAULT_DELIMITERS};
