//! daily-tasks core: task list acquisition and validation.
//!
//! The pipeline is straight-line: resolve the task source, validate it,
//! ingest it into an ordered task list, then render the result.

pub mod config;
pub mod error;
pub mod ingest;
pub mod report;
pub mod resolve;
pub mod validate;

pub use error::{CliError, IngestError};
pub use ingest::TaskStringParser;
pub use report::{OutputFormat, ParsedTasks};
pub use resolve::{resolve, ResolveRequest, TaskSource, TimeWindow};
