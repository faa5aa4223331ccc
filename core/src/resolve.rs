use std::path::PathBuf;

use crate::error::IngestError;
use crate::ingest::{parse_file, TaskStringParser};
use crate::report::ParsedTasks;

pub const DEFAULT_START: &str = "9:00";
pub const DEFAULT_END: &str = "21:00";

/// Start and end of the day. Both values are opaque and never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self {
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSource {
    File(PathBuf),
    Inline(String),
}

/// Everything the resolver needs from one invocation.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub window: TimeWindow,
    pub file: Option<PathBuf>,
    pub tasks: Option<String>,
}

impl ResolveRequest {
    /// Picks the single active source.
    ///
    /// An empty value counts as not given. Neither or both being set is
    /// reported as [`IngestError::MissingSource`]. Whitespace-only values are
    /// still a source and fail later in validation.
    pub fn source(&self) -> Result<TaskSource, IngestError> {
        let file = self.file.as_ref().filter(|p| !p.as_os_str().is_empty());
        let tasks = self.tasks.as_ref().filter(|t| !t.is_empty());

        match (file, tasks) {
            (Some(path), None) => Ok(TaskSource::File(path.clone())),
            (None, Some(tasks)) => Ok(TaskSource::Inline(tasks.clone())),
            _ => Err(IngestError::MissingSource),
        }
    }
}

/// Resolves the request's source and ingests it.
pub fn resolve(
    request: &ResolveRequest,
    parser: &TaskStringParser,
) -> Result<ParsedTasks, IngestError> {
    let source = request.source()?;
    tracing::info!(?source, "resolving task source");

    let tasks = match &source {
        TaskSource::File(path) => parse_file(path)?,
        TaskSource::Inline(input) => parser.parse(input)?,
    };

    Ok(ParsedTasks {
        start_time: request.window.start.clone(),
        end_time: request.window.end.clone(),
        tasks,
    })
}
