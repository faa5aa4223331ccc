use regex::Regex;

use crate::error::IngestError;
use crate::validate::is_valid_task_string;

pub const DEFAULT_DELIMITERS: &str = ",;";

/// Splits an inline task string on any of a fixed set of delimiter characters.
#[derive(Debug, Clone)]
pub struct TaskStringParser {
    splitter: Regex,
}

impl TaskStringParser {
    /// Builds a parser splitting on every character of `delimiters`.
    pub fn new(delimiters: &str) -> anyhow::Result<Self> {
        if delimiters.is_empty() {
            anyhow::bail!("delimiter set cannot be empty");
        }
        let class: String = delimiters
            .chars()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let splitter = Regex::new(&format!("[{class}]"))?;
        Ok(Self { splitter })
    }

    /// Returns trimmed segments in order of appearance.
    ///
    /// Adjacent delimiters produce empty segments; they are not filtered.
    pub fn parse(&self, input: &str) -> Result<Vec<String>, IngestError> {
        if !is_valid_task_string(input) {
            return Err(IngestError::InvalidTaskString {
                input: input.to_string(),
            });
        }

        let tasks: Vec<String> = self
            .splitter
            .split(input)
            .map(|t| t.trim().to_string())
            .collect();

        tracing::debug!(count = tasks.len(), "tasks parsed from string");
        Ok(tasks)
    }
}

impl Default for TaskStringParser {
    fn default() -> Self {
        Self {
            splitter: Regex::new("[,;]").expect("static delimiter class"),
        }
    }
}
