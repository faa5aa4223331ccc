use std::io::Write;

use daily_tasks_core::config::AppConfig;
use daily_tasks_core::report::render;
use daily_tasks_core::{
    resolve, CliError, IngestError, ParsedTasks, ResolveRequest, TaskStringParser, TimeWindow,
};

use crate::commands::cli::Args;

/// Flags win over config defaults for the time window.
pub fn build_request(args: &Args, cfg: &AppConfig) -> ResolveRequest {
    ResolveRequest {
        window: TimeWindow {
            start: args
                .start
                .clone()
                .unwrap_or_else(|| cfg.defaults.start.clone()),
            end: args.end.clone().unwrap_or_else(|| cfg.defaults.end.clone()),
        },
        file: args.file.clone(),
        tasks: args.tasks.clone(),
    }
}

/// Resolves the invocation into a task list.
///
/// A missing source is reported on `out` and yields `Ok(None)`; every other
/// ingestion failure is returned to the caller.
pub fn parse_arguments<W: Write>(
    args: &Args,
    cfg: &AppConfig,
    out: &mut W,
) -> Result<Option<ParsedTasks>, CliError> {
    let parser = TaskStringParser::new(&cfg.input.delimiters)?;
    let request = build_request(args, cfg);

    match resolve(&request, &parser) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(IngestError::MissingSource) => {
            tracing::warn!("no task source given");
            writeln!(out, "Error: {}", IngestError::MissingSource)?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub fn run_app<W: Write>(args: &Args, cfg: &AppConfig, out: &mut W) -> Result<i32, CliError> {
    let parsed = parse_arguments(args, cfg, out)?;
    if let Some(p) = &parsed {
        tracing::info!(tasks = p.tasks.len(), "tasks resolved");
    }

    out.write_all(render(parsed.as_ref(), args.format.into())?.as_bytes())?;
    out.flush()?;
    Ok(0)
}
