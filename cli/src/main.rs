use clap::Parser;
use daily_tasks::app;
use daily_tasks::commands::cli;
use daily_tasks::logging::init_tracing;
use daily_tasks_core::{CliError, IngestError};

fn main() {
    let exit = match real_main() {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

fn real_main() -> Result<i32, CliError> {
    let args = cli::Args::parse();
    let cfg = daily_tasks_core::config::load(args.config.as_deref())
        .map_err(|e| CliError::Config(e.to_string()))?;
    init_tracing(&cfg.logging).map_err(CliError::Config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run_app(&args, &cfg, &mut out)
}

/// Input errors go to stdout next to the report; everything else to stderr.
fn report_error(e: &CliError) {
    match e {
        CliError::Ingest(ie) => println!("Error: {ie}"),
        other => eprintln!("{other}"),
    }
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success (including a missing task source)
    // 1: invalid task file or task string
    // 11: config error
    // 20: read / IO error
    // 50: internal/uncategorized
    match e {
        CliError::Ingest(ie) => match ie {
            IngestError::MissingSource => 0,
            IngestError::InvalidFile { .. } | IngestError::InvalidTaskString { .. } => 1,
            IngestError::Read { .. } => 20,
        },
        CliError::Config(_) => 11,
        CliError::Io(_) => 20,
        CliError::Render(_) | CliError::Anyhow(_) => 50,
    }
}
