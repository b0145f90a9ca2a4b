use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use repl::{Repl, Settings};

mod repl;
mod report;

/// Check SQL statements against a small SELECT/UPDATE/DELETE/INSERT grammar.
#[derive(Parser, Debug)]
#[command(name = "sqlcheck", version, about)]
struct Args {
    /// Statement to check. Starts the REPL when neither this nor --file is given.
    sql: Option<String>,

    /// Read the statement from a file.
    #[arg(short, long, conflicts_with = "sql")]
    file: Option<PathBuf>,

    /// Maximum number of errors kept for the report. Errors past this are
    /// still counted.
    #[arg(long)]
    error_capacity: Option<usize>,

    /// Print the token table before the report.
    #[arg(long)]
    tokens: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let mut repl = Repl::new(Settings {
        error_capacity: args.error_capacity,
        show_tokens: args.tokens,
    });

    let command_result = match (&args.sql, &args.file) {
        (Some(sql), _) => repl.eval_command(sql),
        (None, Some(file)) => repl.eval_file(file),
        (None, None) => {
            println!("sqlcheck");
            repl.run()?;
            return Ok(ExitCode::SUCCESS);
        }
    };

    command_result.print();
    log::debug!("Exiting with status {}", command_result.status());

    Ok(command_result.exit_code())
}
