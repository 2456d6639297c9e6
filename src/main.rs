//! progtrim CLI entry point

use std::io::{self, BufWriter};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use progtrim::cli::{usage, Cli};
use progtrim::FilterError;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let Some(path) = cli.logfile else {
        println!("{}", usage());
        return ExitCode::SUCCESS;
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<FilterError>() {
            // Downstream pager or `head` closed early; nothing left to say
            Some(err) if err.is_broken_pipe() => ExitCode::SUCCESS,
            _ => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Filter `path` to stdout.
#[cfg(not(tarpaulin_include))]
fn run(path: &Path) -> Result<()> {
    let stdout = io::stdout();
    let out = BufWriter::new(stdout.lock());
    progtrim::filter_file(path, out)?;
    Ok(())
}
