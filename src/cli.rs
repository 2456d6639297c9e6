//! Command-line definition, shared with the xtask man page generator.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;

/// Binary name used in the usage line.
pub const BIN_NAME: &str = "progtrim";

/// Usage synopsis, shared by [`usage`] and clap's own error output.
const SYNOPSIS: &str = "progtrim <logfile>";

/// Trim the middle of progress bars in a log file.
#[derive(Debug, Parser)]
#[command(name = BIN_NAME, version = version(), override_usage = SYNOPSIS)]
#[command(
    long_about = "Print a log file with tqdm-style progress bars collapsed.\n\n\
                  Bars at 0-10% and 90-100% are kept. Each contiguous run of bars \
                  between 11% and 89% is replaced by a single placeholder line. \
                  All other lines are printed unchanged."
)]
pub struct Cli {
    /// Log file to filter
    #[arg(value_name = "LOGFILE", allow_hyphen_values = true)]
    pub logfile: Option<PathBuf>,

    /// Anything after the log file is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

/// Usage line printed when no log file is given.
pub fn usage() -> String {
    format!("Usage: {}", SYNOPSIS)
}

/// Version string: crate version, git SHA (dev builds only) and build date.
pub fn version() -> &'static str {
    static VERSION: OnceLock<String> = OnceLock::new();
    VERSION.get_or_init(|| {
        let date = env!("PROGTRIM_BUILD_DATE");
        match option_env!("VERGEN_GIT_SHA") {
            Some(sha) if !cfg!(feature = "release") => {
                let short = sha.get(..7).unwrap_or(sha);
                format!("{}-{} ({})", env!("CARGO_PKG_VERSION"), short, date)
            }
            _ => format!("{} ({})", env!("CARGO_PKG_VERSION"), date),
        }
    })
}
