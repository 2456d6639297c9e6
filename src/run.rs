//! Drives a [`LineFilter`] over a file or reader.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::error::FilterError;
use crate::filter::{FilterStats, LineFilter};
use crate::lines::LogLines;

/// Filter every line of `reader` into `out`, one output line per emitted string.
///
/// Output written before a read error stays written; the scan does not resume.
pub fn filter_reader<R: BufRead, W: Write>(
    reader: R,
    mut out: W,
) -> Result<FilterStats, FilterError> {
    let mut filter = LineFilter::new();

    for line in LogLines::new(reader) {
        let line = line.map_err(FilterError::Read)?;
        if let Some(text) = filter.process(&line).as_str() {
            writeln!(out, "{}", text).map_err(FilterError::Write)?;
        }
    }
    out.flush().map_err(FilterError::Write)?;

    let stats = filter.stats();
    debug!(
        lines_read = stats.lines_read,
        lines_emitted = stats.lines_emitted,
        progress_kept = stats.progress_kept,
        progress_collapsed = stats.progress_collapsed,
        collapsed_runs = stats.collapsed_runs,
        "filter finished"
    );
    Ok(stats)
}

/// Open `path` and filter it into `out`.
///
/// The file handle is closed when this returns, on success or error.
pub fn filter_file<W: Write>(path: &Path, out: W) -> Result<FilterStats, FilterError> {
    let file = File::open(path).map_err(|source| FilterError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened log file");

    filter_reader(BufReader::new(file), out)
}
