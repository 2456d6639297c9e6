//! Collapse logic for the middle of progress bar runs.
//!
//! Lines pass through unchanged except progress bars between 11% and 89%.
//! A contiguous run of those is replaced by a single [`PLACEHOLDER`] line.
//!
//! **States**:
//! - `Normal`: everything seen so far has been written out verbatim
//! - `Collapsing`: a placeholder was written for the current run, further
//!   middle-range bars are dropped silently
//!
//! Any verbatim line (plain text or a bar at <=10% / >=90%) returns to `Normal`,
//! so the next middle-range bar starts a new run with its own placeholder.

use tracing::trace;

use crate::detect::{detect, ProgressMatch};

/// Line written in place of a collapsed run.
pub const PLACEHOLDER: &str = "   ... [ Middle Progress Skipped (11% ~ 89%) ] ...";

/// Bars at or below this percentage are kept.
pub const HEAD_LIMIT: u32 = 10;

/// Bars at or above this percentage are kept.
pub const TAIL_LIMIT: u32 = 90;

/// Whether the filter is inside a collapsed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterState {
    #[default]
    Normal,
    Collapsing,
}

/// What to do with the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Write the line unchanged.
    Pass,
    /// Write [`PLACEHOLDER`] instead of the line.
    Placeholder,
    /// Write nothing.
    Suppress,
}

/// Decide what to emit for a line given its detection result.
///
/// Returns the action and the state to carry into the next line.
pub fn decide(state: FilterState, detected: ProgressMatch) -> (Action, FilterState) {
    match detected {
        ProgressMatch::Match { percent } if is_middle(percent) => match state {
            FilterState::Normal => (Action::Placeholder, FilterState::Collapsing),
            FilterState::Collapsing => (Action::Suppress, FilterState::Collapsing),
        },
        _ => (Action::Pass, FilterState::Normal),
    }
}

fn is_middle(percent: u32) -> bool {
    percent > HEAD_LIMIT && percent < TAIL_LIMIT
}

/// Output for a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit<'a> {
    Verbatim(&'a str),
    Placeholder,
    Nothing,
}

impl<'a> Emit<'a> {
    /// Text to write, if any.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Verbatim(line) => Some(line),
            Self::Placeholder => Some(PLACEHOLDER),
            Self::Nothing => None,
        }
    }
}

/// Diagnostic counters collected over one filter run.
///
/// Never consulted by [`decide`]; output depends on [`FilterState`] alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Lines fed into the filter
    pub lines_read: usize,
    /// Lines written out, placeholders included
    pub lines_emitted: usize,
    /// Progress bar lines kept verbatim (head and tail of a run)
    pub progress_kept: usize,
    /// Middle-range progress bar lines not written verbatim
    pub progress_collapsed: usize,
    /// Number of placeholders written
    pub collapsed_runs: usize,
}

/// Streaming progress bar filter.
///
/// Feed lines in file order with [`LineFilter::process`]; one instance covers
/// exactly one input.
#[derive(Debug, Default)]
pub struct LineFilter {
    state: FilterState,
    stats: FilterStats,
}

impl LineFilter {
    /// Create a filter in the `Normal` state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FilterState {
        self.state
    }

    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    /// Run one line through the detector and the state machine.
    pub fn process<'a>(&mut self, line: &'a str) -> Emit<'a> {
        let detected = detect(line);
        let (action, next) = decide(self.state, detected);

        self.stats.lines_read += 1;
        match action {
            Action::Pass => {
                if detected.is_match() {
                    self.stats.progress_kept += 1;
                }
                if self.state == FilterState::Collapsing {
                    trace!(line = self.stats.lines_read, "collapsed run ended");
                }
            }
            Action::Placeholder => {
                self.stats.progress_collapsed += 1;
                self.stats.collapsed_runs += 1;
                trace!(line = self.stats.lines_read, "collapsed run started");
            }
            Action::Suppress => self.stats.progress_collapsed += 1,
        }
        self.state = next;

        let emit = match action {
            Action::Pass => Emit::Verbatim(line),
            Action::Placeholder => Emit::Placeholder,
            Action::Suppress => Emit::Nothing,
        };
        if emit != Emit::Nothing {
            self.stats.lines_emitted += 1;
        }
        emit
    }
}

/// Filter a whole sequence of lines in memory.
pub fn filter_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filter = LineFilter::new();
    let mut output = Vec::new();
    for line in lines {
        if let Some(text) = filter.process(line.as_ref()).as_str() {
            output.push(text.to_string());
        }
    }
    output
}
