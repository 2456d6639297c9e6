//! Progress bar detection.
//!
//! A tqdm-style bar looks like ` 42%|████▏     | 42/100 [00:08<00:11, 5.01it/s]`.
//! A line counts as a bar when it has a run of digits immediately followed by
//! `%|` and also carries a rate suffix (`it/s]` or `s/it]`) somewhere on the line.
//!
//! Matching is a plain byte scan over the line, no regex. Only ASCII digits
//! count towards the percentage.

/// Rate suffixes tqdm prints inside the trailing brackets.
const RATE_SUFFIXES: &[&str] = &["it/s]", "s/it]"];

/// Marker that terminates the percentage field.
const PERCENT_BAR: &[u8] = b"%|";

/// Outcome of running the detector over a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMatch {
    /// Ordinary log text.
    NoMatch,
    /// A progress bar line showing `percent`.
    ///
    /// The value is not range checked; malformed bars may report more than 100.
    Match { percent: u32 },
}

impl ProgressMatch {
    /// The detected percentage, if this is a progress bar line.
    pub fn percent(self) -> Option<u32> {
        match self {
            Self::Match { percent } => Some(percent),
            Self::NoMatch => None,
        }
    }

    pub fn is_match(self) -> bool {
        matches!(self, Self::Match { .. })
    }
}

/// Classify `line` as a progress bar or ordinary text.
///
/// When several `NN%|` fields appear, the leftmost one wins.
pub fn detect(line: &str) -> ProgressMatch {
    if !RATE_SUFFIXES.iter().any(|suffix| line.contains(suffix)) {
        return ProgressMatch::NoMatch;
    }

    match first_percent(line.as_bytes()) {
        Some(percent) => ProgressMatch::Match { percent },
        None => ProgressMatch::NoMatch,
    }
}

/// Find the leftmost digit run directly followed by `%|` and parse it.
fn first_percent(bytes: &[u8]) -> Option<u32> {
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        if bytes[i..].starts_with(PERCENT_BAR) {
            return Some(parse_digits(&bytes[start..i]));
        }
    }
    None
}

/// Parse ASCII digits, saturating at `u32::MAX` instead of overflowing.
fn parse_digits(digits: &[u8]) -> u32 {
    digits.iter().fold(0u32, |acc, &d| {
        acc.saturating_mul(10).saturating_add(u32::from(d - b'0'))
    })
}
