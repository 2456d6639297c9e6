//! Library-level tests for the progress filter

use std::io::Cursor;

use progtrim::{detect, filter_lines, filter_reader, LineFilter, ProgressMatch, PLACEHOLDER};

fn bar(percent: u32) -> String {
    format!("{percent:3}%|##        | {percent}/100 [00:02<00:08, 12.3it/s]")
}

// ============================================================================
// Passthrough Tests
// ============================================================================

#[test]
fn plain_lines_pass_through_in_order() {
    let input: Vec<String> = (0..50)
        .map(|i| format!("[INFO] step {i} finished in 0.{i}s"))
        .collect();

    assert_eq!(filter_lines(&input), input);
}

#[test]
fn boundary_bars_pass_through() {
    let input: Vec<String> = (0..=10).chain(90..=100).map(bar).collect();

    assert_eq!(filter_lines(&input), input);
}

// ============================================================================
// Collapse Run Tests
// ============================================================================

#[test]
fn every_middle_run_gets_exactly_one_placeholder() {
    let mut input = Vec::new();
    for epoch in 0..3 {
        input.push(format!("epoch {epoch}"));
        input.extend((0..=100).map(bar));
    }

    let output = filter_lines(&input);

    let placeholders = output.iter().filter(|l| *l == PLACEHOLDER).count();
    assert_eq!(placeholders, 3);
    // 11 head bars + placeholder + 11 tail bars + epoch line, per epoch
    assert_eq!(output.len(), 3 * 24);
}

#[test]
fn placeholder_sits_where_run_starts() {
    let input = vec![bar(10), bar(11), bar(12), bar(89), bar(90)];
    let output = filter_lines(&input);

    assert_eq!(
        output,
        vec![bar(10), PLACEHOLDER.to_string(), bar(90)]
    );
}

#[test]
fn seconds_per_iteration_bars_collapse_too() {
    let input = [
        "eval:  20%|##        | 1/5 [00:03<00:12,  3.10s/it]",
        "eval:  40%|####      | 2/5 [00:06<00:09,  3.10s/it]",
    ];

    assert_eq!(filter_lines(input), vec![PLACEHOLDER]);
}

#[test]
fn reused_filter_keeps_state_between_calls() {
    let mut filter = LineFilter::new();

    assert_eq!(filter.process(&bar(30)).as_str(), Some(PLACEHOLDER));
    assert_eq!(filter.process(&bar(31)).as_str(), None);
    assert_eq!(filter.process("note").as_str(), Some("note"));
    assert_eq!(filter.process(&bar(32)).as_str(), Some(PLACEHOLDER));
    assert_eq!(filter.stats().collapsed_runs, 2);
}

// ============================================================================
// Detector Tests
// ============================================================================

#[test]
fn detection_is_a_pure_function_of_the_line() {
    for line in [bar(0), bar(55), "plain".to_string(), "7%| [x]".to_string()] {
        assert_eq!(detect(&line), detect(&line));
    }
}

#[test]
fn detector_reports_percent() {
    assert_eq!(detect(&bar(64)), ProgressMatch::Match { percent: 64 });
    assert_eq!(detect("64% done [1it/s]"), ProgressMatch::NoMatch);
}

// ============================================================================
// Reader Tests
// ============================================================================

#[test]
fn reader_output_ends_every_line_with_newline() {
    let mut out = Vec::new();
    let stats = filter_reader(Cursor::new("a\r\nb\rc"), &mut out).unwrap();

    assert_eq!(out, b"a\nb\nc\n");
    assert_eq!(stats.lines_read, 3);
    assert_eq!(stats.lines_emitted, 3);
}
