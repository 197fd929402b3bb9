//! Grouping transform harness.
//!
//! # What this covers
//!
//! - **Tag extraction** across well-formed, partial, and bracket-free lines
//!   (parameterized with `rstest`).
//! - **Documented grouping behavior**: separator placement for tag changes,
//!   the leading separator before the first group, and untagged lines
//!   leaving the current group open.
//! - **Properties** (`proptest`): every input line survives grouping
//!   unmodified and in order, and output is always newline-terminated.
//!
//! # Running
//!
//! ```sh
//! cargo test --test group_harness
//! ```

use maillog_core::group::{extract_tag, group};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Tag extraction
// ---------------------------------------------------------------------------

#[rstest]
#[case("10:00 INFO [com.example.App] hi", Some("[com.example.App]"))]
#[case("[A] x", Some("[A]"))]
#[case("[A] then [B]", Some("[A]"))]
#[case("a [B] c ] d", Some("[B]"))]
#[case("[] empty tag", Some("[]"))]
#[case("no brackets", None)]
#[case("open [ only", None)]
#[case("close ] only", None)]
#[case("] before [", None)]
#[case("", None)]
fn tag_extraction(#[case] line: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_tag(line), expected);
}

// ---------------------------------------------------------------------------
// Grouping behavior
// ---------------------------------------------------------------------------

#[test]
fn grouping_matches_the_documented_example() {
    let out = group(["[A] x", "[A] y", "[B] z", "[A] w"]);

    // 3 separators, 4 content lines, 7 lines total. The first group gets a
    // leading separator because there is no previous tag to match.
    assert_eq!(out.lines().filter(|l| l.is_empty()).count(), 3);
    assert_eq!(out.lines().count(), 7);
    assert_eq!(out, "\n[A] x\n[A] y\n\n[B] z\n\n[A] w\n");
}

#[test]
fn untagged_lines_leave_the_group_open() {
    let out = group(["[A] x", "no tag here", "[A] y"]);

    // "no tag here" neither gets a separator nor resets the tag state, so
    // the trailing "[A] y" continues the first group.
    assert_eq!(out.lines().filter(|l| l.is_empty()).count(), 1);
    assert_eq!(out, "\n[A] x\nno tag here\n[A] y\n");
}

#[test]
fn untagged_only_input_passes_through_unchanged() {
    let out = group(["one", "two", "three"]);
    assert_eq!(out, "one\ntwo\nthree\n");
}

#[test]
fn alternating_tags_separate_every_line() {
    let out = group(["[A] 1", "[B] 2", "[A] 3", "[B] 4"]);
    assert_eq!(out, "\n[A] 1\n\n[B] 2\n\n[A] 3\n\n[B] 4\n");
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// Non-separator output lines equal the input lines, order preserved.
    #[test]
    fn grouping_preserves_content(lines in proptest::collection::vec("[ -~]{1,60}", 0..64)) {
        let out = group(lines.iter().map(String::as_str));
        let content: Vec<&str> = out.lines().filter(|l| !l.is_empty()).collect();
        let expected: Vec<&str> = lines.iter().map(String::as_str).collect();
        prop_assert_eq!(content, expected);
    }

    /// Grouped output of non-empty input always ends with a newline.
    #[test]
    fn output_is_newline_terminated(lines in proptest::collection::vec("[ -~]{1,60}", 1..32)) {
        let out = group(lines.iter().map(String::as_str));
        prop_assert!(out.ends_with('\n'));
    }
}
