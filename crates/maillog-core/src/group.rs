//! Grouping transform applied to exported logs.
//!
//! Consecutive lines sharing a bracketed category tag form a group; a blank
//! separator line is inserted whenever the tag changes, which makes long
//! exports far easier to scan by eye. The transform is pure text-to-text and
//! performs no I/O.

/// Extract the bracketed tag from a formatted log line.
///
/// The tag is the substring from the first `[` through the first `]` that
/// follows it, brackets included. A line without both brackets has no tag;
/// that is a normal outcome, not an error.
pub fn extract_tag(line: &str) -> Option<&str> {
    let start = line.find('[')?;
    let end = start + line[start..].find(']')?;
    Some(&line[start..=end])
}

/// Insert a blank separator line between runs of differently-tagged lines.
///
/// Every input line is preserved in order and newline-terminated, separators
/// included. A line without a tag neither receives a separator nor changes
/// the current group, so a tagged line following untagged noise only opens a
/// new group when its tag differs from the last tagged line seen. The first
/// tagged line always opens a group, so grouped output begins with a blank
/// line.
pub fn group<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    let mut last_tag: Option<&str> = None;

    for line in lines {
        if let Some(tag) = extract_tag(line) {
            if last_tag != Some(tag) {
                last_tag = Some(tag);
                out.push('\n');
            }
        }
        out.push_str(line);
        out.push('\n');
    }

    out
}
