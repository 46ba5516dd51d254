//! Assertion helpers for report files.

use pretty_assertions::assert_eq;

/// Assert `text` is a well-formed report: label line plus `\tdb ...;` lines
/// of `row_len` hex literals each. Returns the parsed rows.
pub fn assert_report_shape(
    text: &str,
    label: &str,
    rows: usize,
    row_len: usize,
) -> Vec<Vec<String>> {
    assert!(text.ends_with('\n'), "Report should end with a newline: {text:?}");

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(label), "Unexpected label line");

    let parsed: Vec<Vec<String>> = lines
        .map(|line| {
            let body = line
                .strip_prefix("\tdb ")
                .and_then(|l| l.strip_suffix(';'))
                .unwrap_or_else(|| panic!("Malformed db line: {line:?}"));
            body.split(',').map(str::to_string).collect()
        })
        .collect();

    assert_eq!(parsed.len(), rows, "Unexpected number of db lines");
    for row in &parsed {
        assert_eq!(row.len(), row_len, "Unexpected row length in {row:?}");
        for lit in row {
            assert_hex_literal(lit);
        }
    }
    parsed
}

/// Assert `lit` is a lowercase `0xNN` literal
pub fn assert_hex_literal(lit: &str) {
    assert_eq!(lit.len(), 4, "Literal {lit:?} should be 4 characters");
    assert!(lit.starts_with("0x"), "Literal {lit:?} should start with 0x");
    assert!(
        lit[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Literal {lit:?} should be lowercase hex"
    );
}
