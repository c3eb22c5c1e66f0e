#[inline]
pub fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

#[inline]
pub fn is_blank(line: &str) -> bool {
    strip_line_ending(line).trim().is_empty()
}

/// Splits one tab-separated row. Fields are kept verbatim (no trimming, no
/// quote handling) so that a value compares equal between train and test.
///
/// Trailing empty fields are dropped, so a row ending in a tab has the same
/// width as one that does not. Empty fields in the middle are kept.
pub fn split_tsv_fields(line: &str) -> Vec<String> {
    let mut fields: Vec<String> = strip_line_ending(line)
        .split('\t')
        .map(str::to_string)
        .collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    fields
}
