/// Returns the given 1-based line of `source`, without its line ending.
///
/// # Example
/// ```
/// use lispwalk::util::text::source_line;
///
/// assert_eq!(source_line("(a)\n(b)\r\n(c)", 2), Some("(b)"));
/// assert_eq!(source_line("(a)", 0), None);
/// assert_eq!(source_line("(a)", 2), None);
/// ```
#[must_use]
pub fn source_line(source: &str, line: usize) -> Option<&str> {
    line.checked_sub(1).and_then(|index| source.lines().nth(index))
}
