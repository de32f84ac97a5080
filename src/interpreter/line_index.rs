/// Byte spans of every physical line in a scanned source string.
///
/// The scanner records one `(begin, end)` span per line as it passes each
/// newline and closes the last line at end of input, so a source ending in
/// `\n` has a final empty line. Spans exclude the newline itself. The index is
/// only used to quote source lines in diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLineIndex {
    spans: Vec<(usize, usize)>,
}

impl SourceLineIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Records the span of a completed line.
    pub(crate) fn push(&mut self, begin: usize, end: usize) {
        self.spans.push((begin, end));
    }

    /// Returns the recorded `(begin, end)` spans in line order.
    #[must_use]
    pub fn spans(&self) -> &[(usize, usize)] {
        &self.spans
    }

    /// Number of recorded lines.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if no line was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the text of the 1-based line `number` of `source`.
    ///
    /// `source` must be the string this index was built from. A trailing `\r`
    /// left by a `\r\n` line break is not part of the line. Returns `None`
    /// for line numbers outside the index.
    ///
    /// ## Example
    /// ```
    /// use moose::interpreter::lexer::scan;
    ///
    /// let source = "(+ 1\n   2)";
    /// let scan = scan(source);
    ///
    /// assert_eq!(scan.lines.line(source, 1), Some("(+ 1"));
    /// assert_eq!(scan.lines.line(source, 2), Some("   2)"));
    /// assert_eq!(scan.lines.line(source, 3), None);
    /// ```
    #[must_use]
    pub fn line<'s>(&self, source: &'s str, number: usize) -> Option<&'s str> {
        let (begin, end) = *self.spans.get(number.checked_sub(1)?)?;
        source.get(begin..end)
              .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}
