use crate::{error::Error, interpreter::line_index::SourceLineIndex};

/// How a diagnostic header is laid out.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderMode<'a> {
    /// `<ErrorKind> on column <c>: <message>`, for the interactive prompt
    /// where every input is a single line.
    Interactive,
    /// `<filename>:<line>:<col>: <ErrorKind>: <message>`, for file runs.
    File {
        /// The path of the script as given on the command line.
        path: &'a str,
    },
}

/// Renders `error` as a diagnostic.
///
/// The header follows `mode`. It is followed by the offending source line,
/// quoted verbatim through `lines`, and a caret under the failing column. Tabs
/// in the quoted line are repeated in the caret line so the caret stays
/// aligned. The result has no trailing newline.
///
/// # Parameters
/// - `error`: The error to render.
/// - `source`: The source text the error was raised for.
/// - `lines`: The line index built while scanning `source`.
/// - `mode`: The header layout.
///
/// # Example
/// ```
/// use moose::{
///     error::{RenderMode, render},
///     interpret_source,
/// };
///
/// let source = "(+ 2 $)";
/// let run = interpret_source(source);
/// let Err(error) = &run.result else { panic!("expected an error") };
///
/// assert_eq!(render(error, source, &run.lines, RenderMode::Interactive),
///            "LexError on column 6: unexpected character '$'\n(+ 2 $)\n     ^");
/// ```
#[must_use]
pub fn render(error: &Error, source: &str, lines: &SourceLineIndex, mode: RenderMode<'_>) -> String {
    let token = error.token();
    let mut rendered = match mode {
        RenderMode::Interactive => {
            format!("{} on column {}: {}", error.kind(), token.column, error.message())
        },
        RenderMode::File { path } => format!("{path}:{}:{}: {}: {}",
                                             token.line,
                                             token.column,
                                             error.kind(),
                                             error.message()),
    };

    if let Some(line) = lines.line(source, token.line) {
        rendered.push('\n');
        rendered.push_str(line);
        rendered.push('\n');
        rendered.push_str(&caret_line(line, token.column));
    }

    rendered
}

/// Builds the line that puts `^` under the 1-based `column` of `line`.
fn caret_line(line: &str, column: usize) -> String {
    let indent = column.saturating_sub(1);
    let mut caret: String = line.chars()
                                .chain(std::iter::repeat(' '))
                                .take(indent)
                                .map(|c| if c == '\t' { '\t' } else { ' ' })
                                .collect();
    caret.push('^');
    caret
}
