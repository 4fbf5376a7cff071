use std::fmt;

/// Result type returned by WKT parsing.
pub type WktResult<T> = Result<T, WktError>;

/// Number of characters shown on either side of the error position when
/// quoting the offending line.
const SNIPPET_CONTEXT: usize = 30;

/// An error produced while scanning or parsing a WKT string.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum WktError {
    /// The input could not be tokenized.
    #[error(transparent)]
    Lex(SyntaxError),
    /// The token stream did not form a valid geometry.
    #[error(transparent)]
    Parse(SyntaxError),
    /// A parsed geometry could not be assembled into the flat model.
    #[error(transparent)]
    Geom(#[from] flatgeom::GeomError),
}

/// A syntax error with enough context to quote the offending line and
/// point a caret at the exact position.
///
/// `line` is 1-based and `pos` is a 0-based character offset within that
/// line, matching the `at line {l}, pos {p}` convention of the rendered
/// message.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxError {
    pub(crate) message: String,
    pub(crate) line: usize,
    pub(crate) pos: usize,
    pub(crate) line_text: String,
    pub(crate) hint: Option<String>,
}

impl SyntaxError {
    pub(crate) fn new(message: impl Into<String>, line: usize, pos: usize, line_text: &str) -> Self {
        SyntaxError {
            message: message.into(),
            line,
            pos,
            line_text: line_text.to_owned(),
            hint: None,
        }
    }

    pub(crate) fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl std::error::Error for SyntaxError {}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "syntax error: {} at line {}, pos {}",
            self.message, self.line, self.pos
        )?;

        // Tabs would throw off the caret column, so render them as spaces.
        let chars: Vec<char> = self
            .line_text
            .chars()
            .map(|c| if c == '\t' { ' ' } else { c })
            .collect();

        let (start, truncated_front) = if self.pos > SNIPPET_CONTEXT {
            (self.pos - SNIPPET_CONTEXT, true)
        } else {
            (0, false)
        };
        let end = (self.pos + SNIPPET_CONTEXT).min(chars.len());
        let truncated_rear = chars.len() > self.pos + SNIPPET_CONTEXT;

        let prefix = format!("LINE {}: ", self.line);
        let snippet: String = chars[start..end].iter().collect();
        write!(f, "{prefix}")?;
        if truncated_front {
            write!(f, "...")?;
        }
        write!(f, "{snippet}")?;
        if truncated_rear {
            write!(f, "...")?;
        }
        writeln!(f)?;

        let indent = prefix.len() + if truncated_front { 3 } else { 0 } + (self.pos - start);
        write!(f, "{}^", " ".repeat(indent))?;

        if let Some(hint) = &self.hint {
            write!(f, "\nHINT: {hint}")?;
        }
        Ok(())
    }
}
