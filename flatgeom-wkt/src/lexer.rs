use crate::error::{SyntaxError, WktError, WktResult};
use crate::token::{lookup_tag, Suffix, Token, TokenKind};

/// Hand-built scanner over a WKT source string.
///
/// Tracks line/column positions so both lexing and parsing errors can quote
/// the offending line. Standalone `Z`/`M`/`ZM` words are only keywords when
/// they directly follow an unsuffixed geometry tag; anywhere else they are
/// rejected like any other unknown word.
pub(crate) struct Lexer {
    lines: Vec<Vec<char>>,
    line_idx: usize,
    col: usize,
    after_bare_tag: bool,
}

impl Lexer {
    pub(crate) fn new(input: &str) -> Self {
        let lines = input
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).chars().collect())
            .collect();
        Lexer {
            lines,
            line_idx: 0,
            col: 0,
            after_bare_tag: false,
        }
    }

    /// The source text of a 1-based line, for error rendering.
    pub(crate) fn line_text(&self, line: usize) -> String {
        self.lines
            .get(line - 1)
            .map(|l| l.iter().collect())
            .unwrap_or_default()
    }

    fn error(&self, message: &str, line: usize, pos: usize) -> WktError {
        WktError::Lex(SyntaxError::new(message, line, pos, &self.line_text(line)))
    }

    fn peek_char(&self) -> Option<char> {
        self.lines.get(self.line_idx)?.get(self.col).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(line) = self.lines.get(self.line_idx) {
            match line.get(self.col) {
                Some(' ') | Some('\t') => self.col += 1,
                Some(_) => return,
                None => {
                    self.line_idx += 1;
                    self.col = 0;
                }
            }
        }
    }

    pub(crate) fn next_token(&mut self) -> WktResult<Token> {
        self.skip_whitespace();

        let Some(c) = self.peek_char() else {
            // Report end of input at the end of the last line.
            let line = self.lines.len();
            let pos = self.lines.last().map_or(0, |l| l.len());
            return Ok(Token {
                kind: TokenKind::Eof,
                line,
                pos,
            });
        };

        let line = self.line_idx + 1;
        let pos = self.col;
        let kind = match c {
            '(' => {
                self.col += 1;
                self.after_bare_tag = false;
                TokenKind::LParen
            }
            ')' => {
                self.col += 1;
                self.after_bare_tag = false;
                TokenKind::RParen
            }
            ',' => {
                self.col += 1;
                self.after_bare_tag = false;
                TokenKind::Comma
            }
            c if c.is_ascii_alphabetic() => self.scan_word(line, pos)?,
            c if c.is_ascii_digit() || c == '.' || c == '-' => self.scan_number(line, pos)?,
            _ => return Err(self.error("invalid character", line, pos)),
        };
        Ok(Token { kind, line, pos })
    }

    fn scan_word(&mut self, line: usize, pos: usize) -> WktResult<TokenKind> {
        let chars = &self.lines[self.line_idx];
        let mut word = String::new();
        while let Some(c) = chars.get(self.col) {
            if !c.is_ascii_alphabetic() {
                break;
            }
            word.push(c.to_ascii_uppercase());
            self.col += 1;
        }

        if word == "EMPTY" {
            self.after_bare_tag = false;
            return Ok(TokenKind::Empty);
        }
        if let Some((kind, suffix)) = lookup_tag(&word) {
            self.after_bare_tag = suffix.is_none();
            return Ok(TokenKind::Tag { kind, suffix });
        }
        let standalone = match word.as_str() {
            "Z" => Some(Suffix::Z),
            "M" => Some(Suffix::M),
            "ZM" => Some(Suffix::Zm),
            _ => None,
        };
        match standalone {
            Some(suffix) if self.after_bare_tag => {
                self.after_bare_tag = false;
                Ok(TokenKind::Suffix(suffix))
            }
            _ => Err(self.error("invalid keyword", line, pos)),
        }
    }

    fn scan_number(&mut self, line: usize, pos: usize) -> WktResult<TokenKind> {
        self.after_bare_tag = false;
        let chars = &self.lines[self.line_idx];
        let start = self.col;
        if chars.get(self.col) == Some(&'-') {
            self.col += 1;
        }
        while matches!(chars.get(self.col), Some(c) if c.is_ascii_digit() || *c == '.') {
            self.col += 1;
        }
        if matches!(chars.get(self.col), Some('e') | Some('E')) {
            self.col += 1;
            if matches!(chars.get(self.col), Some('+') | Some('-')) {
                self.col += 1;
            }
            while matches!(chars.get(self.col), Some(c) if c.is_ascii_digit() || *c == '.') {
                self.col += 1;
            }
        }
        let text: String = chars[start..self.col].iter().collect();
        match text.parse::<f64>() {
            Ok(v) => Ok(TokenKind::Num(v)),
            Err(_) => Err(self.error("invalid number", line, pos)),
        }
    }
}
