//! GGON tokenizer.
//!
//! Turns raw text into a flat sequence of [`Token`]s in one left-to-right
//! pass. At each position the first matching rule wins:
//!
//! 1. `{ } : ,` (and `[ ]` when list syntax is on) become punctuation tokens
//! 2. space, tab, `\n` and `\r` are skipped
//! 3. a run of `[A-Za-z0-9_.+-]` becomes a bareword string token, verbatim
//! 4. `'...'` becomes a quoted string token with escapes decoded
//! 5. anything else is an error
//!
//! Bareword and quoted strings produce the same [`TokenKind::String`]; later
//! stages cannot tell them apart.

use crate::{Error, Result};

/// The kind of a token, with the decoded payload for strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A bareword or a quoted string, after escape decoding
    String(String),
}

impl TokenKind {
    /// Short human-readable form used in error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::LeftBrace => "'{'".to_string(),
            TokenKind::RightBrace => "'}'".to_string(),
            TokenKind::LeftBracket => "'['".to_string(),
            TokenKind::RightBracket => "']'".to_string(),
            TokenKind::Colon => "':'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::String(s) => format!("string {:?}", s),
        }
    }
}

/// A token and the 1-based line and column where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub col: usize,
}

/// Returns `true` for characters allowed in a bareword.
#[inline]
pub fn is_bareword_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '+' | '-')
}

/// Returns `true` if `s` can be written without quotes.
///
/// The empty string is never plain-safe: an empty bareword would be no token
/// at all.
#[inline]
pub fn is_plain_safe(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_bareword_char)
}

/// Tokenizes a complete GGON text.
///
/// # Errors
///
/// Returns [`Error::Syntax`] for unexpected characters and unknown escape
/// sequences, and [`Error::UnexpectedEof`] for an unterminated quoted string.
///
/// # Examples
///
/// ```rust
/// use serde_ggon::token::{tokenize, TokenKind};
///
/// let tokens = tokenize("{a:'b c'}", false).unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::LeftBrace,
///         TokenKind::String("a".to_string()),
///         TokenKind::Colon,
///         TokenKind::String("b c".to_string()),
///         TokenKind::RightBrace,
///     ]
/// );
/// ```
pub fn tokenize(input: &str, list_syntax: bool) -> Result<Vec<Token>> {
    Tokenizer::new(input, list_syntax).run()
}

/// Reads `bytes` as GGON text.
///
/// # Errors
///
/// Returns [`Error::Syntax`] at the first byte that is not valid UTF-8.
pub(crate) fn utf8_text(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        // The prefix is valid by construction
        let (line, col) = std::str::from_utf8(valid)
            .map(Tokenizer::end_position)
            .unwrap_or((1, 1));
        Error::syntax(line, col, "invalid UTF-8 sequence")
    })
}

/// Character cursor over the input.
pub(crate) struct Tokenizer<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    list_syntax: bool,
}

impl<'a> Tokenizer<'a> {
    pub(crate) fn new(input: &'a str, list_syntax: bool) -> Self {
        Tokenizer {
            input,
            position: 0,
            line: 1,
            column: 1,
            list_syntax,
        }
    }

    /// Line and column just past the last character, used for end-of-input errors.
    pub(crate) fn end_position(input: &str) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for ch in input.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn run(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek_char() {
            let (line, col) = (self.line, self.column);

            let punctuation = match ch {
                '{' => Some(TokenKind::LeftBrace),
                '}' => Some(TokenKind::RightBrace),
                ':' => Some(TokenKind::Colon),
                ',' => Some(TokenKind::Comma),
                '[' if self.list_syntax => Some(TokenKind::LeftBracket),
                ']' if self.list_syntax => Some(TokenKind::RightBracket),
                _ => None,
            };

            let kind = if let Some(kind) = punctuation {
                self.next_char();
                kind
            } else if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.next_char();
                continue;
            } else if is_bareword_char(ch) {
                TokenKind::String(self.read_bareword())
            } else if ch == '\'' {
                TokenKind::String(self.read_quoted()?)
            } else {
                return Err(Error::syntax(
                    line,
                    col,
                    &format!("unexpected character {:?}", ch),
                ));
            };

            tokens.push(Token { kind, line, col });
        }

        Ok(tokens)
    }

    fn read_bareword(&mut self) -> String {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if !is_bareword_char(ch) {
                break;
            }
            self.next_char();
        }
        self.input[start..self.position].to_string()
    }

    fn read_quoted(&mut self) -> Result<String> {
        self.next_char(); // opening quote
        let mut result = String::new();

        loop {
            let (line, col) = (self.line, self.column);
            match self.next_char() {
                Some('\'') => return Ok(result),
                Some('\\') => match self.next_char() {
                    Some('\'') => result.push('\''),
                    Some('\\') => result.push('\\'),
                    Some('n') => result.push('\n'),
                    Some('r') => result.push('\r'),
                    Some('t') => result.push('\t'),
                    Some('0') => result.push('\0'),
                    Some(other) => {
                        return Err(Error::syntax(
                            line,
                            col,
                            &format!("unknown escape sequence \"\\{}\"", other),
                        ))
                    }
                    None => break,
                },
                Some(other) => result.push(other),
                None => break,
            }
        }

        Err(Error::unexpected_eof(
            self.line,
            self.column,
            "closing \"'\" (unexpected end of text while parsing string)",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input, false)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn string(s: &str) -> TokenKind {
        TokenKind::String(s.to_string())
    }

    #[test]
    fn test_bareword() {
        assert_eq!(kinds("_.+-123abc"), vec![string("_.+-123abc")]);
        assert_eq!(kinds("  12.0\t-5\r\n+3 "), vec![string("12.0"), string("-5"), string("+3")]);
    }

    #[test]
    fn test_punctuation_splits_barewords() {
        assert_eq!(
            kinds("a:b,c"),
            vec![string("a"), TokenKind::Colon, string("b"), TokenKind::Comma, string("c")]
        );
    }

    #[test]
    fn test_escapes() {
        assert_eq!(
            kinds(r"'foo\n\r\t\0bar\\\''"),
            vec![string("foo\n\r\t\0bar\\'")]
        );
    }

    #[test]
    fn test_quoted_braces_are_strings() {
        assert_eq!(kinds("'{'"), vec![string("{")]);
        assert_eq!(kinds("''"), vec![string("")]);
    }

    #[test]
    fn test_quoted_keeps_raw_control_chars() {
        assert_eq!(kinds("'a\nb'"), vec![string("a\nb")]);
        assert_eq!(kinds("'caf\u{e9}'"), vec![string("caf\u{e9}")]);
    }

    #[test]
    fn test_unknown_escape() {
        let err = tokenize(r"'a\qb'", false).unwrap_err();
        assert_eq!(err, Error::syntax(1, 3, "unknown escape sequence \"\\q\""));
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("'abc", false).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { line: 1, col: 5, .. }));

        let err = tokenize("'abc\\", false).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { .. }));
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("{a:\"b\"}", false).unwrap_err();
        assert_eq!(err, Error::syntax(1, 4, "unexpected character '\"'"));
    }

    #[test]
    fn test_brackets_need_list_syntax() {
        assert!(tokenize("[a]", false).is_err());
        let tokens = tokenize("[a]", true).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::LeftBracket);
        assert_eq!(tokens[2].kind, TokenKind::RightBracket);
    }

    #[test]
    fn test_positions() {
        let tokens = tokenize("{\n  key: 'v'\n}", false).unwrap();
        let positions: Vec<_> = tokens.iter().map(|t| (t.line, t.col)).collect();
        assert_eq!(positions, vec![(1, 1), (2, 3), (2, 6), (2, 8), (3, 1)]);
    }

    #[test]
    fn test_plain_safe() {
        assert!(is_plain_safe("abc_12.+-"));
        assert!(!is_plain_safe(""));
        assert!(!is_plain_safe("a b"));
        assert!(!is_plain_safe("caf\u{e9}"));
    }

    #[test]
    fn test_utf8_text() {
        assert_eq!(utf8_text("caf\u{e9}".as_bytes()).unwrap(), "caf\u{e9}");
        assert_eq!(
            utf8_text(b"{a:\n'\xc3'}").unwrap_err(),
            Error::syntax(2, 2, "invalid UTF-8 sequence")
        );
    }

    #[test]
    fn test_end_position() {
        assert_eq!(Tokenizer::end_position(""), (1, 1));
        assert_eq!(Tokenizer::end_position("{a:"), (1, 4));
        assert_eq!(Tokenizer::end_position("{\nab"), (2, 3));
    }
}
