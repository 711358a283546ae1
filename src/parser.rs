//! Recursive-descent GGON parser.
//!
//! Consumes the complete token sequence produced by [`crate::token`] and
//! builds a [`Value`] tree, one grammar production per call frame:
//!
//! ```text
//! value := STRING | map | list
//! map   := '{' '}' | '{' pair (',' pair)* '}'
//! pair  := STRING ':' value
//! list  := '[' ']' | '[' value (',' value)* ']'
//! ```
//!
//! `list` only exists when list syntax is enabled; the tokenizer never emits
//! bracket tokens otherwise. A list is returned in its list-convention map
//! form, so decoding `[a,b]` and `{length:2,0:a,1:b}` yields equal trees.
//!
//! Running out of tokens inside a production is always an explicit
//! [`Error::UnexpectedEof`]. Tokens left over after the top-level value are a
//! syntax error.

use crate::list::list_to_map;
use crate::token::{Token, TokenKind};
use crate::{Error, GgonMap, GgonOptions, Result, Value};
use std::collections::VecDeque;

/// Parser state over a tokenized document.
pub struct Parser {
    tokens: VecDeque<Token>,
    // Position reported when tokens run out
    end: (usize, usize),
    depth: usize,
    max_depth: usize,
}

impl Parser {
    /// Creates a parser over `tokens`. `end` is the line and column just past
    /// the input, used for end-of-input errors.
    pub fn new(tokens: Vec<Token>, end: (usize, usize), options: &GgonOptions) -> Self {
        Parser {
            tokens: tokens.into(),
            end,
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Parses exactly one value and requires the token sequence to be drained.
    pub fn parse_document(mut self) -> Result<Value> {
        let value = self.parse_value()?;
        match self.tokens.pop_front() {
            None => Ok(value),
            Some(token) => Err(Error::syntax(
                token.line,
                token.col,
                &format!("trailing token {} after document", token.kind.describe()),
            )),
        }
    }

    fn next_token(&mut self, expected: &str) -> Result<Token> {
        self.tokens
            .pop_front()
            .ok_or_else(|| Error::unexpected_eof(self.end.0, self.end.1, expected))
    }

    fn peek_kind(&self, expected: &str) -> Result<&TokenKind> {
        self.tokens
            .front()
            .map(|token| &token.kind)
            .ok_or_else(|| Error::unexpected_eof(self.end.0, self.end.1, expected))
    }

    fn enter(&mut self, line: usize, col: usize) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::syntax(
                line,
                col,
                &format!("nesting depth limit of {} exceeded", self.max_depth),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn parse_value(&mut self) -> Result<Value> {
        let token = self.next_token("value")?;
        match token.kind {
            TokenKind::String(s) => Ok(Value::String(s)),
            TokenKind::LeftBrace => {
                self.enter(token.line, token.col)?;
                let map = self.parse_map()?;
                self.depth -= 1;
                Ok(Value::Map(map))
            }
            TokenKind::LeftBracket => {
                self.enter(token.line, token.col)?;
                let items = self.parse_list()?;
                self.depth -= 1;
                Ok(list_to_map(items))
            }
            other => Err(Error::syntax(
                token.line,
                token.col,
                &format!("unexpected token {}", other.describe()),
            )),
        }
    }

    /// Parses the rest of a map after its opening brace.
    fn parse_map(&mut self) -> Result<GgonMap> {
        let mut map = GgonMap::new();

        let (closes, opens_pair) = match self.peek_kind("key or '}'")? {
            TokenKind::RightBrace => (true, false),
            TokenKind::String(_) => (false, true),
            _ => (false, false),
        };
        if closes {
            self.tokens.pop_front();
            return Ok(map);
        }
        if !opens_pair {
            let token = self.next_token("key or '}'")?;
            return Err(Error::syntax(
                token.line,
                token.col,
                &format!(
                    "unexpected token {} after opening brace",
                    token.kind.describe()
                ),
            ));
        }

        loop {
            let token = self.next_token("key")?;
            let key = match token.kind {
                TokenKind::String(key) => key,
                other => {
                    return Err(Error::syntax(
                        token.line,
                        token.col,
                        &format!("expected key, found {}", other.describe()),
                    ))
                }
            };

            let token = self.next_token("':'")?;
            if token.kind != TokenKind::Colon {
                return Err(Error::syntax(
                    token.line,
                    token.col,
                    &format!("unexpected token {} after key", token.kind.describe()),
                ));
            }

            let value = self.parse_value()?;
            map.insert(key, value);

            let token = self.next_token("',' or '}'")?;
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::RightBrace => return Ok(map),
                other => {
                    return Err(Error::syntax(
                        token.line,
                        token.col,
                        &format!("unexpected token {} after value", other.describe()),
                    ))
                }
            }
        }
    }

    /// Parses the rest of a list after its opening bracket.
    fn parse_list(&mut self) -> Result<Vec<Value>> {
        let mut items = Vec::new();

        if self.peek_kind("value or ']'")? == &TokenKind::RightBracket {
            self.tokens.pop_front();
            return Ok(items);
        }

        loop {
            items.push(self.parse_value()?);

            let token = self.next_token("',' or ']'")?;
            match token.kind {
                TokenKind::Comma => continue,
                TokenKind::RightBracket => return Ok(items),
                other => {
                    return Err(Error::syntax(
                        token.line,
                        token.col,
                        &format!("unexpected token {} after list item", other.describe()),
                    ))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{tokenize, Tokenizer};

    fn parse(input: &str, options: &GgonOptions) -> Result<Value> {
        let tokens = tokenize(input, options.list_syntax)?;
        Parser::new(tokens, Tokenizer::end_position(input), options).parse_document()
    }

    fn parse_minimal(input: &str) -> Result<Value> {
        parse(input, &GgonOptions::new())
    }

    #[test]
    fn test_string_document() {
        assert_eq!(parse_minimal("abc").unwrap(), Value::from("abc"));
        assert_eq!(parse_minimal("'{}'").unwrap(), Value::from("{}"));
    }

    #[test]
    fn test_empty_map() {
        assert_eq!(parse_minimal("{ }").unwrap(), Value::Map(GgonMap::new()));
    }

    #[test]
    fn test_nested_map() {
        let value = parse_minimal("{a:{b:{c:d}}}").unwrap();
        let c = value
            .get("a")
            .and_then(|v| v.get("b"))
            .and_then(|v| v.get("c"));
        assert_eq!(c, Some(&Value::from("d")));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let value = parse_minimal("{a:1,b:2,a:3}").unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::from("3")));
        assert_eq!(map.keys().next().map(String::as_str), Some("a"));
    }

    #[test]
    fn test_empty_input() {
        let err = parse_minimal("  \n").unwrap_err();
        assert_eq!(err, Error::unexpected_eof(2, 1, "value"));
    }

    #[test]
    fn test_truncated_map() {
        for input in ["{", "{a", "{a:", "{a:b", "{a:b,"] {
            let err = parse_minimal(input).unwrap_err();
            assert!(
                matches!(err, Error::UnexpectedEof { .. }),
                "{:?} gave {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_unexpected_after_opening_brace() {
        let err = parse_minimal("{:a}").unwrap_err();
        assert_eq!(
            err,
            Error::syntax(1, 2, "unexpected token ':' after opening brace")
        );
    }

    #[test]
    fn test_unexpected_after_key() {
        let err = parse_minimal("{a,b}").unwrap_err();
        assert_eq!(err, Error::syntax(1, 3, "unexpected token ',' after key"));
    }

    #[test]
    fn test_unexpected_after_value() {
        let err = parse_minimal("{a:b c}").unwrap_err();
        assert_eq!(
            err,
            Error::syntax(1, 6, "unexpected token string \"c\" after value")
        );
    }

    #[test]
    fn test_key_must_be_string() {
        let err = parse_minimal("{a:b,{}:c}").unwrap_err();
        assert_eq!(err, Error::syntax(1, 6, "expected key, found '{'"));
    }

    #[test]
    fn test_leading_punctuation() {
        let err = parse_minimal("}").unwrap_err();
        assert_eq!(err, Error::syntax(1, 1, "unexpected token '}'"));
    }

    #[test]
    fn test_trailing_tokens() {
        let err = parse_minimal("{} x").unwrap_err();
        assert_eq!(
            err,
            Error::syntax(1, 4, "trailing token string \"x\" after document")
        );
    }

    #[test]
    fn test_lists() {
        let options = GgonOptions::lists();
        assert_eq!(
            parse("[]", &options).unwrap(),
            list_to_map(Vec::new())
        );
        assert_eq!(
            parse("[a, b]", &options).unwrap(),
            parse_minimal("{length:2,0:a,1:b}").unwrap()
        );
        assert_eq!(
            parse("[[x],{k:v}]", &options).unwrap(),
            list_to_map(vec![
                list_to_map(vec![Value::from("x")]),
                parse_minimal("{k:v}").unwrap(),
            ])
        );
    }

    #[test]
    fn test_list_errors() {
        let options = GgonOptions::lists();
        assert!(matches!(
            parse("[a,", &options),
            Err(Error::UnexpectedEof { .. })
        ));
        assert_eq!(
            parse("[a:b]", &options).unwrap_err(),
            Error::syntax(1, 3, "unexpected token ':' after list item")
        );
        assert_eq!(
            parse("[a,]", &options).unwrap_err(),
            Error::syntax(1, 4, "unexpected token ']'")
        );
    }

    #[test]
    fn test_depth_limit() {
        let options = GgonOptions::new().with_max_depth(2);
        assert!(parse("{a:{b:c}}", &options).is_ok());
        let err = parse("{a:{b:{c:d}}}", &options).unwrap_err();
        assert_eq!(err, Error::syntax(1, 7, "nesting depth limit of 2 exceeded"));
    }

    #[test]
    fn test_deep_nesting_default_limit() {
        let depth = 1000;
        let input = format!("{}x{}", "{a:".repeat(depth), "}".repeat(depth));
        let err = parse_minimal(&input).unwrap_err();
        assert!(err.to_string().contains("nesting depth limit of 128 exceeded"));
    }
}
