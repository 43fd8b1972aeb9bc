//! JSON grammar parser.
//!
//! Recursive descent over the token stream with one token of lookahead.
//! The grammar's start symbol is the top-level object; a document reduces
//! to exactly one object followed by end of input, and anything else fails.
//!
//! Because the lexer is context free, tokens for punctuation, numbers, and
//! keywords double as raw text when they occur between quote marks; the
//! `string` production here accepts that broad token set and concatenates
//! each token's literal text.

use std::collections::BTreeMap;

use super::lexer::{Lexer, Token};
use super::types::{Number, Value};
use crate::error::{ParseError, ParseResult};

/// JSON parser over a lexer's token stream.
pub struct Parser {
    lexer: Lexer,
    current: Token,
}

impl Parser {
    /// Create a new parser for the given input.
    pub fn new(input: &str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self { lexer, current }
    }

    /// Parse the input as a complete document: one object, then end of
    /// input.
    pub fn parse(&mut self) -> ParseResult<Value> {
        let value = self.parse_object()?;

        if self.current != Token::Eof {
            return Err(ParseError::TrailingContent {
                found: self.current.to_string(),
            });
        }

        Ok(value)
    }

    /// Advance to the next token.
    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.current.to_string(),
        }
    }

    /// Parse a JSON object.
    fn parse_object(&mut self) -> ParseResult<Value> {
        if self.current != Token::LeftBrace {
            return Err(self.unexpected("'{'"));
        }
        self.advance();

        let mut map = BTreeMap::new();

        // Empty object
        if self.current == Token::RightBrace {
            self.advance();
            return Ok(Value::Object(map));
        }

        loop {
            let key = self.parse_string()?;

            if self.current != Token::Colon {
                return Err(self.unexpected("':'"));
            }
            self.advance();

            let value = self.parse_value()?;
            // A repeated key keeps the later value.
            map.insert(key, value);

            match &self.current {
                Token::Comma => {
                    self.advance();
                    // Trailing comma is not allowed in JSON
                    if self.current == Token::RightBrace {
                        return Err(self.unexpected("member"));
                    }
                }
                Token::RightBrace => {
                    self.advance();
                    break;
                }
                _ => return Err(self.unexpected("',' or '}'")),
            }
        }

        Ok(Value::Object(map))
    }

    /// Parse a JSON array.
    fn parse_array(&mut self) -> ParseResult<Value> {
        // Consume opening bracket
        self.advance();

        let mut arr = Vec::new();

        // Empty array
        if self.current == Token::RightBracket {
            self.advance();
            return Ok(Value::Array(arr));
        }

        loop {
            let value = self.parse_value()?;
            arr.push(value);

            match &self.current {
                Token::Comma => {
                    self.advance();
                    // Trailing comma is not allowed in JSON
                    if self.current == Token::RightBracket {
                        return Err(self.unexpected("value"));
                    }
                }
                Token::RightBracket => {
                    self.advance();
                    break;
                }
                _ => return Err(self.unexpected("',' or ']'")),
            }
        }

        Ok(Value::Array(arr))
    }

    /// Parse a single JSON value.
    fn parse_value(&mut self) -> ParseResult<Value> {
        match &self.current {
            Token::Quote => Ok(Value::String(self.parse_string()?)),
            Token::Int(_) | Token::Float(_) => self.parse_number(),
            Token::LeftBrace => self.parse_object(),
            Token::LeftBracket => self.parse_array(),
            Token::True => {
                self.advance();
                Ok(Value::Bool(true))
            }
            Token::False => {
                self.advance();
                Ok(Value::Bool(false))
            }
            Token::Null => {
                self.advance();
                Ok(Value::Null)
            }
            _ => Err(self.unexpected("value")),
        }
    }

    /// Parse a string: a quote, any run of non-quote tokens contributing
    /// their literal text, and a closing quote.
    ///
    /// Escape tokens contribute their literal escape text; nothing is
    /// decoded. A lone backslash token is the tokenizer's signal for a
    /// malformed escape, and end of input means the string never closed.
    fn parse_string(&mut self) -> ParseResult<String> {
        if self.current != Token::Quote {
            return Err(self.unexpected("'\"'"));
        }
        self.advance();

        let mut text = String::new();
        loop {
            match &self.current {
                Token::Quote => {
                    self.advance();
                    return Ok(text);
                }
                Token::Eof => return Err(ParseError::UnterminatedString),
                Token::Backslash => return Err(ParseError::MalformedEscape),
                token => {
                    token.push_text(&mut text);
                    self.advance();
                }
            }
        }
    }

    /// Parse a number token into a value.
    ///
    /// Two adjacent number tokens are one malformed literal: the lexer
    /// splits leading-zero numbers such as `012` into `0` and `12`, which
    /// no grammar position accepts side by side.
    fn parse_number(&mut self) -> ParseResult<Value> {
        let number = match &self.current {
            Token::Float(text) => Number::Float(parse_float_literal(text)?),
            Token::Int(text) => Number::Int(parse_int_literal(text)?),
            _ => return Err(self.unexpected("number")),
        };
        self.advance();

        if matches!(self.current, Token::Int(_) | Token::Float(_)) {
            return Err(ParseError::MalformedNumber {
                literal: self.current.text(),
            });
        }

        Ok(Value::Number(number))
    }
}

fn parse_float_literal(text: &str) -> ParseResult<f64> {
    text.parse::<f64>().map_err(|_| ParseError::MalformedNumber {
        literal: text.to_string(),
    })
}

/// Convert an integer literal's text to an `i64`.
///
/// Literals carrying an exponent go through a floating-point intermediate
/// and truncate, losing precision once the magnitude exceeds exact integer
/// representation. Literals too large for `i64` take the same path and
/// saturate rather than fail.
fn parse_int_literal(text: &str) -> ParseResult<i64> {
    let malformed = || ParseError::MalformedNumber {
        literal: text.to_string(),
    };

    if text.contains(|c| c == 'e' || c == 'E') {
        let magnitude: f64 = text.parse().map_err(|_| malformed())?;
        return Ok(magnitude as i64);
    }

    match text.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) => {
            let magnitude: f64 = text.parse().map_err(|_| malformed())?;
            Ok(magnitude as i64)
        }
    }
}

/// Parse a complete JSON document into a [`Value`].
///
/// The document must reduce to a single top-level object with nothing after
/// it. The whole input is consumed in one call; there is no incremental
/// feeding, and no partial result exists on failure.
pub fn parse(input: &str) -> ParseResult<Value> {
    let mut parser = Parser::new(input);
    parser.parse()
}
