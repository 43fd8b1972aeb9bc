//! JSON lexer/tokenizer.
//!
//! Scans the input character by character and classifies each match into a
//! token carrying its literal source text. The lexer is context free: it
//! does not track whether it is inside a string, so punctuation and
//! literal-shaped substrings are classified the same way everywhere. The
//! parser reinterprets those tokens as raw text when they occur between
//! quote marks.
//!
//! Characters matched by no rule are dropped silently and scanning
//! continues; `next_token` never fails.

use std::fmt;

/// Token kinds produced by the lexer.
///
/// Every token other than [`Token::Eof`] can reproduce its literal source
/// text via [`Token::push_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Left brace `{`
    LeftBrace,
    /// Right brace `}`
    RightBrace,
    /// Left bracket `[`
    LeftBracket,
    /// Right bracket `]`
    RightBracket,
    /// Colon `:`
    Colon,
    /// Comma `,`
    Comma,
    /// Double quote `"`
    Quote,
    /// A lone backslash that does not begin a recognized escape sequence
    Backslash,
    /// A two-character escape (`\"` `\\` `\/` `\b` `\f` `\n` `\r` `\t`) or a
    /// six-character `\uXXXX` escape, captured as literal text
    Escape(String),
    /// Number literal with a mandatory fractional part
    Float(String),
    /// Number literal without a fractional part, optionally with an exponent
    Int(String),
    /// The `true` keyword, exact lowercase
    True,
    /// The `false` keyword, exact lowercase
    False,
    /// The `null` keyword, exact lowercase
    Null,
    /// Any single character not matched by another rule
    Char(char),
    /// End of input
    Eof,
}

impl Token {
    /// Append this token's literal source text to `out`.
    ///
    /// [`Token::Eof`] contributes nothing.
    pub fn push_text(&self, out: &mut String) {
        match self {
            Token::LeftBrace => out.push('{'),
            Token::RightBrace => out.push('}'),
            Token::LeftBracket => out.push('['),
            Token::RightBracket => out.push(']'),
            Token::Colon => out.push(':'),
            Token::Comma => out.push(','),
            Token::Quote => out.push('"'),
            Token::Backslash => out.push('\\'),
            Token::Escape(s) | Token::Float(s) | Token::Int(s) => out.push_str(s),
            Token::True => out.push_str("true"),
            Token::False => out.push_str("false"),
            Token::Null => out.push_str("null"),
            Token::Char(c) => out.push(*c),
            Token::Eof => {}
        }
    }

    /// The literal source text as an owned string.
    pub fn text(&self) -> String {
        let mut s = String::new();
        self.push_text(&mut s);
        s
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => f.write_str("end of input"),
            other => write!(f, "'{}'", other.text()),
        }
    }
}

/// Highest character matched by the generic character rule. Anything above
/// this is dropped by the lexer.
const MAX_GENERIC_CHAR: char = '\u{FFFD}';

/// Pull-based JSON lexer.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: u64,
}

impl Lexer {
    /// Create a new lexer for the given input.
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    /// The current line number, starting at 1. Bookkeeping only; line
    /// numbers are never surfaced in errors.
    pub fn line(&self) -> u64 {
        self.line
    }

    /// Read the next token, skipping whitespace and dropping characters
    /// matched by no rule.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else {
                return Token::Eof;
            };
            if let Some(token) = self.match_at(c) {
                return token;
            }
            // Unmatched character: drop it and keep scanning.
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Skip space, tab, and newline; newlines advance the line counter.
    /// Carriage return is not whitespace here and falls through to the
    /// generic character rule.
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' => self.pos += 1,
                '\n' => {
                    self.pos += 1;
                    self.line += 1;
                }
                _ => break,
            }
        }
    }

    /// Try every rule at the current position, in priority order. Returns
    /// `None` when nothing matches (the caller drops the character).
    fn match_at(&mut self, c: char) -> Option<Token> {
        match c {
            '{' => {
                self.pos += 1;
                Some(Token::LeftBrace)
            }
            '}' => {
                self.pos += 1;
                Some(Token::RightBrace)
            }
            '[' => {
                self.pos += 1;
                Some(Token::LeftBracket)
            }
            ']' => {
                self.pos += 1;
                Some(Token::RightBracket)
            }
            ':' => {
                self.pos += 1;
                Some(Token::Colon)
            }
            ',' => {
                self.pos += 1;
                Some(Token::Comma)
            }
            '"' => {
                self.pos += 1;
                Some(Token::Quote)
            }
            '\\' => Some(self.read_backslash()),
            '-' | '0'..='9' => self.read_number().or_else(|| self.read_generic(c)),
            't' | 'f' | 'n' => self.read_keyword().or_else(|| self.read_generic(c)),
            _ => self.read_generic(c),
        }
    }

    /// Read an escape token, or the lone backslash token when no escape
    /// form follows.
    fn read_backslash(&mut self) -> Token {
        match self.chars.get(self.pos + 1) {
            Some(&e) if matches!(e, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                self.pos += 2;
                Token::Escape(format!("\\{e}"))
            }
            Some('u') if self.hex4_follows() => {
                let text: String = self.chars[self.pos..self.pos + 6].iter().collect();
                self.pos += 6;
                Token::Escape(text)
            }
            _ => {
                self.pos += 1;
                Token::Backslash
            }
        }
    }

    /// Whether exactly four hex digits follow the `\u` at the current
    /// position.
    fn hex4_follows(&self) -> bool {
        let start = self.pos + 2;
        self.chars.len() >= start + 4
            && self.chars[start..start + 4]
                .iter()
                .all(|c| c.is_ascii_hexdigit())
    }

    /// Read a number token, trying the float pattern before the integer
    /// pattern. Returns `None` when neither matches (e.g. a lone `-`).
    fn read_number(&mut self) -> Option<Token> {
        let rest = &self.chars[self.pos..];
        if let Some(len) = match_float(rest) {
            let text: String = rest[..len].iter().collect();
            self.pos += len;
            return Some(Token::Float(text));
        }
        if let Some(len) = match_int(rest) {
            let text: String = rest[..len].iter().collect();
            self.pos += len;
            return Some(Token::Int(text));
        }
        None
    }

    /// Read a keyword token. Exact lowercase prefix match with no word
    /// boundary, so `truex` lexes as `true` followed by `x`.
    fn read_keyword(&mut self) -> Option<Token> {
        for (word, token) in [
            ("true", Token::True),
            ("false", Token::False),
            ("null", Token::Null),
        ] {
            if self.rest_starts_with(word) {
                self.pos += word.len();
                return Some(token);
            }
        }
        None
    }

    fn rest_starts_with(&self, word: &str) -> bool {
        let rest = &self.chars[self.pos..];
        rest.len() >= word.len() && word.chars().zip(rest.iter()).all(|(w, &c)| w == c)
    }

    /// The catch-all rule: any single character up to U+FFFD. Characters
    /// above that match nothing and get dropped by the caller.
    fn read_generic(&mut self, c: char) -> Option<Token> {
        if c > MAX_GENERIC_CHAR {
            return None;
        }
        self.pos += 1;
        Some(Token::Char(c))
    }
}

/// Match `-? (0 | [1-9][0-9]*) . [0-9]+ ([eE][+-]?[0-9]+)?` at the start of
/// `chars`, returning the match length. The fractional part is mandatory.
fn match_float(chars: &[char]) -> Option<usize> {
    let mut i = 0;
    if chars.first() == Some(&'-') {
        i += 1;
    }
    i += match_int_part(&chars[i..])?;
    if chars.get(i) != Some(&'.') {
        return None;
    }
    i += 1;
    let fraction = count_digits(&chars[i..]);
    if fraction == 0 {
        return None;
    }
    i += fraction;
    if let Some(n) = match_exponent(&chars[i..]) {
        i += n;
    }
    Some(i)
}

/// Match `-? (0 | [1-9][0-9]*) ([eE][+-]?[0-9]+)?` at the start of `chars`.
fn match_int(chars: &[char]) -> Option<usize> {
    let mut i = 0;
    if chars.first() == Some(&'-') {
        i += 1;
    }
    i += match_int_part(&chars[i..])?;
    if let Some(n) = match_exponent(&chars[i..]) {
        i += n;
    }
    Some(i)
}

/// The integer portion: a single `0`, or a nonzero digit followed by any
/// digits. Leading zeros never match, so `012` lexes as `0` then `12`.
fn match_int_part(chars: &[char]) -> Option<usize> {
    match chars.first()? {
        '0' => Some(1),
        '1'..='9' => Some(1 + count_digits(&chars[1..])),
        _ => None,
    }
}

/// A complete exponent suffix `[eE][+-]?[0-9]+`, or `None`. An `e` without
/// digits is left out of the number match entirely.
fn match_exponent(chars: &[char]) -> Option<usize> {
    if !matches!(chars.first(), Some('e' | 'E')) {
        return None;
    }
    let mut i = 1;
    if matches!(chars.get(i), Some('+' | '-')) {
        i += 1;
    }
    let digits = count_digits(&chars[i..]);
    if digits == 0 {
        return None;
    }
    Some(i + digits)
}

fn count_digits(chars: &[char]) -> usize {
    chars.iter().take_while(|c| c.is_ascii_digit()).count()
}
