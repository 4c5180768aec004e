//! Recursive-descent reader, one method per grammar production.
//!
//! The reader is deliberately permissive: it consumes as much of the leading
//! value as it can and returns whatever tree that produced. Malformed input
//! truncates objects and arrays, degrades unreadable tokens to `Null`, and
//! records the first [`Malformation`] on the side; it never aborts.
//!
//! # Key design decisions
//!
//! - **First-fault recording**: only the first degradation is kept. Later
//!   faults are usually knock-on effects of the first (a truncated string
//!   cascades into delimiter faults), so the first tag is the useful one.
//! - **Null literal includes its seed**: the dispatch character `n` counts
//!   as the first of the four literal characters, so `null` inside arrays
//!   and objects consumes exactly its own token. A mismatched literal still
//!   yields `Null`: success and failure produce the same *value* and only
//!   the outcome channel tells them apart.
//! - **Empty keys are keys**: `""` is a representable object key. Only an
//!   *unterminated* key aborts the object, and that reports `UnexpectedEnd`.
//! - **Depth is bounded**: a container opening beyond `Limits::max_depth`
//!   is not entered, converting stack exhaustion on hostile input into a
//!   reported `NestingTooDeep`.

use crate::cursor::Cursor;
use crate::error::{Malformation, Outcome};
use crate::value::Value;

/// Resource bounds for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum container nesting depth before the reader refuses to recurse.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Result of a parse: the tree, and how cleanly it was produced.
///
/// `value` is always present: empty input, garbage input, and a literal
/// `null` document all yield `Value::Null`, and partial containers are
/// returned as far as they got. `outcome` is what distinguishes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    pub value: Value,
    pub outcome: Outcome,
}

impl Parsed {
    pub fn into_value(self) -> Value {
        self.value
    }
}

/// Parse the leading JSON value of `input` with default [`Limits`].
///
/// Trailing content after the first complete value is ignored.
pub fn parse(input: &str) -> Parsed {
    parse_with_limits(input, Limits::default())
}

/// Parse with caller-chosen [`Limits`].
pub fn parse_with_limits(input: &str, limits: Limits) -> Parsed {
    let mut parser = Parser {
        cursor: Cursor::new(input),
        limits,
        first_fault: None,
    };
    let value = parser.parse_value(0);
    let outcome = match parser.first_fault {
        None => Outcome::Clean,
        Some(fault) => Outcome::Malformed(fault),
    };
    Parsed { value, outcome }
}

struct Parser {
    cursor: Cursor,
    limits: Limits,
    first_fault: Option<Malformation>,
}

impl Parser {
    fn note(&mut self, fault: Malformation) {
        if self.first_fault.is_none() {
            self.first_fault = Some(fault);
        }
    }

    /// Dispatch on the first non-whitespace character.
    ///
    /// End of input yields `Null` with no fault: "no value here" is a
    /// legitimate answer, left to the caller to interpret. An unknown
    /// leading character also yields `Null`, but records `InvalidValue`.
    fn parse_value(&mut self, depth: usize) -> Value {
        self.cursor.skip_whitespace();
        let Some(ch) = self.cursor.next_char() else {
            return Value::Null;
        };
        match ch {
            '{' => {
                if depth >= self.limits.max_depth {
                    self.note(Malformation::NestingTooDeep);
                    Value::Null
                } else {
                    self.parse_object(depth)
                }
            }
            '[' => {
                if depth >= self.limits.max_depth {
                    self.note(Malformation::NestingTooDeep);
                    Value::Null
                } else {
                    self.parse_array(depth)
                }
            }
            '"' => self.parse_string(),
            '-' | '0'..='9' => self.parse_number(ch),
            't' | 'f' => self.parse_boolean(ch),
            'n' => self.parse_null(),
            _ => {
                self.note(Malformation::InvalidValue);
                Value::Null
            }
        }
    }

    /// Object loop: key, colon, value, delimiter. Any fault truncates the
    /// object and the pairs read so far are returned as-is.
    fn parse_object(&mut self, depth: usize) -> Value {
        let mut members: Vec<(String, Value)> = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            let Some(ch) = self.cursor.next_char() else {
                self.note(Malformation::UnexpectedEnd);
                break;
            };
            if ch == '}' {
                break;
            }
            if ch != '"' {
                self.note(Malformation::InvalidKey);
                break;
            }

            let (key, closed) = self.read_string_body();
            if !closed {
                self.note(Malformation::UnexpectedEnd);
                break;
            }

            self.cursor.skip_whitespace();
            match self.cursor.next_char() {
                None => {
                    self.note(Malformation::UnexpectedEnd);
                    break;
                }
                Some(':') => {}
                Some(_) => {
                    self.note(Malformation::InvalidDelimiter);
                    break;
                }
            }

            let value = self.parse_value(depth + 1);
            members.push((key, value));

            self.cursor.skip_whitespace();
            match self.cursor.next_char() {
                None => {
                    self.note(Malformation::UnexpectedEnd);
                    break;
                }
                Some('}') => break,
                Some(',') => {}
                Some(_) => {
                    self.note(Malformation::InvalidDelimiter);
                    break;
                }
            }
        }

        Value::Object(members)
    }

    /// Array loop. The closing-bracket probe is the one place the grammar
    /// needs push-back: a non-`]` character belongs to the next element.
    fn parse_array(&mut self, depth: usize) -> Value {
        let mut items: Vec<Value> = Vec::new();

        loop {
            self.cursor.skip_whitespace();
            let Some(ch) = self.cursor.next_char() else {
                self.note(Malformation::UnexpectedEnd);
                break;
            };
            if ch == ']' {
                break;
            }
            self.cursor.unget();

            items.push(self.parse_value(depth + 1));

            self.cursor.skip_whitespace();
            match self.cursor.next_char() {
                None => {
                    self.note(Malformation::UnexpectedEnd);
                    break;
                }
                Some(']') => break,
                Some(',') => {}
                Some(_) => {
                    self.note(Malformation::InvalidDelimiter);
                    break;
                }
            }
        }

        Value::Array(items)
    }

    fn parse_string(&mut self) -> Value {
        let (text, closed) = self.read_string_body();
        if !closed {
            self.note(Malformation::UnexpectedEnd);
        }
        Value::String(text)
    }

    /// Accumulate raw text up to the closing quote (consumed, not included).
    ///
    /// A backslash carries the following character through verbatim, so an
    /// escaped quote does not terminate the string, but no decoding happens;
    /// the payload keeps the backslash sequences exactly as written. Returns
    /// the text and whether a closing quote was actually found; on a `false`
    /// return the payload is everything up to end of input.
    fn read_string_body(&mut self) -> (String, bool) {
        let mut text = String::new();
        loop {
            match self.cursor.next_char() {
                None => return (text, false),
                Some('"') => return (text, true),
                Some('\\') => {
                    text.push('\\');
                    match self.cursor.next_char() {
                        None => return (text, false),
                        Some(escaped) => text.push(escaped),
                    }
                }
                Some(ch) => text.push(ch),
            }
        }
    }

    /// Lexical accumulation only: digits, `.`, `e`, `E`, `+`, `-` are all
    /// accepted, so `1.2.3` scans as one token. Conversion is all-or-nothing;
    /// an unconvertible token degrades to `0.0` with `InvalidValue`.
    fn parse_number(&mut self, seed: char) -> Value {
        let mut text = String::new();
        text.push(seed);
        while let Some(ch) = self.cursor.peek() {
            if ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-') {
                text.push(ch);
                self.cursor.next_char();
            } else {
                break;
            }
        }
        match text.parse::<f64>() {
            Ok(number) => Value::Number(number),
            Err(_) => {
                self.note(Malformation::InvalidValue);
                Value::Number(0.0)
            }
        }
    }

    /// Accumulate the seed plus subsequent lowercase letters. The payload is
    /// true iff the token is exactly `true`; any other token, including
    /// garbage like `tru` or `falsey`, is false, and a token that is
    /// neither literal records `InvalidValue`.
    fn parse_boolean(&mut self, seed: char) -> Value {
        let mut text = String::new();
        text.push(seed);
        while let Some(ch) = self.cursor.peek() {
            if ch.is_ascii_lowercase() {
                text.push(ch);
                self.cursor.next_char();
            } else {
                break;
            }
        }
        if text != "true" && text != "false" {
            self.note(Malformation::InvalidValue);
        }
        Value::Boolean(text == "true")
    }

    /// The seed `n` plus up to three more characters, compared to `null`.
    /// Match or mismatch, the value is `Null`; a mismatch or short read
    /// records `InvalidValue` so the two are distinguishable by outcome.
    fn parse_null(&mut self) -> Value {
        let mut text = String::from("n");
        for _ in 0..3 {
            match self.cursor.next_char() {
                Some(ch) => text.push(ch),
                None => break,
            }
        }
        if text != "null" {
            self.note(Malformation::InvalidValue);
        }
        Value::Null
    }
}
