//! Degradation reporting for the permissive parser.
//!
//! The parser never fails: malformed input degrades to default or partial
//! values and the parse runs to completion. What *is* reported is the first
//! reason the input forced a degradation, so callers (and tests) can tell
//! which path was taken instead of inferring it from tree shape.

use thiserror::Error;

/// The first reason a parse had to degrade.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// Input ended inside an object, array, string, or literal.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// An object key did not start with a quote, or the key was unreadable.
    #[error("invalid object key")]
    InvalidKey,

    /// A `:` or `,`/closing bracket was expected and something else appeared.
    #[error("invalid delimiter")]
    InvalidDelimiter,

    /// A value token could not be read (unknown leading character, garbage
    /// literal, or an unconvertible number).
    #[error("invalid value")]
    InvalidValue,

    /// A container opened deeper than the configured nesting limit.
    #[error("nesting deeper than the configured limit")]
    NestingTooDeep,
}

/// How a parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The whole leading value was consumed without degradation.
    Clean,
    /// At least one degradation happened; this is the first.
    Malformed(Malformation),
}

impl Outcome {
    pub fn is_clean(&self) -> bool {
        matches!(self, Outcome::Clean)
    }
}
