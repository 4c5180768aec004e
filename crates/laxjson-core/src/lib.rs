//! # laxjson-core
//!
//! Permissive JSON reader and inspection renderer.
//!
//! The parser is a recursive-descent reader that accepts sloppy input by
//! design: malformed documents degrade to default or partial trees instead
//! of failing, and the reason for the first degradation is reported on the
//! side. The companion renderer walks a tree back out as human-readable
//! indented lines.
//!
//! ## Quick start
//!
//! ```rust
//! use laxjson_core::{parse, render, Value};
//!
//! let parsed = parse(r#"{"name":"Alice","scores":[95,87]}"#);
//! assert!(parsed.outcome.is_clean());
//! assert_eq!(parsed.value.get("name"), Some(&Value::String("Alice".into())));
//!
//! let listing = render(&parsed.value);
//! assert!(listing.starts_with("Key: name\nValue: Alice\n"));
//! ```
//!
//! Truncated input still produces a tree; the outcome says what happened:
//!
//! ```rust
//! use laxjson_core::{parse, Malformation, Outcome};
//!
//! let parsed = parse(r#"{"x": "unterminated"#);
//! assert_eq!(parsed.outcome, Outcome::Malformed(Malformation::UnexpectedEnd));
//! assert_eq!(parsed.value.get("x").and_then(|v| v.as_str()), Some("unterminated"));
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: document text → [`Value`] tree plus [`Outcome`]
//! - [`render`]: [`Value`] tree → indented inspection listing
//! - [`value`]: the tagged tree type
//! - [`cursor`]: character cursor with one-step push-back
//! - [`error`]: degradation reason tags

pub mod cursor;
pub mod error;
pub mod parser;
pub mod render;
pub mod value;

pub use error::{Malformation, Outcome};
pub use parser::{parse, parse_with_limits, Limits, Parsed};
pub use render::render;
pub use value::Value;
