//! One test per degradation reason: every `Malformation` tag must be
//! reachable and assertable, so callers can rely on the outcome channel
//! instead of inferring what happened from tree shape.

use laxjson_core::{parse, parse_with_limits, Limits, Malformation, Outcome, Value};

fn reason(input: &str) -> Option<Malformation> {
    match parse(input).outcome {
        Outcome::Clean => None,
        Outcome::Malformed(m) => Some(m),
    }
}

// ============================================================================
// UnexpectedEnd
// ============================================================================

#[test]
fn eof_inside_object_reports_unexpected_end() {
    assert_eq!(reason("{"), Some(Malformation::UnexpectedEnd));
    assert_eq!(reason(r#"{"a":1,"#), Some(Malformation::UnexpectedEnd));
}

#[test]
fn eof_inside_array_reports_unexpected_end() {
    assert_eq!(reason("["), Some(Malformation::UnexpectedEnd));
    assert_eq!(reason("[1,"), Some(Malformation::UnexpectedEnd));
}

#[test]
fn unterminated_bare_string_reports_unexpected_end() {
    let parsed = parse(r#""runs off the end"#);
    assert_eq!(parsed.value, Value::String("runs off the end".into()));
    assert_eq!(
        parsed.outcome,
        Outcome::Malformed(Malformation::UnexpectedEnd)
    );
}

#[test]
fn unterminated_key_reports_unexpected_end() {
    // The key itself runs to end of input; the object comes back empty.
    let parsed = parse(r#"{"dangling"#);
    assert_eq!(parsed.value, Value::Object(vec![]));
    assert_eq!(
        parsed.outcome,
        Outcome::Malformed(Malformation::UnexpectedEnd)
    );
}

#[test]
fn eof_after_key_reports_unexpected_end() {
    assert_eq!(reason(r#"{"a""#), Some(Malformation::UnexpectedEnd));
}

// ============================================================================
// InvalidKey
// ============================================================================

#[test]
fn unquoted_key_reports_invalid_key() {
    assert_eq!(reason("{a: 1}"), Some(Malformation::InvalidKey));
    assert_eq!(reason("{true: 1}"), Some(Malformation::InvalidKey));
    assert_eq!(reason("{1: 1}"), Some(Malformation::InvalidKey));
}

// ============================================================================
// InvalidDelimiter
// ============================================================================

#[test]
fn missing_colon_reports_invalid_delimiter() {
    assert_eq!(reason(r#"{"a" 1}"#), Some(Malformation::InvalidDelimiter));
}

#[test]
fn semicolon_between_pairs_reports_invalid_delimiter() {
    assert_eq!(reason(r#"{"a":1;"b":2}"#), Some(Malformation::InvalidDelimiter));
}

#[test]
fn missing_comma_between_items_reports_invalid_delimiter() {
    assert_eq!(reason("[1 2]"), Some(Malformation::InvalidDelimiter));
}

// ============================================================================
// InvalidValue
// ============================================================================

#[test]
fn unknown_leading_character_reports_invalid_value() {
    assert_eq!(reason("@"), Some(Malformation::InvalidValue));
    let parsed = parse("@");
    assert_eq!(parsed.value, Value::Null);
}

#[test]
fn truncated_null_literal_reports_invalid_value() {
    assert_eq!(reason("nul"), Some(Malformation::InvalidValue));
}

#[test]
fn garbage_after_null_seed_reports_invalid_value() {
    assert_eq!(reason("nope"), Some(Malformation::InvalidValue));
}

#[test]
fn truncated_boolean_literal_reports_invalid_value() {
    assert_eq!(reason("tru"), Some(Malformation::InvalidValue));
    assert_eq!(reason("fals"), Some(Malformation::InvalidValue));
}

#[test]
fn unconvertible_number_reports_invalid_value() {
    assert_eq!(reason("1.2.3"), Some(Malformation::InvalidValue));
    assert_eq!(reason("-"), Some(Malformation::InvalidValue));
}

// ============================================================================
// NestingTooDeep
// ============================================================================

#[test]
fn depth_limit_reports_nesting_too_deep() {
    let parsed = parse_with_limits("[[1]]", Limits { max_depth: 1 });
    assert_eq!(
        parsed.outcome,
        Outcome::Malformed(Malformation::NestingTooDeep)
    );
}

#[test]
fn depth_within_limit_is_clean() {
    let parsed = parse_with_limits("[[1]]", Limits { max_depth: 2 });
    assert_eq!(parsed.outcome, Outcome::Clean);
}

// ============================================================================
// First-fault precedence
// ============================================================================

#[test]
fn only_the_first_fault_is_reported() {
    // The garbage value inside "a" degrades first; the truncated tail would
    // report UnexpectedEnd but the earlier InvalidValue wins.
    let parsed = parse(r#"{"a": @, "b"#);
    assert_eq!(
        parsed.outcome,
        Outcome::Malformed(Malformation::InvalidValue)
    );
    assert_eq!(parsed.value.get("a"), Some(&Value::Null));
}
