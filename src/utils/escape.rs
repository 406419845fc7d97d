//! Identifier escaping for labels, relationship types, property keys and variables.
//!
//! Cypher accepts bare identifiers matching `[A-Za-z_][A-Za-z0-9_]*`. Anything
//! else is wrapped in backticks, with embedded backticks doubled.
//!
//! ```
//! use cypher_pattern::utils::escape::escape_label;
//!
//! assert_eq!(escape_label("Person"), "Person");
//! assert_eq!(escape_label("My Label"), "`My Label`");
//! assert_eq!(escape_label("a`b"), "`a``b`");
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref PLAIN_IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Returns true when `value` can be emitted without backticks.
pub fn is_plain_identifier(value: &str) -> bool {
    PLAIN_IDENTIFIER.is_match(value)
}

fn escape_if_needed(value: &str) -> String {
    if is_plain_identifier(value) {
        value.to_string()
    } else {
        format!("`{}`", value.replace('`', "``"))
    }
}

/// Escape a node label.
pub fn escape_label(label: &str) -> String {
    escape_if_needed(label)
}

/// Escape a relationship type.
pub fn escape_type(rel_type: &str) -> String {
    escape_if_needed(rel_type)
}

/// Escape a property key used in inline maps and property access.
pub fn escape_property(key: &str) -> String {
    escape_if_needed(key)
}

/// Escape a user-supplied variable name.
pub fn escape_variable(name: &str) -> String {
    escape_if_needed(name)
}

/// Escape a string literal body for a double-quoted Cypher string.
///
/// Backslash must be handled first so later replacements are not doubled.
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
