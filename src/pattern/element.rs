//! Pieces shared by every element that can sit in a path: direction, inline
//! property maps, and label/type rendering.

use serde::Deserialize;

use super::ToCypher;
use crate::environment::CypherEnvironment;
use crate::expressions::Expr;
use crate::references::{Labels, RelType, Variable};
use crate::utils::escape::{escape_label, escape_property, escape_type};

/// An element that binds exactly one reference.
pub trait PatternElement: ToCypher {
    fn variable(&self) -> Variable;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// `<-[]-`
    Left,
    /// `-[]->`
    #[default]
    Right,
    /// `-[]-`
    Undirected,
}

impl Direction {
    pub(crate) fn arrows(&self) -> (&'static str, &'static str) {
        match self {
            Direction::Left => ("<-", "-"),
            Direction::Right => ("-", "->"),
            Direction::Undirected => ("-", "-"),
        }
    }
}

/// Inline property map, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: Vec<(String, Expr)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace (in place) the value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Expr>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Expr>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}

/// ` { key: value, ... }`, or nothing for an empty map.
pub(crate) fn serialize_properties(properties: &Properties, env: &mut CypherEnvironment) -> String {
    if properties.is_empty() {
        return String::new();
    }
    let fields: Vec<String> = properties
        .iter()
        .map(|(key, value)| format!("{}: {}", escape_property(key), value.to_cypher(env)))
        .collect();
    format!(" {{ {} }}", fields.join(", "))
}

pub(crate) fn render_labels(labels: &Labels, env: &mut CypherEnvironment) -> String {
    match labels {
        Labels::Expr(expr) => prefixed(expr.to_cypher(env)),
        Labels::List(labels) => {
            let escaped: Vec<String> = labels.iter().map(|l| escape_label(l)).collect();
            let operator = env.config().label_operator.as_str();
            prefixed(escaped.join(operator))
        }
    }
}

pub(crate) fn render_rel_type(rel_type: Option<&RelType>, env: &mut CypherEnvironment) -> String {
    match rel_type {
        None => String::new(),
        Some(RelType::Expr(expr)) => prefixed(expr.to_cypher(env)),
        Some(RelType::Name(name)) if name.is_empty() => String::new(),
        Some(RelType::Name(name)) => prefixed(escape_type(name)),
    }
}

fn prefixed(text: String) -> String {
    if text.is_empty() {
        text
    } else {
        format!(":{}", text)
    }
}
