//! Repetition for relationships and quantified path patterns.
//!
//! ```text
//! Quantifier (relationship or path level)     Length (variable-length relationship)
//!   Exact(3)              {3}                   Exact(2)              *2
//!   ZeroOrMore            *                     Unbounded             *
//!   OneOrMore             +                     Range(1, 3)           *1..3
//!   Range(1, 3)           {1,3}                 Range(_, 5)           *..5
//!   Range(_, 5)           {,5}                  Range(2, _)           *2..
//! ```
//!
//! Path-level quantifiers render the same text; the path wraps its own body in
//! parentheses.

use std::fmt;

use serde::Deserialize;

use super::errors::PatternError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "QuantifierRepr")]
pub enum Quantifier {
    Exact(u32),
    ZeroOrMore,
    OneOrMore,
    Range { min: Option<u32>, max: Option<u32> },
}

/// Quantifier reduced to explicit bounds. `max: None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalQuantifier {
    pub min: u32,
    pub max: Option<u32>,
}

impl Quantifier {
    pub const fn range(min: Option<u32>, max: Option<u32>) -> Self {
        Quantifier::Range { min, max }
    }

    pub const fn between(min: u32, max: u32) -> Self {
        Quantifier::range(Some(min), Some(max))
    }

    pub const fn at_least(min: u32) -> Self {
        Quantifier::range(Some(min), None)
    }

    pub const fn at_most(max: u32) -> Self {
        Quantifier::range(None, Some(max))
    }

    /// Reduce any notation to `{min, max?}`.
    pub fn canonicalize(&self) -> Result<CanonicalQuantifier, PatternError> {
        match *self {
            Quantifier::Exact(n) => Ok(CanonicalQuantifier {
                min: n,
                max: Some(n),
            }),
            Quantifier::ZeroOrMore => Ok(CanonicalQuantifier { min: 0, max: None }),
            Quantifier::OneOrMore => Ok(CanonicalQuantifier { min: 1, max: None }),
            Quantifier::Range {
                min: Some(min),
                max,
            } => Ok(CanonicalQuantifier { min, max }),
            Quantifier::Range {
                min: None,
                max: Some(max),
            } => Ok(CanonicalQuantifier { min: 0, max: Some(max) }),
            Quantifier::Range {
                min: None,
                max: None,
            } => Err(PatternError::InvalidQuantifier),
        }
    }

    /// Minimum number of repetitions.
    pub fn min(&self) -> Result<u32, PatternError> {
        Ok(self.canonicalize()?.min)
    }

    /// Checks shape and bound order; called by every builder that accepts a
    /// quantifier.
    pub(crate) fn validate(&self) -> Result<(), PatternError> {
        let canonical = self.canonicalize()?;
        match canonical.max {
            Some(max) if canonical.min > max => Err(PatternError::InvalidRange {
                min: canonical.min,
                max,
            }),
            _ => Ok(()),
        }
    }
}

impl From<u32> for Quantifier {
    fn from(n: u32) -> Self {
        Quantifier::Exact(n)
    }
}

impl From<CanonicalQuantifier> for Quantifier {
    fn from(q: CanonicalQuantifier) -> Self {
        Quantifier::Range {
            min: Some(q.min),
            max: q.max,
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Exact(n) => write!(f, "{{{}}}", n),
            Quantifier::ZeroOrMore => write!(f, "*"),
            Quantifier::OneOrMore => write!(f, "+"),
            Quantifier::Range { min, max } => write!(
                f,
                "{{{},{}}}",
                min.map(|m| m.to_string()).unwrap_or_default(),
                max.map(|m| m.to_string()).unwrap_or_default()
            ),
        }
    }
}

impl fmt::Display for CanonicalQuantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Quantifier::from(*self), f)
    }
}

/// Variable-length relationship range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "LengthRepr")]
pub enum Length {
    Exact(u32),
    Unbounded,
    Range { min: Option<u32>, max: Option<u32> },
}

impl Length {
    pub const fn range(min: Option<u32>, max: Option<u32>) -> Self {
        Length::Range { min, max }
    }

    pub const fn between(min: u32, max: u32) -> Self {
        Length::range(Some(min), Some(max))
    }

    pub const fn at_least(min: u32) -> Self {
        Length::range(Some(min), None)
    }

    pub const fn at_most(max: u32) -> Self {
        Length::range(None, Some(max))
    }

    pub(crate) fn validate(&self) -> Result<(), PatternError> {
        match *self {
            Length::Range {
                min: Some(min),
                max: Some(max),
            } if min > max => Err(PatternError::InvalidRange { min, max }),
            _ => Ok(()),
        }
    }
}

impl From<u32> for Length {
    fn from(n: u32) -> Self {
        Length::Exact(n)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Exact(n) => write!(f, "*{}", n),
            Length::Unbounded => write!(f, "*"),
            Length::Range { min, max } => write!(
                f,
                "*{}..{}",
                min.map(|m| m.to_string()).unwrap_or_default(),
                max.map(|m| m.to_string()).unwrap_or_default()
            ),
        }
    }
}

// Wire forms accepted by pattern documents: `3`, `"*"`, `"+"`, `{"min": 1, "max": 3}`

#[derive(Deserialize)]
#[serde(untagged)]
enum QuantifierRepr {
    Exact(u32),
    Symbol(String),
    Range { min: Option<u32>, max: Option<u32> },
}

impl TryFrom<QuantifierRepr> for Quantifier {
    type Error = String;

    fn try_from(repr: QuantifierRepr) -> Result<Self, Self::Error> {
        match repr {
            QuantifierRepr::Exact(n) => Ok(Quantifier::Exact(n)),
            QuantifierRepr::Symbol(s) => match s.as_str() {
                "*" => Ok(Quantifier::ZeroOrMore),
                "+" => Ok(Quantifier::OneOrMore),
                other => Err(format!("unknown quantifier '{}' (expected '*' or '+')", other)),
            },
            QuantifierRepr::Range { min, max } => Ok(Quantifier::Range { min, max }),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Exact(u32),
    Symbol(String),
    Range { min: Option<u32>, max: Option<u32> },
}

impl TryFrom<LengthRepr> for Length {
    type Error = String;

    fn try_from(repr: LengthRepr) -> Result<Self, Self::Error> {
        match repr {
            LengthRepr::Exact(n) => Ok(Length::Exact(n)),
            LengthRepr::Symbol(s) if s == "*" => Ok(Length::Unbounded),
            LengthRepr::Symbol(s) => Err(format!("unknown length '{}' (expected '*')", s)),
            LengthRepr::Range { min, max } => Ok(Length::Range { min, max }),
        }
    }
}
