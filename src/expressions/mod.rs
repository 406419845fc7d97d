//! Value expressions used by inline property maps.
//!
//! The pattern subsystem treats expressions as opaque: it only asks them for
//! their text. Parameters additionally register their value with the
//! environment so the caller receives them in the build result.

pub mod labels;

use serde_json::Value;

use crate::environment::CypherEnvironment;
use crate::pattern::ToCypher;
use crate::references::{VarId, Variable};
use crate::utils::escape::{escape_property, escape_string};

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Literal>),
}

impl Literal {
    fn render(&self) -> String {
        match self {
            Literal::Null => "NULL".to_string(),
            Literal::Boolean(b) => b.to_string(),
            Literal::Integer(i) => i.to_string(),
            Literal::Float(f) if f.is_nan() => "0.0/0.0".to_string(),
            Literal::Float(f) if f.is_infinite() && *f > 0.0 => "1.0/0.0".to_string(),
            Literal::Float(f) if f.is_infinite() => "-1.0/0.0".to_string(),
            // Debug keeps the fractional part (`1.0`), Display would print `1`
            Literal::Float(f) => format!("{:?}", f),
            Literal::String(s) => format!("\"{}\"", escape_string(s)),
            Literal::List(items) => {
                let items: Vec<String> = items.iter().map(Literal::render).collect();
                format!("[{}]", items.join(", "))
            }
        }
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(i64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

/// A value extracted into the parameter map.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    id: VarId,
    pub value: Value,
}

impl Param {
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            id: VarId::next(),
            value: value.into(),
        }
    }

    pub fn id(&self) -> VarId {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Param(Param),
    /// `$name`, value supplied by the caller at execution time
    NamedParam(String),
    Property { variable: Variable, key: String },
    Raw(String),
}

impl Expr {
    pub fn param(value: impl Into<Value>) -> Self {
        Expr::Param(Param::new(value))
    }

    pub fn literal(value: impl Into<Literal>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        Expr::Raw(text.into())
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::Literal(value)
    }
}

impl From<Param> for Expr {
    fn from(value: Param) -> Self {
        Expr::Param(value)
    }
}

impl ToCypher for Expr {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        match self {
            Expr::Literal(lit) => lit.render(),
            Expr::Param(param) => format!("${}", env.param_name(param)),
            Expr::NamedParam(name) => format!("${}", name),
            Expr::Property { variable, key } => {
                format!("{}.{}", env.name_for(variable), escape_property(key))
            }
            Expr::Raw(raw) => raw.clone(),
        }
    }
}
