//! Label and relationship type expressions.
//!
//! Renders the GQL-style boolean label syntax:
//! ```text
//! Person            literal
//! Person&Actor      and
//! Person|Movie      or
//! !Person           not
//! %                 any label
//! (A|B)&C           nested binary operands are parenthesised
//! ```

use std::fmt;

use crate::environment::CypherEnvironment;
use crate::pattern::ToCypher;
use crate::utils::escape::escape_label;

#[derive(Debug, Clone, PartialEq)]
pub enum LabelExpr {
    Label(String),
    And(Vec<LabelExpr>),
    Or(Vec<LabelExpr>),
    Not(Box<LabelExpr>),
    Wildcard,
}

impl LabelExpr {
    pub fn label(name: impl Into<String>) -> Self {
        LabelExpr::Label(name.into())
    }

    pub fn and(operands: impl IntoIterator<Item = LabelExpr>) -> Self {
        LabelExpr::And(operands.into_iter().collect())
    }

    pub fn or(operands: impl IntoIterator<Item = LabelExpr>) -> Self {
        LabelExpr::Or(operands.into_iter().collect())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: LabelExpr) -> Self {
        LabelExpr::Not(Box::new(operand))
    }

    pub fn wildcard() -> Self {
        LabelExpr::Wildcard
    }

    /// Binary expressions with more than one rendered operand need parentheses
    /// when nested.
    fn needs_parens(&self) -> bool {
        match self {
            LabelExpr::And(ops) | LabelExpr::Or(ops) => {
                ops.iter().filter(|op| !op.to_string().is_empty()).count() > 1
            }
            _ => false,
        }
    }

    fn render_operand(&self) -> String {
        let text = self.to_string();
        if self.needs_parens() {
            format!("({})", text)
        } else {
            text
        }
    }

    fn join(ops: &[LabelExpr], separator: &str) -> String {
        ops.iter()
            .map(LabelExpr::render_operand)
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl fmt::Display for LabelExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelExpr::Label(name) => write!(f, "{}", escape_label(name)),
            LabelExpr::And(ops) => write!(f, "{}", LabelExpr::join(ops, "&")),
            LabelExpr::Or(ops) => write!(f, "{}", LabelExpr::join(ops, "|")),
            LabelExpr::Not(op) => {
                let inner = op.render_operand();
                if inner.is_empty() {
                    Ok(())
                } else {
                    write!(f, "!{}", inner)
                }
            }
            LabelExpr::Wildcard => write!(f, "%"),
        }
    }
}

impl ToCypher for LabelExpr {
    fn to_cypher(&self, _env: &mut CypherEnvironment) -> String {
        self.to_string()
    }
}
