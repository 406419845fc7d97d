use super::{append_clause, render_next, Clause, ClausePattern};
use crate::environment::CypherEnvironment;
use crate::pattern::ToCypher;

/// `MATCH <pattern>` or `OPTIONAL MATCH <pattern>`
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pattern: ClausePattern,
    optional: bool,
    pub(super) next: Option<Box<Clause>>,
}

impl Match {
    pub fn new(pattern: impl Into<ClausePattern>) -> Self {
        Self {
            pattern: pattern.into(),
            optional: false,
            next: None,
        }
    }

    pub fn optional(pattern: impl Into<ClausePattern>) -> Self {
        Self {
            optional: true,
            ..Self::new(pattern)
        }
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn pattern(&self) -> &ClausePattern {
        &self.pattern
    }

    pub fn then(mut self, clause: impl Into<Clause>) -> Self {
        append_clause(&mut self.next, clause.into());
        self
    }
}

impl ToCypher for Match {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        let keyword = if self.optional { "OPTIONAL MATCH" } else { "MATCH" };
        let pattern = self.pattern.to_cypher(env);
        format!("{} {}{}", keyword, pattern, render_next(&self.next, env))
    }
}
