use super::{append_clause, render_next, Clause, ClausePattern};
use crate::environment::CypherEnvironment;
use crate::pattern::ToCypher;

/// `CREATE <pattern>`
#[derive(Debug, Clone, PartialEq)]
pub struct Create {
    pattern: ClausePattern,
    pub(super) next: Option<Box<Clause>>,
}

impl Create {
    pub fn new(pattern: impl Into<ClausePattern>) -> Self {
        Self {
            pattern: pattern.into(),
            next: None,
        }
    }

    pub fn pattern(&self) -> &ClausePattern {
        &self.pattern
    }

    /// Chain a clause after this one (and after any clause already chained).
    pub fn then(mut self, clause: impl Into<Clause>) -> Self {
        append_clause(&mut self.next, clause.into());
        self
    }
}

impl ToCypher for Create {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        let pattern = self.pattern.to_cypher(env);
        format!("CREATE {}{}", pattern, render_next(&self.next, env))
    }
}
