//! Statement-level wrappers around one top-level pattern.
//!
//! Clauses only prefix a keyword and chain to a following clause; all pattern
//! semantics live in [`crate::pattern`].

mod create;
mod matching;

pub use create::Create;
pub use matching::Match;

use crate::environment::CypherEnvironment;
use crate::pattern::{
    GraphPattern, NodePattern, PathPattern, PathUnion, Pattern, PatternElement, ToCypher,
};
use crate::references::{NodeRef, Variable};

/// Anything a clause can wrap.
#[derive(Debug, Clone, PartialEq)]
pub enum ClausePattern {
    Node(NodePattern),
    Chain(Pattern),
    Path(PathPattern),
    Union(PathUnion),
    Group(GraphPattern),
}

impl ClausePattern {
    pub fn collect_variables(&self) -> Vec<Variable> {
        match self {
            ClausePattern::Node(node) => vec![node.variable()],
            ClausePattern::Chain(chain) => chain.collect_variables(),
            ClausePattern::Path(path) => path.collect_variables(),
            ClausePattern::Union(union) => union.collect_variables(),
            ClausePattern::Group(group) => group.collect_variables(),
        }
    }
}

impl ToCypher for ClausePattern {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        match self {
            ClausePattern::Node(node) => node.to_cypher(env),
            ClausePattern::Chain(chain) => chain.to_cypher(env),
            ClausePattern::Path(path) => {
                format!("{}{}", path.render_assignment(env), path.to_cypher(env))
            }
            ClausePattern::Union(union) => union.to_cypher(env),
            ClausePattern::Group(group) => group.to_cypher(env),
        }
    }
}

impl From<NodeRef> for ClausePattern {
    fn from(node: NodeRef) -> Self {
        ClausePattern::Node(NodePattern::new(node))
    }
}

impl From<NodePattern> for ClausePattern {
    fn from(node: NodePattern) -> Self {
        ClausePattern::Node(node)
    }
}

impl From<Pattern> for ClausePattern {
    fn from(chain: Pattern) -> Self {
        ClausePattern::Chain(chain)
    }
}

impl From<PathPattern> for ClausePattern {
    fn from(path: PathPattern) -> Self {
        ClausePattern::Path(path)
    }
}

impl From<PathUnion> for ClausePattern {
    fn from(union: PathUnion) -> Self {
        ClausePattern::Union(union)
    }
}

impl From<GraphPattern> for ClausePattern {
    fn from(group: GraphPattern) -> Self {
        ClausePattern::Group(group)
    }
}

/// Any clause, used for chaining.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    Create(Create),
    Match(Match),
}

impl From<Create> for Clause {
    fn from(clause: Create) -> Self {
        Clause::Create(clause)
    }
}

impl From<Match> for Clause {
    fn from(clause: Match) -> Self {
        Clause::Match(clause)
    }
}

impl ToCypher for Clause {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        match self {
            Clause::Create(clause) => clause.to_cypher(env),
            Clause::Match(clause) => clause.to_cypher(env),
        }
    }
}

impl Clause {
    fn next_mut(&mut self) -> &mut Option<Box<Clause>> {
        match self {
            Clause::Create(clause) => &mut clause.next,
            Clause::Match(clause) => &mut clause.next,
        }
    }
}

/// Append `clause` at the tail of the chain starting at `slot`.
pub(crate) fn append_clause(slot: &mut Option<Box<Clause>>, clause: Clause) {
    match slot {
        Some(next) => append_clause(next.next_mut(), clause),
        None => *slot = Some(Box::new(clause)),
    }
}

pub(crate) fn render_next(next: &Option<Box<Clause>>, env: &mut CypherEnvironment) -> String {
    match next {
        Some(clause) => format!("\n{}", clause.to_cypher(env)),
        None => String::new(),
    }
}
