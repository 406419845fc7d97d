//! Standalone pattern chains: `((a)-[r]->(b)<-[s]-(c))`.
//!
//! A [`Pattern`] is always closed and renderable. [`Pattern::related`] opens a
//! relationship and returns a [`PartialPattern`], which has no renderer; only
//! [`PartialPattern::to`] gets back to a [`Pattern`].
//!
//! A rendered chain is always wrapped in its own parentheses, `((a)-[r]->(b))`.
//! An optional chain-wide quantifier follows the closing parenthesis,
//! `((a)-[r]->(b))+`, and lives on the chain rather than on any relationship.

use super::element::{Direction, PatternElement, Properties};
use super::errors::PatternError;
use super::node_pattern::NodePattern;
use super::quantifier::{Length, Quantifier};
use super::relationship_pattern::RelationshipPattern;
use super::ToCypher;
use crate::environment::CypherEnvironment;
use crate::expressions::Expr;
use crate::references::{NodeRef, RelationshipRef, Variable};

#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    start: NodePattern,
    hops: Vec<(RelationshipPattern, NodePattern)>,
    quantifier: Option<Quantifier>,
}

impl Pattern {
    pub fn new(node: NodeRef) -> Self {
        Self {
            start: NodePattern::new(node),
            hops: Vec::new(),
            quantifier: None,
        }
    }

    /// Chain carrying a chain-wide quantifier from the start.
    pub fn quantified(node: NodeRef, quantifier: Quantifier) -> Result<Self, PatternError> {
        Self::new(node).with_quantifier(quantifier)
    }

    /// Set the chain-wide quantifier. Fails if a relationship already in the
    /// chain has its own length or quantifier.
    pub fn with_quantifier(mut self, quantifier: Quantifier) -> Result<Self, PatternError> {
        quantifier.validate()?;
        if self.hops.iter().any(|(rel, _)| rel.has_repetition()) {
            return Err(PatternError::QuantifiedPathHasRepetition);
        }
        self.quantifier = Some(quantifier);
        Ok(self)
    }

    pub fn quantifier(&self) -> Option<Quantifier> {
        self.quantifier
    }

    pub fn is_quantified(&self) -> bool {
        self.quantifier.is_some()
    }

    /// Number of relationships in the chain.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// The node that currently closes the chain.
    pub fn last_node(&self) -> &NodePattern {
        self.hops.last().map(|(_, node)| node).unwrap_or(&self.start)
    }

    fn last_node_mut(&mut self) -> &mut NodePattern {
        match self.hops.last_mut() {
            Some((_, node)) => node,
            None => &mut self.start,
        }
    }

    // Decorations apply to the closing node.

    pub fn without_labels(mut self) -> Self {
        self.last_node_mut().with_labels = false;
        self
    }

    pub fn without_variable(mut self) -> Self {
        self.last_node_mut().with_variable = false;
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.last_node_mut().properties = properties;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.last_node_mut().properties.insert(key, value);
        self
    }

    /// Open a relationship from the closing node. `None` uses a fresh
    /// anonymous relationship.
    pub fn related(self, rel: Option<RelationshipRef>) -> PartialPattern {
        PartialPattern {
            closed: self,
            rel: RelationshipPattern::new(rel.unwrap_or_default()),
        }
    }

    pub fn collect_variables(&self) -> Vec<Variable> {
        let mut variables = vec![self.start.variable()];
        for (rel, node) in &self.hops {
            variables.push(rel.variable());
            variables.push(node.variable());
        }
        variables
    }
}

impl From<NodeRef> for Pattern {
    fn from(node: NodeRef) -> Self {
        Pattern::new(node)
    }
}

impl From<NodePattern> for Pattern {
    fn from(node: NodePattern) -> Self {
        Self {
            start: node,
            hops: Vec::new(),
            quantifier: None,
        }
    }
}

impl ToCypher for Pattern {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        let mut body = self.start.to_cypher(env);
        for (rel, node) in &self.hops {
            body.push_str(&rel.to_cypher(env));
            body.push_str(&node.to_cypher(env));
        }

        let quantifier = self.quantifier.map(|q| q.to_string()).unwrap_or_default();
        format!("({}){}", body, quantifier)
    }
}

/// A chain whose last relationship still waits for its target node.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a partial pattern must be closed with `to`"]
pub struct PartialPattern {
    closed: Pattern,
    rel: RelationshipPattern,
}

impl PartialPattern {
    pub fn relationship(&self) -> &RelationshipPattern {
        &self.rel
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.rel.direction = direction;
        self
    }

    pub fn without_type(mut self) -> Self {
        self.rel.with_type = false;
        self
    }

    pub fn without_variable(mut self) -> Self {
        self.rel.with_variable = false;
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.rel.properties = properties;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.rel.properties.insert(key, value);
        self
    }

    pub fn with_length(mut self, length: Length) -> Result<Self, PatternError> {
        let quantified = self.closed.is_quantified();
        self.rel.set_length(length, quantified)?;
        Ok(self)
    }

    pub fn with_quantifier(mut self, quantifier: Quantifier) -> Result<Self, PatternError> {
        let quantified = self.closed.is_quantified();
        self.rel.set_quantifier(quantifier, quantified)?;
        Ok(self)
    }

    /// Close the relationship. `None` uses a fresh anonymous node.
    pub fn to(self, node: Option<NodeRef>) -> Pattern {
        let mut pattern = self.closed;
        pattern
            .hops
            .push((self.rel, NodePattern::new(node.unwrap_or_default())));
        pattern
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_node_is_wrapped() {
        let mut env = CypherEnvironment::default();
        let pattern = Pattern::new(NodeRef::named("a").with_labels(vec!["Person"]));
        assert_eq!(pattern.to_cypher(&mut env), "((a:Person))");
    }

    #[test]
    fn test_multi_hop_chain() {
        let mut env = CypherEnvironment::default();
        let pattern = Pattern::new(NodeRef::named("a"))
            .related(Some(RelationshipRef::named("r").with_type("KNOWS")))
            .to(Some(NodeRef::named("b")))
            .related(None)
            .with_direction(Direction::Left)
            .without_variable()
            .to(Some(NodeRef::named("c")));
        assert_eq!(pattern.to_cypher(&mut env), "((a)-[r:KNOWS]->(b)<-[]-(c))");
        assert_eq!(pattern.len(), 2);
    }

    #[test]
    fn test_quantified_chain() {
        let mut env = CypherEnvironment::default();
        let movie = NodeRef::new().with_labels(vec!["Movie"]);
        let person = NodeRef::new().with_labels(vec!["Person"]);
        let pattern = Pattern::quantified(movie, Quantifier::OneOrMore)
            .unwrap()
            .related(Some(RelationshipRef::new().with_type("ACTED_IN")))
            .to(Some(person));
        assert_eq!(
            pattern.to_cypher(&mut env),
            "((this0:Movie)-[this1:ACTED_IN]->(this2:Person))+"
        );
    }

    #[test]
    fn test_decorations_apply_to_closing_node() {
        let mut env = CypherEnvironment::default();
        let pattern = Pattern::new(NodeRef::named("a").with_labels(vec!["A"]))
            .related(None)
            .without_variable()
            .to(Some(NodeRef::named("b").with_labels(vec!["B"])))
            .without_labels()
            .with_property("id", Expr::param(json!(7)));
        assert_eq!(pattern.to_cypher(&mut env), "((a:A)-[]->(b { id: $param0 }))");
    }

    #[test]
    fn test_partial_checks_chain_quantifier() {
        let partial = Pattern::quantified(NodeRef::new(), Quantifier::Exact(2))
            .unwrap()
            .related(None);
        assert_eq!(
            partial.clone().with_length(Length::Unbounded).unwrap_err(),
            PatternError::LengthInQuantifiedPath
        );
        assert_eq!(
            partial.with_quantifier(Quantifier::OneOrMore).unwrap_err(),
            PatternError::QuantifierInQuantifiedPath
        );
    }

    #[test]
    fn test_partial_length_and_quantifier_are_exclusive() {
        let partial = Pattern::new(NodeRef::new())
            .related(None)
            .with_length(Length::between(1, 2))
            .unwrap();
        assert_eq!(
            partial.with_quantifier(Quantifier::Exact(1)).unwrap_err(),
            PatternError::QuantifierOnVariableLengthRelationship
        );
    }

    #[test]
    fn test_quantifying_chain_with_variable_length_fails() {
        let pattern = Pattern::new(NodeRef::new())
            .related(None)
            .with_length(Length::Unbounded)
            .unwrap()
            .to(None);
        assert_eq!(
            pattern.with_quantifier(Quantifier::OneOrMore).unwrap_err(),
            PatternError::QuantifiedPathHasRepetition
        );
    }

    #[test]
    fn test_collect_variables() {
        let a = NodeRef::named("a");
        let r = RelationshipRef::named("r");
        let b = NodeRef::named("b");
        let pattern = Pattern::new(a.clone())
            .related(Some(r.clone()))
            .to(Some(b.clone()));
        let ids: Vec<_> = pattern.collect_variables().iter().map(Variable::id).collect();
        assert_eq!(ids, vec![a.id(), r.id(), b.id()]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut env = CypherEnvironment::default();
        let pattern = Pattern::new(NodeRef::new()).related(None).to(None);
        let first = pattern.to_cypher(&mut env);
        assert_eq!(first, pattern.to_cypher(&mut env));
        assert_eq!(first, "((this0)-[this1]->(this2))");
    }
}
