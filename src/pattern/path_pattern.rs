//! Path sequences.
//!
//! A [`PathPattern`] owns its elements in a flat arena. Builders returned by
//! [`PathPattern::node`] hold the path mutably plus the index of the element
//! they decorate, so "previous" and "next" are index arithmetic:
//!
//! ```text
//! elements:  [ Node(n) | Relationship(r) | Node(m) ]
//! index:        0           1                2
//! r.previous = elements[1 - 1], r.next = elements[1 + 1]
//! ```
//!
//! Nested sub-paths (from [`PathPattern::union`]) are elements too and render
//! in place, wrapped in parentheses when quantified.

use super::element::{Direction, PatternElement, Properties};
use super::errors::PatternError;
use super::node_pattern::NodePattern;
use super::quantifier::{Length, Quantifier};
use super::relationship_pattern::RelationshipPattern;
use super::ToCypher;
use crate::environment::CypherEnvironment;
use crate::expressions::Expr;
use crate::references::{NodeRef, PathRef, RelationshipRef, Variable};

#[derive(Debug, Clone, PartialEq)]
pub enum PathElement {
    Node(NodePattern),
    Relationship(RelationshipPattern),
    Path(PathPattern),
}

impl From<NodePattern> for PathElement {
    fn from(node: NodePattern) -> Self {
        PathElement::Node(node)
    }
}

impl From<RelationshipPattern> for PathElement {
    fn from(rel: RelationshipPattern) -> Self {
        PathElement::Relationship(rel)
    }
}

impl From<PathPattern> for PathElement {
    fn from(path: PathPattern) -> Self {
        PathElement::Path(path)
    }
}

impl ToCypher for PathElement {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        match self {
            PathElement::Node(node) => node.to_cypher(env),
            PathElement::Relationship(rel) => rel.to_cypher(env),
            PathElement::Path(path) => path.to_cypher(env),
        }
    }
}

/// Input accepted by [`PathPattern::union`].
#[derive(Debug, Clone, PartialEq)]
pub enum UnionMember {
    Node(NodePattern),
    Path(PathPattern),
}

impl UnionMember {
    fn into_path(self) -> PathPattern {
        match self {
            UnionMember::Path(path) => path,
            UnionMember::Node(node) => PathPattern {
                elements: vec![PathElement::Node(node)],
                ..PathPattern::default()
            },
        }
    }
}

impl From<NodeRef> for UnionMember {
    fn from(node: NodeRef) -> Self {
        UnionMember::Node(NodePattern::new(node))
    }
}

impl From<NodePattern> for UnionMember {
    fn from(node: NodePattern) -> Self {
        UnionMember::Node(node)
    }
}

impl From<PathPattern> for UnionMember {
    fn from(path: PathPattern) -> Self {
        UnionMember::Path(path)
    }
}

/// Ordered sequence of nodes, relationships and nested sub-paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathPattern {
    path_ref: Option<PathRef>,
    elements: Vec<PathElement>,
    quantifier: Option<Quantifier>,
}

impl PathPattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty path carrying a path-level quantifier: `(...)+`.
    pub fn quantified(quantifier: Quantifier) -> Result<Self, PatternError> {
        quantifier.validate()?;
        Ok(Self {
            quantifier: Some(quantifier),
            ..Self::default()
        })
    }

    /// Set the path-level quantifier. Fails if a relationship directly in this
    /// path already repeats.
    pub fn with_quantifier(&mut self, quantifier: Quantifier) -> Result<&mut Self, PatternError> {
        quantifier.validate()?;
        let repeats = self.elements.iter().any(|element| {
            matches!(element, PathElement::Relationship(rel) if rel.has_repetition())
        });
        if repeats {
            return Err(PatternError::QuantifiedPathHasRepetition);
        }
        self.quantifier = Some(quantifier);
        Ok(self)
    }

    pub fn with_path_variable(&mut self, path_ref: PathRef) -> &mut Self {
        self.path_ref = Some(path_ref);
        self
    }

    pub fn path_variable(&self) -> Option<&PathRef> {
        self.path_ref.as_ref()
    }

    pub fn is_quantified(&self) -> bool {
        self.quantifier.is_some()
    }

    pub fn quantifier(&self) -> Option<Quantifier> {
        self.quantifier
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn current_element(&self) -> Option<&PathElement> {
        self.elements.last()
    }

    /// Append a node and return a builder for it. A node cannot directly
    /// follow another node.
    pub fn node(&mut self, node: Option<NodeRef>) -> Result<NodeBuilder<'_>, PatternError> {
        let index = self.add_element(NodePattern::new(node.unwrap_or_default()))?;
        Ok(NodeBuilder { path: self, index })
    }

    /// Append an element, enforcing node/relationship alternation and the
    /// no-repetition-inside-quantified-path rule. Returns the element index.
    pub fn add_element(&mut self, element: impl Into<PathElement>) -> Result<usize, PatternError> {
        let element = element.into();
        match &element {
            PathElement::Node(_) => {
                if let Some(PathElement::Node(_)) = self.current_element() {
                    return Err(PatternError::NodeAfterNode);
                }
            }
            PathElement::Relationship(rel) => {
                if !matches!(self.current_element(), Some(PathElement::Node(_))) {
                    return Err(PatternError::RelationshipWithoutNode);
                }
                if self.is_quantified() {
                    if let Some(err) = rel.nesting_error() {
                        return Err(err);
                    }
                }
            }
            PathElement::Path(_) => {}
        }
        self.elements.push(element);
        Ok(self.elements.len() - 1)
    }

    /// Append each member as a nested sub-path. A bare node becomes a
    /// one-element sub-path. Every member after the first must be quantified
    /// or follow a quantified member; nothing is appended if any pair fails.
    pub fn union<I, M>(&mut self, patterns: I) -> Result<&mut Self, PatternError>
    where
        I: IntoIterator<Item = M>,
        M: Into<UnionMember>,
    {
        let paths: Vec<PathPattern> = patterns
            .into_iter()
            .map(|member| member.into().into_path())
            .collect();

        for (index, pair) in paths.windows(2).enumerate() {
            if !pair[0].is_quantified() && !pair[1].is_quantified() {
                return Err(PatternError::SimplePatternUnion { index: index + 1 });
            }
        }

        self.elements.extend(paths.into_iter().map(PathElement::Path));
        Ok(self)
    }

    /// Node preceding the relationship at `index`.
    pub fn previous_node(&self, index: usize) -> Option<&NodePattern> {
        match self.elements.get(index.checked_sub(1)?) {
            Some(PathElement::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// Node following the relationship at `index`.
    pub fn next_node(&self, index: usize) -> Option<&NodePattern> {
        match self.elements.get(index + 1) {
            Some(PathElement::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// Node and relationship references in pattern order, nested paths
    /// included. Anonymous references are returned too.
    pub fn collect_variables(&self) -> Vec<Variable> {
        let mut variables = Vec::new();
        for element in &self.elements {
            match element {
                PathElement::Node(node) => variables.push(node.variable()),
                PathElement::Relationship(rel) => variables.push(rel.variable()),
                PathElement::Path(path) => variables.extend(path.collect_variables()),
            }
        }
        variables
    }

    /// `p = ` when a path variable is bound, otherwise empty.
    pub(crate) fn render_assignment(&self, env: &mut CypherEnvironment) -> String {
        match &self.path_ref {
            Some(path_ref) => format!("{} = ", env.name_for(&Variable::Path(path_ref.clone()))),
            None => String::new(),
        }
    }
}

impl ToCypher for PathPattern {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        let body: String = self
            .elements
            .iter()
            .map(|element| element.to_cypher(env))
            .collect();

        match &self.quantifier {
            Some(quantifier) => format!("({}){}", body, quantifier),
            None => body,
        }
    }
}

/// Decorates the node at `index` of a path and continues the chain.
#[derive(Debug)]
pub struct NodeBuilder<'p> {
    path: &'p mut PathPattern,
    index: usize,
}

impl<'p> NodeBuilder<'p> {
    fn update(self, f: impl FnOnce(&mut NodePattern)) -> Self {
        if let Some(PathElement::Node(node)) = self.path.elements.get_mut(self.index) {
            f(node);
        }
        self
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn without_labels(self) -> Self {
        self.update(|node| node.with_labels = false)
    }

    pub fn without_variable(self) -> Self {
        self.update(|node| node.with_variable = false)
    }

    pub fn with_properties(self, properties: Properties) -> Self {
        self.update(|node| node.properties = properties)
    }

    pub fn with_property(self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.update(|node| node.properties.insert(key, value))
    }

    /// Append a relationship after this node.
    pub fn rel(self, rel: Option<RelationshipRef>) -> RelBuilder<'p> {
        let path = self.path;
        path.elements.push(PathElement::Relationship(RelationshipPattern::new(
            rel.unwrap_or_default(),
        )));
        let index = path.elements.len() - 1;
        RelBuilder { path, index }
    }

    /// Release the builder and return to the owning path.
    pub fn done(self) -> &'p mut PathPattern {
        self.path
    }
}

/// Decorates the relationship at `index` of a path and continues the chain.
#[derive(Debug)]
pub struct RelBuilder<'p> {
    path: &'p mut PathPattern,
    index: usize,
}

impl<'p> RelBuilder<'p> {
    fn relationship(&mut self) -> Option<&mut RelationshipPattern> {
        match self.path.elements.get_mut(self.index) {
            Some(PathElement::Relationship(rel)) => Some(rel),
            _ => None,
        }
    }

    fn update(mut self, f: impl FnOnce(&mut RelationshipPattern)) -> Self {
        if let Some(rel) = self.relationship() {
            f(rel);
        }
        self
    }

    fn try_update(
        mut self,
        f: impl FnOnce(&mut RelationshipPattern, bool) -> Result<(), PatternError>,
    ) -> Result<Self, PatternError> {
        let in_quantified_path = self.path.is_quantified();
        if let Some(rel) = self.relationship() {
            f(rel, in_quantified_path)?;
        }
        Ok(self)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn with_direction(self, direction: Direction) -> Self {
        self.update(|rel| rel.direction = direction)
    }

    pub fn without_type(self) -> Self {
        self.update(|rel| rel.with_type = false)
    }

    pub fn without_variable(self) -> Self {
        self.update(|rel| rel.with_variable = false)
    }

    pub fn with_properties(self, properties: Properties) -> Self {
        self.update(|rel| rel.properties = properties)
    }

    pub fn with_property(self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.update(|rel| rel.properties.insert(key, value))
    }

    pub fn with_length(self, length: Length) -> Result<Self, PatternError> {
        self.try_update(|rel, in_quantified_path| rel.set_length(length, in_quantified_path))
    }

    pub fn with_quantifier(self, quantifier: Quantifier) -> Result<Self, PatternError> {
        self.try_update(|rel, in_quantified_path| {
            rel.set_quantifier(quantifier, in_quantified_path)
        })
    }

    pub fn previous_node(&self) -> Option<&NodePattern> {
        self.path.previous_node(self.index)
    }

    /// Close the relationship with its target node.
    pub fn node(self, node: Option<NodeRef>) -> NodeBuilder<'p> {
        let path = self.path;
        path.elements
            .push(PathElement::Node(NodePattern::new(node.unwrap_or_default())));
        let index = path.elements.len() - 1;
        NodeBuilder { path, index }
    }

    pub fn done(self) -> &'p mut PathPattern {
        self.path
    }
}
