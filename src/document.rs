//! JSON pattern documents.
//!
//! A document describes paths declaratively and is built through the regular
//! builder API, so every construction rule applies:
//!
//! ```json
//! {
//!   "clause": "MATCH",
//!   "paths": [
//!     { "variable": "p",
//!       "elements": [
//!         { "node": { "name": "n", "labels": ["Person"], "properties": { "age": 30 } } },
//!         { "relationship": { "type": "KNOWS", "length": { "min": 1, "max": 3 } } },
//!         { "node": { "name": "m" } }
//!       ] }
//!   ]
//! }
//! ```
//!
//! Named references are shared: every `{"node": {"name": "n"}}` in one
//! document denotes the same node. Property values become parameters.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::clauses::{ClausePattern, Create, Match};
use crate::config::EnvironmentConfig;
use crate::environment::CypherResult;
use crate::expressions::Expr;
use crate::pattern::errors::PatternError;
use crate::pattern::{
    Direction, GraphPattern, Length, NodePattern, PathPattern, PathUnion, Properties, Quantifier,
    RelationshipPattern, ToCypher,
};
use crate::references::{NodeRef, PathRef, RelationshipRef};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid pattern document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    #[error("Pattern document has no paths")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ClauseKind {
    #[serde(rename = "MATCH")]
    Match,
    #[serde(rename = "OPTIONAL MATCH")]
    OptionalMatch,
    #[serde(rename = "CREATE")]
    Create,
}

/// How top-level paths are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinKind {
    /// `(a), (b)`
    #[default]
    Group,
    /// `(a)(b)`
    Union,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternDocument {
    #[serde(default)]
    pub clause: Option<ClauseKind>,
    #[serde(default)]
    pub join: JoinKind,
    pub paths: Vec<PathSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathSpec {
    #[serde(default)]
    pub variable: Option<String>,
    #[serde(default)]
    pub quantifier: Option<Quantifier>,
    #[serde(default)]
    pub elements: Vec<ElementSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementSpec {
    Node(NodeSpec),
    Relationship(RelationshipSpec),
    Path(PathSpec),
    /// Nested sub-paths appended through [`PathPattern::union`]
    Union(Vec<PathSpec>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub without_labels: bool,
    #[serde(default)]
    pub without_variable: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelationshipSpec {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "type")]
    pub rel_type: Option<String>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub length: Option<Length>,
    #[serde(default)]
    pub quantifier: Option<Quantifier>,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default)]
    pub without_type: bool,
    #[serde(default)]
    pub without_variable: bool,
}

/// Name -> reference table for one document.
#[derive(Debug, Default)]
struct References {
    nodes: HashMap<String, NodeRef>,
    relationships: HashMap<String, RelationshipRef>,
    paths: HashMap<String, PathRef>,
}

impl References {
    /// Labels given on the first mention of a name are kept for every mention.
    fn node(&mut self, spec: &NodeSpec) -> NodeRef {
        let fresh = || NodeRef::new().with_labels(spec.labels.clone());
        match &spec.name {
            None => fresh(),
            Some(name) => self
                .nodes
                .entry(name.clone())
                .or_insert_with(|| {
                    NodeRef::named(name.clone()).with_labels(spec.labels.clone())
                })
                .clone(),
        }
    }

    fn relationship(&mut self, spec: &RelationshipSpec) -> RelationshipRef {
        let with_type = |rel: RelationshipRef| match &spec.rel_type {
            Some(rel_type) => rel.with_type(rel_type.as_str()),
            None => rel,
        };
        match &spec.name {
            None => with_type(RelationshipRef::new()),
            Some(name) => self
                .relationships
                .entry(name.clone())
                .or_insert_with(|| with_type(RelationshipRef::named(name.clone())))
                .clone(),
        }
    }

    fn path(&mut self, name: &str) -> PathRef {
        self.paths
            .entry(name.to_string())
            .or_insert_with(|| PathRef::named(name))
            .clone()
    }
}

fn to_properties(values: &Map<String, Value>) -> Properties {
    values
        .iter()
        .map(|(key, value)| (key.clone(), Expr::param(value.clone())))
        .collect()
}

impl PatternDocument {
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Build the top-level pattern described by this document.
    pub fn to_pattern(&self) -> Result<ClausePattern, DocumentError> {
        if self.paths.is_empty() {
            return Err(DocumentError::Empty);
        }

        let mut references = References::default();
        let paths = self
            .paths
            .iter()
            .map(|spec| build_path(spec, &mut references))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(match self.join {
            JoinKind::Group => ClausePattern::Group(GraphPattern::new(paths)),
            JoinKind::Union => ClausePattern::Union(PathUnion::new(paths)),
        })
    }

    /// Build and render, wrapping in the document's clause if one is set.
    pub fn compile(&self, config: EnvironmentConfig) -> Result<CypherResult, DocumentError> {
        let pattern = self.to_pattern()?;
        log::debug!(
            "Compiling pattern document with {} path(s), clause {:?}",
            self.paths.len(),
            self.clause
        );
        let result = match self.clause {
            None => pattern.build_with(config),
            Some(ClauseKind::Match) => Match::new(pattern).build_with(config),
            Some(ClauseKind::OptionalMatch) => Match::optional(pattern).build_with(config),
            Some(ClauseKind::Create) => Create::new(pattern).build_with(config),
        };
        Ok(result)
    }
}

fn build_path(spec: &PathSpec, references: &mut References) -> Result<PathPattern, PatternError> {
    let mut path = match spec.quantifier {
        Some(quantifier) => PathPattern::quantified(quantifier)?,
        None => PathPattern::new(),
    };
    if let Some(name) = &spec.variable {
        path.with_path_variable(references.path(name));
    }

    for element in &spec.elements {
        match element {
            ElementSpec::Node(node) => {
                path.add_element(build_node(node, references))?;
            }
            ElementSpec::Relationship(rel) => {
                path.add_element(build_relationship(rel, references)?)?;
            }
            ElementSpec::Path(sub) => {
                path.add_element(build_path(sub, references)?)?;
            }
            ElementSpec::Union(members) => {
                let members = members
                    .iter()
                    .map(|member| build_path(member, references))
                    .collect::<Result<Vec<_>, _>>()?;
                path.union(members)?;
            }
        }
    }
    Ok(path)
}

fn build_node(spec: &NodeSpec, references: &mut References) -> NodePattern {
    let mut node = NodePattern::new(references.node(spec)).with_properties(to_properties(&spec.properties));
    if spec.without_labels {
        node = node.without_labels();
    }
    if spec.without_variable {
        node = node.without_variable();
    }
    node
}

fn build_relationship(
    spec: &RelationshipSpec,
    references: &mut References,
) -> Result<RelationshipPattern, PatternError> {
    let mut rel = RelationshipPattern::new(references.relationship(spec))
        .with_direction(spec.direction)
        .with_properties(to_properties(&spec.properties));
    if spec.without_type {
        rel = rel.without_type();
    }
    if spec.without_variable {
        rel = rel.without_variable();
    }
    if let Some(length) = spec.length {
        rel = rel.with_length(length)?;
    }
    if let Some(quantifier) = spec.quantifier {
        rel = rel.with_quantifier(quantifier)?;
    }
    Ok(rel)
}
