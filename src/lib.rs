//! cypher-pattern - typed construction and compilation of Cypher graph patterns
//!
//! This crate provides:
//! - Node, relationship and path pattern builders
//! - Quantified path patterns, variable-length relationships and path unions
//! - A naming environment that assigns stable variable and parameter names
//! - Rendering to Cypher text alongside the extracted parameter map

pub mod utils;

pub mod clauses;
pub mod config;
pub mod document;
pub mod environment;
pub mod expressions;
pub mod pattern;
pub mod references;

pub use clauses::{Clause, ClausePattern, Create, Match};
pub use config::{EnvironmentConfig, LabelOperator};
pub use environment::{CypherEnvironment, CypherResult};
pub use expressions::{labels::LabelExpr, Expr, Literal, Param};
pub use pattern::{
    errors::PatternError, Direction, GraphPattern, Length, NodePattern, PartialPattern, PathElement,
    PathPattern, PathUnion, Pattern, Properties, Quantifier, RelationshipPattern, ToCypher,
};
pub use references::{Labels, NodeRef, PathRef, RelType, RelationshipRef, VarId, Variable};
