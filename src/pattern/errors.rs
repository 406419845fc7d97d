//! Construction-time errors for pattern builders.
//!
//! Every variant is raised at the builder call that violates the grammar;
//! a pattern that finishes building always renders.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatternError {
    #[error("Cannot add node after a node")]
    NodeAfterNode,

    #[error("Relationship must follow a node")]
    RelationshipWithoutNode,

    #[error("Cannot set relationship length on a quantified relationship")]
    LengthOnQuantifiedRelationship,

    #[error("Cannot set relationship quantifier on a variable length relationship")]
    QuantifierOnVariableLengthRelationship,

    #[error("Cannot set relationship length within a quantified path")]
    LengthInQuantifiedPath,

    #[error("Cannot set relationship quantifier within a quantified path")]
    QuantifierInQuantifiedPath,

    #[error("Cannot quantify a path containing variable length or quantified relationships")]
    QuantifiedPathHasRepetition,

    #[error("Cannot union two simple patterns (union member {index} and its predecessor are both unquantified)")]
    SimplePatternUnion { index: usize },

    #[error("Invalid quantifier: a range needs at least one of min or max")]
    InvalidQuantifier,

    #[error("Invalid range: minimum ({min}) cannot be greater than maximum ({max})")]
    InvalidRange { min: u32, max: u32 },
}
