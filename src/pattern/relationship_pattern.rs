use super::element::{
    render_rel_type, serialize_properties, Direction, PatternElement, Properties,
};
use super::errors::PatternError;
use super::quantifier::{Length, Quantifier};
use super::ToCypher;
use crate::environment::CypherEnvironment;
use crate::expressions::Expr;
use crate::references::{RelationshipRef, Variable};

/// A single relationship occurrence: `-[r:TYPE*1..3 { key: value }]->`.
///
/// A relationship carries at most one repetition mechanism (variable length or
/// quantifier), and neither may be set when the enclosing path is itself
/// quantified. The enclosing container passes its own quantification state to
/// [`RelationshipPattern::set_length`] and [`RelationshipPattern::set_quantifier`].
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipPattern {
    pub(crate) reference: RelationshipRef,
    pub(crate) direction: Direction,
    pub(crate) with_type: bool,
    pub(crate) with_variable: bool,
    pub(crate) length: Option<Length>,
    pub(crate) quantifier: Option<Quantifier>,
    pub(crate) properties: Properties,
}

impl RelationshipPattern {
    pub fn new(rel: RelationshipRef) -> Self {
        Self {
            reference: rel,
            direction: Direction::Right,
            with_type: true,
            with_variable: true,
            length: None,
            quantifier: None,
            properties: Properties::new(),
        }
    }

    pub fn reference(&self) -> &RelationshipRef {
        &self.reference
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn length(&self) -> Option<Length> {
        self.length
    }

    pub fn quantifier(&self) -> Option<Quantifier> {
        self.quantifier
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn without_type(mut self) -> Self {
        self.with_type = false;
        self
    }

    pub fn without_variable(mut self) -> Self {
        self.with_variable = false;
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Detached form of [`RelationshipPattern::set_length`]; the path-level
    /// check happens when the element is added to a path.
    pub fn with_length(mut self, length: Length) -> Result<Self, PatternError> {
        self.set_length(length, false)?;
        Ok(self)
    }

    pub fn with_quantifier(mut self, quantifier: Quantifier) -> Result<Self, PatternError> {
        self.set_quantifier(quantifier, false)?;
        Ok(self)
    }

    /// True when a variable length or quantifier is set.
    pub fn has_repetition(&self) -> bool {
        self.length.is_some() || self.quantifier.is_some()
    }

    pub(crate) fn set_length(
        &mut self,
        length: Length,
        in_quantified_path: bool,
    ) -> Result<(), PatternError> {
        if in_quantified_path {
            return Err(PatternError::LengthInQuantifiedPath);
        }
        if self.quantifier.is_some() {
            return Err(PatternError::LengthOnQuantifiedRelationship);
        }
        length.validate()?;
        self.length = Some(length);
        Ok(())
    }

    pub(crate) fn set_quantifier(
        &mut self,
        quantifier: Quantifier,
        in_quantified_path: bool,
    ) -> Result<(), PatternError> {
        if in_quantified_path {
            return Err(PatternError::QuantifierInQuantifiedPath);
        }
        if self.length.is_some() {
            return Err(PatternError::QuantifierOnVariableLengthRelationship);
        }
        quantifier.validate()?;
        self.quantifier = Some(quantifier);
        Ok(())
    }

    /// Error to report when this relationship is placed inside a quantified path.
    pub(crate) fn nesting_error(&self) -> Option<PatternError> {
        if self.length.is_some() {
            Some(PatternError::LengthInQuantifiedPath)
        } else if self.quantifier.is_some() {
            Some(PatternError::QuantifierInQuantifiedPath)
        } else {
            None
        }
    }
}

impl From<RelationshipRef> for RelationshipPattern {
    fn from(rel: RelationshipRef) -> Self {
        RelationshipPattern::new(rel)
    }
}

impl PatternElement for RelationshipPattern {
    fn variable(&self) -> Variable {
        Variable::Relationship(self.reference.clone())
    }
}

impl ToCypher for RelationshipPattern {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        let variable = if self.with_variable {
            env.name_for(&self.variable())
        } else {
            String::new()
        };
        let rel_type = if self.with_type {
            render_rel_type(self.reference.rel_type.as_ref(), env)
        } else {
            String::new()
        };
        let length = self.length.map(|l| l.to_string()).unwrap_or_default();
        let properties = serialize_properties(&self.properties, env);
        let quantifier = self.quantifier.map(|q| q.to_string()).unwrap_or_default();
        let (left_arrow, right_arrow) = self.direction.arrows();

        format!(
            "{}[{}{}{}{}]{}{}",
            left_arrow, variable, rel_type, length, properties, right_arrow, quantifier
        )
    }
}
