use super::element::{render_labels, serialize_properties, PatternElement, Properties};
use super::ToCypher;
use crate::environment::CypherEnvironment;
use crate::expressions::Expr;
use crate::references::{NodeRef, Variable};

/// A single node occurrence: `(n:Label { key: value })`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodePattern {
    pub(crate) reference: NodeRef,
    pub(crate) with_labels: bool,
    pub(crate) with_variable: bool,
    pub(crate) properties: Properties,
}

impl NodePattern {
    pub fn new(node: NodeRef) -> Self {
        Self {
            reference: node,
            with_labels: true,
            with_variable: true,
            properties: Properties::new(),
        }
    }

    pub fn reference(&self) -> &NodeRef {
        &self.reference
    }

    pub fn without_labels(mut self) -> Self {
        self.with_labels = false;
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

    /// Body of the node without the surrounding parentheses.
    pub(crate) fn render_body(&self, env: &mut CypherEnvironment) -> String {
        let variable = if self.with_variable {
            env.name_for(&self.variable())
        } else {
            String::new()
        };
        let labels = if self.with_labels {
            render_labels(&self.reference.labels, env)
        } else {
            String::new()
        };
        let properties = serialize_properties(&self.properties, env);
        format!("{}{}{}", variable, labels, properties)
    }
}

impl From<NodeRef> for NodePattern {
    fn from(node: NodeRef) -> Self {
        NodePattern::new(node)
    }
}

impl PatternElement for NodePattern {
    fn variable(&self) -> Variable {
        Variable::Node(self.reference.clone())
    }
}

impl ToCypher for NodePattern {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        format!("({})", self.render_body(env))
    }
}
