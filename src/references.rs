//! References to graph entities used by patterns.
//!
//! A reference is an identity object: two clones of the same [`NodeRef`] denote
//! the same variable and are always rendered with the same name by a
//! [`CypherEnvironment`](crate::environment::CypherEnvironment). Patterns hold
//! references, they never create identity beyond "generate one if absent".

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::expressions::{labels::LabelExpr, Expr};

/// Counter for generating process-unique reference ids
static NEXT_VAR_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a reference or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u64);

impl VarId {
    pub fn next() -> Self {
        VarId(NEXT_VAR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Labels attached to a node reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Labels {
    /// Flat list, rendered `:A:B` (or `:A&B` depending on configuration)
    List(Vec<String>),
    /// Boolean label expression, rendered by the expression itself
    Expr(LabelExpr),
}

impl Default for Labels {
    fn default() -> Self {
        Labels::List(Vec::new())
    }
}

impl From<LabelExpr> for Labels {
    fn from(expr: LabelExpr) -> Self {
        Labels::Expr(expr)
    }
}

impl<S: Into<String>> From<Vec<S>> for Labels {
    fn from(labels: Vec<S>) -> Self {
        Labels::List(labels.into_iter().map(Into::into).collect())
    }
}

/// Type attached to a relationship reference.
#[derive(Debug, Clone, PartialEq)]
pub enum RelType {
    Name(String),
    Expr(LabelExpr),
}

impl From<&str> for RelType {
    fn from(value: &str) -> Self {
        RelType::Name(value.to_string())
    }
}

impl From<String> for RelType {
    fn from(value: String) -> Self {
        RelType::Name(value)
    }
}

impl From<LabelExpr> for RelType {
    fn from(expr: LabelExpr) -> Self {
        RelType::Expr(expr)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeRef {
    id: VarId,
    name: Option<String>,
    pub labels: Labels,
}

impl NodeRef {
    /// Anonymous node without labels, rendered `this<n>`.
    pub fn new() -> Self {
        Self {
            id: VarId::next(),
            name: None,
            labels: Labels::default(),
        }
    }

    /// Node rendered with a fixed variable name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    pub fn with_labels(mut self, labels: impl Into<Labels>) -> Self {
        self.labels = labels.into();
        self
    }

    pub fn id(&self) -> VarId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Property access expression `<node>.<key>`.
    pub fn property(&self, key: impl Into<String>) -> Expr {
        Expr::Property {
            variable: Variable::Node(self.clone()),
            key: key.into(),
        }
    }
}

impl Default for NodeRef {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipRef {
    id: VarId,
    name: Option<String>,
    pub rel_type: Option<RelType>,
}

impl RelationshipRef {
    pub fn new() -> Self {
        Self {
            id: VarId::next(),
            name: None,
            rel_type: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    pub fn with_type(mut self, rel_type: impl Into<RelType>) -> Self {
        self.rel_type = Some(rel_type.into());
        self
    }

    pub fn id(&self) -> VarId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn property(&self, key: impl Into<String>) -> Expr {
        Expr::Property {
            variable: Variable::Relationship(self.clone()),
            key: key.into(),
        }
    }
}

impl Default for RelationshipRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Optional named handle for a whole path (`p = (a)-->(b)`).
#[derive(Debug, Clone, PartialEq)]
pub struct PathRef {
    id: VarId,
    name: Option<String>,
}

impl PathRef {
    pub fn new() -> Self {
        Self {
            id: VarId::next(),
            name: None,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: VarId::next(),
            name: Some(name.into()),
        }
    }

    pub fn id(&self) -> VarId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Default for PathRef {
    fn default() -> Self {
        Self::new()
    }
}

/// Any reference a pattern can bind.
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Node(NodeRef),
    Relationship(RelationshipRef),
    Path(PathRef),
}

impl Variable {
    pub fn id(&self) -> VarId {
        match self {
            Variable::Node(node) => node.id(),
            Variable::Relationship(rel) => rel.id(),
            Variable::Path(path) => path.id(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Variable::Node(node) => node.name(),
            Variable::Relationship(rel) => rel.name(),
            Variable::Path(path) => path.name(),
        }
    }
}

impl From<NodeRef> for Variable {
    fn from(node: NodeRef) -> Self {
        Variable::Node(node)
    }
}

impl From<RelationshipRef> for Variable {
    fn from(rel: RelationshipRef) -> Self {
        Variable::Relationship(rel)
    }
}

impl From<PathRef> for Variable {
    fn from(path: PathRef) -> Self {
        Variable::Path(path)
    }
}
