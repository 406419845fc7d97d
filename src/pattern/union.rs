//! Multi-path composition.
//!
//! [`PathUnion`] concatenates its members (`(a)((x)-->(y))+(b)`), while
//! [`GraphPattern`] lists independent paths for one clause (`(a), (b)-->(c)`).
//! Neither validates beyond what each member already enforces.

use super::path_pattern::PathPattern;
use super::ToCypher;
use crate::environment::CypherEnvironment;
use crate::references::Variable;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathUnion {
    paths: Vec<PathPattern>,
}

impl PathUnion {
    pub fn new(paths: Vec<PathPattern>) -> Self {
        Self { paths }
    }

    pub fn push(&mut self, path: PathPattern) -> &mut Self {
        self.paths.push(path);
        self
    }

    pub fn paths(&self) -> &[PathPattern] {
        &self.paths
    }

    pub fn collect_variables(&self) -> Vec<Variable> {
        self.paths.iter().flat_map(PathPattern::collect_variables).collect()
    }
}

impl FromIterator<PathPattern> for PathUnion {
    fn from_iter<I: IntoIterator<Item = PathPattern>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ToCypher for PathUnion {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        self.paths.iter().map(|path| path.to_cypher(env)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphPattern {
    paths: Vec<PathPattern>,
}

impl GraphPattern {
    pub fn new(paths: Vec<PathPattern>) -> Self {
        Self { paths }
    }

    pub fn push(&mut self, path: PathPattern) -> &mut Self {
        self.paths.push(path);
        self
    }

    pub fn paths(&self) -> &[PathPattern] {
        &self.paths
    }

    pub fn collect_variables(&self) -> Vec<Variable> {
        self.paths.iter().flat_map(PathPattern::collect_variables).collect()
    }
}

impl FromIterator<PathPattern> for GraphPattern {
    fn from_iter<I: IntoIterator<Item = PathPattern>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ToCypher for GraphPattern {
    /// Members that bind a path variable render as `p = ...`.
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        let paths: Vec<String> = self
            .paths
            .iter()
            .map(|path| format!("{}{}", path.render_assignment(env), path.to_cypher(env)))
            .collect();
        paths.join(", ")
    }
}
