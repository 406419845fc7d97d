//! Pattern construction and compilation.
//!
//! Builders enforce the pattern grammar at construction time; rendering
//! through [`ToCypher`] never fails.

use crate::config::EnvironmentConfig;
use crate::environment::{CypherEnvironment, CypherResult};

mod chain;
mod element;
pub mod errors;
mod node_pattern;
mod path_pattern;
mod quantifier;
mod relationship_pattern;
mod union;

pub use chain::{PartialPattern, Pattern};
pub use element::{Direction, PatternElement, Properties};
pub use node_pattern::NodePattern;
pub use path_pattern::{NodeBuilder, PathElement, PathPattern, RelBuilder, UnionMember};
pub use quantifier::{CanonicalQuantifier, Length, Quantifier};
pub use relationship_pattern::RelationshipPattern;
pub use union::{GraphPattern, PathUnion};

/// Convert a pattern node to Cypher text
pub trait ToCypher {
    /// Render using (and updating) the naming environment
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String;

    /// Render with a fresh default environment.
    fn build(&self) -> CypherResult {
        self.build_with(EnvironmentConfig::default())
    }

    /// Render with a fresh environment using `config`.
    fn build_with(&self, config: EnvironmentConfig) -> CypherResult {
        let mut env = CypherEnvironment::new(config);
        log::debug!("Building Cypher");
        let cypher = self.to_cypher(&mut env);
        let params = env.into_params();
        log::debug!("Built Cypher ({} chars, {} params)", cypher.len(), params.len());
        CypherResult { cypher, params }
    }
}

impl<T: ToCypher + ?Sized> ToCypher for Box<T> {
    fn to_cypher(&self, env: &mut CypherEnvironment) -> String {
        self.as_ref().to_cypher(env)
    }
}
