//! Naming environment for one compilation pass.
//!
//! [`CypherEnvironment`] assigns stable textual identifiers to references and
//! parameters:
//! - Named references render their own (escaped) name
//! - Anonymous references get `<prefix><n>` in first-use order, skipping any
//!   name already handed out
//! - Parameters get `<param_prefix><n>` and their values are recorded
//!
//! Names are memoized by [`VarId`], so repeated renders of the same reference
//! (within one pass or across passes through the same environment) are stable.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::EnvironmentConfig;
use crate::expressions::Param;
use crate::references::{VarId, Variable};
use crate::utils::escape::escape_variable;

#[derive(Debug, Clone, Default)]
pub struct CypherEnvironment {
    config: EnvironmentConfig,
    /// VarId -> rendered variable name
    references: HashMap<VarId, String>,
    /// Number of generated (anonymous) variable names
    generated: usize,
    /// Every variable name handed out so far
    taken: HashSet<String>,
    /// VarId -> parameter name
    param_names: HashMap<VarId, String>,
    /// Extracted parameter values in first-render order
    params: Map<String, Value>,
}

impl CypherEnvironment {
    pub fn new(config: EnvironmentConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Stable name for a reference.
    pub fn name_for(&mut self, variable: &Variable) -> String {
        let id = variable.id();
        if let Some(name) = self.references.get(&id) {
            return name.clone();
        }

        let name = match variable.name() {
            Some(name) => {
                let name = escape_variable(name);
                if self.taken.contains(&name) {
                    log::warn!("Variable name `{}` is already bound to another reference", name);
                }
                name
            }
            None => self.next_generated_name(),
        };
        log::trace!("Assigned variable name `{}` to {}", name, id);
        self.taken.insert(name.clone());
        self.references.insert(id, name.clone());
        name
    }

    /// Next `<prefix><n>` not already handed out.
    fn next_generated_name(&mut self) -> String {
        loop {
            let name = format!("{}{}", self.config.prefix, self.generated);
            self.generated += 1;
            if !self.taken.contains(&name) {
                return name;
            }
        }
    }

    /// Stable name for a parameter; records its value on first use.
    pub fn param_name(&mut self, param: &Param) -> String {
        if let Some(name) = self.param_names.get(&param.id()) {
            return name.clone();
        }

        let name = format!("{}{}", self.config.param_prefix, self.params.len());
        log::trace!("Extracted parameter `{}`", name);
        self.param_names.insert(param.id(), name.clone());
        self.params.insert(name.clone(), param.value.clone());
        name
    }

    /// Parameters extracted so far.
    pub fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    pub fn into_params(self) -> Map<String, Value> {
        self.params
    }
}

/// Compiled Cypher text and the parameters it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CypherResult {
    pub cypher: String,
    pub params: Map<String, Value>,
}
