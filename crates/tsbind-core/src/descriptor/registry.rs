use std::collections::HashMap;
use std::sync::RwLock;

use serde::Serialize;

use super::member::{ConstantDef, FunctionDef};
use crate::error::Result;

/// Registry of all members a script host exposes.
pub struct DeclarationRegistry {
    /// All registered functions by name.
    functions: RwLock<HashMap<String, FunctionDef>>,

    /// All registered constants by name.
    constants: RwLock<HashMap<String, ConstantDef>>,
}

impl DeclarationRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            functions: RwLock::new(HashMap::new()),
            constants: RwLock::new(HashMap::new()),
        }
    }

    /// Register a function definition.
    pub fn register_function(&self, func: FunctionDef) {
        let mut functions = self.functions.write().unwrap();
        functions.insert(func.name.clone(), func);
    }

    /// Register a constant definition.
    pub fn register_constant(&self, constant: ConstantDef) {
        let mut constants = self.constants.write().unwrap();
        constants.insert(constant.name.clone(), constant);
    }

    /// Get a function by name.
    pub fn get_function(&self, name: &str) -> Option<FunctionDef> {
        let functions = self.functions.read().unwrap();
        functions.get(name).cloned()
    }

    /// Get a constant by name.
    pub fn get_constant(&self, name: &str) -> Option<ConstantDef> {
        let constants = self.constants.read().unwrap();
        constants.get(name).cloned()
    }

    /// Get all registered functions.
    pub fn all_functions(&self) -> Vec<FunctionDef> {
        let functions = self.functions.read().unwrap();
        functions.values().cloned().collect()
    }

    /// Get all registered constants.
    pub fn all_constants(&self) -> Vec<ConstantDef> {
        let constants = self.constants.read().unwrap();
        constants.values().cloned().collect()
    }

    /// Check whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.functions.read().unwrap().is_empty() && self.constants.read().unwrap().is_empty()
    }

    /// Clear all registrations (useful for testing).
    pub fn clear(&self) {
        self.functions.write().unwrap().clear();
        self.constants.write().unwrap().clear();
    }

    /// Export the registry as pretty-printed JSON, name-sorted for stable
    /// output.
    pub fn to_json(&self) -> Result<String> {
        let mut constants = self.all_constants();
        constants.sort_by(|a, b| a.name.cmp(&b.name));
        let mut functions = self.all_functions();
        functions.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(serde_json::to_string_pretty(&RegistrySnapshot {
            constants,
            functions,
        })?)
    }
}

impl Default for DeclarationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of a registry.
#[derive(Serialize)]
struct RegistrySnapshot {
    constants: Vec<ConstantDef>,
    functions: Vec<FunctionDef>,
}
