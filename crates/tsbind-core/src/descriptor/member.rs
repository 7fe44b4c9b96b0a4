use serde::{Deserialize, Serialize};

use super::types::TypeDescriptor;

/// Script function argument definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionArg {
    /// Argument name.
    pub name: String,

    /// Argument type.
    pub descriptor: TypeDescriptor,
}

impl FunctionArg {
    /// Create a new function argument.
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
        }
    }

    /// Render as a TypeScript parameter.
    pub fn to_typescript(&self) -> String {
        format!("{}: {}", self.name, self.descriptor.to_typescript())
    }
}

/// Definition of a function the host exposes to scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDef {
    /// Function name as visible to scripts.
    pub name: String,

    /// Input arguments.
    pub args: Vec<FunctionArg>,

    /// Return type.
    pub return_type: TypeDescriptor,

    /// Documentation comment.
    pub doc: Option<String>,
}

impl FunctionDef {
    /// Create a new function definition.
    pub fn new(name: impl Into<String>, return_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            return_type,
            doc: None,
        }
    }

    /// Add an argument.
    pub fn with_arg(mut self, arg: FunctionArg) -> Self {
        self.args.push(arg);
        self
    }

    /// Set documentation.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Render as an ambient TypeScript declaration.
    pub fn to_declaration(&self) -> String {
        let args: Vec<String> = self.args.iter().map(FunctionArg::to_typescript).collect();
        format!(
            "declare function {}({}): {};",
            self.name,
            args.join(", "),
            self.return_type.to_typescript()
        )
    }
}

/// Definition of a constant the host exposes to scripts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstantDef {
    /// Constant name as visible to scripts.
    pub name: String,

    /// Constant type.
    pub descriptor: TypeDescriptor,

    /// Documentation comment.
    pub doc: Option<String>,
}

impl ConstantDef {
    /// Create a new constant definition.
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
            doc: None,
        }
    }

    /// Set documentation.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Render as an ambient TypeScript declaration.
    pub fn to_declaration(&self) -> String {
        format!(
            "declare const {}: {};",
            self.name,
            self.descriptor.to_typescript()
        )
    }
}
