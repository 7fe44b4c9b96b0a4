mod member;
mod registry;
mod types;

pub use member::{ConstantDef, FunctionArg, FunctionDef};
pub use registry::DeclarationRegistry;
pub use types::{GenericKind, PrimitiveKind, TypeDescriptor};
