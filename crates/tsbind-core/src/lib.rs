pub mod config;
pub mod descriptor;
pub mod error;

pub use config::TsbindConfig;
pub use descriptor::{
    ConstantDef, DeclarationRegistry, FunctionArg, FunctionDef, GenericKind, PrimitiveKind,
    TypeDescriptor,
};
pub use error::{Result, TsbindError};
