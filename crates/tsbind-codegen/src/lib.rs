pub mod parser;
pub mod scaffold;
pub mod typescript;

pub use parser::{parse_project, MemberSource, SourceWalker};
pub use scaffold::TsProjectScaffolder;
pub use typescript::{DeclarationGenerator, Error};
