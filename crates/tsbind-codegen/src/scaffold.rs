//! TypeScript project scaffolder.
//!
//! Writes a minimal editor-ready project around a generated declaration
//! block: the declarations themselves, an entry stub, and a tsconfig.

use std::fs;
use std::path::PathBuf;

use crate::Error;

/// Entry stub header comment.
const SCRIPT_HEADER_COMMENT: &str = "/**\n * Write your code below\n */\n";

/// TypeScript config with type declaration support.
const TYPE_SCRIPT_CONFIG: &str = r#"{
    "compilerOptions": {
        "checkJs": true,
        "allowJs": true,
        "typeRoots": ["./types"]
    }
}
"#;

/// Scaffolds a TypeScript/JavaScript project around generated declarations.
pub struct TsProjectScaffolder {
    /// Output directory of the generated project.
    output_dir: PathBuf,
}

impl TsProjectScaffolder {
    /// Create a new scaffolder.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write the project: declarations, entry stub, and tsconfig.
    ///
    /// The output directory and its `src/` subdirectory are created if
    /// absent. Any I/O failure aborts the run; artifacts written before the
    /// failure are left in place.
    pub fn scaffold(&self, declaration: &str) -> Result<(), Error> {
        let src = self.output_dir.join("src");
        if !src.exists() {
            fs::create_dir_all(&src)?;
        }

        fs::write(src.join("types.d.ts"), declaration)?;
        fs::write(src.join("script.js"), SCRIPT_HEADER_COMMENT)?;
        fs::write(self.output_dir.join("tsconfig.json"), TYPE_SCRIPT_CONFIG)?;

        tracing::info!(output = %self.output_dir.display(), "Scaffolded TypeScript project");
        Ok(())
    }
}
