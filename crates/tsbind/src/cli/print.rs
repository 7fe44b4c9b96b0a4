use std::path::Path;

use anyhow::Result;
use clap::Parser;

use tsbind_codegen::{DeclarationGenerator, MemberSource, SourceWalker};

/// Print generated declarations to stdout.
#[derive(Parser)]
pub struct PrintCommand {
    /// Source directory to scan for script members.
    #[arg(short, long, default_value = "src")]
    pub src: String,

    /// Emit the member registry as JSON instead of declarations.
    #[arg(long)]
    pub json: bool,
}

impl PrintCommand {
    /// Execute the print command.
    pub fn execute(self) -> Result<()> {
        if !Path::new(&self.src).exists() {
            anyhow::bail!("Source directory not found: {}", self.src);
        }

        let registry = SourceWalker::new(&self.src).members()?;

        if self.json {
            println!("{}", registry.to_json()?);
        } else {
            print!("{}", DeclarationGenerator::new().render(&registry));
        }

        Ok(())
    }
}
