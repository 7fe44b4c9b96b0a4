use std::path::Path;

use anyhow::Result;
use clap::Parser;
use console::style;

use tsbind_codegen::{DeclarationGenerator, MemberSource, SourceWalker, TsProjectScaffolder};
use tsbind_core::TsbindConfig;

/// Generate a TypeScript project with declarations.
#[derive(Parser)]
pub struct GenerateCommand {
    /// Source directory to scan for script members (overrides config).
    #[arg(short, long)]
    pub src: Option<String>,

    /// Output directory for the generated project (overrides config).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Configuration file path.
    #[arg(short, long, default_value = "tsbind.toml")]
    pub config: String,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self) -> Result<()> {
        let config = TsbindConfig::load_or_default(&self.config)?;
        let src_dir = self.src.unwrap_or_else(|| config.generate.src.clone());
        let output_dir = self.output.unwrap_or_else(|| config.generate.output.clone());

        if !Path::new(&src_dir).exists() {
            anyhow::bail!("Source directory not found: {}", src_dir);
        }

        tracing::debug!(src = %src_dir, output = %output_dir, "Resolved generation directories");

        let registry = SourceWalker::new(&src_dir).members()?;
        if registry.is_empty() {
            println!(
                "  {} No script members found under {}",
                style("⚠").yellow(),
                style(&src_dir).cyan()
            );
        }

        let declaration = DeclarationGenerator::new().render(&registry);
        TsProjectScaffolder::new(&output_dir).scaffold(&declaration)?;

        let function_count = registry.all_functions().len();
        let constant_count = registry.all_constants().len();

        println!();
        println!(
            "  {} {}: generated declarations for {} functions and {} constants",
            style("✓").green(),
            style(&config.project.name).bold(),
            style(function_count).cyan(),
            style(constant_count).cyan()
        );
        println!(
            "  {} Output: {}",
            style("→").dim(),
            style(&output_dir).cyan()
        );
        println!();

        Ok(())
    }
}
