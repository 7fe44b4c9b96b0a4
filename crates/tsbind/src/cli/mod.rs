mod generate;
mod print;

pub use generate::GenerateCommand;
pub use print::PrintCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// TSBIND - TypeScript declarations for embedded script hosts
#[derive(Parser)]
#[command(name = "tsbind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a TypeScript project with declarations.
    Generate(GenerateCommand),

    /// Print generated declarations to stdout.
    Print(PrintCommand),
}

impl Cli {
    /// Execute the CLI command.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Generate(cmd) => cmd.execute(),
            Commands::Print(cmd) => cmd.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_generate() {
        let cli = Cli::try_parse_from(["tsbind", "generate"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_parse_generate_with_overrides() {
        let cli = Cli::try_parse_from(["tsbind", "generate", "--src", "host", "-o", "out"]);
        assert!(cli.is_ok());
    }

    #[test]
    fn test_cli_parse_print_json() {
        let cli = Cli::try_parse_from(["tsbind", "print", "--json"]);
        assert!(cli.is_ok());
    }
}
