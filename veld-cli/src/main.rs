//! veld command-line interface.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use veld_cli::{generate, GenConfig};

#[derive(Parser)]
#[command(name = "veld")]
#[command(author, version)]
#[command(about = "Generate validator code from schema-chain declarations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate validator source files from a schema declaration file
    Gen {
        /// Input file containing validation schema declarations
        #[arg(short, long)]
        file: PathBuf,

        /// Output directory (default: the input file's directory)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Package name recorded in generated headers (default: the input
        /// directory's base name)
        #[arg(short, long)]
        pkg: Option<String>,

        /// Dump the parsed syntax tree
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Gen {
            file,
            out,
            pkg,
            verbose,
        } => {
            let config = GenConfig::new(file, out, pkg, verbose);
            println!(
                "{} {}",
                "Scanning".cyan().bold(),
                config.input_file.display()
            );
            let written = generate(&config)?;
            for path in &written {
                println!("  {} {}", "wrote".green(), path.display());
            }
            println!(
                "{} generated {} validator file(s)",
                "Done:".green().bold(),
                written.len()
            );
            Ok(())
        }
    }
}
