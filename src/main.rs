use anyhow::Result;
use clap::{Parser, Subcommand};

use ff::ShellError;

mod commands;

#[derive(Parser)]
#[command(name = "ff", author, version = env!("CARGO_PKG_VERSION"), about = "Run fast.ai notebooks on FloydHub", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone or update the fast.ai courses and install their requirements
    SetupCourses,

    /// Start a Jupyter notebook session on FloydHub
    FloydJupyter {
        /// Use GPU
        #[arg(long)]
        gpu: bool,
    },
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::SetupCourses => {
            commands::setup_courses::execute()?;
        }
        Commands::FloydJupyter { gpu } => {
            commands::floyd_jupyter::execute(gpu)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = ff::logging::init() {
        eprintln!("⚠️  Logging disabled: {e}");
    }

    if let Err(e) = run(cli) {
        eprintln!("❌ {e:#}");
        let exit_code = e
            .downcast_ref::<ShellError>()
            .map(ShellError::exit_code)
            .unwrap_or(1);
        std::process::exit(exit_code);
    }
}
