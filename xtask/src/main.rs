use clap::{Parser, Subcommand};

use crate::fuzz::Fuzz;

mod build;
mod doc;
mod fuzz;
mod run;

#[derive(Parser)]
#[command(about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build all crates in workspace
    Build {
        /// Build with release profile
        #[arg(short, long, default_value_t = false)]
        release: bool,
    },

    /// Build docs for the isomenu crates
    Doc {
        /// Document private items in crate
        #[arg(short, long, default_value_t = false)]
        private: bool,

        /// Open in web browser after documenting
        #[arg(short, long, default_value_t = false)]
        open: bool,
    },

    /// Run the menu in the current terminal
    Run {
        /// Build with release profile
        #[arg(short, long, default_value_t = false)]
        release: bool,

        /// Arguments passed through to isomenu-ratatui
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Run unit tests and clippy on host
    Test,

    /// Fuzz a parser with cargo-fuzz
    Fuzz {
        #[command(subcommand)]
        command: Fuzz,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Build { release } => build::build_all_crates(release)?,
        Commands::Doc { private, open } => doc::doc_crate(private, open)?,
        Commands::Run { release, args } => run::run_menu(release, &args)?,
        Commands::Test => test::test_on_host()?,
        Commands::Fuzz { command } => fuzz::fuzz_parsers(command)?,
    }
    Ok(())
}
