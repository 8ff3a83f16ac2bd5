//! Glitch CLI, the command-line interface for the GraphQL codegen cache.
//!
//! Provides `glitch init` for project scaffolding, `glitch codegen` for
//! bringing the artifact set up to date, `glitch check` for a full
//! parse-and-validate pass that writes nothing, and `glitch clean` for
//! removing cache outputs.

#![warn(missing_docs)]

mod clean;
mod codegen;
mod init;
mod logger;
mod pipeline;

use std::io::IsTerminal;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// Glitch: incremental GraphQL document collection.
#[derive(Parser, Debug)]
#[command(name = "glitch", version, about = "Glitch GraphQL codegen")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `glitch.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Glitch project.
    Init {
        /// Project name (creates a subdirectory). If omitted, initializes in
        /// the current directory.
        name: Option<String>,
    },
    /// Collect documents and refresh the artifact set.
    Codegen(CodegenArgs),
    /// Parse and validate every document without writing anything.
    Check,
    /// Remove the manifest and the artifact index.
    Clean,
}

/// Arguments for the `glitch codegen` subcommand.
#[derive(Parser, Debug)]
pub struct CodegenArgs {
    /// Ignore the manifest and process every document.
    #[arg(short, long)]
    pub force: bool,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };

    logger::init(global.quiet, global.verbose);

    let result = match cli.command {
        Command::Init { name } => init::run(name, &global),
        Command::Codegen(ref args) => codegen::run(args, &global),
        Command::Check => codegen::run_check(&global),
        Command::Clean => clean::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
