//! `replrunner` command-line entry point.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{
    config::{cmd_config, ConfigAction},
    context::ContextArgs,
    cwd::cmd_cwd,
    plan::{cmd_plan, PlanArgs},
    precheck::cmd_precheck,
    profiles::cmd_profiles,
    quote::cmd_quote,
};

#[derive(Parser)]
#[command(name = "replrunner", about = "Plan the working directory and command line for launching a REPL")]
struct Cli {
    /// Log decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve cwd, adapt for Windows, quote arguments and print the result
    Plan(PlanArgs),

    /// Resolve only the working directory
    Cwd(ContextArgs),

    /// Print the final command line for a base command and arguments
    Quote {
        /// Host platform identifier (win32, linux, darwin, ...)
        #[arg(long)]
        platform: Option<String>,

        /// Base command, e.g. codex
        base: String,

        /// Raw arguments; composite values like "-p brain" are split
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Check that a command resolves without running it
    Precheck {
        /// Host platform identifier (win32, linux, darwin, ...)
        #[arg(long)]
        platform: Option<String>,

        /// Lookup strategy: which or shell
        #[arg(long)]
        lookup: Option<repl_runner::precheck::Lookup>,

        /// Command string; only its first token is checked
        command: String,
    },

    /// List configured profiles
    Profiles,

    /// Manage replrunner configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan(args) => cmd_plan(&args)?,
        Commands::Cwd(args) => cmd_cwd(&args)?,
        Commands::Quote { platform, base, args } => cmd_quote(platform.as_deref(), base, args),
        Commands::Precheck { platform, lookup, command } => {
            cmd_precheck(platform.as_deref(), lookup, &command)?;
        }
        Commands::Profiles => cmd_profiles()?,
        Commands::Config { action } => cmd_config(action)?,
    }

    Ok(())
}
