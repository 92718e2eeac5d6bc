//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Chainable numeric node model: demo scenario, log capability and TypeScript declarations
#[derive(Parser, Debug)]
#[command(name = "nodechain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Config file layered over the global config
    #[arg(short, long, global = true, env = "NODECHAIN_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print TypeScript declarations of the scripting surface
    Declarations {
        /// Module name (default: from config)
        #[arg(short, long)]
        module: Option<String>,
    },

    /// Run the combine/advance demo scenario
    Run {
        /// Value of the plain node
        #[arg(long, allow_hyphen_values = true)]
        lhs: Option<f64>,

        /// Value of the named node
        #[arg(long, allow_hyphen_values = true)]
        rhs: Option<f64>,

        /// Name to greet
        #[arg(long)]
        name: Option<String>,

        /// Label of the named node
        #[arg(long)]
        label: Option<String>,

        /// Send log lines to tracing instead of stdout
        #[arg(long)]
        tracing: bool,
    },

    /// Send one message through the log sink
    Log {
        /// Message text
        message: String,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration
    Show,

    /// Print a commented template config
    Template,

    /// Show the global config file path
    Path,
}
