// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines the convert and create subcommands and their arguments.

use clap::{Parser, Subcommand};
use dockconv::runtime::RuntimeType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dockconv")]
#[command(about = "Translate orchestration container specs into Docker create configuration")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the translated Config and HostConfig as JSON
    Convert {
        /// Request file (defaults to dockconv.yml in the current directory)
        file: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Create the container on the local runtime
    Create {
        /// Request file (defaults to dockconv.yml in the current directory)
        file: Option<PathBuf>,

        /// Container name (overrides the request)
        #[arg(short, long)]
        name: Option<String>,

        /// Start the container after creating it
        #[arg(long)]
        start: bool,

        /// Runtime socket path (overrides detection)
        #[arg(long)]
        socket: Option<String>,

        /// Runtime type: docker or podman (overrides detection)
        #[arg(long)]
        runtime: Option<RuntimeType>,
    },
}
