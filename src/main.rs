// ABOUTME: Entry point for the dockconv CLI application.
// ABOUTME: Parses arguments and dispatches to the convert and create handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use dockconv::error::Result;
use dockconv::request::Request;
use dockconv::runtime::{
    BollardRuntimeClient, RuntimeConfig, RuntimeError, RuntimeType, detect_runtime, launch,
};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert { file, compact } => {
            let request = load_request(file)?;
            let configs = request.translate()?;
            let json = if compact {
                serde_json::to_string(&configs)?
            } else {
                serde_json::to_string_pretty(&configs)?
            };
            println!("{json}");
            Ok(())
        }
        Commands::Create {
            file,
            name,
            start,
            socket,
            runtime,
        } => {
            let request = load_request(file)?;
            create(request, name, start, socket, runtime).await
        }
    }
}

fn load_request(file: Option<PathBuf>) -> Result<Request> {
    match file {
        Some(path) => Request::load(&path),
        None => Request::discover(&env::current_dir()?),
    }
}

async fn create(
    request: Request,
    name: Option<String>,
    start: bool,
    socket: Option<String>,
    runtime: Option<RuntimeType>,
) -> Result<()> {
    let configs = request.translate()?;

    let overrides = RuntimeConfig {
        runtime: runtime.or(request.runtime.runtime),
        socket: socket.or_else(|| request.runtime.socket.clone()),
    };
    let info = detect_runtime(&overrides).map_err(RuntimeError::from)?;
    tracing::debug!(runtime = %info.runtime_type, socket = %info.socket_path, "using runtime");

    let client = BollardRuntimeClient::connect(&info).map_err(RuntimeError::from)?;
    let name = name.or(request.name);
    let id = launch(&client, name.as_deref(), &configs, start)
        .await
        .map_err(RuntimeError::from)?;

    println!("{id}");
    Ok(())
}
