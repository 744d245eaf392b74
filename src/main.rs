//! userauth - user authentication service

#![allow(missing_docs)]

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use userauth_rs::server::builder::{load_config, run_server};
use userauth_rs::utils::logging::init_logging;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "userauth", version, about = "User authentication service")]
struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "USERAUTH_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = match load_config(args.config.as_deref()).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if let Err(e) = init_logging(&config.logging) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, so multi-line messages stay readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
