use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use viva_interaction::{GatewayConfig, HttpInterviewGateway};

mod commands;

#[derive(Parser)]
#[command(name = "viva")]
#[command(about = "Viva - terminal client for AI-driven interview sessions", long_about = None)]
struct Cli {
    /// Base URL of the interview service (overrides VIVA_SERVICE_URL)
    #[arg(long)]
    service_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a resume and run the interview in the terminal
    Interview {
        /// Path to the resume file (PDF or DOCX)
        resume: PathBuf,
    },
    /// List all candidates (interviewer view)
    Candidates,
    /// Show one candidate's full report
    Candidate {
        /// Candidate identifier assigned by the service
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.service_url {
        Some(url) => GatewayConfig::new(url),
        None => GatewayConfig::from_env(),
    };
    let gateway = Arc::new(HttpInterviewGateway::new(config)?);

    match cli.command {
        Commands::Interview { resume } => commands::interview::run(gateway, &resume).await,
        Commands::Candidates => commands::dashboard::list(gateway.as_ref()).await,
        Commands::Candidate { id } => commands::dashboard::show(gateway.as_ref(), &id).await,
    }
}
