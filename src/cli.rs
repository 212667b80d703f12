use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "stockboard")]
#[command(about = "Stock analysis dashboard CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the dashboard server
    Serve {
        /// Port to listen on (falls back to PORT, then 8080)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Analyze a price CSV offline and print a summary
    Analyze {
        /// Path to the CSV file
        file: PathBuf,

        /// Print the full dashboard JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
}

pub async fn run() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let port = port.unwrap_or_else(crate::utils::get_default_port);
            commands::serve::run(port).await;
        }
        Commands::Analyze { file, json } => {
            commands::analyze::run(file, json);
        }
    }
}
