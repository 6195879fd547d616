//! Survey server command line interface
//!
//! Usage:
//!   survey init   - Initialize the survey database schema
//!   survey serve  - Start the survey API server
//!
//! The datastore connection string is read from `SURVEY_DB_URL` and the
//! database name from `SURVEY_DB_NAME`; a missing connection string is
//! fatal at startup.

use clap::{Parser, Subcommand};
use survey_api::{run_server, ApiConfig};
use survey_db::{DbConfig, SurveyService, DATASTORE};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "survey")]
#[command(about = "Relationship survey server CLI")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the survey database schema
    Init,

    /// Start the survey API server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
        /// Disable permissive CORS
        #[arg(long)]
        no_cors: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run_command(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match cli.command {
        Commands::Init => {
            println!("Initializing survey database...");

            let config = DbConfig::from_env()?;
            let datastore = DATASTORE.get_or_connect(&config).await?;
            let service = SurveyService::new(datastore);
            service.init_schema().await?;

            println!("Database schema initialized successfully.");
            Ok(())
        }

        Commands::Serve {
            host,
            port,
            no_cors,
        } => {
            println!("Starting survey API server on {}:{}...", host, port);

            let config = DbConfig::from_env()?;
            let datastore = DATASTORE.get_or_connect(&config).await?;

            let api_config = ApiConfig {
                host,
                port,
                enable_cors: !no_cors,
            };

            run_server(api_config, datastore).await?;
            Ok(())
        }
    }
}
