//! Recap CLI — command-line client for the meeting summarization backend.
//!
//! Set RECAP_TOKEN and RECAP_API_URL (or API_URL). Uses Bearer auth.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use recap_cli::{format_timestamp, init_tracing, print_json, truncate_string};
use recap_client::{ApiClient, CatalogClient, SessionController, StaticIdentity};
use recap_core::{ClientConfig, ErrorMetadata, PendingSelection, UploadRecord};

#[derive(Parser)]
#[command(name = "recap", about = "Upload meeting audio and retrieve summaries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload an audio file (mp3 or m4a) for asynchronous processing
    Upload {
        /// Path to the audio file
        file: std::path::PathBuf,
        /// Owner label recorded with the upload; defaults to RECAP_USERNAME
        #[arg(long)]
        owner: Option<String>,
    },
    /// List previously uploaded files
    List {
        /// Emit the listing as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch the summary for one upload by its file identifier
    Summary {
        /// File identifier from the listing (file_name column)
        id: String,
        /// Emit the summary as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
}

fn print_listing(records: &[UploadRecord]) {
    if records.is_empty() {
        println!("No uploads yet.");
        return;
    }

    println!("{:<40} {:<25} {}", "FILE", "UPLOADED", "ID");
    for record in records {
        println!(
            "{:<40} {:<25} {}",
            truncate_string(&record.file_original, 40),
            format_timestamp(record.file_timestamp),
            record.file_name
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let identity = Arc::new(StaticIdentity::from_env().context(
        "Failed to create identity provider. Set RECAP_TOKEN (and optionally RECAP_USERNAME)",
    )?);
    let config = ClientConfig::from_env();
    let api = ApiClient::new(&config, identity.clone()).context("Failed to create API client")?;

    match cli.command {
        Commands::Upload { file, owner } => {
            let owner = owner.unwrap_or_else(|| identity.username().to_string());
            let selection = PendingSelection::from_path(&file)?;

            let mut controller = SessionController::new(api);
            controller.select_file(selection);
            if let Err(err) = controller.submit(&owner).await {
                eprintln!("{}", err.user_message());
                if let Some(action) = err.suggested_action() {
                    eprintln!("{}", action);
                }
                return Err(err.into());
            }

            println!("File upload success - the summary will be ready in a few moments");
            print_listing(&controller.state().uploads);
        }
        Commands::List { json } => {
            let records = CatalogClient::new(api).list_uploads().await?;
            if json {
                print_json(&records)?;
            } else {
                print_listing(&records);
            }
        }
        Commands::Summary { id, json } => {
            let summary = CatalogClient::new(api).fetch_summary(&id).await?;
            if json {
                print_json(&serde_json::json!({
                    "file_name": id,
                    "combined_summary": summary,
                }))?;
            } else {
                println!("{}", summary);
            }
        }
    }

    Ok(())
}
