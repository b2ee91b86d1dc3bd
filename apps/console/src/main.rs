use std::{fs, path::PathBuf, process};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{load_settings, KnowledgeBaseClient};
use shared::domain::Document;

#[derive(Parser, Debug)]
#[command(name = "console", about = "Terminal frontend for the knowledge-base service")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload documents from a JSON file to the knowledge base
    Ingest {
        /// Path to a JSON array of {"id", "title", "content"} records
        file: PathBuf,
    },
    /// Ask a question answered from the knowledge base
    Ask { question: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let settings = load_settings();
    let mut client = KnowledgeBaseClient::new(&settings)?;

    match args.command {
        Command::Ingest { file } => {
            let raw = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let documents: Vec<Document> = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a JSON array of documents", file.display()))?;
            tracing::info!(documents = documents.len(), "loaded document file");

            match client.ingest_documents(&documents).await {
                Ok(_) => println!("Documents uploaded successfully!"),
                Err(err) => {
                    eprintln!("{err}");
                    process::exit(1);
                }
            }
        }
        Command::Ask { question } => match client.ask(&question).await {
            Ok(answer) => {
                println!("{}", answer.answer);
                if !answer.sources.is_empty() {
                    println!();
                    println!("Sources:");
                    for (index, source) in answer.sources.iter().enumerate() {
                        println!("  {}. [{}] {}", index + 1, source.id, source.title);
                    }
                }
            }
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        },
    }

    Ok(())
}
