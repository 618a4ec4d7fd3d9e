//! # apex - client for the Apex chat-safety API
//!
//! Highlights integration snippets and source files, and turns free-form
//! input into the payload sent to the inference endpoint.
//!
//! ## Features
//! - Snippet viewer (TUI) with copy to clipboard
//! - Lossless tokenizer for syntax-highlighted display
//! - Message normalization and request rendering (`curl` or raw HTTP)

mod cli;
mod core;
mod run;
mod tui;

use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    let config = core::config::load();
    log::debug!("Using API at {}", config.base_url);

    // Print user-friendly message; exit uses Display not Debug
    if let Err(e) = run::run(args, config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
