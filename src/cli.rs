//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::snippets::SnippetLang;

const AFTER_HELP: &str = "\
EXAMPLES:
  apex                                   Browse integration snippets (TUI)
  apex highlight app.js                  Print a file with syntax highlighting
  apex snippet python --copy             Print the Python snippet and copy it
  apex normalize 'hello world'           Show the payload that would be sent
  echo '[{\"text\":\"hi\"}]' | apex request - --curl
                                         Build the inference request as curl
  apex response saved.json               Summarize a server response
  apex completions bash                  Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    version,
    about = "Client for the Apex chat-safety API",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the integration snippets in a terminal UI
    Snippets {
        /// Snippet to open first
        #[arg(value_enum, default_value = "python")]
        lang: SnippetLang,
    },
    /// Print one integration snippet with syntax highlighting
    Snippet {
        #[arg(value_enum)]
        lang: SnippetLang,
        /// Also copy the snippet to the clipboard
        #[arg(long)]
        copy: bool,
        /// Print without colors
        #[arg(long)]
        no_color: bool,
    },
    /// Tokenize source code and print it highlighted
    Highlight {
        /// File to read ('-' or omitted for stdin)
        file: Option<PathBuf>,
        /// Print the token list as JSON instead
        #[arg(long)]
        json: bool,
        /// Print without colors
        #[arg(long)]
        no_color: bool,
    },
    /// Print the inference payload built from free-form input
    Normalize {
        /// Raw text or JSON ('-' or omitted for stdin)
        input: Option<String>,
        /// Pretty-print the payload
        #[arg(long)]
        pretty: bool,
    },
    /// Build the POST /api/run_inference request for free-form input
    Request {
        /// Raw text or JSON ('-' or omitted for stdin)
        input: Option<String>,
        /// API key (overrides APEX_API_KEY)
        #[arg(short, long)]
        key: Option<String>,
        /// Render as a curl command
        #[arg(long)]
        curl: bool,
    },
    /// Build the GET /api/results request
    Results {
        /// API key (overrides APEX_API_KEY)
        #[arg(short, long)]
        key: Option<String>,
        /// Render as a curl command
        #[arg(long)]
        curl: bool,
    },
    /// Decode and summarize a server response body
    Response {
        /// File to read ('-' or omitted for stdin)
        file: Option<PathBuf>,
    },
    /// Show base URL and API key status
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// True when the TUI will own the terminal.
    pub fn is_tui(&self) -> bool {
        matches!(self.command, None | Some(Commands::Snippets { .. }))
    }
}
