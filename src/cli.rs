//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

use crate::core::llm::Tone;

const AFTER_HELP: &str = "\
EXAMPLES:
  ai-text-cleaner notes.md                   Clean a file, print to stdout
  ai-text-cleaner -                          Clean text piped on stdin
  ai-text-cleaner -o clean.txt notes.md      Clean and write to a file
  ai-text-cleaner --rewrite notes.md         Clean, then rewrite via the API
  ai-text-cleaner --rewrite --tone formal -  Formal rewrite from stdin
  ai-text-cleaner set-key sk-or-...          Store the API key
  ai-text-cleaner config                     Show config paths and key status
  ai-text-cleaner completions bash           Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Strip Markdown artifacts from AI-generated text, optionally rewrite it in a natural tone",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file to clean, or '-' to read from stdin (default)
    #[arg(value_name = "INPUT")]
    pub input: Option<String>,

    /// After cleaning, send the text to the API to be rewritten
    #[arg(long, help = "Rewrite the cleaned text in a more natural register")]
    pub rewrite: bool,

    /// Tone for the rewrite
    #[arg(long, value_enum, default_value_t = Tone::Neutral)]
    pub tone: Tone,

    /// Override model for the rewrite
    #[arg(short = 'm', long, help = "Model ID (e.g. anthropic/claude-haiku-4.5)")]
    pub model: Option<String>,

    /// Write the result to a file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show config paths, model, and API key status
    Config,
    /// Store the API key in the config directory
    SetKey {
        /// The OpenRouter API key
        key: String,
    },
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
}
