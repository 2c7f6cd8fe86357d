//! # AI Text Cleaner
//!
//! Strips common Markdown artifacts from AI-generated text and, on request,
//! sends the cleaned text to an OpenRouter model to be rewritten in a more
//! natural tone.
//!
//! ## Modes
//! - Clean (default): read from a file or stdin, print the cleaned text
//! - Rewrite (`--rewrite`): clean first, then one API call with a tone
//!   directive (`--tone neutral|humorous|formal`)
//! - Maintenance subcommands: `config`, `set-key`, `completions`

mod cli;
mod core;
mod run;

use clap::Parser;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = cli::Args::parse();
    run::init_logger(&args);

    match &args.command {
        Some(cli::Commands::Config) => {
            run::run_config();
            return Ok(());
        }
        Some(cli::Commands::SetKey { key }) => {
            return run::run_set_key(key);
        }
        Some(cli::Commands::Completions { shell }) => {
            run::run_completions(*shell);
            return Ok(());
        }
        None => {}
    }

    // Errors are surfaced with Display, not Debug, and exit non-zero.
    let result = if args.rewrite {
        run::run_rewrite(&args).await
    } else {
        run::run_clean(&args)
    };
    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
