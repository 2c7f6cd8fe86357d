//! Application run modes: logger init, clean, rewrite, and the small
//! maintenance subcommands.

use std::io::{self, Write};
use std::path::Path;

use crate::cli::Args;
use crate::core;

/// Initialize env_logger with the level derived from -v/-q.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Read the input text: a file path, or stdin for '-' / no argument.
pub fn read_input(input: Option<&str>) -> Result<String, Box<dyn std::error::Error>> {
    match input {
        Some(path) if path != "-" => Ok(std::fs::read_to_string(path)?),
        _ => Ok(io::read_to_string(io::stdin())?),
    }
}

/// Emit the result: to the output file when given, otherwise stdout.
/// The file path mirrors the original tool's "download as .txt" button.
pub fn emit(result: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            std::fs::write(path, result)?;
            log::info!("wrote {} bytes to {}", result.len(), path.display());
        }
        None => println!("{}", result),
    }
    Ok(())
}

/// Clean-only mode: normalize the input and emit it. Needs no config or key.
pub fn run_clean(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(args.input.as_deref())?;
    let cleaned = core::normalize::normalize(&raw);
    emit(&cleaned, args.output.as_deref())
}

/// Rewrite mode: normalize, then send the cleaned text to the provider.
pub async fn run_rewrite(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(args.input.as_deref())?;
    let cleaned = core::normalize::normalize(&raw);
    if cleaned.is_empty() {
        eprintln!("Error: nothing left to rewrite after cleaning");
        std::process::exit(1);
    }

    let config = core::config::load()?;
    let model = args.model.as_deref().unwrap_or(&config.model_id);

    let rewritten = core::llm::rewrite(core::llm::RewriteRequest {
        text: &cleaned,
        api_key: &config.api_key,
        base_url: &config.base_url,
        model,
        tone: args.tone,
        cancel_token: None,
    })
    .await?;

    emit(&rewritten, args.output.as_deref())
}

/// `config` subcommand: print paths, model, and key status.
pub fn run_config() {
    let config_dir = core::paths::config_dir();
    println!("{} {}", core::app::NAME, core::app::VERSION);
    println!(
        "Config dir: {}",
        config_dir
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unavailable)".to_string())
    );
    println!(
        "Key file:   {}",
        core::api_key::credentials_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(unavailable)".to_string())
    );

    let from_env = std::env::var("OPENROUTER_API_KEY")
        .map(|k| !k.trim().is_empty())
        .unwrap_or(false);
    let stored = core::api_key::load_api_key().is_some();
    let status = match (from_env, stored) {
        (true, _) => "set (environment)",
        (false, true) => "set (stored)",
        (false, false) => "not set",
    };
    println!("API key:    {}", status);

    let model = std::env::var("OPENROUTER_MODEL")
        .unwrap_or_else(|_| core::config::DEFAULT_MODEL.to_string());
    println!("Model:      {}", model);
}

/// `set-key` subcommand: persist the key and report where it went.
pub fn run_set_key(key: &str) -> Result<(), Box<dyn std::error::Error>> {
    core::api_key::store_api_key(key)?;
    if let Some(path) = core::api_key::credentials_path() {
        println!("API key stored in {}", path.display());
    }
    Ok(())
}

/// `completions` subcommand: write the script for the given shell to stdout.
pub fn run_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    crate::cli::generate(shell, &mut cmd, name, &mut io::stdout());
    let _ = io::stdout().flush();
}
