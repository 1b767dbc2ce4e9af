//! tour-command - Entry Point
//!
//! Interactive front end for the command assistant. Reads operator commands,
//! prints the message and the actions a dispatcher would execute. Nothing is
//! executed here.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tour_command::command::{CommandAssistant, CommandResult};
use tour_command::core::config::AssistantConfig;
use tour_command::core::error::Result;
use tour_command::directory::TomlDirectory;
use tour_command::llm::LlmClient;
use tracing_subscriber::EnvFilter;

/// Natural-language commands for the tour back office
#[derive(Parser, Debug)]
#[command(name = "tour-command")]
#[command(about = "Interpret operator commands into dispatcher actions")]
struct Args {
    /// Assistant configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Destination directory file (TOML, re-read for every command)
    #[arg(long, default_value = "data/destinations.toml")]
    directory: PathBuf,

    /// Print the raw CommandResult JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Run a single command and exit
    command: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tour_command=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AssistantConfig::load(path)?,
        None => {
            let mut config = AssistantConfig::default();
            config.apply_env();
            config
        }
    };

    let client = LlmClient::from_env(&config.llm)?;
    let directory = TomlDirectory::new(args.directory.clone());
    tracing::info!(model = %client.model(), directory = ?directory.path(), "tour-command starting");

    let assistant = CommandAssistant::new(&config, Arc::new(client), Arc::new(directory));
    let rt = Runtime::new()?;

    if let Some(command) = &args.command {
        let result = rt.block_on(assistant.handle(command));
        print_result(&result, args.json)?;
        return Ok(());
    }

    println!("\n=== TOUR COMMAND ===");
    let trigger = assistant.normalizer().trigger();
    println!("Type a command (e.g. \"{} pdf do motorista Gramado\")", trigger);
    println!("  quit / q        - Exit");
    println!();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        // Only lines addressed to the assistant reach the completion service
        if !assistant.normalizer().is_command(input) {
            println!("Commands start with {}.", trigger);
            continue;
        }

        let result = rt.block_on(assistant.handle(input));
        print_result(&result, args.json)?;
    }

    Ok(())
}

fn print_result(result: &CommandResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!();
    println!("{}", result.message);
    for (i, action) in result.actions().iter().enumerate() {
        println!("  {}. [{:?}] {}", i + 1, action.kind(), action.description());
    }
    if result.requires_user_action == Some(true) {
        println!("  (requires confirmation in the UI)");
    }
    println!();
    Ok(())
}
