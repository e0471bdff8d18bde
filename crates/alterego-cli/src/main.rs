//! Alterego CLI - Talk to a persona from the terminal
//!
//! Keeps the conversation history locally and sends it with every turn.

mod api;
mod config;
mod session;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use tracing_subscriber::EnvFilter;

use api::AlteregoClient;
use config::Config;
use session::{ChatSession, Line};

#[derive(Parser)]
#[command(name = "alterego")]
#[command(about = "Alterego CLI - Chat with a persona", long_about = None)]
#[command(version)]
struct Cli {
    /// Log requests to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive conversation
    Chat,

    /// Ask a single question without history
    Ask {
        /// The message to send
        message: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the server URL
    SetUrl {
        /// Base URL, e.g. http://127.0.0.1:8000
        url: String,
    },
    /// Store the API key (will prompt if not provided)
    SetKey {
        #[arg(short, long)]
        key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("alterego_cli=debug,reqwest=info")),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match cli.command {
        Commands::Chat => cmd_chat().await,
        Commands::Ask { message } => cmd_ask(message).await,
        Commands::Config { action } => cmd_config(action).await,
    }
}

fn client(config: &Config) -> AlteregoClient {
    AlteregoClient::new(&config.base_url, config.api_key.as_deref())
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_chat() -> Result<()> {
    let config = Config::load()?;
    let client = client(&config);

    let persona = client
        .persona()
        .await
        .with_context(|| format!("Could not reach Alterego at {}", config.base_url))?;

    println!(
        "{} {}",
        "Chatting with".dimmed(),
        persona.name.cyan().bold()
    );
    if !persona.documents.is_empty() {
        println!("{} {}", "Grounded in:".dimmed(), persona.documents.join(", "));
    }
    println!("{}", "Type /reset to start over, /exit to quit.".dimmed());

    let mut session = ChatSession::new();

    loop {
        let line: String = Input::new()
            .with_prompt("You".green().to_string())
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;

        let message = match Line::parse(&line) {
            Line::Empty => continue,
            Line::Exit => break,
            Line::Reset => {
                session.reset();
                println!("{} History cleared", "✓".green());
                continue;
            }
            Line::Message(text) => text,
        };

        tracing::debug!(turns = session.turns(), "Sending message");

        match client.chat(message, session.history()).await {
            Ok(reply) => {
                println!("{} {}", format!("{}:", persona.name).cyan().bold(), reply.reply);
                if !reply.tools_invoked.is_empty() {
                    tracing::debug!(tools = ?reply.tools_invoked, "Tools invoked");
                }
                session.record(message, &reply.reply);
            }
            Err(e) => {
                println!("{} {}", "Error:".red(), e);
            }
        }
    }

    println!("{}", "Bye!".dimmed());
    Ok(())
}

async fn cmd_ask(message: String) -> Result<()> {
    if message.trim().is_empty() {
        bail!("Message must not be empty");
    }

    let config = Config::load()?;
    let reply = client(&config).chat(message.trim(), &[]).await?;

    println!("{}", reply.reply);
    Ok(())
}

async fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url);
            println!(
                "  API Key: {}",
                if config.api_key.is_some() { "Set".green() } else { "Not set".red() }
            );
        }

        ConfigAction::SetUrl { url } => {
            config.set_base_url(url);

            print!("Testing connection... ");
            match client(&config).health().await {
                Ok(true) => println!("{}", "OK".green()),
                _ => println!("{}", "unreachable (saved anyway)".yellow()),
            }

            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }

        ConfigAction::SetKey { key } => {
            let api_key = match key {
                Some(k) => k,
                None => Password::new()
                    .with_prompt("API Key")
                    .interact()
                    .context("Failed to read API key")?,
            };

            config.set_api_key(api_key);
            config.save()?;
            println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);
        }
    }

    Ok(())
}
