//! llmgate CLI — entry point.
//!
//! # Commands
//!
//! - `llmgate ask -m MODEL PROMPT` — send one prompt, print the response
//! - `llmgate models` — list the model names the facade can route

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use llmgate_providers::{registry, resolve_with_params, ClaudeParams};

// ─────────────────────────────────────────────
// CLI definition
// ─────────────────────────────────────────────

/// Unified client for OpenAI, xAI, DeepSeek, Azure OpenAI and AWS Claude
#[derive(Parser)]
#[command(name = "llmgate", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a single prompt to a model
    Ask {
        /// Model name (see `llmgate models`)
        #[arg(short, long, default_value = "gpt-4o")]
        model: String,

        /// The prompt text
        prompt: String,

        /// Maximum tokens to generate (AWS Claude only)
        #[arg(long)]
        max_tokens: Option<u32>,

        /// Enable debug logging
        #[arg(long, default_value_t = false)]
        logs: bool,
    },

    /// List known model names
    Models,
}

// ─────────────────────────────────────────────
// Entrypoint
// ─────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ask {
            model,
            prompt,
            max_tokens,
            logs,
        } => {
            init_logging(logs);
            run_ask(&model, &prompt, max_tokens).await
        }
        Commands::Models => {
            for model in registry::known_models() {
                println!("{}", model);
            }
            Ok(())
        }
    }
}

async fn run_ask(model: &str, prompt: &str, max_tokens: Option<u32>) -> Result<()> {
    let mut params = ClaudeParams::default();
    if let Some(max_tokens) = max_tokens {
        params.max_tokens = max_tokens;
    }

    let client = resolve_with_params(model, params)?;
    let completion = client.respond(prompt).await?;

    println!("{}", completion.text);
    println!(
        "{}",
        format!(
            "[{} · {:.2}s]",
            client.display_name(),
            completion.elapsed_secs()
        )
        .dimmed()
    );
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("llmgate_providers=debug,llmgate_core=debug,info")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
