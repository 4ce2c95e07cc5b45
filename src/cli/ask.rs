//! Ask command: one question to Dr. Stone

use anyhow::{bail, Context, Result};

use drstone::assistant::{Assistant, GeminiClient};
use drstone::config::Config;

use super::render::markdown_to_terminal;

pub async fn ask_command(config: &Config, concept: Vec<String>) -> Result<()> {
    let query = concept.join(" ");
    if query.trim().is_empty() {
        bail!("Nothing to ask. Usage: drstone ask <concept>");
    }

    let assistant = Assistant::new(GeminiClient::from_settings(&config.assistant));
    println!("Consulting the archives...\n");

    // The HTTP client is blocking
    let exchange = tokio::task::spawn_blocking(move || assistant.ask(&query))
        .await
        .context("Assistant task failed")?;

    let Some(exchange) = exchange else {
        return Ok(());
    };

    if exchange.reply.is_unavailable() {
        eprintln!("{}", exchange.reply.text());
    } else {
        println!("{}", markdown_to_terminal(exchange.reply.text()));
    }

    Ok(())
}
