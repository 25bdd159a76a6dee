//! Strictly Hangman - Unified CLI
//!
//! Pure hangman engine with interactive and scripted clients.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_hangman::{GameState, Outcome};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { word } => tui::run_tui(word).await,
        Command::Replay { word, guesses } => run_replay(word, guesses),
    }
}

/// Replay a scripted guess sequence and print the transcript.
#[instrument(skip_all, fields(word = %word))]
fn run_replay(word: String, guesses: String) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("Replaying scripted game");

    let letters: Vec<char> = guesses
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();

    let transcript = GameState::replay(word, &letters);

    for (letter, result) in letters.iter().zip(transcript.iter()) {
        let reveal = result.outcome() == Outcome::Won;
        println!(
            "guess '{}': {:<10}  {}  (turns left: {})",
            letter,
            result.outcome().to_string(),
            result.state().render_word(reveal),
            result.state().turns_left()
        );
    }

    if let Some(last) = transcript.last() {
        match last.outcome() {
            Outcome::Won => println!("Solved in {} guesses.", transcript.len()),
            Outcome::Lost => println!(
                "Out of turns. The word was: {}",
                last.state().render_word(true)
            ),
            _ => println!("No terminal outcome after {} guesses.", transcript.len()),
        }
    }

    Ok(())
}
