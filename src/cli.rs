//! Command-line interface for strictly_hangman.

use clap::{Parser, Subcommand};

/// Strictly Hangman - pure hangman engine with a terminal client
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Guess the hidden word, one letter at a time", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play hangman in the terminal UI
    Play {
        /// Fixed word to play instead of a random pick (reproducible games)
        #[arg(long)]
        word: Option<String>,
    },

    /// Replay a scripted guess sequence against a fixed word
    Replay {
        /// The hidden word
        #[arg(long)]
        word: String,

        /// Letters to guess, in order (e.g. "eqrbfz")
        #[arg(long)]
        guesses: String,
    },
}
