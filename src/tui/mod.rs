//! Terminal UI for Strictly Hangman

#![warn(missing_docs)]

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use strictly_hangman::{GameState, Guess, Outcome, WordList};
use tracing::{error, info, instrument};

/// Run the interactive hangman client.
///
/// With `word` set, every game in the session uses that fixed word
/// (reproducible play); otherwise each game draws from the built-in
/// word list.
pub async fn run_tui(word: Option<String>) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("strictly_hangman_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Hangman TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, word).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Game loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Interactive game loop - draw the state, apply guesses, thread the chain.
#[instrument(skip_all, fields(fixed_word = fixed_word.is_some()))]
async fn run_game<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    fixed_word: Option<String>,
) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    use tokio::time::{Duration, sleep};

    let words = WordList::builtin();
    let new_game = |words: &WordList| -> Result<GameState> {
        match &fixed_word {
            Some(word) => Ok(GameState::new(word.clone())),
            None => Ok(GameState::from_source(words)?),
        }
    };

    let mut state = new_game(&words)?;
    let mut outcome: Option<Outcome> = None;
    let mut message = String::from("Guess a letter.");

    info!(word_length = state.word_length(), "New game started");

    loop {
        let game_over = outcome.is_some_and(|o| o.is_terminal());

        // Draw current game state
        terminal.draw(|f| {
            use ratatui::widgets::{Block, Borders, Paragraph};

            let letters = state
                .letters_used()
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");

            let help = if game_over {
                "Press 'n' for a new game, 'q' to quit"
            } else {
                "Type a letter to guess, Esc to quit"
            };

            let text = format!(
                "Word: {}\n\nTurns left: {}\nLetters used: {}\n\n{}\n\n{}",
                state.render_word(game_over),
                state.turns_left(),
                letters,
                message,
                help
            );

            let paragraph = Paragraph::new(text)
                .block(Block::default().title("Strictly Hangman").borders(Borders::ALL));

            f.render_widget(paragraph, f.area());
        })?;

        // Check for keyboard input (non-blocking)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => {
                        info!("User quit");
                        return Ok(());
                    }
                    KeyCode::Char('q') if game_over => {
                        info!("User quit after game over");
                        return Ok(());
                    }
                    KeyCode::Char('n') if game_over => {
                        state = new_game(&words)?;
                        outcome = None;
                        message = String::from("Guess a letter.");
                        info!(word_length = state.word_length(), "New game started");
                    }
                    KeyCode::Char(c) if !game_over && c.is_ascii_alphabetic() => {
                        // The built-in corpus is lowercase; normalize to match.
                        let letter = c.to_ascii_lowercase();
                        let result = state.make_move(Guess::new(letter));

                        message = match result.outcome() {
                            Outcome::Won => {
                                format!("You won! The word was: {}", result.state().render_word(true))
                            }
                            Outcome::Lost => {
                                format!("Out of turns. The word was: {}", result.state().render_word(true))
                            }
                            Outcome::GoodGuess => format!("'{}' is in the word.", letter),
                            Outcome::BadGuess => format!("'{}' is not in the word.", letter),
                        };

                        info!(
                            letter = %letter,
                            outcome = %result.outcome(),
                            turns_left = result.state().turns_left(),
                            "Applied guess"
                        );

                        outcome = Some(result.outcome());
                        state = result.into_state();
                    }
                    _ => {}
                }
            }
        }

        // Poll rate
        sleep(Duration::from_millis(50)).await;
    }
}
