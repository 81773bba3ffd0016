//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI. Each prompt takes a whole word;
//! the session's action machinery still does the filtering and confirmation.

use crate::core::{Action, GameSession, GameStatus, MAX_GUESSES, Word};
use crate::output::{colored_row, emoji_grid};
use crate::services::{Dictionary, WordSource};
use anyhow::Result;
use colored::Colorize;
use rand::seq::IndexedRandom;
use std::io::{self, Write};
use tracing::warn;

/// Run the line-based game mode
///
/// `initial_target` seeds the first game; a fixed target (practice mode)
/// skips candidate fetching entirely.
///
/// # Errors
///
/// Returns an error on stdin/stdout failures. Service failures never end
/// the game; they are logged and play continues.
pub fn run_simple(
    source: &dyn WordSource,
    dictionary: &dyn Dictionary,
    initial_target: Word,
    fixed_target: bool,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Terminal Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the five-letter word in {MAX_GUESSES} tries.");
    println!("  - Green tiles are in the right spot");
    println!("  - Yellow tiles are in the word, elsewhere");
    println!("  - Misplaced tiles can over-count repeated letters\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut session = GameSession::new(next_target(source, &initial_target, fixed_target));

    loop {
        let attempt = session.guesses().len() + 1;
        let input = read_line(&format!("Guess {attempt}/{MAX_GUESSES}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = GameSession::new(next_target(source, session.target(), fixed_target));
                println!("\nNew game started!\n");
                continue;
            }
            line => {
                let Ok(word) = Word::new(line) else {
                    println!("Enter exactly five letters A-Z.\n");
                    continue;
                };

                submit_word(&mut session, dictionary, &word);
            }
        }

        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Won => {
                print_win_banner(&session);
                if !play_again(&mut session, source, fixed_target)? {
                    return Ok(());
                }
            }
            GameStatus::Lost => {
                print_loss_banner(&session);
                if !play_again(&mut session, source, fixed_target)? {
                    return Ok(());
                }
            }
        }
    }
}

/// Feed a whole typed word through the session's action machinery
fn submit_word(session: &mut GameSession, dictionary: &dyn Dictionary, word: &Word) {
    // The buffer is empty between prompts; type the word in, then confirm.
    for c in word.text().chars() {
        session.apply(Action::Append(c));
    }

    let Some(submitted) = session.apply(Action::Confirm) else {
        return;
    };

    let valid = dictionary.validate(&submitted).unwrap_or_else(|err| {
        warn!(error = %err, word = submitted.text(), "dictionary lookup failed");
        false
    });

    if valid {
        let feedback = session.score(&submitted);
        println!("\n  {}\n", colored_row(&submitted, &feedback));
        session.accept_guess(submitted);
    } else {
        println!(
            "'{}' isn't in the dictionary, try again.\n",
            submitted.text().to_uppercase()
        );
        // The attempt is not consumed; drop the typed letters for the next prompt.
        while !session.buffer().is_empty() {
            session.apply(Action::Delete);
        }
    }
}

/// Pick the next target, keeping the current one when the fetch fails
fn next_target(source: &dyn WordSource, current: &Word, fixed_target: bool) -> Word {
    if fixed_target {
        return current.clone();
    }

    match source.fetch_candidates() {
        Ok(candidates) => candidates.choose(&mut rand::rng()).cloned().map_or_else(
            || {
                warn!("word source returned no candidates");
                current.clone()
            },
            |word| word,
        ),
        Err(err) => {
            warn!(error = %err, "word fetch failed");
            current.clone()
        }
    }
}

fn print_win_banner(session: &GameSession) {
    let turns = session.guesses().len();

    println!("{}", "═".repeat(64).bright_cyan());
    println!(
        "{}",
        "               ✨  S O L V E D !  ✨               "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(64).bright_cyan());

    let performance = match turns {
        1 => "Unbelievable, first try!",
        2 => "Magnificent!",
        3 => "Splendid!",
        4 => "Great job!",
        5 => "Nice work!",
        _ => "Phew, that was close!",
    };

    println!("\n  {}", performance.bright_yellow().bold());
    println!(
        "  Got '{}' in {} {}\n",
        session.target().text().to_uppercase().bright_white().bold(),
        turns,
        if turns == 1 { "guess" } else { "guesses" }
    );

    print_result_grid(session);
}

fn print_loss_banner(session: &GameSession) {
    println!("{}", "═".repeat(64).bright_cyan());
    println!("{}", "                 Out of guesses!                 ".bright_red().bold());
    println!("{}", "═".repeat(64).bright_cyan());
    println!(
        "\n  The word was: {}\n",
        session.target().text().to_uppercase().bright_white().bold()
    );

    print_result_grid(session);
}

fn print_result_grid(session: &GameSession) {
    let rows: Vec<_> = session
        .guesses()
        .iter()
        .map(|guess| session.score(guess))
        .collect();

    println!("{}\n", emoji_grid(&rows));
}

/// Offer a new game; returns false when the player is done
fn play_again(
    session: &mut GameSession,
    source: &dyn WordSource,
    fixed_target: bool,
) -> Result<bool> {
    match read_line("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => {
            *session = GameSession::new(next_target(source, session.target(), fixed_target));
            println!("\nNew game started!\n");
            Ok(true)
        }
        _ => {
            println!("\nThanks for playing!\n");
            Ok(false)
        }
    }
}

/// Read one trimmed line of input with a prompt
fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
