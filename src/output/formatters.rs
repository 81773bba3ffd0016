//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Render a scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .text()
        .chars()
        .zip(feedback.iter())
        .map(|(letter, mark)| {
            let cell = format!(" {} ", letter.to_ascii_uppercase());
            match mark {
                Mark::Correct => cell.black().on_green().bold().to_string(),
                Mark::Misplaced => cell.black().on_yellow().bold().to_string(),
                Mark::Incorrect => cell.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shareable emoji grid for a finished game, one line per guess
#[must_use]
pub fn emoji_grid(rows: &[Feedback]) -> String {
    rows.iter()
        .map(Feedback::to_emoji)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::score(
            &Word::new(guess).unwrap(),
            &Word::new(target).unwrap(),
        )
    }

    #[test]
    fn emoji_grid_one_line_per_guess() {
        let rows = vec![feedback("house", "react"), feedback("react", "react")];
        assert_eq!(emoji_grid(&rows), "⬜⬜⬜⬜🟨\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_grid_empty() {
        assert_eq!(emoji_grid(&[]), "");
    }

    #[test]
    fn colored_row_contains_uppercase_letters() {
        let row = colored_row(&Word::new("house").unwrap(), &feedback("house", "react"));
        for letter in ["H", "O", "U", "S", "E"] {
            assert!(row.contains(letter));
        }
    }
}
