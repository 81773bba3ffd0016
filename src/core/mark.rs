//! Per-letter guess feedback
//!
//! Scoring compares a guess against the target position by position:
//! a letter in the right spot is correct, a letter the target contains
//! anywhere else is misplaced, everything else is incorrect.
//!
//! A letter the target holds once but the guess repeats is marked misplaced
//! at every occurrence, so a row can show more misplaced cells than the
//! target has matching letters. The board carries a note to that effect.

use super::{WORD_LENGTH, Word};

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    /// Right letter, right position
    Correct,
    /// Letter appears in the target at a different position
    Misplaced,
    /// Letter does not appear in the target
    Incorrect,
}

impl Mark {
    /// How informative this mark is, for keeping the best-known state per
    /// letter (correct beats misplaced beats incorrect).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 2,
            Self::Misplaced => 1,
            Self::Incorrect => 0,
        }
    }

    /// Emoji cell for shareable result grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// Ordered per-position marks for one guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback {
    marks: [Mark; WORD_LENGTH],
}

impl Feedback {
    /// Score a guess against the target
    ///
    /// Pure function, one mark per guess position.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Mark, Word};
    ///
    /// let guess = Word::new("house").unwrap();
    /// let target = Word::new("react").unwrap();
    /// let feedback = Feedback::score(&guess, &target);
    ///
    /// // H, O, U, S miss; E is in the target, elsewhere
    /// assert_eq!(feedback.marks()[0], Mark::Incorrect);
    /// assert_eq!(feedback.marks()[4], Mark::Misplaced);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut marks = [Mark::Incorrect; WORD_LENGTH];

        for (i, mark) in marks.iter_mut().enumerate() {
            let letter = guess.letter_at(i);

            if letter == target.letter_at(i) {
                *mark = Mark::Correct;
            } else if target.contains(letter) {
                *mark = Mark::Misplaced;
            }
        }

        Self { marks }
    }

    /// The per-position marks, in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.marks
    }

    /// Iterate over (position, mark) pairs
    pub fn iter(&self) -> impl Iterator<Item = Mark> + '_ {
        self.marks.iter().copied()
    }

    /// True when every position is correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.marks.iter().all(|&m| m == Mark::Correct)
    }

    /// Emoji row for shareable result grids
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|m| m.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &str, target: &str) -> Feedback {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn score_produces_one_mark_per_position() {
        let feedback = score("house", "react");
        assert_eq!(feedback.marks().len(), WORD_LENGTH);
    }

    #[test]
    fn score_all_correct_on_exact_match() {
        let feedback = score("react", "react");
        assert!(feedback.is_all_correct());
        assert_eq!(feedback.marks(), &[Mark::Correct; WORD_LENGTH]);
    }

    #[test]
    fn score_all_incorrect_on_disjoint_letters() {
        let feedback = score("bumpy", "steal");
        assert_eq!(feedback.marks(), &[Mark::Incorrect; WORD_LENGTH]);
        assert!(!feedback.is_all_correct());
    }

    #[test]
    fn score_position_match_beats_containment() {
        let feedback = score("horse", "mouse");
        assert_eq!(
            feedback.marks(),
            &[
                Mark::Incorrect, // h
                Mark::Correct,   // o
                Mark::Incorrect, // r
                Mark::Correct,   // s
                Mark::Correct,   // e
            ]
        );
    }

    #[test]
    fn score_misplaced_when_target_contains_letter_elsewhere() {
        // Every letter of "stone" appears in "notes", none in place.
        let feedback = score("stone", "notes");
        assert_eq!(feedback.marks(), &[Mark::Misplaced; WORD_LENGTH]);
    }

    #[test]
    fn score_game_house_plant_react() {
        let house = score("house", "react");
        assert_eq!(
            house.marks(),
            &[
                Mark::Incorrect, // h
                Mark::Incorrect, // o
                Mark::Incorrect, // u
                Mark::Incorrect, // s
                Mark::Misplaced, // e appears in react
            ]
        );

        let plant = score("plant", "react");
        assert_eq!(
            plant.marks(),
            &[
                Mark::Incorrect, // p
                Mark::Incorrect, // l
                Mark::Correct,   // a lines up with re_a_ct
                Mark::Incorrect, // n
                Mark::Correct,   // t
            ]
        );

        assert!(score("react", "react").is_all_correct());
    }

    #[test]
    fn score_repeated_letter_overcounts_misplaced() {
        // "eerie" guesses E three times against a target with a single E.
        // Positional scoring marks every non-exact E misplaced; repeats are
        // not capped by how many Es the target actually has.
        let feedback = score("eerie", "crane");
        assert_eq!(
            feedback.marks(),
            &[
                Mark::Misplaced, // e
                Mark::Misplaced, // e
                Mark::Misplaced, // r
                Mark::Incorrect, // i
                Mark::Correct,   // e
            ]
        );
    }

    #[test]
    fn mark_rank_ordering() {
        assert!(Mark::Correct.rank() > Mark::Misplaced.rank());
        assert!(Mark::Misplaced.rank() > Mark::Incorrect.rank());
    }

    #[test]
    fn feedback_to_emoji() {
        let feedback = score("plant", "react");
        assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
        assert_eq!(score("react", "react").to_emoji(), "🟩🟩🟩🟩🟩");
    }
}
