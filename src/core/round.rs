use serde::{Deserialize, Serialize};

/// Shown in the revealed pattern for letters not yet guessed.
pub const PLACEHOLDER: char = '_';

/// One attempt at a single hidden word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    word: String,
    letters_guessed: Vec<char>,
    guesses_remaining: u8,
}

impl Round {
    pub fn new(word: &str, max_guesses: u8) -> Self {
        Self {
            word: word.trim().to_uppercase(),
            letters_guessed: Vec::new(),
            guesses_remaining: max_guesses,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn guesses_remaining(&self) -> u8 {
        self.guesses_remaining
    }

    /// Total letters submitted this round. Repeats count again, which is
    /// what the status line reports.
    pub fn guess_count(&self) -> usize {
        self.letters_guessed.len()
    }

    /// Records a guessed letter and returns whether it appears in the word.
    /// A miss costs one remaining guess, repeat misses included.
    pub fn apply(&mut self, letter: char) -> bool {
        self.letters_guessed.push(letter);
        let hit = self.word.contains(letter);
        if !hit {
            self.guesses_remaining = self.guesses_remaining.saturating_sub(1);
        }
        hit
    }

    /// The display string: guessed letters in place, placeholders elsewhere,
    /// positions joined by single spaces. A one-letter word is a bare
    /// placeholder with no separator.
    pub fn revealed_pattern(&self) -> String {
        let cells: Vec<String> = self
            .word
            .chars()
            .map(|c| {
                if self.letters_guessed.contains(&c) {
                    c.to_string()
                } else {
                    PLACEHOLDER.to_string()
                }
            })
            .collect();
        cells.join(" ")
    }

    pub fn is_revealed(&self) -> bool {
        self.word.chars().all(|c| self.letters_guessed.contains(&c))
    }

    pub fn is_lost(&self) -> bool {
        self.guesses_remaining == 0 && !self.is_revealed()
    }

    pub fn is_over(&self) -> bool {
        self.is_revealed() || self.guesses_remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_round_is_all_placeholders() {
        let round = Round::new("garden", 8);
        assert_eq!(round.word(), "GARDEN");
        assert_eq!(round.revealed_pattern(), "_ _ _ _ _ _");
        assert_eq!(round.guesses_remaining(), 8);
    }

    #[test]
    fn one_letter_word_has_no_separator() {
        let round = Round::new("A", 8);
        assert_eq!(round.revealed_pattern(), "_");
    }

    #[test]
    fn hit_reveals_every_occurrence() {
        let mut round = Round::new("SEED", 8);
        assert!(round.apply('E'));
        assert_eq!(round.revealed_pattern(), "_ E E _");
        assert_eq!(round.guesses_remaining(), 8);
    }

    #[test]
    fn miss_costs_a_guess_and_repeats_cost_again() {
        let mut round = Round::new("CAT", 8);
        assert!(!round.apply('Z'));
        assert!(!round.apply('Z'));
        assert_eq!(round.guesses_remaining(), 6);
        assert_eq!(round.guess_count(), 2);
    }

    #[test]
    fn revealing_all_letters_wins() {
        let mut round = Round::new("CAT", 8);
        for l in ['C', 'A', 'T'] {
            round.apply(l);
        }
        assert!(round.is_revealed());
        assert!(round.is_over());
        assert!(!round.is_lost());
    }
}
