use serde::{Deserialize, Serialize};

/// Progression through one word list: which word is up next and how the
/// finished ones went. `words_guessed + words_missed == current_word_index`
/// after every resolved round.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    words: Vec<String>,
    current_word_index: usize,
    words_guessed: usize,
    words_missed: usize,
}

impl Session {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            current_word_index: 0,
            words_guessed: 0,
            words_missed: 0,
        }
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.current_word_index).map(String::as_str)
    }

    pub fn current_word_index(&self) -> usize {
        self.current_word_index
    }

    pub fn words_guessed(&self) -> usize {
        self.words_guessed
    }

    pub fn words_missed(&self) -> usize {
        self.words_missed
    }

    pub fn total(&self) -> usize {
        self.words.len()
    }

    pub fn remaining(&self) -> usize {
        self.words.len() - (self.words_guessed + self.words_missed)
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True once every word in the list has been resolved.
    pub fn exhausted(&self) -> bool {
        self.current_word_index == self.words.len()
    }

    pub fn record_win(&mut self) {
        self.words_guessed += 1;
        self.current_word_index += 1;
    }

    pub fn record_miss(&mut self) {
        self.words_missed += 1;
        self.current_word_index += 1;
    }

    /// Full restart: back to the first word, counters cleared.
    pub fn restart(&mut self) {
        self.current_word_index = 0;
        self.words_guessed = 0;
        self.words_missed = 0;
    }

    /// Swaps in a freshly loaded word list, keeping position and counters.
    /// If the list shrank past the current index the session restarts.
    pub fn replace_words(&mut self, words: Vec<String>) {
        self.words = words;
        if self.current_word_index > self.words.len() {
            self.restart();
        }
    }
}

/// Position across word lists: a level holds one or more games, each game
/// one word list. Stored zero-based, displayed one-based.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Progression {
    pub level: usize,
    pub game: usize,
    pub games_at_level: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn counters_track_the_index() {
        let mut session = Session::new(words(&["CAT", "DOG", "PIG"]));
        session.record_win();
        session.record_miss();
        assert_eq!(
            session.words_guessed() + session.words_missed(),
            session.current_word_index()
        );
        assert_eq!(session.remaining(), 1);
        assert!(!session.exhausted());
        session.record_win();
        assert!(session.exhausted());
        assert_eq!(session.current_word(), None);
    }

    #[test]
    fn restart_clears_counters() {
        let mut session = Session::new(words(&["CAT"]));
        session.record_miss();
        session.restart();
        assert_eq!(session.current_word(), Some("CAT"));
        assert_eq!(session.words_missed(), 0);
    }

    #[test]
    fn replace_words_keeps_position_unless_list_shrank() {
        let mut session = Session::new(words(&["CAT", "DOG"]));
        session.record_win();
        session.replace_words(words(&["CAT", "COW"]));
        assert_eq!(session.current_word(), Some("COW"));

        session.replace_words(words(&[]));
        assert_eq!(session.current_word_index(), 0);
    }
}
