use serde::Serialize;
use tracing::{info, warn};

use crate::core::error::GameError;
use crate::core::round::Round;
use crate::core::session::{Progression, Session};
use crate::core::sound::SoundCue;
use crate::core::words::WordSource;

pub const DEFAULT_MAX_GUESSES: u8 = 8;

const INITIAL_PROMPT: &str = "How Many Guesses to Uncover the Hidden Word?";
const EXHAUSTED_NOTICE: &str = "You've tried all the words! Restart?";
const LOAD_FAILED_MESSAGE: &str =
    "No words could be loaded for this level and game. Fix the word files and try again.";

/// Where the game stands after the latest operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Round live, last guess (if any) was a miss.
    AwaitingGuess,
    /// Round live, last guess was a hit.
    CorrectGuess,
    WordWon,
    WordLost,
    /// Every word in the list has been resolved.
    AllWordsExhausted,
    /// The word source came back empty. Input stays disabled.
    LoadFailed,
}

/// What one guess produced. Sounds are listed in emission order; the player
/// stops the previous cue when the next starts.
#[derive(Debug, Clone)]
pub struct GuessOutcome {
    pub status: GameStatus,
    pub sounds: Vec<SoundCue>,
    /// A miss: the presenter shows the wilt image until the revert timer fires.
    pub wilted: bool,
}

/// Read-only view handed to the presenter. Level and game are one-based
/// for display.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub status_message: String,
    pub revealed: String,
    pub words_guessed: usize,
    pub words_missed: usize,
    pub words_remaining: usize,
    pub words_total: usize,
    pub level: usize,
    pub game: usize,
    pub games_at_level: usize,
    pub guesses_remaining: u8,
    pub image: String,
    pub continue_label: String,
    pub input_live: bool,
}

/// The progression state machine. Owns all game state; presentation layers
/// get a [`Snapshot`] and feed letters back in.
pub struct GameEngine {
    source: Box<dyn WordSource>,
    max_guesses: u8,
    progression: Progression,
    session: Session,
    round: Option<Round>,
    status: GameStatus,
    status_message: String,
}

impl GameEngine {
    pub fn new(source: Box<dyn WordSource>, level: usize, game: usize, max_guesses: u8) -> Self {
        let mut engine = Self {
            source,
            max_guesses,
            progression: Progression {
                level,
                game,
                games_at_level: 0,
            },
            session: Session::default(),
            round: None,
            status: GameStatus::LoadFailed,
            status_message: String::new(),
        };
        engine.reload();
        if engine.start_round().is_err() {
            warn!(level, game, "started without a playable word list");
        }
        engine
    }

    /// Pulls the word list for the current (level, game) from the source.
    /// Called again on every advance, so edits to the files show up without
    /// a restart.
    fn reload(&mut self) {
        let list = self
            .source
            .load(self.progression.level, self.progression.game);
        self.progression.games_at_level = list.games_at_level;
        self.session.replace_words(list.words);
    }

    /// Begins the round for the word at the session's current index.
    pub fn start_round(&mut self) -> Result<(), GameError> {
        if self.session.is_empty() {
            self.round = None;
            self.status = GameStatus::LoadFailed;
            self.status_message = LOAD_FAILED_MESSAGE.to_string();
            return Err(GameError::ResourceLoad {
                level: self.progression.level,
                game: self.progression.game,
            });
        }
        let Some(word) = self.session.current_word() else {
            return Err(GameError::OutOfWords {
                index: self.session.current_word_index(),
                len: self.session.total(),
            });
        };
        self.round = Some(Round::new(word, self.max_guesses));
        self.status = GameStatus::AwaitingGuess;
        self.status_message = INITIAL_PROMPT.to_string();
        info!(
            level = self.progression.level,
            game = self.progression.game,
            word_index = self.session.current_word_index(),
            "round started"
        );
        Ok(())
    }

    /// Evaluates one guessed letter. Returns `None` without touching any
    /// state when the input is not a letter or no round is live.
    pub fn submit_letter(&mut self, letter: char) -> Option<GuessOutcome> {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_alphabetic() {
            return None;
        }
        let round = match self.round.as_mut() {
            Some(round) if !round.is_over() => round,
            _ => return None,
        };

        let hit = round.apply(letter);
        let guesses = round.guess_count();
        let mut sounds = vec![if hit {
            SoundCue::Correct
        } else {
            SoundCue::Incorrect
        }];

        let status = if round.is_revealed() {
            self.status_message = format!(
                "You Guessed It!, It took you {} guess{}",
                guesses,
                plural_es(guesses)
            );
            self.session.record_win();
            sounds.push(SoundCue::WordGuessed);
            GameStatus::WordWon
        } else if round.guesses_remaining() == 0 {
            self.status_message = format!("Game Over, You Lost! The word was {}", round.word());
            self.session.record_miss();
            sounds.push(SoundCue::WordNotGuessed);
            GameStatus::WordLost
        } else {
            self.status_message = format!("You've made {} guess{}", guesses, plural_es(guesses));
            if hit {
                GameStatus::CorrectGuess
            } else {
                GameStatus::AwaitingGuess
            }
        };

        self.status = status;
        if matches!(status, GameStatus::WordWon | GameStatus::WordLost) && self.session.exhausted()
        {
            self.status = GameStatus::AllWordsExhausted;
            self.status_message.push('\n');
            self.status_message.push_str(EXHAUSTED_NOTICE);
        }

        Some(GuessOutcome {
            status,
            sounds,
            wilted: !hit,
        })
    }

    /// The continuation action: next word, or a full session restart once
    /// the list is exhausted. Re-attempts the load after a failure.
    pub fn advance_or_restart(&mut self) -> Result<(), GameError> {
        if self.session.exhausted() {
            info!(
                guessed = self.session.words_guessed(),
                missed = self.session.words_missed(),
                "word list exhausted, restarting session"
            );
            self.session.restart();
        }
        self.reload();
        self.start_round()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Guess input is only live mid-round; after a win, loss, or load
    /// failure the continuation action takes over.
    pub fn input_live(&self) -> bool {
        matches!(
            self.status,
            GameStatus::AwaitingGuess | GameStatus::CorrectGuess
        )
    }

    pub fn continue_label(&self) -> &'static str {
        match self.status {
            GameStatus::AllWordsExhausted => "Restart Game?",
            GameStatus::LoadFailed => "Try Again?",
            _ => "Another Word?",
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn snapshot(&self) -> Snapshot {
        let guesses_remaining = self
            .round
            .as_ref()
            .map_or(self.max_guesses, Round::guesses_remaining);
        Snapshot {
            status_message: self.status_message.clone(),
            revealed: self
                .round
                .as_ref()
                .map(Round::revealed_pattern)
                .unwrap_or_default(),
            words_guessed: self.session.words_guessed(),
            words_missed: self.session.words_missed(),
            words_remaining: self.session.remaining(),
            words_total: self.session.total(),
            level: self.progression.level + 1,
            game: self.progression.game + 1,
            games_at_level: self.progression.games_at_level,
            guesses_remaining,
            image: format!("flower{}", guesses_remaining),
            continue_label: self.continue_label().to_string(),
            input_live: self.input_live(),
        }
    }
}

fn plural_es(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "es"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::words::WordList;

    struct Fixed(Vec<&'static str>);

    impl WordSource for Fixed {
        fn load(&self, _level: usize, _game: usize) -> WordList {
            WordList {
                words: self.0.iter().map(|w| w.to_string()).collect(),
                games_at_level: 1,
            }
        }
    }

    fn engine(words: Vec<&'static str>) -> GameEngine {
        GameEngine::new(Box::new(Fixed(words)), 0, 0, DEFAULT_MAX_GUESSES)
    }

    #[test]
    fn empty_source_blocks_the_game() {
        let mut engine = engine(vec![]);
        assert_eq!(engine.status(), GameStatus::LoadFailed);
        assert!(!engine.input_live());
        assert_eq!(engine.continue_label(), "Try Again?");
        assert!(engine.submit_letter('A').is_none());
        assert!(engine.advance_or_restart().is_err());
    }

    #[test]
    fn non_letters_and_dead_rounds_are_no_ops() {
        let mut engine = engine(vec!["CAT"]);
        assert!(engine.submit_letter('3').is_none());
        assert!(engine.submit_letter(' ').is_none());
        for l in ['C', 'A', 'T'] {
            engine.submit_letter(l);
        }
        assert!(engine.submit_letter('Z').is_none());
    }

    #[test]
    fn exhaustion_appends_the_restart_notice() {
        let mut engine = engine(vec!["A"]);
        let outcome = engine.submit_letter('A').unwrap();
        assert_eq!(outcome.status, GameStatus::WordWon);
        assert_eq!(engine.status(), GameStatus::AllWordsExhausted);
        assert!(engine
            .status_message()
            .ends_with("You've tried all the words! Restart?"));
        assert_eq!(engine.continue_label(), "Restart Game?");
    }

    #[test]
    fn guess_cue_precedes_the_word_cue() {
        let mut engine = engine(vec!["A"]);
        let outcome = engine.submit_letter('A').unwrap();
        assert_eq!(outcome.sounds, [SoundCue::Correct, SoundCue::WordGuessed]);
    }

    #[test]
    fn lowercase_input_is_normalized() {
        let mut engine = engine(vec!["CAT"]);
        let outcome = engine.submit_letter('c').unwrap();
        assert_eq!(outcome.status, GameStatus::CorrectGuess);
        assert_eq!(engine.round().unwrap().revealed_pattern(), "C _ _");
    }
}
