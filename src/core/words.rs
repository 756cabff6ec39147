use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Compiled-in fallback table: levels, then games, then words.
const BUILTIN: &[&[&[&str]]] = &[
    &[
        &["CAT", "DOG", "PIG", "BAT", "COW"],
        &["SHEEP", "LION", "TIGER", "BEAR", "GOAT"],
    ],
    &[
        &[
            "ACCIDENT", "BALANCE", "BRAIN", "CHEER", "CORNER", "DEMOLISH", "ENEMY", "FLAP",
            "GIFT", "ISLAND", "MOTOR",
        ],
        &[
            "AGREE", "BANNER", "BRANCH", "CHEW", "COUPLE", "DESIGN", "EXACTLY", "FLOAT",
            "GRAVITY", "LEADER", "NERVOUS",
        ],
    ],
    &[
        &[
            "ABILITY", "AMBITION", "BORDER", "COAST", "DECAY", "DRIFT", "FRAIL", "INDIVIDUAL",
            "METHOD", "OPPOSITE", "PREDICT",
        ],
        &[
            "ABSORB", "ANCIENT", "BRIEF", "CONFESS", "DEED", "ELEGANT", "GASP", "INTELLIGENT",
            "MISERY", "ORDEAL", "PREVENT",
        ],
    ],
];

/// What a source hands back for one (level, game) pair: the words for that
/// game, plus how many games exist at the level.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    pub words: Vec<String>,
    pub games_at_level: usize,
}

impl WordList {
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_raw(raw: Vec<String>, games_at_level: usize) -> Self {
        let words = raw
            .into_iter()
            .map(|w| w.trim().to_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words,
            games_at_level,
        }
    }
}

/// Supplies the word list for a (level, game) pair, zero-based. A source
/// never fails the caller: missing or malformed data comes back as an empty
/// list with a logged diagnostic.
pub trait WordSource {
    fn load(&self, level: usize, game: usize) -> WordList;
}

/// The compiled-in word table.
#[derive(Debug, Default)]
pub struct BuiltinWords;

impl WordSource for BuiltinWords {
    fn load(&self, level: usize, game: usize) -> WordList {
        let Some(games) = BUILTIN.get(level) else {
            warn!(level, "no builtin level");
            return WordList::empty();
        };
        let Some(words) = games.get(game) else {
            warn!(level, game, "no builtin game at level");
            return WordList::empty();
        };
        WordList::from_raw(words.iter().map(|w| w.to_string()).collect(), games.len())
    }
}

/// One JSON file per (level, game) pair: `words-L-G.json` holding a flat
/// array of strings, numbered one-based.
#[derive(Debug)]
pub struct GameFileWords {
    dir: PathBuf,
}

impl GameFileWords {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_for(&self, level: usize, game: usize) -> PathBuf {
        self.dir.join(format!("words-{}-{}.json", level + 1, game + 1))
    }
}

impl WordSource for GameFileWords {
    fn load(&self, level: usize, game: usize) -> WordList {
        let path = self.file_for(level, game);
        let Some(raw) = read_json::<Vec<String>>(&path) else {
            return WordList::empty();
        };
        // The level's game count is however many numbered files exist.
        let mut games_at_level = 0;
        while self.file_for(level, games_at_level).is_file() {
            games_at_level += 1;
        }
        debug!(level, game, count = raw.len(), "loaded per-game word file");
        WordList::from_raw(raw, games_at_level)
    }
}

/// One JSON file per level: `levelL.json` holding an array of games, each
/// game an array of words.
#[derive(Debug)]
pub struct LevelFileWords {
    dir: PathBuf,
}

impl LevelFileWords {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl WordSource for LevelFileWords {
    fn load(&self, level: usize, game: usize) -> WordList {
        let path = self.dir.join(format!("level{}.json", level + 1));
        let Some(games) = read_json::<Vec<Vec<String>>>(&path) else {
            return WordList::empty();
        };
        let games_at_level = games.len();
        let Some(raw) = games.into_iter().nth(game) else {
            warn!(level, game, games_at_level, "game index past the level file");
            return WordList::empty();
        };
        debug!(level, game, count = raw.len(), "loaded level word file");
        WordList::from_raw(raw, games_at_level)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read word file");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed word file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    #[test]
    fn builtin_first_level_has_two_games() {
        let list = BuiltinWords.load(0, 0);
        assert_eq!(list.words, ["CAT", "DOG", "PIG", "BAT", "COW"]);
        assert_eq!(list.games_at_level, 2);
    }

    #[test]
    fn builtin_out_of_range_is_empty_not_a_panic() {
        assert!(BuiltinWords.load(9, 0).words.is_empty());
        assert!(BuiltinWords.load(0, 9).words.is_empty());
    }

    #[test]
    fn level_file_source_reads_games_and_counts_them() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = File::create(dir.path().join("level1.json")).unwrap();
        write!(f, r#"[["cat", "dog"], ["pig"]]"#).unwrap();

        let source = LevelFileWords::new(dir.path());
        let list = source.load(0, 1);
        assert_eq!(list.words, ["PIG"]);
        assert_eq!(list.games_at_level, 2);
    }

    #[test]
    fn level_file_missing_or_malformed_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let source = LevelFileWords::new(dir.path());
        assert!(source.load(0, 0).words.is_empty());

        let mut f = File::create(dir.path().join("level1.json")).unwrap();
        write!(f, "not json").unwrap();
        assert!(source.load(0, 0).words.is_empty());
    }

    #[test]
    fn game_file_source_counts_sibling_files() {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in [
            ("words-1-1.json", r#"["cat"]"#),
            ("words-1-2.json", r#"["dog", "cow"]"#),
        ] {
            let mut f = File::create(dir.path().join(name)).unwrap();
            write!(f, "{body}").unwrap();
        }

        let source = GameFileWords::new(dir.path());
        let list = source.load(0, 1);
        assert_eq!(list.words, ["DOG", "COW"]);
        assert_eq!(list.games_at_level, 2);
    }

    #[test]
    fn normalization_uppercases_and_drops_blanks() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = File::create(dir.path().join("level1.json")).unwrap();
        write!(f, r#"[[" cat ", "", "Dog"]]"#).unwrap();

        let list = LevelFileWords::new(dir.path()).load(0, 0);
        assert_eq!(list.words, ["CAT", "DOG"]);
    }
}
