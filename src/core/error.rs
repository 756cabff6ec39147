use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no word at index {index}, the list holds {len}")]
    OutOfWords { index: usize, len: usize },
    #[error("word list for level {level} game {game} could not be loaded")]
    ResourceLoad { level: usize, game: usize },
}
