use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use wordgarden::app::App;
use wordgarden::{
    BuiltinWords, GameEngine, GameFileWords, LevelFileWords, LoggedSounds, WordSource,
    DEFAULT_MAX_GUESSES,
};

const USAGE: &str = "usage: wordgarden [--source builtin|game-files|level-files] \
[--words DIR] [--level N] [--game M] [--log FILE]";

struct Config {
    source: String,
    words_dir: PathBuf,
    level: usize,
    game: usize,
    log_file: PathBuf,
}

impl Config {
    fn parse(mut args: std::env::Args) -> Result<Self> {
        let mut config = Self {
            source: "level-files".to_string(),
            words_dir: PathBuf::from("assets/words"),
            level: 1,
            game: 1,
            log_file: PathBuf::from("wordgarden.log"),
        };
        args.next(); // binary name

        while let Some(flag) = args.next() {
            let mut value = || {
                args.next()
                    .ok_or_else(|| anyhow!("{} needs a value\n{}", flag, USAGE))
            };
            match flag.as_str() {
                "--source" => config.source = value()?,
                "--words" => config.words_dir = PathBuf::from(value()?),
                "--level" => config.level = value()?.parse().context("--level must be a number")?,
                "--game" => config.game = value()?.parse().context("--game must be a number")?,
                "--log" => config.log_file = PathBuf::from(value()?),
                _ => return Err(anyhow!("unknown flag '{}'\n{}", flag, USAGE)),
            }
        }
        if config.level == 0 || config.game == 0 {
            return Err(anyhow!("--level and --game are numbered from 1"));
        }
        Ok(config)
    }

    fn word_source(&self) -> Result<Box<dyn WordSource>> {
        Ok(match self.source.as_str() {
            "builtin" => Box::new(BuiltinWords),
            "game-files" => Box::new(GameFileWords::new(&self.words_dir)),
            "level-files" => Box::new(LevelFileWords::new(&self.words_dir)),
            other => return Err(anyhow!("unknown word source '{}'\n{}", other, USAGE)),
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse(std::env::args())?;

    // The terminal belongs to ratatui, so diagnostics go to a file.
    let log = std::fs::File::create(&config.log_file)
        .with_context(|| format!("could not open log file {}", config.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Arc::new(log))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let engine = GameEngine::new(
        config.word_source()?,
        config.level - 1,
        config.game - 1,
        DEFAULT_MAX_GUESSES,
    );

    let terminal = ratatui::init();
    let result = App::new(engine, Box::new(LoggedSounds)).run(terminal).await;
    ratatui::restore();
    result
}
