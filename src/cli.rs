use clap::{Parser, ValueEnum};
use tracing::Level;

use crate::generator::{GeneratorConfig, DEFAULT_TRIES};

#[derive(Parser, Debug)]
#[command(
    name = "markovish-text",
    version,
    about = "Generate one sentence from a text corpus read on stdin"
)]
pub struct Cli {
    /// Accepted for compatibility. Has no effect on generation.
    #[arg(long, default_value_t = 25, allow_negative_numbers = true)]
    pub end: i64,

    /// How many sentences to try before falling back to a short sentence
    #[arg(long, default_value_t = DEFAULT_TRIES)]
    pub tries: usize,

    /// Seed for the random number generator. Seeded from system entropy if not given.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Verbosity of diagnostics on stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            tries: self.tries,
            ..GeneratorConfig::default()
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}
