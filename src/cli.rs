//! Command-line surface shared by the GUI and the self-play binaries

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::{ConfigError, DepthLimit, Difficulty, EngineConfig, GameMode, Mark};

/// Board variant and search depth flags
#[derive(Debug, Clone, clap::Args)]
pub struct EngineArgs {
    /// Board edge length
    #[clap(long, default_value_t = 3)]
    pub size: usize,
    /// Marks in a row needed to win [default: min(3, size)]
    #[clap(long)]
    pub win_length: Option<usize>,
    /// Search depth for medium, 0 for unlimited [default: by board size]
    #[clap(long)]
    pub medium_depth: Option<u32>,
    /// Search depth for hard, 0 for unlimited [default: by board size]
    #[clap(long)]
    pub hard_depth: Option<u32>,
    /// Pause between AI-vs-AI moves in milliseconds
    #[clap(long, default_value_t = 500)]
    pub delay_ms: u64,
}

impl EngineArgs {
    /// Validated configuration for the requested board size
    pub fn config(&self) -> Result<EngineConfig, ConfigError> {
        self.config_for_size(self.size)
    }

    /// Validated configuration with the board size taken from elsewhere
    pub fn config_for_size(&self, size: usize) -> Result<EngineConfig, ConfigError> {
        let win_length = self.win_length.unwrap_or(size.min(3));
        let mut config = EngineConfig::for_board(size, win_length)
            .with_ai_vs_ai_delay(Duration::from_millis(self.delay_ms));
        if let Some(plies) = self.medium_depth {
            config.depths.medium = DepthLimit::from_plies(plies);
        }
        if let Some(plies) = self.hard_depth {
            config.depths.hard = DepthLimit::from_plies(plies);
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ModeArg {
    /// You play X, the AI plays O
    #[default]
    HumanVsAi,
    /// The AI plays both sides
    AiVsAi,
}

impl From<ModeArg> for GameMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::HumanVsAi => GameMode::HumanVsAi { human: Mark::X },
            ModeArg::AiVsAi => GameMode::AiVsAi,
        }
    }
}

/// Log to stderr at `info` unless `RUST_LOG` says otherwise
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::DepthTable;

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[command(flatten)]
        engine: EngineArgs,
        #[clap(long, value_enum, default_value_t)]
        difficulty: DifficultyArg,
    }

    fn parse(args: &[&str]) -> TestArgs {
        TestArgs::try_parse_from(std::iter::once("test").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_are_classic() {
        let args = parse(&[]);
        assert_eq!(args.engine.config().unwrap(), EngineConfig::classic());
        assert_eq!(Difficulty::from(args.difficulty), Difficulty::Hard);
    }

    #[test]
    fn test_size_four_is_large_preset() {
        let args = parse(&["--size", "4"]);
        assert_eq!(args.engine.config().unwrap(), EngineConfig::large());
    }

    #[test]
    fn test_depth_overrides() {
        let args = parse(&["--medium-depth", "2", "--hard-depth", "0", "--delay-ms", "0"]);
        let config = args.engine.config().unwrap();
        assert_eq!(
            config.depths,
            DepthTable {
                medium: DepthLimit::Plies(2),
                hard: DepthLimit::Unlimited,
            }
        );
        assert_eq!(config.ai_vs_ai_delay, Duration::ZERO);
    }

    #[test]
    fn test_invalid_combinations_rejected() {
        let args = parse(&["--size", "4", "--hard-depth", "0"]);
        assert_eq!(
            args.engine.config(),
            Err(ConfigError::UnboundedDepth { cells: 16 })
        );
        let args = parse(&["--win-length", "4"]);
        assert!(args.engine.config().is_err());
    }

    #[test]
    fn test_difficulty_value_names() {
        let args = parse(&["--difficulty", "easy"]);
        assert_eq!(Difficulty::from(args.difficulty), Difficulty::Easy);
    }
}
