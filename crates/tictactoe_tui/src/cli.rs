//! Command-line interface for the terminal client.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use tictactoe_engine::{ConfigError, EngineConfig, Mode};
use tracing::{info, instrument};

/// Tic-tac-toe in the terminal, against a friend or the heuristic AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the engine config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Starting mode, overriding the config file
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Seed for the AI's random choices, overriding the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// AI answer delay in milliseconds, overriding the config file
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// File that receives log output (the terminal is owned by the UI)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

/// Mode names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two players share the keyboard.
    Pvp,
    /// Play X against the AI.
    Ai,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::Ai => Mode::PlayerVsAi,
        }
    }
}

impl Cli {
    /// Loads the config file (if present) and applies command-line overrides.
    #[instrument(skip(self), fields(config_path = %self.config.display()))]
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = if self.config.exists() {
            EngineConfig::from_file(&self.config)?
        } else {
            info!("Config file not found, using defaults");
            EngineConfig::default()
        };

        if let Some(mode) = self.mode {
            config = config.with_mode(mode.into());
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(ms) = self.delay_ms {
            config = config.with_opponent_delay(Duration::from_millis(ms));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe", "--config", "/nonexistent/tictactoe.toml"])
            .unwrap();
        let config = cli.engine_config().unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--config",
            "/nonexistent/tictactoe.toml",
            "--mode",
            "pvp",
            "--seed",
            "17",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        let config = cli.engine_config().unwrap();
        assert_eq!(*config.mode(), Mode::PlayerVsPlayer);
        assert_eq!(*config.seed(), Some(17));
        assert_eq!(config.opponent_delay(), Duration::ZERO);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["tictactoe", "--mode", "online"]).is_err());
    }
}
