//! Tests for loading engine configuration from disk.

use std::io::Write;
use std::time::Duration;
use tictactoe_engine::{EngineConfig, GameEngine, Mode};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"player_vs_player\"").unwrap();
    writeln!(file, "opponent_delay_ms = 350").unwrap();
    writeln!(file, "seed = 9").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), Mode::PlayerVsPlayer);
    assert_eq!(config.opponent_delay(), Duration::from_millis(350));
    assert_eq!(*config.seed(), Some(9));

    let engine = GameEngine::from_config(&config);
    assert_eq!(engine.mode(), Mode::PlayerVsPlayer);
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_delay_flows_into_ticket() {
    let config = EngineConfig::default()
        .with_seed(1)
        .with_opponent_delay(Duration::from_millis(25));
    let mut engine = GameEngine::from_config(&config);
    let turn = engine.apply_move(0).unwrap().opponent_turn().unwrap();
    assert_eq!(turn.delay(), Duration::from_millis(25));
}
