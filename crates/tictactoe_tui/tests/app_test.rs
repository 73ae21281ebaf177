//! End-to-end tests driving the App through key presses.

use crossterm::event::KeyCode;
use std::time::Duration;
use tictactoe_engine::{EngineConfig, GameEngine, GameStatus, Mark, Mode, Position, Square};
use tictactoe_tui::{App, OpponentScheduler};

fn app(mode: Mode) -> App {
    App::new(GameEngine::from_config(
        &EngineConfig::default()
            .with_mode(mode)
            .with_seed(11)
            .with_opponent_delay(Duration::from_millis(5)),
    ))
}

fn press(app: &mut App, keys: &[KeyCode]) {
    for &key in keys {
        app.handle_key(key);
    }
}

#[test]
fn test_pvp_keyboard_game() {
    let mut app = app(Mode::PlayerVsPlayer);
    // X: 1, 2, 3 / O: 5, 4
    press(
        &mut app,
        &[
            KeyCode::Char('1'),
            KeyCode::Char('5'),
            KeyCode::Char('2'),
            KeyCode::Char('4'),
            KeyCode::Char('3'),
        ],
    );
    assert!(matches!(
        app.engine().status(),
        GameStatus::Won { mark: Mark::X, .. }
    ));
    assert!(app.status_message().contains("Player X wins"));
}

#[test]
fn test_cursor_play() {
    let mut app = app(Mode::PlayerVsPlayer);
    press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
    assert_eq!(app.cursor(), Position::TopLeft);
    assert_eq!(
        app.engine().board().get(Position::TopLeft),
        Square::Occupied(Mark::X)
    );

    press(&mut app, &[KeyCode::Right, KeyCode::Char(' ')]);
    assert_eq!(
        app.engine().board().get(Position::TopCenter),
        Square::Occupied(Mark::O)
    );
}

#[test]
fn test_board_locked_while_ai_due() {
    let mut app = app(Mode::PlayerVsAi);
    press(&mut app, &[KeyCode::Char('1')]);
    assert!(app.ai_thinking());

    press(&mut app, &[KeyCode::Char('9')]);
    assert!(app.engine().board().is_empty(Position::BottomRight));
    assert_eq!(app.engine().board().occupied_count(), 1);
}

#[test]
fn test_restart_invalidates_pending_ai_move() {
    let mut app = app(Mode::PlayerVsAi);
    press(&mut app, &[KeyCode::Char('1')]);
    let ticket = app.pending_opponent_turn().unwrap();

    press(&mut app, &[KeyCode::Char('r')]);
    assert_eq!(app.pending_opponent_turn(), None);

    app.play_opponent(ticket);
    assert_eq!(app.engine().board().occupied_count(), 0);
}

#[test]
fn test_mode_toggle_resets() {
    let mut app = app(Mode::PlayerVsAi);
    press(&mut app, &[KeyCode::Char('1')]);
    let ticket = app.pending_opponent_turn().unwrap();

    press(&mut app, &[KeyCode::Char('m')]);
    assert_eq!(app.engine().mode(), Mode::PlayerVsPlayer);
    assert_eq!(app.engine().board().occupied_count(), 0);
    assert!(app.status_message().starts_with("Player vs Player selected"));

    app.play_opponent(ticket);
    assert_eq!(app.engine().board().occupied_count(), 0);
}

#[test]
fn test_undo_ai_reply_makes_ai_due_again() {
    let mut app = app(Mode::PlayerVsAi);
    press(&mut app, &[KeyCode::Char('1')]);
    let ticket = app.pending_opponent_turn().unwrap();
    app.play_opponent(ticket);
    assert_eq!(app.engine().board().occupied_count(), 2);

    press(&mut app, &[KeyCode::Char('u')]);
    assert_eq!(app.engine().board().occupied_count(), 1);
    let again = app.pending_opponent_turn().unwrap();
    assert_ne!(again, ticket);

    app.play_opponent(ticket);
    assert_eq!(app.engine().board().occupied_count(), 1);
    app.play_opponent(again);
    assert_eq!(app.engine().board().occupied_count(), 2);
}

#[tokio::test]
async fn test_scheduled_ai_plays_full_game() {
    let mut app = app(Mode::PlayerVsAi);
    let (mut scheduler, mut turns) = OpponentScheduler::new();

    while !app.engine().status().is_over() {
        if app.engine().accepts_human_move() {
            let pos = app.engine().board().empty_positions()[0];
            app.play(pos);
        }
        scheduler.sync(app.pending_opponent_turn());
        if let Some(expected) = scheduler.scheduled() {
            let fired = tokio::time::timeout(Duration::from_secs(5), turns.recv())
                .await
                .unwrap()
                .unwrap();
            assert_eq!(fired, expected);
            app.play_opponent(fired);
        }
    }

    scheduler.sync(app.pending_opponent_turn());
    assert_eq!(scheduler.scheduled(), None);
}
