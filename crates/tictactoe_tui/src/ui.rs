//! Frame rendering.

use crate::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe_engine::{Board, GameStatus, Mark, Mode, Position, Square};

const X_COLOR: Color = Color::Blue;
const O_COLOR: Color = Color::Red;
const WIN_COLOR: Color = Color::Green;

/// Draws one frame of the application.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_mode_selector(f, chunks[0], app.engine().mode());
    render_status(f, chunks[1], app);
    render_board(f, chunks[2], app);
    render_controls(f, chunks[3], app);

    let message = Paragraph::new(app.status_message())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[4]);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => X_COLOR,
        Mark::O => O_COLOR,
    }
}

fn mark_style(mark: Mark) -> Style {
    Style::default()
        .fg(mark_color(mark))
        .add_modifier(Modifier::BOLD)
}

fn render_mode_selector(f: &mut Frame, area: Rect, current: Mode) {
    let mut spans = Vec::new();
    for mode in Mode::iter() {
        let style = if mode == current {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
        spans.push(Span::raw("  "));
    }
    spans.pop();

    let selector = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Tic-Tac-Toe "));
    f.render_widget(selector, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let status = app.engine().status();
    let mut spans = vec![Span::styled(
        status.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    // Turn pill
    if let GameStatus::InProgress(mark) = status {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", mark),
            Style::default()
                .fg(Color::White)
                .bg(mark_color(mark))
                .add_modifier(Modifier::BOLD),
        ));
        if app.ai_thinking() {
            spans.push(Span::styled(
                "  thinking...",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

/// Renders the tic-tac-toe board.
fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let highlight = CellHighlight::for_app(app);
    let board = app.engine().board();

    render_row(f, rows[0], board, 0, &highlight);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, 3, &highlight);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, 6, &highlight);
}

/// Which cells get a background.
struct CellHighlight {
    winning: Option<[Position; 3]>,
    cursor: Option<Position>,
}

impl CellHighlight {
    fn for_app(app: &App) -> Self {
        let winning = match app.engine().status() {
            GameStatus::Won { line, .. } => Some(line.positions()),
            _ => None,
        };
        // Cursor only shows while the board takes input.
        let cursor = app.engine().accepts_human_move().then_some(app.cursor());
        Self { winning, cursor }
    }

    fn style(&self, pos: Position) -> Style {
        if self.winning.is_some_and(|line| line.contains(&pos)) {
            Style::default().bg(WIN_COLOR)
        } else if self.cursor == Some(pos) {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        }
    }
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize, highlight: &CellHighlight) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    for (offset, col) in [0, 2, 4].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(start + offset) {
            render_square(f, cols[col], board, pos, highlight);
        }
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_square(f: &mut Frame, area: Rect, board: &Board, pos: Position, highlight: &CellHighlight) {
    let (text, style) = match board.get(pos) {
        Square::Empty => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };
    // Vertically center the glyph in the 3-row cell.
    let paragraph = Paragraph::new(vec![Line::raw(""), Line::raw(text)])
        .style(highlight.style(pos).patch(style))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::raw("│"), Line::raw("│"), Line::raw("│")])
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn render_controls(f: &mut Frame, area: Rect, app: &App) {
    let enabled = Style::default().fg(Color::Yellow);
    let disabled = Style::default().fg(Color::DarkGray);
    let undo_style = if app.engine().can_undo() { enabled } else { disabled };

    let controls = Line::from(vec![
        Span::styled("[u] Undo", undo_style),
        Span::raw("   "),
        Span::styled("[r] Restart", enabled),
        Span::raw("   "),
        Span::styled("[m] Mode", enabled),
        Span::raw("   "),
        Span::styled("[q] Quit", enabled),
        Span::raw("   "),
        Span::styled("arrows/1-9 + Enter", disabled),
    ]);
    let paragraph = Paragraph::new(controls)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Controls "));
    f.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use tictactoe_engine::{EngineConfig, GameEngine};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn pvp() -> App {
        App::new(GameEngine::from_config(
            &EngineConfig::default().with_mode(Mode::PlayerVsPlayer),
        ))
    }

    #[test]
    fn test_renders_status_and_modes() {
        let screen = render(&pvp());
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Player vs Player"));
        assert!(screen.contains("Player vs AI"));
        assert!(screen.contains("[u] Undo"));
    }

    #[test]
    fn test_mode_selector_lists_every_mode() {
        let screen = render(&pvp());
        for mode in Mode::iter() {
            assert!(screen.contains(mode.label()), "missing {}", mode.label());
        }
    }

    #[test]
    fn test_renders_winner() {
        let mut app = pvp();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ] {
            app.play(pos);
        }
        assert!(render(&app).contains("Winner: X"));
    }

    #[test]
    fn test_winning_cells_highlighted() {
        let mut app = pvp();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ] {
            app.play(pos);
        }
        let highlight = CellHighlight::for_app(&app);
        assert_eq!(highlight.cursor, None);
        assert_eq!(highlight.style(Position::TopCenter).bg, Some(WIN_COLOR));
        assert_eq!(highlight.style(Position::Center).bg, None);
    }

    #[test]
    fn test_cursor_hidden_while_ai_due() {
        let mut app = App::new(GameEngine::from_config(
            &EngineConfig::default().with_seed(1),
        ));
        assert_eq!(CellHighlight::for_app(&app).cursor, Some(Position::Center));
        app.play(Position::TopLeft);
        assert!(app.ai_thinking());
        assert_eq!(CellHighlight::for_app(&app).cursor, None);
    }
}
