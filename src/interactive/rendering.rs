//! TUI rendering with ratatui
//!
//! Lays the screen out like the e-paper panel: buttons and counter on top,
//! six board rows, the keyboard and a message line.

use crate::core::{CellFeedback, LetterStatus, WORD_LEN};
use crate::game::{GameState, MAX_ROWS};
use crate::input::{KEYBOARD_ROWS, Key};
use crate::output::formatters::{cell_marker, key_marker, pending_marker};
use crate::session::render::{DEMO_BOARD, PLACEHOLDER_ANSWER, Screen, end_message, progress_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, screen: Screen<'_>, notice: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                   // Buttons and counter
            Constraint::Length(MAX_ROWS as u16 + 2), // Board
            Constraint::Length(5),                   // Keyboard
            Constraint::Min(1),                      // Message
        ])
        .split(f.area());

    match screen {
        Screen::Game(game) => {
            render_header(f, &progress_label(game), chunks[0]);
            render_board(f, game, chunks[1]);
            render_keyboard(f, game, chunks[2]);
            let message = notice.map(str::to_string).or_else(|| end_message(game));
            render_message(f, message.as_deref(), chunks[3]);
        }
        Screen::MissingWordList => {
            render_header(f, PLACEHOLDER_ANSWER, chunks[0]);
            render_demo_board(f, chunks[1]);
            render_message(f, notice, chunks[3]);
        }
    }
}

fn render_header(f: &mut Frame, counter: &str, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" NEW ^N ", Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw("   "),
        Span::styled(counter.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("   "),
        Span::styled(" OFF Esc ", Style::default().add_modifier(Modifier::REVERSED)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(header, area);
}

fn cell_style(cell: CellFeedback) -> Style {
    match cell {
        CellFeedback::Hit => Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        CellFeedback::Contained => Style::default().add_modifier(Modifier::UNDERLINED),
        CellFeedback::Absent => Style::default().add_modifier(Modifier::DIM),
    }
}

fn key_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Hit => Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
        LetterStatus::Contained => Style::default().add_modifier(Modifier::UNDERLINED),
        LetterStatus::Absent => Style::default().add_modifier(Modifier::CROSSED_OUT | Modifier::DIM),
        LetterStatus::Unknown => Style::default(),
    }
}

/// One line per board row
#[must_use]
pub fn board_lines(game: &GameState) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = game
        .board()
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .guess()
                .chars()
                .iter()
                .zip(row.feedback().cells())
                .flat_map(|(&letter, &cell)| {
                    [
                        Span::styled(cell_marker(char::from(letter), cell), cell_style(cell)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    if lines.len() < MAX_ROWS && !game.status().is_over() {
        let typed: Vec<char> = game.input().as_str().chars().collect();
        let spans: Vec<Span> = (0..WORD_LEN)
            .flat_map(|i| {
                [
                    Span::styled(
                        pending_marker(typed.get(i).copied()),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_ROWS {
        lines.push(Line::styled(
            vec![pending_marker(None); WORD_LEN].join(" "),
            Style::default().add_modifier(Modifier::DIM),
        ));
    }

    lines
}

fn render_board(f: &mut Frame, game: &GameState, area: Rect) {
    let board = Paragraph::new(board_lines(game))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Board "));
    f.render_widget(board, area);
}

fn render_demo_board(f: &mut Frame, area: Rect) {
    let lines: Vec<Line> = DEMO_BOARD
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.chars().map(|c| format!(" {c} ")).collect();
            Line::from(cells.join(" "))
        })
        .collect();
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Board "));
    f.render_widget(board, area);
}

/// The three keyboard rows, second row indented by half a key
#[must_use]
pub fn keyboard_lines(game: &GameState) -> Vec<Line<'static>> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = Vec::with_capacity(row.len() * 2 + 1);
            if i == 1 {
                spans.push(Span::raw("  "));
            }
            for symbol in row.chars() {
                let span = match Key::from_symbol(symbol) {
                    Some(Key::Letter(c)) => {
                        let status = game.keyboard().status(c as u8);
                        Span::styled(key_marker(c, status), key_style(status))
                    }
                    Some(key) => Span::raw(key_marker(key.symbol(), LetterStatus::Unknown)),
                    None => Span::raw("   "),
                };
                spans.push(span);
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect()
}

fn render_keyboard(f: &mut Frame, game: &GameState, area: Rect) {
    let keyboard = Paragraph::new(keyboard_lines(game))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_message(f: &mut Frame, message: Option<&str>, area: Rect) {
    let paragraph = Paragraph::new(message.unwrap_or_default().to_string())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
