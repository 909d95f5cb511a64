//! Line-oriented board printing

use super::formatters::{cell_marker, key_marker, pending_marker};
use crate::core::{CellFeedback, LetterStatus, WORD_LEN};
use crate::game::{GameState, MAX_ROWS};
use crate::input::{KEYBOARD_ROWS, Key};
use crate::session::render::{DEMO_BOARD, Renderer, Screen, end_message, progress_label};
use colored::Colorize;
use std::fmt::Write as _;

fn paint_cell(marker: String, cell: CellFeedback) -> String {
    match cell {
        CellFeedback::Hit => marker.green().bold().to_string(),
        CellFeedback::Contained => marker.yellow().to_string(),
        CellFeedback::Absent => marker.bright_black().to_string(),
    }
}

fn paint_key(marker: String, status: LetterStatus) -> String {
    match status {
        LetterStatus::Hit => marker.green().bold().to_string(),
        LetterStatus::Contained => marker.yellow().to_string(),
        LetterStatus::Absent => marker.bright_black().strikethrough().to_string(),
        LetterStatus::Unknown => marker,
    }
}

/// Board rows, the typing row and empty rows below it
#[must_use]
pub fn format_board(game: &GameState) -> String {
    let mut out = String::new();

    for row in game.board().iter() {
        let cells: Vec<String> = row
            .guess()
            .chars()
            .iter()
            .zip(row.feedback().cells())
            .map(|(&letter, &cell)| paint_cell(cell_marker(char::from(letter), cell), cell))
            .collect();
        let _ = writeln!(out, "  {}", cells.join(" "));
    }

    let mut remaining = MAX_ROWS - game.board().len();
    if remaining > 0 && !game.status().is_over() {
        let typed: Vec<char> = game.input().as_str().chars().collect();
        let cells: Vec<String> = (0..WORD_LEN)
            .map(|i| pending_marker(typed.get(i).copied()))
            .collect();
        let _ = writeln!(out, "  {}", cells.join(" ").bold());
        remaining -= 1;
    }
    for _ in 0..remaining {
        let _ = writeln!(out, "  {}", vec![pending_marker(None); WORD_LEN].join(" ").dimmed());
    }

    out
}

/// The three keyboard rows with their markers
#[must_use]
pub fn format_keyboard(game: &GameState) -> String {
    let mut out = String::new();

    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let indent = if i == 1 { "  " } else { "" };
        let keys: Vec<String> = row
            .chars()
            .map(|symbol| match Key::from_symbol(symbol) {
                Some(Key::Letter(c)) => {
                    let status = game.keyboard().status(c as u8);
                    paint_key(key_marker(c, status), status)
                }
                Some(key) => key_marker(key.symbol(), LetterStatus::Unknown),
                None => "   ".to_string(),
            })
            .collect();
        let _ = writeln!(out, "  {indent}{}", keys.join(" "));
    }

    out
}

/// Header, board, keyboard and the end-of-game message
#[must_use]
pub fn format_game(game: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("  Guess {}", progress_label(game)).cyan());
    out.push_str(&format_board(game));
    out.push('\n');
    out.push_str(&format_keyboard(game));
    if let Some(message) = end_message(game) {
        let _ = writeln!(out, "\n  {}", message.bright_yellow().bold());
    }
    out
}

/// Demo board shown when no word list is available
#[must_use]
pub fn format_missing_word_list() -> String {
    let mut out = String::new();
    for line in DEMO_BOARD {
        let cells: Vec<String> = line.chars().map(|c| format!(" {c} ")).collect();
        let _ = writeln!(out, "  {}", cells.join(" "));
    }
    out
}

/// Print the game to stdout
pub fn print_game(game: &GameState) {
    println!("{}", format_game(game));
}

/// Prints the full screen after every submitted row and new game
///
/// The line being typed is echoed by the terminal, so input refreshes are
/// skipped.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn redraw(&mut self, screen: Screen<'_>) -> anyhow::Result<()> {
        match screen {
            Screen::Game(game) => print_game(game),
            Screen::MissingWordList => print!("{}", format_missing_word_list()),
        }
        Ok(())
    }

    fn refresh_input(&mut self, _game: &GameState) -> anyhow::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn game(rows: &[&str]) -> GameState {
        GameState::load_from_snapshot(Word::new("PAPER").unwrap(), rows)
    }

    #[test]
    fn board_shows_markers_and_empty_rows() {
        colored::control::set_override(false);
        let text = format_board(&game(&["REPAY"]));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), MAX_ROWS);
        assert_eq!(lines[0], "  /R\\ /E\\ (P) /A\\  Y ");
        assert_eq!(lines[1], "  [ ] [ ] [ ] [ ] [ ]");
    }

    #[test]
    fn board_shows_typed_letters() {
        colored::control::set_override(false);
        let mut g = game(&[]);
        g.input_mut().push('C');
        g.input_mut().push('R');
        let text = format_board(&g);
        assert_eq!(text.lines().next(), Some("  [C] [R] [ ] [ ] [ ]"));
    }

    #[test]
    fn finished_board_has_no_typing_row() {
        colored::control::set_override(false);
        let text = format_board(&game(&["PAPER"]));
        assert_eq!(text.lines().count(), MAX_ROWS);
        assert!(format_game(&game(&["PAPER"])).contains("Correct!"));
    }

    #[test]
    fn keyboard_marks_letters() {
        colored::control::set_override(false);
        let text = format_keyboard(&game(&["REPAY"]));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("/E\\"));
        assert!(lines[0].contains("-Y-"));
        assert!(lines[0].contains("(P)"));
        assert!(lines[0].contains("[Q]"));
        assert!(lines[2].starts_with("  [=]"));
        assert!(lines[2].ends_with("    [<]"));
    }

    #[test]
    fn missing_word_list_board() {
        let text = format_missing_word_list();
        assert_eq!(text.lines().count(), DEMO_BOARD.len());
        assert!(text.contains(" O   N       S   D "));
    }
}
