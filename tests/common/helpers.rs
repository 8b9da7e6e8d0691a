#![allow(dead_code)]

use bloom::catalog::Catalog;
use bloom::nav::Screen;
use bloom::ui::{self, AppState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

pub fn app_at(screen: Screen) -> AppState {
    AppState::new(Catalog::garden(), screen)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Feed key presses in order; returns true if any of them asked to quit.
pub fn press(state: &mut AppState, codes: &[KeyCode]) -> bool {
    codes.iter().any(|code| ui::handle_key(key(*code), state))
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn wheel(down: bool) -> MouseEvent {
    MouseEvent {
        kind: if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        },
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    }
}

/// Draw one frame into an in-memory terminal and return its buffer.
pub fn draw(state: &mut AppState, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|frame| ui::render(frame, state)).unwrap();
    terminal.backend().buffer().clone()
}

/// Buffer contents as one string per row.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer).join("\n")
}

pub fn selected_flags(state: &AppState) -> Vec<bool> {
    state.catalog.iter().map(|e| e.selected).collect()
}
