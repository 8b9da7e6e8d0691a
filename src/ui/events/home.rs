use super::*;

pub(super) fn handle_home_key(key: KeyEvent, state: &mut AppState) -> Option<NavAction> {
    let len = state.catalog.len();
    let home = &mut state.home;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => home.move_up(len),
        KeyCode::Down | KeyCode::Char('j') => home.move_down(len),
        KeyCode::PageUp => home.page_up(len),
        KeyCode::PageDown => home.page_down(len),
        KeyCode::Home | KeyCode::Char('g') => home.jump_to_top(len),
        KeyCode::End | KeyCode::Char('G') => home.jump_to_bottom(len),
        KeyCode::Left => home.scroll_themes(-1, len),
        KeyCode::Right => home.scroll_themes(1, len),
        KeyCode::Char(' ') | KeyCode::Enter => {
            let cursor = home.cursor;
            state.catalog.toggle_selected(cursor);
        }
        KeyCode::Char('/') => not_available(state, "Search"),
        _ => {}
    }

    // Home is a terminal screen
    None
}

pub(super) fn handle_home_mouse(mouse: MouseEvent, state: &mut AppState) -> Option<NavAction> {
    let len = state.catalog.len();

    match mouse.kind {
        MouseEventKind::ScrollUp => state.home.scroll_by(-1, len),
        MouseEventKind::ScrollDown => state.home.scroll_by(1, len),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = state.home.row_at(mouse.column, mouse.row, len) {
                state.home.cursor = index;
                state.catalog.toggle_selected(index);
            }
        }
        _ => {}
    }

    None
}
