use super::*;

// No credentials are collected, so logging in always proceeds
pub(super) fn handle_login_key(key: KeyEvent, _state: &mut AppState) -> Option<NavAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(NavAction::Home)
        }
        _ => None,
    }
}

pub(super) fn handle_login_mouse(mouse: MouseEvent, state: &mut AppState) -> Option<NavAction> {
    (is_left_click(&mouse) && hit(state.login.login_area, &mouse)).then_some(NavAction::Home)
}
