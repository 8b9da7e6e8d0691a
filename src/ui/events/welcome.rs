use super::*;
use crate::ui::focus::WelcomeFocus;

pub(super) fn handle_welcome_key(key: KeyEvent, state: &mut AppState) -> Option<NavAction> {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Right => {
            state.welcome.focus = state.welcome.focus.next();
            None
        }
        KeyCode::BackTab | KeyCode::Up | KeyCode::Left => {
            state.welcome.focus = state.welcome.focus.previous();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate(state.welcome.focus, state),
        KeyCode::Char('l') | KeyCode::Char('L') => activate(WelcomeFocus::LogIn, state),
        KeyCode::Char('c') | KeyCode::Char('C') => activate(WelcomeFocus::CreateAccount, state),
        _ => None,
    }
}

pub(super) fn handle_welcome_mouse(mouse: MouseEvent, state: &mut AppState) -> Option<NavAction> {
    if !is_left_click(&mouse) {
        return None;
    }

    if hit(state.welcome.login_area, &mouse) {
        state.welcome.focus = WelcomeFocus::LogIn;
        activate(WelcomeFocus::LogIn, state)
    } else if hit(state.welcome.create_account_area, &mouse) {
        state.welcome.focus = WelcomeFocus::CreateAccount;
        activate(WelcomeFocus::CreateAccount, state)
    } else {
        None
    }
}

fn activate(button: WelcomeFocus, state: &mut AppState) -> Option<NavAction> {
    match button {
        WelcomeFocus::LogIn => Some(NavAction::Login),
        // No sign-up screen exists
        WelcomeFocus::CreateAccount => {
            not_available(state, "Account creation");
            None
        }
    }
}
