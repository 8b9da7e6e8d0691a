use crate::common::helpers::*;
use bloom::nav::Screen;
use bloom::ui::focus::WelcomeFocus;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[test]
fn test_launch_starts_at_welcome() {
    let state = bloom::ui::AppState::default();
    assert_eq!(state.current_screen(), Screen::Welcome);
}

#[test]
fn test_welcome_login_shortcut_opens_login() {
    let mut state = app_at(Screen::Welcome);
    assert!(!press(&mut state, &[KeyCode::Char('l')]));
    assert_eq!(state.current_screen(), Screen::Login);
}

#[test]
fn test_welcome_focus_then_enter_opens_login() {
    let mut state = app_at(Screen::Welcome);
    assert_eq!(state.welcome.focus, WelcomeFocus::CreateAccount);

    press(&mut state, &[KeyCode::Tab]);
    assert_eq!(state.welcome.focus, WelcomeFocus::LogIn);

    press(&mut state, &[KeyCode::Enter]);
    assert_eq!(state.current_screen(), Screen::Login);
}

#[test]
fn test_login_button_opens_home_without_credentials() {
    let mut state = app_at(Screen::Login);
    press(&mut state, &[KeyCode::Enter]);
    assert_eq!(state.current_screen(), Screen::Home);
}

#[test]
fn test_full_forward_flow() {
    let mut state = app_at(Screen::Welcome);
    press(&mut state, &[KeyCode::Char('l'), KeyCode::Enter]);
    assert_eq!(state.current_screen(), Screen::Home);
}

#[test]
fn test_create_account_is_a_stub() {
    let mut state = app_at(Screen::Welcome);
    press(&mut state, &[KeyCode::Enter]); // focus starts on Create account
    assert_eq!(state.current_screen(), Screen::Welcome);
    assert_eq!(
        state.status.as_deref(),
        Some("Account creation is not available yet")
    );

    // The notice is cleared when the next screen mounts
    press(&mut state, &[KeyCode::Char('l')]);
    assert_eq!(state.status, None);
}

#[test]
fn test_quit_keys() {
    let mut state = app_at(Screen::Home);
    assert!(press(&mut state, &[KeyCode::Char('q')]));

    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(bloom::ui::handle_key(ctrl_c, &mut state));
}

#[test]
fn test_key_release_is_ignored() {
    let mut state = app_at(Screen::Welcome);
    let mut release = key(KeyCode::Char('l'));
    release.kind = KeyEventKind::Release;
    assert!(!bloom::ui::handle_key(release, &mut state));
    assert_eq!(state.current_screen(), Screen::Welcome);
}

#[test]
fn test_home_keys_do_not_navigate() {
    let mut state = app_at(Screen::Home);
    press(
        &mut state,
        &[KeyCode::Enter, KeyCode::Char('l'), KeyCode::Esc, KeyCode::Backspace],
    );
    assert_eq!(state.current_screen(), Screen::Home);
}

#[test]
fn test_buttons_respond_to_clicks() {
    let mut state = app_at(Screen::Welcome);
    draw(&mut state, 80, 30);
    let login = state.welcome.login_area.unwrap();
    bloom::ui::handle_mouse(click(login.x + 1, login.y), &mut state);
    assert_eq!(state.current_screen(), Screen::Login);

    draw(&mut state, 80, 30);
    let button = state.login.login_area.unwrap();
    bloom::ui::handle_mouse(click(button.x + 1, button.y + 1), &mut state);
    assert_eq!(state.current_screen(), Screen::Home);
}
