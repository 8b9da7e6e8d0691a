use crate::common::helpers::*;
use bloom::nav::Screen;
use crossterm::event::KeyCode;

fn move_to(state: &mut bloom::ui::AppState, name: &str) {
    let target = state.catalog.position(name).unwrap();
    press(state, &[KeyCode::Home]);
    for _ in 0..target {
        press(state, &[KeyCode::Down]);
    }
    assert_eq!(state.home.cursor, target);
}

#[test]
fn test_toggle_pothos_selects_only_pothos() {
    let mut state = app_at(Screen::Home);
    move_to(&mut state, "Pothos ");
    press(&mut state, &[KeyCode::Char(' ')]);

    let pothos = state.catalog.position("Pothos ").unwrap();
    let flags = selected_flags(&state);
    assert!(flags[pothos]);
    assert_eq!(flags.iter().filter(|f| !**f).count(), 10);
}

#[test]
fn test_toggle_pothos_twice_clears_it() {
    let mut state = app_at(Screen::Home);
    move_to(&mut state, "Pothos ");
    press(&mut state, &[KeyCode::Char(' '), KeyCode::Char(' ')]);

    assert!(selected_flags(&state).iter().all(|f| !f));
}

#[test]
fn test_search_is_a_stub() {
    let mut state = app_at(Screen::Home);
    let before = state.catalog.clone();
    press(&mut state, &[KeyCode::Char('/')]);

    assert_eq!(state.catalog, before);
    assert_eq!(state.status.as_deref(), Some("Search is not available yet"));
}

#[test]
fn test_click_row_toggles_entry() {
    let mut state = app_at(Screen::Home);
    draw(&mut state, 80, 40);
    let list = state.home.list_area.unwrap();

    // Second row starts three lines down
    bloom::ui::handle_mouse(click(list.x + 10, list.y + 3), &mut state);
    assert_eq!(state.home.cursor, 1);
    assert_eq!(state.catalog.selected_names(), vec!["Tiny terrariums "]);
}

#[test]
fn test_wheel_scroll_stays_in_bounds() {
    let mut state = app_at(Screen::Home);
    draw(&mut state, 80, 30);
    let max = state.home.max_scroll(state.catalog.len());
    assert!(max > 0);

    for _ in 0..50 {
        bloom::ui::handle_mouse(wheel(true), &mut state);
    }
    assert_eq!(state.home.scroll, max);

    for _ in 0..50 {
        bloom::ui::handle_mouse(wheel(false), &mut state);
    }
    assert_eq!(state.home.scroll, 0);
}

#[test]
fn test_cursor_end_shows_last_row() {
    let mut state = app_at(Screen::Home);
    draw(&mut state, 80, 30);
    press(&mut state, &[KeyCode::End]);

    // Theme cards still show the first entries, the list does not
    let text = buffer_text(&draw(&mut state, 80, 30));
    assert!(text.contains("Pothos"));
    assert!(!text.contains("Easy care"));
}

#[test]
fn test_click_below_last_row_toggles_nothing() {
    let mut state = app_at(Screen::Home);
    draw(&mut state, 80, 30);
    let list = state.home.list_area.unwrap();
    let drawn = state.home.visible_rows as u16 * 3;
    assert!(drawn < list.height);

    bloom::ui::handle_mouse(click(list.x + 10, list.y + drawn), &mut state);
    assert!(state.catalog.selected_names().is_empty());
    assert_eq!(state.home.cursor, 0);
}

#[test]
fn test_wheel_then_space_toggles_visible_row() {
    let mut state = app_at(Screen::Home);
    draw(&mut state, 80, 30);
    for _ in 0..6 {
        bloom::ui::handle_mouse(wheel(true), &mut state);
    }
    let scroll = state.home.scroll;
    assert!(state.home.cursor >= scroll && state.home.cursor < scroll + state.home.visible_rows);

    press(&mut state, &[KeyCode::Char(' ')]);
    let selected: Vec<String> = state.catalog.selected_names().into_iter().map(String::from).collect();
    assert_eq!(selected.len(), 1);
    assert_ne!(selected[0], "Desert chic ");

    // The toggled row is on screen
    let text = buffer_text(&draw(&mut state, 80, 30));
    assert!(text.contains(selected[0].trim_end()));
    assert!(text.contains("[x]"));
}
