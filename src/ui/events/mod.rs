// Event handling and main UI loop

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::nav::{NavAction, Screen};
use crate::ui::{HomeScreen, LoginScreen, WelcomeScreen, state::AppState};

mod home;
mod login;
mod welcome;

// Event types sent from dedicated event thread to main loop
enum UiEvent {
    Input(Event), // Keyboard, mouse, or other terminal events
    Tick,         // Periodic redraw
}

/// Spawn a dedicated thread for event polling.
fn spawn_event_thread(tx: mpsc::Sender<UiEvent>, tick_rate: Duration) {
    thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_secs(0));

            if event::poll(timeout).unwrap_or(false) {
                if let Ok(evt) = event::read() {
                    if tx.send(UiEvent::Input(evt)).is_err() {
                        break; // Main thread dropped the receiver
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                if tx.send(UiEvent::Tick).is_err() {
                    break;
                }
                last_tick = Instant::now();
            }
        }
    });
}

pub fn run_ui(state: &mut AppState, config: &Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();

    if config.ui.mouse {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::channel();
    spawn_event_thread(event_tx, Duration::from_millis(config.ui.tick_rate_ms.max(1)));

    tracing::info!(screen = %state.current_screen(), "ui started");
    let result = run_app(&mut terminal, state, event_rx);

    // Restore terminal
    disable_raw_mode()?;
    if config.ui.mouse {
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    } else {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()?;

    tracing::info!("ui stopped");
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    event_rx: Receiver<UiEvent>,
) -> io::Result<()> {
    terminal.draw(|frame| render(frame, state))?;

    loop {
        let mut pending_inputs: Vec<Event> = Vec::new();

        // Block for one event, then drain the queue so ticks coalesce
        match event_rx.recv() {
            Ok(UiEvent::Input(ev)) => pending_inputs.push(ev),
            Ok(UiEvent::Tick) => {}
            Err(_) => return Ok(()), // Channel closed
        }
        while let Ok(evt) = event_rx.try_recv() {
            if let UiEvent::Input(ev) = evt {
                pending_inputs.push(ev);
            }
        }

        for input in pending_inputs {
            match input {
                Event::Key(key) => {
                    if handle_key(key, state) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(mouse, state),
                _ => {} // Resize is picked up by the next draw
            }
        }

        terminal.draw(|frame| render(frame, state))?;
    }
}

/// Draw the mounted screen.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    state.viewport = frame.area();
    let status = state.status.as_deref();

    match state.navigator.current() {
        Screen::Welcome => WelcomeScreen::render(frame, &mut state.welcome, status),
        Screen::Login => LoginScreen::render(frame, &mut state.login, status),
        Screen::Home => HomeScreen::render(frame, &mut state.home, &state.catalog, status),
    }
}

fn should_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Route a key press to the mounted screen. Returns true when the app should exit.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> bool {
    // Windows reports releases as well
    if key.kind != KeyEventKind::Press {
        return false;
    }

    if should_quit(&key) {
        return true;
    }

    let action = match state.current_screen() {
        Screen::Welcome => welcome::handle_welcome_key(key, state),
        Screen::Login => login::handle_login_key(key, state),
        Screen::Home => home::handle_home_key(key, state),
    };

    if let Some(action) = action {
        state.apply(action);
    }

    false
}

pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) {
    let action = match state.current_screen() {
        Screen::Welcome => welcome::handle_welcome_mouse(mouse, state),
        Screen::Login => login::handle_login_mouse(mouse, state),
        Screen::Home => home::handle_home_mouse(mouse, state),
    };

    if let Some(action) = action {
        state.apply(action);
    }
}

fn is_left_click(mouse: &MouseEvent) -> bool {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
}

fn hit(area: Option<ratatui::layout::Rect>, mouse: &MouseEvent) -> bool {
    area.is_some_and(|a| a.contains(ratatui::layout::Position::new(mouse.column, mouse.row)))
}

/// Record a stub action: log it and surface a notice in the footer.
fn not_available(state: &mut AppState, feature: &str) {
    tracing::warn!(feature, "action is not implemented");
    state.status = Some(format!("{} is not available yet", feature));
}
