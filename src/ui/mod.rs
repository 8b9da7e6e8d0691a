// Terminal UI using Ratatui

pub mod components;
pub mod events;
pub mod focus;
pub mod home;
pub mod login;
pub mod state;
pub mod strings;
pub mod theme;
pub mod welcome;

pub use events::{handle_key, handle_mouse, render, run_ui};
pub use home::HomeScreen;
pub use login::LoginScreen;
pub use state::AppState;
pub use welcome::WelcomeScreen;
