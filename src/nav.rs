// Navigation graph: three screens, two forward transitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Screen {
    #[default]
    Welcome,
    Login,
    Home,
}

impl Screen {
    pub fn all() -> [Self; 3] {
        [Self::Welcome, Self::Login, Self::Home]
    }

    /// Route name used in config files and on the command line
    pub fn route(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Login => "Login",
            Self::Home => "Home",
        }
    }

    /// Every modeled edge of the graph, as (from, action, to).
    pub fn transitions() -> [(Screen, NavAction, Screen); 2] {
        [
            (Screen::Welcome, NavAction::Login, Screen::Login),
            (Screen::Login, NavAction::Home, Screen::Home),
        ]
    }

    /// Actions that have a modeled edge leaving this screen.
    pub fn outgoing(&self) -> Vec<NavAction> {
        Self::transitions()
            .into_iter()
            .filter(|(from, _, _)| from == self)
            .map(|(_, action, _)| action)
            .collect()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen '{0}' (expected one of: Welcome, Login, Home)")]
pub struct ParseScreenError(pub String);

impl FromStr for Screen {
    type Err = ParseScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|screen| screen.route().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseScreenError(s.to_string()))
    }
}

/// Named navigation actions handed to screens in place of callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Login,
    Home,
}

impl NavAction {
    pub fn destination(&self) -> Screen {
        match self {
            Self::Login => Screen::Login,
            Self::Home => Screen::Home,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

/// Tracks the mounted screen. Transitions are fire-and-forget: no back stack,
/// no dedup of repeated presses, no precondition checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    start: Screen,
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::with_start(Screen::Welcome)
    }

    pub fn with_start(start: Screen) -> Self {
        Self {
            start,
            current: start,
        }
    }

    pub fn start(&self) -> Screen {
        self.start
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn navigate(&mut self, action: NavAction) -> Transition {
        let transition = Transition {
            from: self.current,
            to: action.destination(),
        };
        self.current = transition.to;
        tracing::info!(from = %transition.from, to = %transition.to, "navigated");
        transition
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

/// Bottom navigation bar entries on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomNavItem {
    Home,
    Favorites,
    Profile,
    Cart,
}

impl BottomNavItem {
    pub const ALL: [Self; 4] = [Self::Home, Self::Favorites, Self::Profile, Self::Cart];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Favorites => "Favorites",
            Self::Profile => "Profile",
            Self::Cart => "Cart",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Favorites => "♡",
            Self::Profile => "◉",
            Self::Cart => "⊡",
        }
    }

    /// Only Home has a destination; the rest are placeholders.
    pub fn is_wired(&self) -> bool {
        matches!(self, Self::Home)
    }
}
