// Application state management

use crate::catalog::Catalog;
use crate::nav::{NavAction, Navigator, Screen, Transition};
use crate::ui::focus::WelcomeFocus;
use ratatui::layout::{Position, Rect};

/// Terminal lines per garden row: name, description, divider
pub const GARDEN_ROW_HEIGHT: u16 = 3;

pub struct AppState {
    pub navigator: Navigator,
    pub catalog: Catalog,
    pub welcome: WelcomeState,
    pub login: LoginState,
    pub home: HomeState,
    pub viewport: Rect,
    pub status: Option<String>, // One-line notice shown in the footer
}

impl AppState {
    pub fn new(catalog: Catalog, start: Screen) -> Self {
        Self {
            navigator: Navigator::with_start(start),
            catalog,
            welcome: WelcomeState::default(),
            login: LoginState::default(),
            home: HomeState::default(),
            viewport: Rect::default(),
            status: None,
        }
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.current()
    }

    /// Run a navigation action and mount the destination with fresh view state.
    pub fn apply(&mut self, action: NavAction) -> Transition {
        let transition = self.navigator.navigate(action);
        self.mount(transition.to);
        transition
    }

    fn mount(&mut self, screen: Screen) {
        match screen {
            Screen::Welcome => self.welcome = WelcomeState::default(),
            Screen::Login => self.login = LoginState::default(),
            Screen::Home => self.home = HomeState::default(),
        }
        self.status = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::garden(), Screen::Welcome)
    }
}

#[derive(Debug, Default, Clone)]
pub struct WelcomeState {
    pub focus: WelcomeFocus,

    // Mouse support
    pub create_account_area: Option<Rect>,
    pub login_area: Option<Rect>,
}

#[derive(Debug, Default, Clone)]
pub struct LoginState {
    pub login_area: Option<Rect>,
}

#[derive(Debug, Default, Clone)]
pub struct HomeState {
    pub cursor: usize,         // Garden row under keyboard focus
    pub scroll: usize,         // First visible garden row
    pub visible_rows: usize,   // Set by the renderer
    pub theme_offset: usize,   // First visible theme card
    pub visible_themes: usize, // Set by the renderer

    // Mouse support
    pub list_area: Option<Rect>,
}

impl HomeState {
    pub fn max_scroll(&self, len: usize) -> usize {
        len.saturating_sub(self.visible_rows.max(1))
    }

    pub fn move_up(&mut self, len: usize) {
        self.cursor = self.cursor.saturating_sub(1);
        self.keep_cursor_visible(len);
    }

    pub fn move_down(&mut self, len: usize) {
        if len > 0 && self.cursor < len - 1 {
            self.cursor += 1;
        }
        self.keep_cursor_visible(len);
    }

    pub fn page_up(&mut self, len: usize) {
        self.cursor = self.cursor.saturating_sub(self.visible_rows.max(1));
        self.keep_cursor_visible(len);
    }

    pub fn page_down(&mut self, len: usize) {
        self.cursor = (self.cursor + self.visible_rows.max(1)).min(len.saturating_sub(1));
        self.keep_cursor_visible(len);
    }

    pub fn jump_to_top(&mut self, len: usize) {
        self.cursor = 0;
        self.keep_cursor_visible(len);
    }

    pub fn jump_to_bottom(&mut self, len: usize) {
        self.cursor = len.saturating_sub(1);
        self.keep_cursor_visible(len);
    }

    /// Move the viewport (mouse wheel); the cursor is dragged along so it
    /// never points at a row that is off screen.
    pub fn scroll_by(&mut self, delta: isize, len: usize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll(len));
        self.keep_cursor_in_view(len);
    }

    pub fn scroll_themes(&mut self, delta: isize, len: usize) {
        let max = len.saturating_sub(self.visible_themes.max(1));
        self.theme_offset = self.theme_offset.saturating_add_signed(delta).min(max);
    }

    /// Re-establish bounds after the visible area changed.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
        self.scroll = self.scroll.min(self.max_scroll(len));
        let max_theme = len.saturating_sub(self.visible_themes.max(1));
        self.theme_offset = self.theme_offset.min(max_theme);
    }

    fn keep_cursor_in_view(&mut self, len: usize) {
        let last = (self.scroll + self.visible_rows.max(1) - 1).min(len.saturating_sub(1));
        self.cursor = self.cursor.clamp(self.scroll.min(last), last);
    }

    fn keep_cursor_visible(&mut self, len: usize) {
        let visible = self.visible_rows.max(1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + visible {
            self.scroll = self.cursor + 1 - visible;
        }
        self.scroll = self.scroll.min(self.max_scroll(len));
    }

    /// Catalog index of the garden row drawn at a terminal cell, if any.
    pub fn row_at(&self, column: u16, row: u16, len: usize) -> Option<usize> {
        let area = self.list_area?;
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        // Lines below the last whole row are blank
        let slot = ((row - area.y) / GARDEN_ROW_HEIGHT) as usize;
        if slot >= self.visible_rows {
            return None;
        }
        let index = self.scroll + slot;
        (index < len).then_some(index)
    }
}
