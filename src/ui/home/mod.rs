// Home screen implementation

use crate::catalog::Catalog;
use crate::ui::components::Footer;
use crate::ui::state::HomeState;
use crate::ui::theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

mod sections;

/// Columns per theme card, including the gap after it
pub const THEME_CARD_WIDTH: u16 = 20;

pub struct HomeScreen;

impl HomeScreen {
    pub fn render(frame: &mut Frame, state: &mut HomeState, catalog: &Catalog, status: Option<&str>) {
        let area = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BACKGROUND)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search
                Constraint::Length(1), // "Browse themes"
                Constraint::Length(5), // Theme cards
                Constraint::Length(1), // "Design your home garden"
                Constraint::Min(0),    // Garden list
                Constraint::Length(2), // Bottom navigation
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let content = |rect: Rect| rect.inner(ratatui::layout::Margin::new(2, 0));

        Self::render_search(frame, content(chunks[0]));
        Self::render_themes_heading(frame, content(chunks[1]));
        Self::render_themes(frame, content(chunks[2]), state, catalog);
        Self::render_garden_heading(frame, content(chunks[3]));
        Self::render_garden_list(frame, content(chunks[4]), state, catalog);
        Self::render_bottom_bar(frame, chunks[5]);

        frame.render_widget(
            Footer::home(catalog.selected_count(), catalog.len(), status),
            chunks[6],
        );
    }
}
