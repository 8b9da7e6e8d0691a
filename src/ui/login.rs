// Login screen implementation

use crate::ui::components::{self, Footer};
use crate::ui::state::LoginState;
use crate::ui::strings::{self, StringRef};
use crate::ui::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

const FORM_WIDTH: u16 = 60;

pub struct LoginScreen;

impl LoginScreen {
    pub fn render(frame: &mut Frame, state: &mut LoginState, status: Option<&str>) {
        let area = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BACKGROUND)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(15), // Top spacer
                Constraint::Length(1),      // Title
                Constraint::Length(1),
                Constraint::Length(3), // Email
                Constraint::Length(3), // Password
                Constraint::Length(1),
                Constraint::Length(2), // Terms
                Constraint::Length(1),
                Constraint::Length(3), // Log in button
                Constraint::Min(0),
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let form = |row: Rect| components::centered(row, FORM_WIDTH.min(area.width.saturating_sub(4)));

        frame.render_widget(
            Paragraph::new(strings::text(StringRef::LoginTitle))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme::ON_BACKGROUND)
                        .add_modifier(Modifier::BOLD),
                ),
            chunks[1],
        );

        let button_area = form(chunks[8]);
        let buf = frame.buffer_mut();
        components::render_placeholder_field(
            strings::text(StringRef::Email),
            None,
            form(chunks[3]),
            buf,
        );
        components::render_placeholder_field(
            strings::text(StringRef::Password),
            None,
            form(chunks[4]),
            buf,
        );
        components::render_button(strings::text(StringRef::Login), true, button_area, buf);
        state.login_area = Some(button_area);

        frame.render_widget(
            Paragraph::new(terms_line())
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .style(Style::default().fg(theme::ON_BACKGROUND)),
            form(chunks[6]),
        );

        frame.render_widget(Footer::login(status), chunks[10]);
    }
}

fn terms_line() -> Line<'static> {
    let underlined = Style::default().add_modifier(Modifier::UNDERLINED);
    Line::from(vec![
        Span::raw(strings::text(StringRef::PreTerms)),
        Span::raw(" "),
        Span::styled(strings::text(StringRef::Terms), underlined),
        Span::raw(" "),
        Span::raw(strings::text(StringRef::PostTerms)),
        Span::raw(" "),
        Span::styled(strings::text(StringRef::PrivacyPolicy), underlined),
    ])
}
