// Welcome screen implementation

use crate::ui::components::{self, Footer};
use crate::ui::focus::WelcomeFocus;
use crate::ui::state::WelcomeState;
use crate::ui::strings::{self, StringRef};
use crate::ui::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};

const BUTTON_WIDTH: u16 = 40;

const LOGO: [&str; 3] = [
    "   ✿  ❀  ✿   ",
    "b  l  o  o  m",
    "   ❀  ✿  ❀   ",
];

pub struct WelcomeScreen;

impl WelcomeScreen {
    pub fn render(frame: &mut Frame, state: &mut WelcomeState, status: Option<&str>) {
        let area = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::PRIMARY)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Top spacer
                Constraint::Length(3), // Logo
                Constraint::Length(1),
                Constraint::Length(1), // Welcome message
                Constraint::Length(2),
                Constraint::Length(3), // Create account
                Constraint::Length(1),
                Constraint::Length(1), // Log in
                Constraint::Min(0),    // Bottom spacer
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let logo = LOGO.iter().map(|line| Line::from(*line)).collect::<Vec<_>>();
        frame.render_widget(
            Paragraph::new(logo)
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(theme::PINK_100)
                        .add_modifier(Modifier::BOLD),
                ),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(strings::text(StringRef::WelcomeMessage))
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme::ON_PRIMARY)),
            chunks[3],
        );

        let create_area = components::centered(chunks[5], BUTTON_WIDTH);
        let login_area = components::centered(chunks[7], BUTTON_WIDTH);
        let buf = frame.buffer_mut();
        components::render_button(
            strings::text(StringRef::CreateAccount),
            state.focus == WelcomeFocus::CreateAccount,
            create_area,
            buf,
        );
        components::render_text_button(
            strings::text(StringRef::Login),
            state.focus == WelcomeFocus::LogIn,
            login_area,
            buf,
        );
        state.create_account_area = Some(create_area);
        state.login_area = Some(login_area);

        frame.render_widget(Footer::welcome(status), chunks[9]);
    }
}
