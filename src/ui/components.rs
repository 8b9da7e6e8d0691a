// Reusable UI components

use crate::ui::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    fn with_controls(prefix: String, controls: &[(&'static str, &'static str)]) -> Self {
        let mut spans = vec![Span::raw(prefix)];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(theme::HOTKEY)));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    fn prefix(status: Option<&str>) -> String {
        match status {
            Some(message) => format!("{}  |  ", message),
            None => String::new(),
        }
    }

    pub fn welcome(status: Option<&str>) -> Self {
        let controls = [
            ("[Tab]", " Focus"),
            ("[Enter]", " Select"),
            ("[C]", "reate account"),
            ("[L]", "og in"),
            ("[Q]", "uit"),
        ];
        Self::with_controls(Self::prefix(status), &controls)
    }

    pub fn login(status: Option<&str>) -> Self {
        let controls = [("[Enter]", " Log in"), ("[Q]", "uit")];
        Self::with_controls(Self::prefix(status), &controls)
    }

    pub fn home(selected: usize, total: usize, status: Option<&str>) -> Self {
        let prefix = format!("{}Selected: {}/{}  |  ", Self::prefix(status), selected, total);
        let controls = [
            ("[↑/↓]", " Navigate"),
            ("[←/→]", " Themes"),
            ("[Space]", " Toggle"),
            ("[PgUp/PgDn]", " Scroll"),
            ("[/]", " Search"),
            ("[Q]", "uit"),
        ];
        Self::with_controls(prefix, &controls)
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(theme::FOOTER_BG))
            .render(area, buf);
    }
}

/// Horizontally centered slice of `area`, at most `width` wide.
pub fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// Filled button, label on the middle line.
pub fn render_button(label: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let style = if focused {
        Style::default()
            .bg(theme::SECONDARY)
            .fg(theme::ON_SECONDARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().bg(theme::SECONDARY).fg(theme::ON_SECONDARY)
    };

    let top_padding = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::from(""); top_padding as usize];
    lines.push(Line::from(label.to_string()));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(style)
        .render(area, buf);
}

/// Borderless text button.
pub fn render_text_button(label: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let style = if focused {
        Style::default()
            .fg(theme::SECONDARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(theme::SECONDARY)
    };

    Paragraph::new(Line::from(label.to_string()))
        .alignment(Alignment::Center)
        .style(style)
        .render(area, buf);
}

pub fn render_checkbox(checked: bool, focused: bool, area: Rect, buf: &mut Buffer) {
    let symbol = if checked { "[x]" } else { "[ ]" };
    let style = if focused {
        Style::default().fg(theme::HOTKEY).bold()
    } else if checked {
        Style::default().fg(theme::SECONDARY).bold()
    } else {
        Style::default().fg(Color::Gray)
    };

    buf.set_line(area.x, area.y, &Line::from(Span::styled(symbol, style)), area.width);
}

/// Outlined input that only ever shows its placeholder.
pub fn render_placeholder_field(placeholder: &str, icon: Option<&str>, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::ON_BACKGROUND));

    let mut spans = Vec::new();
    if let Some(icon) = icon {
        spans.push(Span::styled(icon.to_string(), Style::default().fg(theme::ON_BACKGROUND)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        placeholder.to_string(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    ));

    Paragraph::new(Line::from(spans)).block(block).render(area, buf);
}
