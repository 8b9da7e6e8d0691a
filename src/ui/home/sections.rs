use super::*;
use crate::nav::BottomNavItem;
use crate::ui::components;
use crate::ui::state::GARDEN_ROW_HEIGHT;
use crate::ui::strings::{self, StringRef};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier},
    text::{Line, Span},
    widgets::{BorderType, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

const THUMBNAIL: &str = "▓▓▓▓▓";

impl HomeScreen {
    pub(super) fn render_search(frame: &mut Frame, area: Rect) {
        components::render_placeholder_field(
            strings::text(StringRef::SearchPlaceholder),
            Some("⌕"),
            area,
            frame.buffer_mut(),
        );
    }

    pub(super) fn render_themes_heading(frame: &mut Frame, area: Rect) {
        frame.render_widget(heading(strings::text(StringRef::BrowseThemes)), area);
    }

    pub(super) fn render_themes(frame: &mut Frame, area: Rect, state: &mut HomeState, catalog: &Catalog) {
        state.visible_themes = (area.width / THEME_CARD_WIDTH).max(1) as usize;
        state.clamp(catalog.len());

        let cards = catalog
            .iter()
            .skip(state.theme_offset)
            .take(state.visible_themes);

        for (slot, entry) in cards.enumerate() {
            let card = Rect {
                x: area.x + slot as u16 * THEME_CARD_WIDTH,
                y: area.y,
                width: THEME_CARD_WIDTH.saturating_sub(1).min(area.width),
                height: area.height,
            };

            let style = if entry.selected {
                Style::default().fg(theme::SECONDARY)
            } else {
                Style::default().fg(theme::ON_BACKGROUND)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style)
                .style(Style::default().bg(theme::SURFACE));

            let lines = vec![
                Line::from(Span::styled(THUMBNAIL, Style::default().fg(theme::SECONDARY))),
                Line::from(Span::styled(
                    format!("[{}]", entry.image),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(Span::styled(
                    entry.name.clone(),
                    Style::default()
                        .fg(theme::ON_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
            ];

            frame.render_widget(Paragraph::new(lines).block(block), card);
        }

        // More cards off to the sides
        let hidden_left = state.theme_offset > 0;
        let hidden_right = state.theme_offset + state.visible_themes < catalog.len();
        if hidden_left || hidden_right {
            let hint = match (hidden_left, hidden_right) {
                (true, true) => "◀ ▶",
                (true, false) => "◀",
                _ => "▶",
            };
            let hint_area = Rect {
                y: area.y + area.height.saturating_sub(1),
                height: 1,
                ..area
            };
            frame.render_widget(
                Paragraph::new(hint)
                    .alignment(Alignment::Right)
                    .style(Style::default().fg(theme::HOTKEY)),
                hint_area,
            );
        }
    }

    pub(super) fn render_garden_heading(frame: &mut Frame, area: Rect) {
        frame.render_widget(heading(strings::text(StringRef::DesignGarden)), area);
        // Filter icon is decorative
        frame.render_widget(
            Paragraph::new("☰")
                .alignment(Alignment::Right)
                .style(Style::default().fg(theme::ON_BACKGROUND)),
            area,
        );
    }

    pub(super) fn render_garden_list(
        frame: &mut Frame,
        area: Rect,
        state: &mut HomeState,
        catalog: &Catalog,
    ) {
        state.visible_rows = (area.height / GARDEN_ROW_HEIGHT).max(1) as usize;
        state.clamp(catalog.len());
        state.list_area = Some(area);

        // Leave room for the scrollbar
        let rows_area = Rect {
            width: area.width.saturating_sub(2),
            ..area
        };

        let rows = catalog
            .iter()
            .enumerate()
            .skip(state.scroll)
            .take(state.visible_rows);

        for (slot, (index, entry)) in rows.enumerate() {
            let y = rows_area.y + slot as u16 * GARDEN_ROW_HEIGHT;
            if y + GARDEN_ROW_HEIGHT > rows_area.y + rows_area.height {
                break;
            }
            let focused = index == state.cursor;

            let name_style = if focused {
                Style::default()
                    .fg(theme::HOTKEY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
                    .fg(theme::ON_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            };

            let buf = frame.buffer_mut();
            let text_width = rows_area.width.saturating_sub(4);
            buf.set_line(
                rows_area.x,
                y,
                &Line::from(vec![
                    Span::styled(THUMBNAIL, Style::default().fg(theme::SECONDARY)),
                    Span::raw("  "),
                    Span::styled(entry.name.clone(), name_style),
                ]),
                text_width,
            );
            buf.set_line(
                rows_area.x,
                y + 1,
                &Line::from(vec![
                    Span::styled(THUMBNAIL, Style::default().fg(theme::SECONDARY)),
                    Span::raw("  "),
                    Span::styled(
                        strings::description(entry.description),
                        Style::default().fg(theme::ON_BACKGROUND),
                    ),
                ]),
                text_width,
            );
            buf.set_line(
                rows_area.x + THUMBNAIL.chars().count() as u16 + 2,
                y + 2,
                &Line::from(Span::styled(
                    "─".repeat(rows_area.width as usize),
                    Style::default().fg(theme::DIVIDER),
                )),
                rows_area
                    .width
                    .saturating_sub(THUMBNAIL.chars().count() as u16 + 2),
            );

            let checkbox_area = Rect {
                x: rows_area.x + rows_area.width.saturating_sub(3),
                y,
                width: 3.min(rows_area.width),
                height: 1,
            };
            components::render_checkbox(entry.selected, focused, checkbox_area, buf);
        }

        let max_scroll = state.max_scroll(catalog.len());
        if max_scroll > 0 {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(state.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut scrollbar_state,
            );
        }
    }

    pub(super) fn render_bottom_bar(frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme::PRIMARY)),
            area,
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for (item, column) in BottomNavItem::ALL.iter().zip(columns.iter()) {
            // Home is the only destination and it is always the active tab
            let style = if *item == BottomNavItem::Home {
                Style::default()
                    .fg(theme::ON_PRIMARY)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::GREEN_300).add_modifier(Modifier::DIM)
            };

            frame.render_widget(
                Paragraph::new(vec![Line::from(item.icon()), Line::from(item.title())])
                    .alignment(Alignment::Center)
                    .style(style),
                *column,
            );
        }
    }
}

fn heading(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(text).style(
        Style::default()
            .fg(theme::ON_BACKGROUND)
            .add_modifier(Modifier::BOLD),
    )
}
