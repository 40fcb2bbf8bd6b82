//! Quick-select city buttons
//!
//! One button per known city. The cursor highlights a button, activation
//! selects it. Digits 1-9 select directly. When the buttons overflow the bar
//! it scrolls so the cursor's button stays visible.

use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_dispatch::EventKind;

use super::Component;
use crate::action::Action;

pub struct CityBar;

pub struct CityBarProps<'a> {
    pub cities: &'a [String],
    /// Currently selected location (may not be in `cities`)
    pub selected: &'a str,
    pub cursor: usize,
    pub is_focused: bool,
}

impl CityBar {
    pub const HEIGHT: u16 = 3;
}

impl Component<Action> for CityBar {
    type Props<'a> = CityBarProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused || props.cities.is_empty() {
            return vec![];
        }

        let EventKind::Key(key) = event else {
            return vec![];
        };

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => vec![Action::CityCursorMove(-1)],
            KeyCode::Right | KeyCode::Char('l') => vec![Action::CityCursorMove(1)],
            KeyCode::Enter | KeyCode::Char(' ') => props
                .cities
                .get(props.cursor)
                .map(|city| vec![Action::LocationSelect(city.clone())])
                .unwrap_or_default(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                props
                    .cities
                    .get(index)
                    .map(|city| vec![Action::LocationSelect(city.clone())])
                    .unwrap_or_default()
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_color = if props.is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Cities ");

        let buttons: Vec<Span> = props
            .cities
            .iter()
            .enumerate()
            .map(|(index, city)| {
                let mut style = Style::default().fg(Color::Gray);
                if city == props.selected {
                    style = style.fg(Color::Cyan).bold();
                }
                if props.is_focused && index == props.cursor {
                    style = style.bg(Color::Rgb(50, 50, 70));
                }
                let label = if index < 9 {
                    format!("[ {} {} ]", index + 1, city)
                } else {
                    format!("[ {} ]", city)
                };
                Span::styled(label, style)
            })
            .collect();

        let widths: Vec<usize> = buttons.iter().map(|b| b.width() + 1).collect();
        let inner_width = block.inner(area).width as usize;
        let cursor = props.cursor.min(buttons.len().saturating_sub(1));

        // scroll right until the cursor button fits, leaving room for the marker
        let mut start = first_visible(&widths, cursor, inner_width);
        if start > 0 {
            let width = inner_width.saturating_sub(SCROLL_MARKER.len());
            start = first_visible(&widths, cursor, width);
        }

        let mut spans = Vec::with_capacity(buttons.len() * 2 + 1);
        if start > 0 {
            spans.push(Span::styled(
                SCROLL_MARKER,
                Style::default().fg(Color::DarkGray),
            ));
        }
        for button in buttons.into_iter().skip(start) {
            spans.push(button);
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

/// Shown in front of the buttons when earlier ones are scrolled out
const SCROLL_MARKER: &str = "< ";

/// Index of the first button to draw so that `cursor` ends within `width` columns
fn first_visible(widths: &[usize], cursor: usize, width: usize) -> usize {
    let Some(head) = widths.get(..=cursor) else {
        return 0;
    };
    let mut start = 0;
    let mut used: usize = head.iter().sum();
    while used > width && start < cursor {
        used -= head[start];
        start += 1;
    }
    start
}
