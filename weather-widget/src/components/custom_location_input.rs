//! Single-line input for a location that is not in the city bar yet

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_dispatch::{Component, EventKind};

use crate::action::Action;

pub struct CustomLocationInputProps<'a> {
    pub value: &'a str,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct CustomLocationInput {
    cursor_position: usize,
}

impl CustomLocationInput {
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Component<Action> for CustomLocationInput {
    type Props<'a> = CustomLocationInputProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }

        let EventKind::Key(key) = event else {
            return vec![];
        };

        let text = props.value;
        let len = text.chars().count();
        // value may have been cleared by a submit since the last event
        self.cursor_position = self.cursor_position.min(len);

        match key.code {
            KeyCode::Enter => {
                self.cursor_position = 0;
                vec![Action::CustomLocationSubmit]
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let mut new_text: String = text.chars().take(self.cursor_position).collect();
                new_text.push(c);
                new_text.extend(text.chars().skip(self.cursor_position));
                self.cursor_position += 1;
                vec![Action::CustomLocationUpdate(new_text)]
            }
            KeyCode::Backspace if self.cursor_position > 0 => {
                let new_text: String = text
                    .chars()
                    .take(self.cursor_position - 1)
                    .chain(text.chars().skip(self.cursor_position))
                    .collect();
                self.cursor_position -= 1;
                vec![Action::CustomLocationUpdate(new_text)]
            }
            KeyCode::Delete if self.cursor_position < len => {
                let new_text: String = text
                    .chars()
                    .take(self.cursor_position)
                    .chain(text.chars().skip(self.cursor_position + 1))
                    .collect();
                vec![Action::CustomLocationUpdate(new_text)]
            }
            KeyCode::Left if self.cursor_position > 0 => {
                self.cursor_position -= 1;
                vec![]
            }
            KeyCode::Right if self.cursor_position < len => {
                self.cursor_position += 1;
                vec![]
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                vec![]
            }
            KeyCode::End => {
                self.cursor_position = len;
                vec![]
            }
            _ => vec![],
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let border_style = if props.is_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Other ")
            .border_style(border_style);

        let paragraph = if props.is_focused {
            let len = props.value.chars().count();
            self.cursor_position = self.cursor_position.min(len);
            let before: String = props.value.chars().take(self.cursor_position).collect();
            let after: String = props.value.chars().skip(self.cursor_position).collect();
            Paragraph::new(format!("{}│{}", before, after))
        } else if props.value.is_empty() {
            Paragraph::new("press / to add a city").style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(props.value.to_string())
        };

        frame.render_widget(paragraph.block(block), area);
    }
}
