use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::Focus;

pub struct HelpBar;

pub struct HelpBarProps {
    pub focus: Focus,
}

fn hints(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::Cities => &[
            ("←→", "city"),
            ("enter", "select"),
            ("/", "other"),
            ("↑↓", "scroll"),
            ("r", "refresh"),
            ("q", "quit"),
        ],
        Focus::CustomInput => &[("enter", "set"), ("esc", "back"), ("tab", "cities")],
    }
}

impl Component<Action> for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let mut spans = Vec::new();
        for (key, label) in hints(props.focus) {
            spans.push(Span::styled(
                format!(" {}", key),
                Style::default().fg(Color::Cyan).bold(),
            ));
            spans.push(Span::styled(
                format!(" {} ", label),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
