use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub struct LocationHeader;

pub struct LocationHeaderProps<'a> {
    pub location: &'a str,
}

impl LocationHeader {
    pub const HEIGHT: u16 = 1;
}

impl Component<Action> for LocationHeader {
    type Props<'a> = LocationHeaderProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let line = Line::from(vec![
            Span::styled("Current location: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                props.location.to_string(),
                Style::default().fg(Color::White).bold(),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(line), area);
    }
}
