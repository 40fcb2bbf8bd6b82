use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{
    Component, ERROR_ICON, ForecastTable, ForecastTableProps, LocationHeader, LocationHeaderProps,
    SPINNERS,
};
use crate::action::Action;
use crate::state::{AppState, Forecast};

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// What the display region shows, highest priority first
#[derive(Debug, PartialEq)]
pub enum WeatherView<'a> {
    Error(&'a str),
    Loading,
    Ready(&'a Forecast),
    Empty,
}

impl<'a> WeatherView<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        if let Some(error) = state.error.as_deref() {
            WeatherView::Error(error)
        } else if state.is_loading {
            WeatherView::Loading
        } else if let Some(forecast) = state.forecast.as_ref() {
            WeatherView::Ready(forecast)
        } else {
            WeatherView::Empty
        }
    }
}

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let [header_area, content_area] = Layout::vertical([
            Constraint::Length(LocationHeader::HEIGHT),
            Constraint::Min(1),
        ])
        .areas(area);

        let mut header = LocationHeader;
        header.render(
            frame,
            header_area,
            LocationHeaderProps {
                location: &state.location,
            },
        );

        match WeatherView::from_state(state) {
            WeatherView::Ready(forecast) => {
                let mut table = ForecastTable;
                table.render(
                    frame,
                    content_area,
                    ForecastTableProps {
                        forecast,
                        offset: state.table_offset,
                    },
                );
            }
            WeatherView::Error(error) => render_centered(
                frame,
                content_area,
                vec![
                    Line::from(ERROR_ICON).centered(),
                    Line::from(vec![
                        Span::styled("o no! ", Style::default().fg(Color::Red).bold()),
                        Span::styled(
                            error.to_string(),
                            Style::default().fg(Color::Rgb(200, 100, 100)),
                        ),
                    ])
                    .centered(),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Pick another city or press ", Style::default().fg(Color::DarkGray)),
                        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                        Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
                    ])
                    .centered(),
                ],
            ),
            WeatherView::Loading => {
                let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
                let dots = ".".repeat((state.tick_count as usize / 3) % 4);
                render_centered(
                    frame,
                    content_area,
                    vec![
                        Line::from(vec![
                            Span::styled(spinner, Style::default().fg(Color::Cyan)),
                            Span::styled(
                                format!(" Fetching forecast{:<3}", dots),
                                Style::default().fg(Color::Gray),
                            ),
                        ])
                        .centered(),
                    ],
                );
            }
            WeatherView::Empty => render_centered(
                frame,
                content_area,
                vec![
                    Line::from(Span::styled(
                        "Sad, no weather today.",
                        Style::default().fg(Color::DarkGray),
                    ))
                    .centered(),
                ],
            ),
        }
    }
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let [area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines), area);
}
