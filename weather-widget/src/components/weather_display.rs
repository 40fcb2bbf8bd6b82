//! Root component: city bar, custom input, forecast region, help bar
//!
//! FRAMEWORK PATTERN: Component Trait
//! - Props<'a>: Read-only data for rendering (borrowed from state)
//! - handle_event: Receives EventKind, returns `Vec<Action>`
//! - render: Pure function of props - no side effects
//! - Focus handled via props, not event context

use crossterm::event::KeyCode;
use ratatui::prelude::{Frame, Rect};
use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders},
};
use tui_dispatch::EventKind;

use super::{
    CityBar, CityBarProps, Component, CustomLocationInput, CustomLocationInputProps, HelpBar,
    HelpBarProps, WeatherBody, WeatherBodyProps,
};
use crate::action::Action;
use crate::reducer::TABLE_PAGE;
use crate::state::{AppState, Focus};

pub const ERROR_ICON: &str = "⚠️";
pub const SPINNERS: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Props for WeatherDisplay - read-only view of state
pub struct WeatherDisplayProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget. Holds the input's cursor between events.
#[derive(Default)]
pub struct WeatherDisplay {
    input: CustomLocationInput,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    fn city_bar_props<'a>(state: &'a AppState, is_focused: bool) -> CityBarProps<'a> {
        CityBarProps {
            cities: &state.cities,
            selected: &state.location,
            cursor: state.city_cursor,
            is_focused: is_focused && state.focus == Focus::Cities,
        }
    }

    fn input_props<'a>(state: &'a AppState, is_focused: bool) -> CustomLocationInputProps<'a> {
        CustomLocationInputProps {
            value: &state.custom_location,
            is_focused: is_focused && state.focus == Focus::CustomInput,
        }
    }
}

impl Component<Action> for WeatherDisplay {
    type Props<'a> = WeatherDisplayProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: WeatherDisplayProps<'_>) -> Vec<Action> {
        if !props.is_focused {
            return vec![];
        }
        let state = props.state;

        let EventKind::Key(key) = event else {
            return vec![];
        };

        if key.code == KeyCode::Tab {
            return vec![Action::UiFocusToggle];
        }

        match state.focus {
            Focus::CustomInput => {
                if key.code == KeyCode::Esc {
                    return vec![Action::UiFocusSet(Focus::Cities)];
                }
                self.input
                    .handle_event(event, Self::input_props(state, true))
            }
            Focus::Cities => {
                let actions = CityBar.handle_event(event, Self::city_bar_props(state, true));
                if !actions.is_empty() {
                    return actions;
                }

                match key.code {
                    KeyCode::Char('/') | KeyCode::Char('i') => {
                        vec![Action::UiFocusSet(Focus::CustomInput)]
                    }
                    KeyCode::Char('r') | KeyCode::F(5) => vec![Action::ForecastRefresh],
                    KeyCode::Up | KeyCode::Char('k') => vec![Action::TableScroll(-1)],
                    KeyCode::Down | KeyCode::Char('j') => vec![Action::TableScroll(1)],
                    KeyCode::PageUp => vec![Action::TableScroll(-TABLE_PAGE)],
                    KeyCode::PageDown => vec![Action::TableScroll(TABLE_PAGE)],
                    KeyCode::Home | KeyCode::Char('g') => vec![Action::TableScrollReset],
                    KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
                    _ => vec![],
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherDisplayProps<'_>) {
        let state = props.state;

        let loading_indicator = if state.is_loading {
            let spinner = SPINNERS[(state.tick_count as usize / 2) % SPINNERS.len()];
            format!(" {} ", spinner)
        } else {
            String::new()
        };

        let outer_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" ☁ Weather{}", loading_indicator))
            .title_style(Style::default().fg(Color::Cyan).bold())
            .title_alignment(Alignment::Center);

        frame.render_widget(outer_block.clone(), area);
        let inner = outer_block.inner(area);

        let [cities_area, input_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(CityBar::HEIGHT),
            Constraint::Length(CustomLocationInput::HEIGHT),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        CityBar.render(
            frame,
            cities_area,
            Self::city_bar_props(state, props.is_focused),
        );
        self.input
            .render(frame, input_area, Self::input_props(state, props.is_focused));

        let mut body = WeatherBody;
        body.render(frame, body_area, WeatherBodyProps { state });

        let mut help = HelpBar;
        help.render(frame, help_area, HelpBarProps { focus: state.focus });
    }
}
