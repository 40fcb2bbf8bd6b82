//! Time / temperature table, one row per forecast sample in service order

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Row, Table},
};

use super::Component;
use crate::action::Action;
use crate::state::{Forecast, HourlySample};

pub struct ForecastTable;

pub struct ForecastTableProps<'a> {
    pub forecast: &'a Forecast,
    /// First visible row
    pub offset: usize,
}

/// Cells for one row: formatted time and temperature
pub fn row_cells(sample: &HourlySample) -> [String; 2] {
    [sample.time_label(), sample.temperature_label()]
}

impl Component<Action> for ForecastTable {
    type Props<'a> = ForecastTableProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let total = props.forecast.len();
        let offset = props.offset.min(total.saturating_sub(1));

        let rows = props.forecast.samples.iter().skip(offset).map(|sample| {
            let [time, temp] = row_cells(sample);
            Row::new(vec![time, temp]).style(Style::default().fg(temp_to_color(sample.temperature_f)))
        });

        let header = Row::new(vec!["Time", "Forecast (F)"])
            .style(Style::default().fg(Color::Cyan).bold())
            .bottom_margin(1);

        let last = (offset + visible_rows(area.height)).min(total);
        let title = if total == 0 {
            " Hourly ".to_string()
        } else {
            format!(" Hourly {}-{} of {} ", offset + 1, last, total)
        };

        let table = Table::new(rows, [Constraint::Length(18), Constraint::Length(14)])
            .header(header)
            .column_spacing(2)
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
                    .title(title),
            );

        frame.render_widget(table, area);
    }
}

/// Rows that fit below the top border, the header and its margin
fn visible_rows(height: u16) -> usize {
    height.saturating_sub(3) as usize
}

/// Get temperature-based color (Fahrenheit)
fn temp_to_color(fahrenheit: Option<f64>) -> Color {
    let Some(fahrenheit) = fahrenheit else {
        return Color::DarkGray;
    };
    match fahrenheit as i32 {
        ..=14 => Color::Rgb(150, 200, 255),   // Very cold - light blue
        15..=32 => Color::Rgb(100, 180, 255), // Cold - blue
        33..=50 => Color::Rgb(100, 220, 200), // Cool - cyan
        51..=68 => Color::Rgb(150, 230, 150), // Mild - green
        69..=86 => Color::Rgb(255, 220, 100), // Warm - yellow
        87..=104 => Color::Rgb(255, 150, 80), // Hot - orange
        _ => Color::Rgb(255, 100, 100),       // Very hot - red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tui_dispatch::testing::*;

    fn forecast(rows: usize) -> Forecast {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        Forecast {
            samples: (0..rows)
                .map(|i| HourlySample {
                    time: start + chrono::Duration::hours(i as i64),
                    temperature_f: Some(40.5 + i as f64),
                })
                .collect(),
        }
    }

    #[test]
    fn test_row_cells() {
        let forecast = forecast(1);
        assert_eq!(
            row_cells(&forecast.samples[0]),
            ["1/15/2024 0:00".to_string(), "40.5".to_string()]
        );
    }

    #[test]
    fn test_render_one_line_per_sample() {
        let forecast = forecast(6);
        let mut render = RenderHarness::new(40, 12);
        let mut table = ForecastTable;

        let output = render.render_to_string_plain(|frame| {
            let props = ForecastTableProps {
                forecast: &forecast,
                offset: 0,
            };
            table.render(frame, frame.area(), props);
        });

        assert!(output.contains("Forecast (F)"));
        assert_eq!(output.matches("/15/2024").count(), 6);
        assert!(output.contains("1/15/2024 5:00"));
        assert!(output.contains("45.5"));
    }

    #[test]
    fn test_render_from_offset() {
        let forecast = forecast(6);
        let mut render = RenderHarness::new(40, 12);
        let mut table = ForecastTable;

        let output = render.render_to_string_plain(|frame| {
            let props = ForecastTableProps {
                forecast: &forecast,
                offset: 4,
            };
            table.render(frame, frame.area(), props);
        });

        assert!(!output.contains("1/15/2024 0:00"));
        assert!(output.contains("1/15/2024 4:00"));
        assert!(output.contains("5-6 of 6"));
    }

    #[test]
    fn test_title_shows_visible_range() {
        let forecast = forecast(168);
        let mut render = RenderHarness::new(40, 13);
        let mut table = ForecastTable;

        let output = render.render_to_string_plain(|frame| {
            let props = ForecastTableProps {
                forecast: &forecast,
                offset: 4,
            };
            table.render(frame, frame.area(), props);
        });

        assert!(output.contains("5-14 of 168"));
        assert_eq!(output.matches("/2024").count(), 10);
    }

    #[test]
    fn test_temp_colors() {
        assert_eq!(temp_to_color(None), Color::DarkGray);
        assert_eq!(temp_to_color(Some(0.0)), Color::Rgb(150, 200, 255));
        assert_eq!(temp_to_color(Some(72.0)), Color::Rgb(255, 220, 100));
    }
}
