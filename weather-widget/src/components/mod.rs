pub mod city_bar;
pub mod custom_location_input;
pub mod forecast_table;
pub mod help_bar;
pub mod location_header;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use city_bar::{CityBar, CityBarProps};
pub use custom_location_input::{CustomLocationInput, CustomLocationInputProps};
pub use forecast_table::{ForecastTable, ForecastTableProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{ERROR_ICON, SPINNERS, WeatherDisplay, WeatherDisplayProps};
