//! Weather widget binary
//!
//! FRAMEWORK PATTERN: EffectRuntime loop
//! - EffectStore for state management with declarative effects
//! - EffectRuntime handles event polling + action routing
//! - TaskManager runs each resolve/fetch step as its own task
//! - Subscriptions for the spinner tick and optional auto-refresh
//! - Debug layer for inspection (F12)
//!
//! # Usage
//!
//! ```sh
//! # Start on austin
//! cargo run -p weather-widget
//!
//! # Start on another city, refresh every 5 minutes, log to a file
//! cargo run -p weather-widget -- --city "San Antonio" -r 300 --log-file weather.log
//! ```

use std::cell::RefCell;
use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tui_dispatch::debug::DebugLayer;
use tui_dispatch::{
    EffectContext, EffectRuntime, EffectStoreWithMiddleware, EventKind, EventOutcome,
    RenderContext,
};

use weather_widget::action::Action;
use weather_widget::api::OpenMeteo;
use weather_widget::components::{Component, WeatherDisplay, WeatherDisplayProps};
use weather_widget::config::Args;
use weather_widget::effect::Effect;
use weather_widget::logging;
use weather_widget::reducer::reducer;
use weather_widget::state::{AppState, LOADING_ANIM_TICK_MS};

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = args.log_file.as_deref() {
        if let Err(e) = logging::init_file_logging(path) {
            eprintln!("Error: could not open log file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "exited with error");
    }
    result
}

struct WeatherUi {
    display: WeatherDisplay,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            display: WeatherDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
    ) {
        let props = WeatherDisplayProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> EventOutcome<Action> {
        if let EventKind::Resize(width, height) = event {
            return EventOutcome::action(Action::UiTerminalResize(*width, *height)).with_render();
        }

        let props = WeatherDisplayProps {
            state,
            is_focused: true,
        };
        EventOutcome::actions(self.display.handle_event(event, props))
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: Args,
) -> io::Result<()> {
    let mut state = AppState::new();
    let size = terminal.size()?;
    state.terminal_size = (size.width, size.height);

    let store = EffectStoreWithMiddleware::new(state, reducer, tui_dispatch::NoopMiddleware);

    // Debug layer for inspection (F12) - only active when --debug
    let debug = DebugLayer::simple().active(args.debug);

    let mut runtime = EffectRuntime::from_store(store).with_debug(debug);

    // Tick timer for loading animation
    runtime
        .subscriptions()
        .interval("tick", Duration::from_millis(LOADING_ANIM_TICK_MS), || {
            Action::Tick
        });

    if args.refresh_interval > 0 {
        runtime.subscriptions().interval(
            "refresh",
            Duration::from_secs(args.refresh_interval),
            || Action::ForecastRefresh,
        );
    }

    // Initial mount: a change from "no selection" to the starting city
    let city = args.city.clone();
    runtime.enqueue(Action::CustomLocationUpdate(city));
    runtime.enqueue(Action::CustomLocationSubmit);

    let api = OpenMeteo::new();
    let ui = RefCell::new(WeatherUi::new());

    tracing::info!(city = %args.city, refresh = args.refresh_interval, "starting");

    runtime
        .run(
            terminal,
            |frame, area, state, render_ctx| {
                ui.borrow_mut().render(frame, area, state, render_ctx);
            },
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(&api, effect, ctx),
        )
        .await
}

/// Run each sequence step as its own task. Keys are unique per sequence, so
/// a newer selection never cancels an older one still in flight.
fn handle_effect(api: &OpenMeteo, effect: Effect, ctx: &mut EffectContext<Action>) {
    tracing::debug!(seq = effect.seq(), key = %effect.task_key(), "spawning effect");
    ctx.tasks()
        .spawn(effect.task_key(), effect.execute(api.clone()));
}
