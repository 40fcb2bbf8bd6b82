//! Whole resolve -> fetch sequences through the store, against a mock
//! Open-Meteo server
//!
//! Effects are executed by hand in the order a test chooses, which lets it
//! pick the order responses "arrive" in.

use serde_json::json;
use tui_dispatch::EffectStore;
use weather_widget::action::Action;
use weather_widget::api::OpenMeteo;
use weather_widget::effect::Effect;
use weather_widget::reducer::reducer;
use weather_widget::state::{AppState, SequencePhase};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

type Store = EffectStore<AppState, Action, Effect>;

fn store() -> Store {
    EffectStore::new(AppState::new(), reducer)
}

fn client(server: &MockServer) -> OpenMeteo {
    OpenMeteo::with_base_urls(
        format!("{}/v1/search", server.uri()),
        format!("{}/v1/forecast", server.uri()),
    )
}

async fn mount_city(server: &MockServer, name: &str, latitude: f64, longitude: f64, hours: usize) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "name": name, "latitude": latitude, "longitude": longitude }]
        })))
        .mount(server)
        .await;

    let times: Vec<String> = (0..hours)
        .map(|h| format!("2024-07-04T{:02}:00", h))
        .collect();
    let temps: Vec<f64> = (0..hours).map(|h| latitude + h as f64).collect();

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", latitude.to_string()))
        .and(query_param("hourly", "temperature_2m"))
        .and(query_param("temperature_unit", "fahrenheit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "hourly": { "time": times, "temperature_2m": temps }
        })))
        .mount(server)
        .await;
}

async fn mount_unknown(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", name))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "generationtime_ms": 0.3
        })))
        .mount(server)
        .await;
}

/// Dispatch `action`, then run its effects (and theirs) to completion,
/// checking the loading flag after every step that is not terminal
async fn settle(store: &mut Store, api: &OpenMeteo, action: Action) {
    let mut pending = store.dispatch(action).effects;
    while let Some(effect) = pending.pop() {
        assert!(store.state().is_loading, "loading until terminal state");
        let result = effect.execute(api.clone()).await;
        pending.extend(store.dispatch(result).effects);
    }
}

#[tokio::test]
async fn test_austin_sequence_loads_forecast() {
    let server = MockServer::start().await;
    mount_city(&server, "austin", 30.26715, -97.74306, 24).await;
    let api = client(&server);
    let mut store = store();

    settle(&mut store, &api, Action::LocationSelect("austin".into())).await;

    let state = store.state();
    assert!(!state.is_loading);
    assert!(state.error.is_none());
    assert_eq!(state.phase, SequencePhase::Done);
    assert_eq!(state.forecast_len(), 24);
    assert_eq!(state.location, "austin");
}

#[tokio::test]
async fn test_unknown_city_fails_without_forecast() {
    let server = MockServer::start().await;
    mount_unknown(&server, "zzzzqqqq").await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let api = client(&server);
    let mut store = store();

    store.dispatch(Action::CustomLocationUpdate("zzzzqqqq".into()));
    settle(&mut store, &api, Action::CustomLocationSubmit).await;

    let state = store.state();
    assert!(!state.is_loading);
    assert!(state.forecast.is_none());
    assert_eq!(state.phase, SequencePhase::Failed);
    assert_eq!(
        state.error.as_deref(),
        Some("Could not geo-locate city: zzzzqqqq")
    );
    // the city stays in the list even though it failed
    assert!(state.cities.iter().any(|c| c == "zzzzqqqq"));
}

#[tokio::test]
async fn test_forecast_server_error_fails_sequence() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{ "latitude": 32.78, "longitude": -96.81 }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let api = client(&server);
    let mut store = store();

    settle(&mut store, &api, Action::LocationSelect("dallas".into())).await;

    let state = store.state();
    assert!(!state.is_loading);
    assert!(state.forecast.is_none());
    assert!(state.error.is_some());
    assert_eq!(state.phase, SequencePhase::Failed);
}

#[tokio::test]
async fn test_success_after_failure_clears_error() {
    let server = MockServer::start().await;
    mount_unknown(&server, "zzzzqqqq").await;
    mount_city(&server, "houston", 29.76, -95.36, 3).await;
    let api = client(&server);
    let mut store = store();

    settle(&mut store, &api, Action::LocationSelect("zzzzqqqq".into())).await;
    assert!(store.state().error.is_some());

    settle(&mut store, &api, Action::LocationSelect("houston".into())).await;

    let state = store.state();
    assert!(state.error.is_none());
    assert_eq!(state.forecast_len(), 3);
}

#[tokio::test]
async fn test_repeated_custom_submissions_add_city_once() {
    let server = MockServer::start().await;
    mount_city(&server, "boston", 42.36, -71.06, 2).await;
    let api = client(&server);
    let mut store = store();

    for _ in 0..3 {
        store.dispatch(Action::CustomLocationUpdate("boston".into()));
        settle(&mut store, &api, Action::CustomLocationSubmit).await;
    }

    let state = store.state();
    assert_eq!(state.cities, vec!["austin", "dallas", "houston", "boston"]);
    assert_eq!(state.sequence, 1);
    assert_eq!(state.forecast_len(), 2);
}

#[tokio::test]
async fn test_refresh_fetches_again() {
    let server = MockServer::start().await;
    mount_city(&server, "austin", 30.26715, -97.74306, 4).await;
    let api = client(&server);
    let mut store = store();

    settle(&mut store, &api, Action::LocationSelect("austin".into())).await;
    settle(&mut store, &api, Action::ForecastRefresh).await;

    let state = store.state();
    assert_eq!(state.sequence, 2);
    assert_eq!(state.forecast_len(), 4);
    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 4);
}

#[tokio::test]
async fn test_overlapping_sequences_last_response_wins() {
    let server = MockServer::start().await;
    mount_city(&server, "austin", 30.26715, -97.74306, 5).await;
    mount_city(&server, "dallas", 32.78, -96.81, 7).await;
    let api = client(&server);
    let mut store = store();

    // austin starts, then dallas is picked before austin finishes
    let austin_resolve = store
        .dispatch(Action::LocationSelect("austin".into()))
        .effects;
    let dallas_resolve = store
        .dispatch(Action::LocationSelect("dallas".into()))
        .effects;
    assert_eq!(store.state().sequence, 2);

    // dallas completes first
    for effect in dallas_resolve {
        let resolved = effect.execute(api.clone()).await;
        for fetch in store.dispatch(resolved).effects {
            let loaded = fetch.execute(api.clone()).await;
            store.dispatch(loaded);
        }
    }
    assert_eq!(store.state().forecast_len(), 7);

    // austin's responses arrive late and are still applied
    for effect in austin_resolve {
        let resolved = effect.execute(api.clone()).await;
        for fetch in store.dispatch(resolved).effects {
            assert_eq!(fetch.seq(), 1);
            let loaded = fetch.execute(api.clone()).await;
            store.dispatch(loaded);
        }
    }

    let state = store.state();
    assert_eq!(state.forecast_len(), 5);
    assert_eq!(state.location, "dallas");
    assert!(!state.is_loading);
}
