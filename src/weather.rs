use crate::app::AppState;
use crate::forecast::{WeatherForecast, generate_forecasts};
use axum::{
    Router,
    extract::{Json, State},
    routing::get,
};

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/weatherforecast", get(get_weather_forecast))
        .route("/WeatherForecast", get(get_weather_forecast))
        .with_state(state)
}

pub async fn get_weather_forecast(State(state): State<AppState>) -> Json<Vec<WeatherForecast>> {
    let forecasts = generate_forecasts(state.clock.as_ref(), state.random.as_ref());
    if let Some(first) = forecasts.first() {
        log::debug!(
            "Generated {} forecasts starting {}",
            forecasts.len(),
            first.date
        );
    }
    Json(forecasts)
}
