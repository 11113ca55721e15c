use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::sources::{Clock, RandomSource, SystemClock, ThreadRandom};
use crate::weather;

// Cloned into every request; the clock and random source behind the Arcs are shared.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    pub random: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn system() -> AppState {
        AppState {
            clock: Arc::new(SystemClock),
            random: Arc::new(ThreadRandom),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(weather::routes(state))
        .layer(TraceLayer::new_for_http())
}
