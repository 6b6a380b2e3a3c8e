use std::sync::Arc;

use axum::extract::FromRef;

use crate::{fetcher::PostFetcher, AppConfig, AppState};

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.app.clone()
    }
}

impl FromRef<AppState> for Arc<dyn PostFetcher> {
    fn from_ref(state: &AppState) -> Self {
        state.fetcher.clone()
    }
}
