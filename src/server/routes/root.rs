//! GET / - Redirect to the dashboard base path

use axum::{extract::State, response::Redirect};
use std::sync::Arc;

use crate::server::state::AppState;

pub async fn redirect_to_base(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::temporary(&state.config.base_path)
}
