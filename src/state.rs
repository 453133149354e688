// src/state.rs
use std::sync::Arc;

use crate::services::model::ModelClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub model: Arc<dyn ModelClient>,
}

impl AppState {
    pub fn new(model: Arc<dyn ModelClient>) -> Self {
        Self { model }
    }
}
