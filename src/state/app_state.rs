use crate::generator::Generator;
use std::sync::Arc;

/// Shared by every request; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<Generator>,
}

impl AppState {
    pub fn new(generator: Generator) -> Self {
        Self { generator: Arc::new(generator) }
    }
}
