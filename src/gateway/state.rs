use std::sync::Arc;

use crate::fallback::ContextLookup;
use crate::resolver::Translator;

/// Shared handler state: one read-only translator for every request.
pub struct AppState<F: ContextLookup> {
    pub translator: Arc<Translator<F>>,
}

impl<F: ContextLookup> AppState<F> {
    pub fn new(translator: Arc<Translator<F>>) -> Self {
        Self { translator }
    }
}

impl<F: ContextLookup> Clone for AppState<F> {
    fn clone(&self) -> Self {
        Self {
            translator: Arc::clone(&self.translator),
        }
    }
}
