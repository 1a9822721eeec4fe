use std::sync::Arc;

use services::TrailService;

pub trait UiApp: Send + Sync {
    fn trail(&self) -> Arc<TrailService>;
}

#[derive(Clone)]
pub struct AppContext {
    trail: Arc<TrailService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self { trail: app.trail() }
    }

    #[must_use]
    pub fn trail(&self) -> Arc<TrailService> {
        Arc::clone(&self.trail)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
