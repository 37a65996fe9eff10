//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the single registration form for this process. Handlers take
//! the write lock for the whole of a mutating operation, so a submit that
//! applies three field updates and then commits is atomic with respect to
//! other requests.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::registration::RegistrationForm;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; inner fields are Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub form: Arc<RwLock<RegistrationForm>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing form, e.g. one seeded with submissions.
    #[must_use]
    pub fn with_form(form: RegistrationForm) -> Self {
        Self { form: Arc::new(RwLock::new(form)) }
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
