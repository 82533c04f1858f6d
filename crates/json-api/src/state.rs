//! State

use std::sync::Arc;

use beacon_app::{auth::AuthService, context::AppContext, domain::hooks::HooksService};

/// Services shared by every request, injected into the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) hooks: Arc<dyn HooksService>,
    pub(crate) auth: Arc<dyn AuthService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(hooks: Arc<dyn HooksService>, auth: Arc<dyn AuthService>) -> Self {
        Self { hooks, auth }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.hooks, app.auth))
    }
}
