use crate::core::checker::InnChecker;
use crate::core::RegistryClient;
use std::sync::Arc;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<InnChecker>,
}

impl AppState {
    pub fn new(registry: Arc<dyn RegistryClient>) -> Self {
        Self {
            checker: Arc::new(InnChecker::new(registry)),
        }
    }
}
