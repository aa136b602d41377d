//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::Config;

/// Application state: the configuration plus the repository collaborator.
///
/// The repository is constructed once at process start and passed in
/// explicitly; handlers never reach for ambient globals.
pub struct AppState<R> {
    config: Arc<Config>,
    repository: Arc<R>,
}

impl<R> AppState<R> {
    pub fn new(config: Config, repository: R) -> Self {
        Self {
            config: Arc::new(config),
            repository: Arc::new(repository),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

// Manual impl: `R` itself does not need to be `Clone` behind the `Arc`s.
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            repository: Arc::clone(&self.repository),
        }
    }
}
