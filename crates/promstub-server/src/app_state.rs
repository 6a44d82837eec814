//! Shared application state.
//!
//! Holds the startup configuration behind an `Arc`. Handlers only read it.

use std::sync::Arc;

use crate::config::StubConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: StubConfig,
}

impl AppState {
    /// `cfg` is expected to be validated already (see `config::load_with`).
    pub fn new(cfg: StubConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
        }
    }

    pub fn cfg(&self) -> &StubConfig {
        &self.inner.cfg
    }
}
