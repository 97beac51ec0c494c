use config::Config;
use std::sync::Arc;
use summary_engine::SummaryEnhancer;

pub mod config;
pub mod logging;

// Service-level state containing only infrastructure concerns.
// Cloneable so each session can carry its own handle; the enhancer itself
// is immutable and shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    enhancer: Arc<SummaryEnhancer>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            enhancer: Arc::new(SummaryEnhancer::default()),
        }
    }

    pub fn enhancer_ref(&self) -> &SummaryEnhancer {
        self.enhancer.as_ref()
    }
}
