use std::sync::Arc;

use axum::extract::FromRef;
use chrono::{SecondsFormat, Utc};

use crate::application::Prompts;
use crate::domain::ports::Orchestrator;
use crate::infrastructure::Settings;

/// Fixed process facts reported by the liveness route. Captured once at
/// startup; every request of one process lifetime sees the same values.
#[derive(Debug, Clone)]
pub struct SystemInfo {
    pub started_at: String,
}

impl SystemInfo {
    pub fn at_startup() -> Self {
        Self {
            started_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<dyn Orchestrator>,
    pub prompts: Arc<Prompts>,
    pub settings: Arc<Settings>,
    pub system: SystemInfo,
}

impl AppState {
    pub fn new(orchestrator: Arc<dyn Orchestrator>, settings: Arc<Settings>) -> Self {
        Self {
            orchestrator,
            prompts: Arc::new(Prompts::default()),
            settings,
            system: SystemInfo::at_startup(),
        }
    }

    pub fn with_prompts(mut self, prompts: Arc<Prompts>) -> Self {
        self.prompts = prompts;
        self
    }
}

impl FromRef<AppState> for SystemInfo {
    fn from_ref(state: &AppState) -> Self {
        state.system.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_started_at_is_rfc3339_utc() {
        let system = SystemInfo::at_startup();

        assert!(system.started_at.ends_with('Z'));
        chrono::DateTime::parse_from_rfc3339(&system.started_at).unwrap();
    }
}
