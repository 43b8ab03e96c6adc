use std::sync::Arc;

use crate::config::Config;
use crate::extract::skills::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Requests are independent; nothing here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Fixed skill vocabulary with pre-compiled matchers. Read-only.
    pub vocabulary: Arc<SkillVocabulary>,
}
