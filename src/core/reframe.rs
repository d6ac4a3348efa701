use crate::core::rewriter::rewrite_to_first_person;
use crate::domain::model::{EmotionSelection, ReframeRequest};
use crate::utils::error::{ReframeError, Result};
use crate::utils::validation::require_text;

impl ReframeRequest {
    pub fn new(
        thought: impl Into<String>,
        emotions: EmotionSelection,
        friend_response: impl Into<String>,
    ) -> Self {
        Self {
            thought: thought.into(),
            emotions,
            friend_response: friend_response.into(),
        }
    }
}

/// Fills the reframe template with an already-joined emotion list and the
/// first-person version of `friend_response`.
pub fn render_reframe(emotions: &str, friend_response: &str) -> String {
    format!(
        "I feel {}, but this feeling doesn't define me. {}",
        emotions,
        rewrite_to_first_person(friend_response)
    )
}

/// 產生重構後的句子；想法、回應與情緒都必須填寫
pub fn compose_reframe(request: &ReframeRequest) -> Result<String> {
    require_text("thought", &request.thought)?;
    require_text("friend_response", &request.friend_response)?;

    if request.emotions.is_empty() {
        return Err(ReframeError::validation(
            "Select or type at least one emotion",
        ));
    }

    let emotions = request.emotions.joined();
    tracing::debug!(
        emotions = %emotions,
        thought_len = request.thought.len(),
        "composing reframe"
    );

    Ok(render_reframe(&emotions, &request.friend_response))
}
