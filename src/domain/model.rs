use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 使用者選取的情緒標籤（依字母排序、不重複）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionSelection {
    pub(crate) labels: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReframeRequest {
    pub thought: String,
    pub emotions: EmotionSelection,
    pub friend_response: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedReframe {
    pub id: u64,
    pub text: String,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(SavedReframe),
    Duplicate(SavedReframe),
}

impl SaveOutcome {
    pub fn entry(&self) -> &SavedReframe {
        match self {
            SaveOutcome::Saved(entry) | SaveOutcome::Duplicate(entry) => entry,
        }
    }
}
