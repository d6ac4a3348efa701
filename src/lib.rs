pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::storage::LocalStorage;
#[cfg(feature = "cli")]
pub use crate::app::commands::AppContext;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::core::check_in::CheckInTracker;
pub use crate::core::emotions::{join_emotions, parse_emotion_input};
pub use crate::core::journal::{ExportFormat, ReframeJournal};
pub use crate::core::reframe::{compose_reframe, render_reframe};
pub use crate::core::rewriter::{rewrite_to_first_person, FirstPersonRewriter};
pub use crate::domain::model::{EmotionSelection, ReframeRequest, SaveOutcome, SavedReframe};
pub use crate::utils::error::{ReframeError, Result};
