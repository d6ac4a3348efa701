pub mod check_in;
pub mod emotions;
pub mod journal;
pub mod reframe;
pub mod rewriter;

pub use crate::domain::model::{EmotionSelection, ReframeRequest, SaveOutcome, SavedReframe};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
