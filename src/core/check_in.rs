use crate::domain::ports::Storage;
use crate::utils::error::{ReframeError, Result};
use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

pub const LAST_CHECK_IN_KEY: &str = "lastDailyCheckInDate";

/// Tracks whether the daily check-in was completed, keyed by local calendar day.
pub struct CheckInTracker<S: Storage> {
    storage: S,
}

impl<S: Storage> CheckInTracker<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn last_completed(&self) -> Result<Option<DateTime<Utc>>> {
        let Some(bytes) = self.storage.read(LAST_CHECK_IN_KEY)? else {
            return Ok(None);
        };

        let raw = String::from_utf8_lossy(&bytes);
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| ReframeError::ProcessingError {
                message: format!("Invalid stored check-in date '{}': {}", raw.trim(), e),
            })
    }

    pub fn mark_completed_at(&self, at: DateTime<Utc>) -> Result<()> {
        self.storage
            .write(LAST_CHECK_IN_KEY, at.to_rfc3339().as_bytes())?;
        tracing::info!(at = %at, "daily check-in completed");
        Ok(())
    }

    pub fn mark_completed(&self) -> Result<()> {
        self.mark_completed_at(Utc::now())
    }

    pub fn completed_on(&self, day: NaiveDate) -> Result<bool> {
        Ok(self
            .last_completed()?
            .map(|at| at.with_timezone(&Local).date_naive() == day)
            .unwrap_or(false))
    }

    pub fn has_completed_today(&self) -> Result<bool> {
        self.completed_on(Local::now().date_naive())
    }

    pub fn reset(&self) -> Result<()> {
        self.storage.remove(LAST_CHECK_IN_KEY)
    }
}

/// 依一年中的第幾天挑選當日的身體欣賞語句
pub fn phrase_for(day: NaiveDate, phrases: &[String]) -> Option<&str> {
    if phrases.is_empty() {
        return None;
    }
    let index = day.ordinal0() as usize % phrases.len();
    Some(phrases[index].as_str())
}
