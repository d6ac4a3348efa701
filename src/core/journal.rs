use crate::domain::model::{SaveOutcome, SavedReframe};
use crate::domain::ports::Storage;
use crate::utils::error::{ReframeError, Result};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

pub const JOURNAL_KEY: &str = "saved_reframes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    Csv,
    Tsv,
    #[default]
    Json,
}

impl ExportFormat {
    pub const SUPPORTED: [&'static str; 3] = ["csv", "tsv", "json"];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ReframeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ReframeError::InvalidConfigValueError {
                field: "export_format".to_string(),
                value: other.to_string(),
                reason: format!("Supported formats: {}", Self::SUPPORTED.join(", ")),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// 已儲存的重構句子，整份清單以 JSON 存在單一鍵下
pub struct ReframeJournal<S: Storage> {
    storage: S,
}

impl<S: Storage> ReframeJournal<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn list(&self) -> Result<Vec<SavedReframe>> {
        match self.storage.read(JOURNAL_KEY)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn store(&self, entries: &[SavedReframe]) -> Result<()> {
        let data = serde_json::to_vec_pretty(entries)?;
        self.storage.write(JOURNAL_KEY, &data)
    }

    /// Saves `text` unless an entry with the same text already exists.
    pub fn save(&self, text: &str, at: DateTime<Utc>) -> Result<SaveOutcome> {
        let mut entries = self.list()?;

        if let Some(existing) = entries.iter().find(|e| e.text == text) {
            tracing::debug!(id = existing.id, "reframe already saved");
            return Ok(SaveOutcome::Duplicate(existing.clone()));
        }

        let id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let entry = SavedReframe {
            id,
            text: text.to_string(),
            saved_at: at,
        };
        entries.push(entry.clone());
        self.store(&entries)?;

        tracing::info!(id, "saved reframe");
        Ok(SaveOutcome::Saved(entry))
    }

    pub fn save_now(&self, text: &str) -> Result<SaveOutcome> {
        self.save(text, Utc::now())
    }

    pub fn delete(&self, id: u64) -> Result<SavedReframe> {
        let mut entries = self.list()?;
        let position = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(ReframeError::NotFound { id })?;

        let removed = entries.remove(position);
        self.store(&entries)?;

        tracing::info!(id, "deleted reframe");
        Ok(removed)
    }

    pub fn export(&self, format: ExportFormat) -> Result<String> {
        let entries = self.list()?;
        tracing::debug!(count = entries.len(), %format, "exporting journal");

        match format {
            ExportFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
            ExportFormat::Csv => write_delimited(&entries, b','),
            ExportFormat::Tsv => write_delimited(&entries, b'\t'),
        }
    }
}

fn write_delimited(entries: &[SavedReframe], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    // 空清單也要輸出標題列
    if entries.is_empty() {
        writer.write_record(["id", "text", "saved_at"])?;
    }
    for entry in entries {
        writer.serialize(entry)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReframeError::ProcessingError {
            message: format!("Failed to flush export: {}", e),
        })?;

    String::from_utf8(bytes).map_err(|e| ReframeError::ProcessingError {
        message: format!("Export is not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MockStorage {
        fn read(&self, key: &str) -> Result<Option<Vec<u8>>> {
            Ok(self.files.borrow().get(key).cloned())
        }

        fn write(&self, key: &str, data: &[u8]) -> Result<()> {
            self.files.borrow_mut().insert(key.to_string(), data.to_vec());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<()> {
            self.files.borrow_mut().remove(key);
            Ok(())
        }
    }

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 6, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_save_assigns_increasing_ids() {
        let journal = ReframeJournal::new(MockStorage::default());

        let first = journal.save("I feel sad, but...", at(9)).unwrap();
        let second = journal.save("I feel tired, but...", at(10)).unwrap();

        assert!(matches!(first, SaveOutcome::Saved(_)));
        assert_eq!(first.entry().id, 1);
        assert_eq!(second.entry().id, 2);
        assert_eq!(journal.list().unwrap().len(), 2);
    }

    #[test]
    fn test_save_skips_duplicate_text() {
        let journal = ReframeJournal::new(MockStorage::default());

        journal.save("same text", at(9)).unwrap();
        let again = journal.save("same text", at(11)).unwrap();

        assert!(matches!(again, SaveOutcome::Duplicate(_)));
        assert_eq!(again.entry().saved_at, at(9));
        assert_eq!(journal.list().unwrap().len(), 1);
    }

    #[test]
    fn test_delete() {
        let journal = ReframeJournal::new(MockStorage::default());
        journal.save("one", at(9)).unwrap();
        journal.save("two", at(10)).unwrap();

        let removed = journal.delete(1).unwrap();
        assert_eq!(removed.text, "one");

        let remaining = journal.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);

        assert!(matches!(
            journal.delete(1),
            Err(ReframeError::NotFound { id: 1 })
        ));
    }

    #[test]
    fn test_ids_not_reused_after_delete_of_earlier_entry() {
        let journal = ReframeJournal::new(MockStorage::default());
        journal.save("one", at(9)).unwrap();
        journal.save("two", at(10)).unwrap();
        journal.delete(1).unwrap();

        let third = journal.save("three", at(11)).unwrap();
        assert_eq!(third.entry().id, 3);
    }

    #[test]
    fn test_export_formats() {
        let journal = ReframeJournal::new(MockStorage::default());
        journal.save("I am enough, really", at(9)).unwrap();

        let csv = journal.export(ExportFormat::Csv).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("id,text,saved_at"));
        assert!(lines.next().unwrap().starts_with("1,\"I am enough, really\","));

        let tsv = journal.export(ExportFormat::Tsv).unwrap();
        assert!(tsv.starts_with("id\ttext\tsaved_at\n1\tI am enough, really\t"));

        let json = journal.export(ExportFormat::Json).unwrap();
        let parsed: Vec<SavedReframe> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0].text, "I am enough, really");
    }

    #[test]
    fn test_export_empty_journal_has_header() {
        let journal = ReframeJournal::new(MockStorage::default());
        assert_eq!(
            journal.export(ExportFormat::Csv).unwrap(),
            "id,text,saved_at\n"
        );
        assert_eq!(journal.export(ExportFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!(" tsv ".parse::<ExportFormat>().unwrap(), ExportFormat::Tsv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
