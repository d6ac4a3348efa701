use crate::config::{CheckInAction, Command, JournalAction, TomlConfig};
use crate::core::check_in::{phrase_for, CheckInTracker};
use crate::core::journal::{ExportFormat, ReframeJournal};
use crate::core::reframe::compose_reframe;
use crate::core::rewriter::rewrite_to_first_person;
use crate::core::{ConfigProvider, EmotionSelection, ReframeRequest, SaveOutcome, Storage};
use crate::utils::error::Result;
use chrono::{Local, NaiveDate};

/// 執行單一 CLI 指令所需的配置與儲存
pub struct AppContext<S: Storage> {
    pub config: TomlConfig,
    pub storage: S,
}

impl<S: Storage> AppContext<S> {
    pub fn new(config: TomlConfig, storage: S) -> Self {
        Self { config, storage }
    }

    pub fn journal(&self) -> ReframeJournal<&S> {
        ReframeJournal::new(&self.storage)
    }

    pub fn check_in(&self) -> CheckInTracker<&S> {
        CheckInTracker::new(&self.storage)
    }

    /// Runs `command` and returns the text to print.
    pub fn execute(&self, command: &Command) -> Result<String> {
        tracing::debug!("Executing command: {:?}", command);

        match command {
            Command::Rewrite { text } => Ok(rewrite_to_first_person(text)),
            Command::Reframe {
                thought,
                emotions,
                response,
                save,
            } => self.reframe(thought, emotions, response, *save),
            Command::Journal { action } => self.journal_action(action),
            Command::CheckIn { action } => self.check_in_action(action, Local::now().date_naive()),
            Command::Catalog => Ok(self.render_catalog()),
        }
    }

    fn reframe(&self, thought: &str, emotions: &str, response: &str, save: bool) -> Result<String> {
        let request = ReframeRequest::new(thought, EmotionSelection::from_input(emotions), response);
        let text = compose_reframe(&request)?;

        if !save {
            return Ok(text);
        }

        let note = match self.journal().save_now(&text)? {
            SaveOutcome::Saved(entry) => format!("Saved as #{}", entry.id),
            SaveOutcome::Duplicate(entry) => format!("Already saved as #{}", entry.id),
        };
        Ok(format!("{}\n{}", text, note))
    }

    fn journal_action(&self, action: &JournalAction) -> Result<String> {
        let journal = self.journal();

        match action {
            JournalAction::List => {
                let entries = journal.list()?;
                if entries.is_empty() {
                    return Ok("No saved reframes yet.".to_string());
                }
                let lines: Vec<String> = entries
                    .iter()
                    .map(|e| {
                        format!(
                            "#{}  {}  {}",
                            e.id,
                            e.saved_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
                            e.text
                        )
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
            JournalAction::Delete { id } => {
                let removed = journal.delete(*id)?;
                Ok(format!("Deleted #{}: {}", removed.id, removed.text))
            }
            JournalAction::Export { format, output } => {
                let format = match format {
                    Some(f) => f.parse::<ExportFormat>()?,
                    None => self.config.export_format()?,
                };
                let exported = journal.export(format)?;

                match output {
                    Some(path) => {
                        std::fs::write(path, &exported)?;
                        let count = journal.list()?.len();
                        tracing::info!("📁 Exported {} reframes to {}", count, path);
                        Ok(format!("Exported {} reframes as {} to {}", count, format, path))
                    }
                    None => Ok(exported),
                }
            }
        }
    }

    fn check_in_action(&self, action: &CheckInAction, today: NaiveDate) -> Result<String> {
        let tracker = self.check_in();

        match action {
            CheckInAction::Status => {
                if tracker.completed_on(today)? {
                    return Ok("Daily check-in completed today.".to_string());
                }
                let mut out = "Daily check-in not done yet today.".to_string();
                if let Some(phrase) = phrase_for(today, self.config.check_in_phrases()) {
                    out.push_str(&format!("\nToday's statement: {}", phrase));
                }
                Ok(out)
            }
            CheckInAction::Complete => {
                tracker.mark_completed()?;
                Ok("Daily check-in marked complete.".to_string())
            }
        }
    }

    fn render_catalog(&self) -> String {
        let sections: [(&str, &[String]); 4] = [
            ("Emotions", self.config.emotions()),
            ("Common thoughts", self.config.common_thoughts()),
            ("Grounding activities", self.config.grounding_activities()),
            ("Check-in statements", self.config.check_in_phrases()),
        ];

        sections
            .iter()
            .map(|(title, items)| {
                let body: Vec<String> = items.iter().map(|i| format!("  • {}", i)).collect();
                format!("{}:\n{}", title, body.join("\n"))
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
