use anyhow::Result;
use chrono::{Local, TimeZone, Utc};
use reframe_kit::{CheckInTracker, ExportFormat, LocalStorage, ReframeJournal, SaveOutcome};
use tempfile::TempDir;

fn storage(temp_dir: &TempDir) -> LocalStorage {
    LocalStorage::new(temp_dir.path().to_string_lossy().to_string())
}

/// 重構句子寫入磁碟後，重新開啟仍可讀取
#[test]
fn test_journal_persists_across_instances() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let at = Utc.with_ymd_and_hms(2025, 7, 6, 18, 30, 0).unwrap();

    {
        let journal = ReframeJournal::new(storage(&temp_dir));
        journal.save("I feel sad, but this feeling doesn't define me. I matter", at)?;
        journal.save("I feel tired, but this feeling doesn't define me. I am safe", at)?;
    }

    let reopened = ReframeJournal::new(storage(&temp_dir));
    let entries = reopened.list()?;
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].saved_at, at);
    assert!(temp_dir.path().join("saved_reframes.json").exists());

    let outcome = reopened.save(&entries[1].text, Utc::now())?;
    assert!(matches!(outcome, SaveOutcome::Duplicate(ref e) if e.id == 2));

    Ok(())
}

#[test]
fn test_export_after_delete() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let journal = ReframeJournal::new(storage(&temp_dir));
    let at = Utc.with_ymd_and_hms(2025, 7, 6, 18, 30, 0).unwrap();

    journal.save("first", at)?;
    journal.save("second", at)?;
    journal.delete(1)?;

    let csv = journal.export(ExportFormat::Csv)?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "id,text,saved_at");
    assert!(lines[1].starts_with("2,second,2025-07-06T18:30:00"));

    Ok(())
}

#[test]
fn test_check_in_shares_data_dir_with_journal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let tracker = CheckInTracker::new(storage(&temp_dir));
    let journal = ReframeJournal::new(storage(&temp_dir));

    journal.save("something kind", Utc::now())?;
    tracker.mark_completed()?;

    let reopened = CheckInTracker::new(storage(&temp_dir));
    assert!(reopened.completed_on(Local::now().date_naive())?);
    assert_eq!(journal.list()?.len(), 1);
    assert!(temp_dir.path().join("lastDailyCheckInDate.json").exists());

    Ok(())
}
