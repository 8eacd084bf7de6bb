use anyhow::Result;
use rankings::domain::ports::ReadOnlyStore;
use rankings::{ContestResult, FileStore, RankingsConfig, RankingsError, ResultsProcessor};
use tempfile::TempDir;

fn processor_in(temp_dir: &TempDir) -> ResultsProcessor<FileStore, RankingsConfig> {
    let path = temp_dir.path().join("contest-results.jsonl");
    let config = RankingsConfig::default().with_store_path(path.to_string_lossy().to_string());
    ResultsProcessor::new(FileStore::new(path), config)
}

#[test]
fn test_results_survive_between_processors() -> Result<()> {
    let temp_dir = TempDir::new()?;

    processor_in(&temp_dir).process(["Alice 10, Bob 20"])?;
    processor_in(&temp_dir).process(["Bob 3, Charlie 3", "Alice 2, Charlie 1"])?;

    let results = processor_in(&temp_dir).load_results()?;
    assert_eq!(results.len(), 3);
    assert_eq!(
        results[0],
        ContestResult {
            contestant1_name: "Alice".to_string(),
            contestant1_score: 10,
            contestant2_name: "Bob".to_string(),
            contestant2_score: 20,
        }
    );

    let mut out = Vec::new();
    processor_in(&temp_dir).display_ranking_table(&mut out)?;
    assert_eq!(
        String::from_utf8(out)?,
        "The current ranking is:\n1. Bob, 4 pts\n2. Alice, 3 pts\n3. Charlie, 1 pt\n"
    );
    Ok(())
}

#[test]
fn test_rejected_batch_leaves_file_untouched() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let processor = processor_in(&temp_dir);

    processor.process(["Alice 10, Bob 20"])?;
    let before = std::fs::read_to_string(processor.store().path())?;

    let err = processor
        .process(["Carol 1, Dan 2", "Alice 10,Bob 20,Charlie 30"])
        .unwrap_err();
    assert!(matches!(err, RankingsError::Batch { line: 2, .. }));

    let after = std::fs::read_to_string(processor.store().path())?;
    assert_eq!(before, after);
    Ok(())
}

#[test]
fn test_first_rejected_batch_creates_no_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let processor = processor_in(&temp_dir);

    assert!(processor.process(["Alice 10, Bob 20", "BadLine"]).is_err());
    assert!(!processor.store().is_initialized());
    assert!(!processor.store().path().exists());
    Ok(())
}

#[test]
fn test_clear_then_display_reports_no_data() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let processor = processor_in(&temp_dir);

    processor.process(["Alice 10, Bob 20"])?;
    processor.clear_contest_results()?;
    assert!(!processor.store().path().exists());

    assert!(processor.ranking_table()?.is_none());
    Ok(())
}

#[test]
fn test_empty_store_file_has_no_ranking() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let processor = processor_in(&temp_dir);

    processor.process(Vec::<String>::new())?;
    assert!(processor.store().is_initialized());
    assert!(processor.store().is_empty());
    assert!(processor.ranking_table()?.is_none());
    Ok(())
}

#[test]
fn test_hand_written_log_is_read() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let processor = processor_in(&temp_dir);
    std::fs::write(
        processor.store().path(),
        "{\"Contestant1Name\":\"Awesome FC\",\"Contestant1Score\":22,\"Contestant2Name\":\"Boresome FC\",\"Contestant2Score\":11}\n",
    )?;

    let rows = processor.ranking_table()?.expect("ranking rows");
    assert_eq!(rows[0].name, "Awesome FC");
    assert_eq!(rows[0].points, 3);
    assert_eq!(rows[1].rank, 2);
    Ok(())
}
