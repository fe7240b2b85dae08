use intellicode::config::constants::HISTORY_CAPACITY;
use intellicode::enums::language::Language;
use intellicode::services::analysis_manager::AnalysisManager;
use intellicode::services::code_analyzer::CodeAnalyzer;
use intellicode::services::history_manager::HistoryManager;
use intellicode::services::storage::file_store::FileStore;
use intellicode::services::storage::memory_store::MemoryStore;
use intellicode::traits::random_source::SeededRandom;
use tempfile::TempDir;
use crate::ScriptedRandom;

#[test]
fn sixty_appends_keep_fifty_newest_first() {
    let mut rng = SeededRandom::new(3);
    let mut history = Vec::new();
    let mut ids = Vec::new();
    for n in 0..60 {
        let record = CodeAnalyzer::create_record(&format!("x = {}", n), "python", &mut rng).unwrap();
        ids.push(record.id);
        history = HistoryManager::append_to_history(history, record);
        assert!(history.len() <= HISTORY_CAPACITY);
    }

    let expected: Vec<u64> = ids.iter().rev().take(HISTORY_CAPACITY).copied().collect();
    let actual: Vec<u64> = history.iter().map(|record| record.id).collect();
    assert_eq!(actual, expected);
}

#[test]
fn dashboard_of_80_and_90_averages_85() {
    let mut rng = ScriptedRandom::new(vec![80, 75, 90, 75]);
    let first = CodeAnalyzer::create_record("a", "go", &mut rng).unwrap();
    let second = CodeAnalyzer::create_record("b", "go", &mut rng).unwrap();
    let history = HistoryManager::append_to_history(HistoryManager::append_to_history(Vec::new(), first), second);

    let stats = HistoryManager::compute_dashboard(&history);
    assert_eq!(stats.count, 2);
    assert_eq!(stats.avg_quality_score, Some(85));
    assert_eq!(HistoryManager::compute_dashboard(&[]).avg_quality_score, None);
}

#[test]
fn file_backed_manager_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut manager = AnalysisManager::load(FileStore::new(dir.path()), SeededRandom::new(9));
    let record = manager.analyze("for x in y:\n    z.append(x)", "python").unwrap();
    drop(manager);

    let reloaded = AnalysisManager::load(FileStore::new(dir.path()), SeededRandom::new(9));
    assert_eq!(reloaded.history(), &[record]);
    assert_eq!(reloaded.dashboard().count, 1);
}

#[test]
fn corrupt_store_falls_back_to_empty_history() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("analysisHistory.json"), "{ definitely not a list").unwrap();
    std::fs::write(dir.path().join("appSettings.json"), "[]").unwrap();

    let manager = AnalysisManager::load(FileStore::new(dir.path()), SeededRandom::new(1));
    assert!(manager.history().is_empty());
    assert!(manager.settings().auto_save);
}

#[test]
fn manager_history_is_bounded() {
    let mut manager = AnalysisManager::load(MemoryStore::new(), SeededRandom::new(5));
    for n in 0..(HISTORY_CAPACITY + 5) {
        manager.analyze(&format!("line {}", n), "rust").unwrap();
    }
    assert_eq!(manager.history().len(), HISTORY_CAPACITY);
    assert_eq!(manager.recent().len(), 10);
    assert_eq!(manager.history()[0].source_text, format!("line {}", HISTORY_CAPACITY + 4));
}

#[test]
fn failed_writes_do_not_abort_analysis() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("data");
    std::fs::write(&blocker, "a regular file, not a directory").unwrap();

    let mut manager = AnalysisManager::load(FileStore::new(&blocker), SeededRandom::new(2));
    assert!(manager.analyze("x = 1", "python").is_ok());
    assert!(manager.analyze("y = 2", "python").is_ok());
    assert_eq!(manager.history().len(), 2);
    assert_eq!(manager.dashboard().count, 2);
}

#[test]
fn one_unknown_language_tag_keeps_the_rest_of_history() {
    let dir = TempDir::new().unwrap();
    let mut manager = AnalysisManager::load(FileStore::new(dir.path()), SeededRandom::new(4));
    manager.analyze("package main", "go").unwrap();
    manager.analyze("func main() {}", "go").unwrap();
    drop(manager);

    let path = dir.path().join("analysisHistory.json");
    let saved = std::fs::read_to_string(&path).unwrap();
    std::fs::write(&path, saved.replacen("\"language\":\"go\"", "\"language\":\"kotlin\"", 1)).unwrap();

    let reloaded = AnalysisManager::load(FileStore::new(dir.path()), SeededRandom::new(4));
    let languages: Vec<Language> = reloaded.history().iter().map(|record| record.language).collect();
    assert_eq!(languages, vec![Language::Unknown, Language::Go]);
}
