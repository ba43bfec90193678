//! End-to-end load/save tests against the local file system

use kv_provider::{
    DataProvider, Error, FormatTag, NOT_PROPERTIES_WARNING, PropertiesDataProvider,
    RecordingNotifier, SaveOutcome, SkipReason, resolve,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

fn setup() -> (PropertiesDataProvider, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    (PropertiesDataProvider::new(notifier.clone()), notifier)
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// ============================================================================
// Format resolution
// ============================================================================

#[rstest]
#[case("a.env", true, Some(vec!["#"]))]
#[case("a.ini", true, Some(vec![";", "#"]))]
#[case("a.properties", true, None)]
fn test_resolve_table(
    #[case] path: &str,
    #[case] sections: bool,
    #[case] comments: Option<Vec<&str>>,
) {
    let options = resolve(path).unwrap();
    assert_eq!(options.sections, sections);
    assert_eq!(
        options.comments,
        comments.map(|c| c.into_iter().map(String::from).collect::<Vec<_>>())
    );
}

#[test]
fn test_resolve_unknown_extension() {
    assert_eq!(resolve("data.json"), None);
    assert_eq!(resolve("Makefile"), None);
    assert_eq!(FormatTag::from_path("x.ENV"), None);
}

// ============================================================================
// Load
// ============================================================================

#[tokio::test]
async fn test_load_ini_comments() {
    let temp = TempDir::new().unwrap();
    let path = write_file(
        &temp,
        "settings.ini",
        "; generated\n# also a comment\nname=demo\n[db]\nhost=localhost\n",
    );
    let (provider, _) = setup();

    let outcome = provider.load(path_str(&path)).await;

    assert_eq!(
        outcome.records,
        vec![
            json!({"key": "name", "value": "demo"}),
            json!({"key": "db", "value": {"host": "localhost"}}),
        ]
    );
}

#[tokio::test]
async fn test_load_env_semicolon_is_literal() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "app.env", "# comment\n;KEY=1\nPORT=8080\n");
    let (provider, _) = setup();

    let outcome = provider.load(path_str(&path)).await;

    assert_eq!(
        outcome.records,
        vec![
            json!({"key": ";KEY", "value": "1"}),
            json!({"key": "PORT", "value": "8080"}),
        ]
    );
}

#[tokio::test]
async fn test_load_invalid_file_completes_once_with_empty_records() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "broken.properties", "a=1\n[unclosed\n");
    let (provider, notifier) = setup();
    let calls: Arc<Mutex<Vec<Vec<Value>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();

    provider
        .get_data(
            path_str(&path),
            None,
            Box::new(move |records: Vec<Value>| sink.lock().unwrap().push(records)),
        )
        .await;

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].is_empty());

    let errors = notifier.errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("broken.properties"));
    assert!(errors[0].contains("unterminated section header"));
}

#[tokio::test]
async fn test_load_missing_file_keeps_diagnostic() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("absent.env");
    let (provider, _) = setup();

    let outcome = provider.load(path_str(&missing)).await;

    assert!(outcome.records.is_empty());
    assert!(matches!(outcome.diagnostic, Some(Error::Read { .. })));
}

// ============================================================================
// Save
// ============================================================================

#[tokio::test]
async fn test_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("app.properties");
    let (provider, _) = setup();

    let outcome = provider
        .save(&path, &[json!({"key": "a", "value": "b"})])
        .await
        .unwrap();
    assert_eq!(outcome, SaveOutcome::Written { bytes: 4 });

    let loaded = provider.load(path_str(&path)).await;
    assert!(loaded.records.contains(&json!({"key": "a", "value": "b"})));
}

#[tokio::test]
async fn test_multi_line_value_is_continued() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("multi.properties");
    let (provider, _) = setup();

    provider
        .save(&path, &[json!({"key": "a", "value": "line1\nline2"})])
        .await
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "a=line1\\\nline2\n");

    // The continuation keeps it one property when read back
    let loaded = provider.load(path_str(&path)).await;
    assert_eq!(loaded.records, vec![json!({"key": "a", "value": "line1line2"})]);
}

#[tokio::test]
async fn test_trailing_backslash_does_not_swallow_next_record() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("paths.properties");
    let (provider, _) = setup();
    let records = vec![
        json!({"key": "dir", "value": "C:\\"}),
        json!({"key": "b", "value": "y"}),
        json!({"key": "tmp", "value": "C:\\temp\\new"}),
    ];

    provider.save(&path, &records).await.unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "dir=C:\\\\\nb=y\ntmp=C:\\\\temp\\\\new\n"
    );

    let loaded = provider.load(path_str(&path)).await;
    assert_eq!(loaded.records, records);
}

#[tokio::test]
async fn test_shape_mismatch_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nope.properties");
    let (provider, notifier) = setup();
    let completed = Arc::new(Mutex::new(0));
    let counter = completed.clone();

    provider
        .save_data(
            &path,
            &[json!({"key": "a"}), json!({"key": "b", "value": "c"})],
            "",
            Some(Box::new(move |_: Option<Error>| *counter.lock().unwrap() += 1)),
        )
        .await;

    assert!(!path.exists());
    assert_eq!(*completed.lock().unwrap(), 0);
    assert_eq!(notifier.warnings(), vec![NOT_PROPERTIES_WARNING]);
}

#[tokio::test]
async fn test_save_empty_records_is_not_properties() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("empty.properties");
    let (provider, notifier) = setup();

    let outcome = provider.save(&path, &[]).await.unwrap();

    assert_eq!(outcome, SaveOutcome::Skipped(SkipReason::NotProperties));
    assert!(!path.exists());
    assert_eq!(notifier.warnings().len(), 1);
}

#[tokio::test]
async fn test_save_data_success_completes_with_none() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("ok.properties");
    let (provider, _) = setup();
    let result: Arc<Mutex<Option<Option<String>>>> = Arc::new(Mutex::new(None));
    let sink = result.clone();

    provider
        .save_data(
            &path,
            &[json!({"key": "x", "value": "1"}), json!({"key": "y", "value": "2"})],
            "ignored",
            Some(Box::new(move |err: Option<Error>| {
                *sink.lock().unwrap() = Some(err.map(|e| e.to_string()));
            })),
        )
        .await;

    assert_eq!(*result.lock().unwrap(), Some(None));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x=1\ny=2\n");
}

#[tokio::test]
async fn test_save_data_write_failure_reaches_completion() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing-dir").join("out.properties");
    let (provider, _) = setup();
    let result: Arc<Mutex<Option<Option<String>>>> = Arc::new(Mutex::new(None));
    let sink = result.clone();

    provider
        .save_data(
            &path,
            &[json!({"key": "x", "value": "1"})],
            "",
            Some(Box::new(move |err: Option<Error>| {
                *sink.lock().unwrap() = Some(err.map(|e| e.to_string()));
            })),
        )
        .await;

    let reported = result.lock().unwrap().clone();
    let message = reported.flatten().expect("write error expected");
    assert!(message.starts_with("Failed to write"));
}
