use std::time::Duration;

use readlater::prelude::*;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_typing_burst_reaches_engine_once() {
    let (tx, mut rx) = spawn_query_debouncer(DEFAULT_DEBOUNCE);

    // Simulate a user typing "rust" one keystroke at a time, faster than
    // the debounce window.
    for prefix in ["r", "ru", "rus", "rust"] {
        tx.send(prefix.to_string()).await.unwrap();
        advance(Duration::from_millis(50)).await;
    }
    advance(Duration::from_millis(301)).await;

    assert_eq!(rx.recv().await.unwrap(), "rust");

    drop(tx);
    assert!(rx.recv().await.is_none(), "intermediate keystrokes dropped");
}

#[tokio::test(start_paused = true)]
async fn test_debounced_query_drives_filter() {
    let mut library = LibraryService::new();
    let saved = library
        .save(SaveArticleForm {
            url: "https://blog.rust-lang.org/post".to_string(),
            tags: vec!["rust".to_string()],
            ..Default::default()
        })
        .unwrap();

    let config = LibraryConfig::default();
    let (tx, mut rx) = spawn_query_debouncer(config.search_debounce);

    tx.send("owner".to_string()).await.unwrap();
    tx.send("rust".to_string()).await.unwrap();
    advance(config.search_debounce + Duration::from_millis(1)).await;

    let query = rx.recv().await.unwrap();
    assert_eq!(query, "rust");

    let view = library.query(&FilterSpec::default(), &query);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, saved.id);
}

#[tokio::test(start_paused = true)]
async fn test_custom_delay_is_respected() {
    let (tx, mut rx) = spawn_query_debouncer(Duration::from_millis(50));

    tx.send("quick".to_string()).await.unwrap();
    advance(Duration::from_millis(51)).await;

    assert_eq!(rx.recv().await.unwrap(), "quick");
}
