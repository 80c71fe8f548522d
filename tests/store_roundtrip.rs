use std::fs;

use tempfile::TempDir;

use spelldr::store::{StoreError, WordRecord, WordbookStore, import_from_line_file};

fn make_store(dir: &TempDir) -> WordbookStore {
    WordbookStore::with_base_dir(dir.path().to_path_buf()).unwrap()
}

#[test]
fn test_wordbook_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir);

    store.create("animals").unwrap();
    store
        .insert_words(
            "animals",
            &["cat".to_string(), "dog".to_string(), "cat".to_string()],
        )
        .unwrap();

    let records = store.load_words("animals").unwrap();
    assert_eq!(
        records,
        vec![
            WordRecord {
                word: "cat".to_string(),
                score: 0
            },
            WordRecord {
                word: "dog".to_string(),
                score: 0
            },
        ]
    );

    // The on-disk format is a plain CSV with a header row.
    let content = fs::read_to_string(dir.path().join("animals.csv")).unwrap();
    assert_eq!(content, "word,score\ncat,0\ndog,0\n");
}

#[test]
fn test_scores_survive_store_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = make_store(&dir);
        store.create("animals").unwrap();
        store.insert_words("animals", &["cat".to_string()]).unwrap();
        assert_eq!(store.increment_score("animals", "cat").unwrap(), 1);
        assert_eq!(store.increment_score("animals", "cat").unwrap(), 2);
    }

    let reopened = make_store(&dir);
    let records = reopened.load_words("animals").unwrap();
    assert_eq!(records[0].score, 2);
}

#[test]
fn test_duplicate_create_preserves_existing_records() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir);

    store.create("animals").unwrap();
    store.insert_words("animals", &["cat".to_string()]).unwrap();

    let err = store.create("animals").unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists(name) if name == "animals"));
    assert_eq!(store.load_words("animals").unwrap().len(), 1);
}

#[test]
fn test_failed_import_inserts_nothing() {
    let dir = TempDir::new().unwrap();
    let store = make_store(&dir);
    store.create("animals").unwrap();

    let list = dir.path().join("list.txt");
    fs::write(&list, "cat\ndog\n123\n").unwrap();

    let err = import_from_line_file(list.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, StoreError::InvalidWord(word) if word == "123"));
    assert!(store.load_words("animals").unwrap().is_empty());
}
