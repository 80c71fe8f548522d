use std::fs;
use std::io::Write;
use std::path::PathBuf;

use thiserror::Error;

const HEADER: &str = "word,score";
const EXTENSION: &str = "csv";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("'{0}' not found")]
    NotFound(String),
    #[error("there is already a wordbook named '{0}'")]
    AlreadyExists(String),
    #[error("'{0}' is not a valid word")]
    InvalidWord(String),
    #[error("'{0}' is not a valid wordbook name")]
    InvalidName(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// One persisted row of a wordbook. Score is a monotonic mastery counter;
/// lower means weaker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub score: u32,
}

pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | ' '))
}

/// Read candidate words from a plain text file, one word per line.
/// Appends `.txt` when the path has no such suffix. Blank lines are skipped;
/// any other non-alphabetic line aborts the whole import, so the caller
/// never sees a partial word list.
pub fn import_from_line_file(path: &str) -> Result<Vec<String>, StoreError> {
    let mut path = path.to_string();
    if !path.ends_with(".txt") {
        path.push_str(".txt");
    }
    let content = fs::read_to_string(&path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => StoreError::NotFound(path.clone()),
        _ => StoreError::Io(err),
    })?;
    let mut words = Vec::new();
    for line in content.lines() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        if !is_valid_word(token) {
            return Err(StoreError::InvalidWord(token.to_string()));
        }
        words.push(token.to_string());
    }
    Ok(words)
}

/// CRUD over named wordbooks, one CSV file per wordbook.
///
/// Words are validated alphabetic before they reach disk, so the format
/// never needs quoting. Every mutation rewrites the file through a temp
/// path and rename, leaving the prior state intact on crash.
pub struct WordbookStore {
    base_dir: PathBuf,
}

impl WordbookStore {
    pub fn new() -> Result<Self, StoreError> {
        let base_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spelldr")
            .join("wordbooks");
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn book_path(&self, name: &str) -> PathBuf {
        self.base_dir.join(format!("{name}.{EXTENSION}"))
    }

    /// Names of all persisted wordbooks, sorted for deterministic listings.
    pub fn list(&self) -> Result<Vec<String>, StoreError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(EXTENSION) {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    pub fn create(&self, name: &str) -> Result<(), StoreError> {
        if !is_valid_name(name) {
            return Err(StoreError::InvalidName(name.to_string()));
        }
        if self.book_path(name).exists() {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }
        self.save(name, &[])
    }

    /// Ordered records of a wordbook. Rows that don't parse are skipped
    /// rather than failing the whole load.
    pub fn load_words(&self, name: &str) -> Result<Vec<WordRecord>, StoreError> {
        let path = self.book_path(name);
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        let content = fs::read_to_string(&path)?;
        let mut records = Vec::new();
        for line in content.lines().skip(1) {
            let Some((word, score)) = line.split_once(',') else {
                continue;
            };
            let Ok(score) = score.trim().parse::<u32>() else {
                continue;
            };
            if word.is_empty() {
                continue;
            }
            records.push(WordRecord {
                word: word.to_string(),
                score,
            });
        }
        Ok(records)
    }

    /// Append new words with score 0, preserving input order. Duplicates,
    /// whether against existing records or within `words` itself, are
    /// silently dropped; existing scores are never touched. Any invalid
    /// word aborts the call before anything is written.
    pub fn insert_words(&self, name: &str, words: &[String]) -> Result<(), StoreError> {
        for word in words {
            if !is_valid_word(word) {
                return Err(StoreError::InvalidWord(word.clone()));
            }
        }
        let mut records = self.load_words(name)?;
        for word in words {
            if records.iter().all(|r| r.word != *word) {
                records.push(WordRecord {
                    word: word.clone(),
                    score: 0,
                });
            }
        }
        self.save(name, &records)
    }

    /// No-op if the word is absent.
    pub fn remove_word(&self, name: &str, word: &str) -> Result<(), StoreError> {
        let mut records = self.load_words(name)?;
        records.retain(|r| r.word != word);
        self.save(name, &records)
    }

    /// Bump the word's mastery score by one and persist. Returns the new
    /// score, or 0 if the word is not in the wordbook.
    pub fn increment_score(&self, name: &str, word: &str) -> Result<u32, StoreError> {
        let mut records = self.load_words(name)?;
        let mut new_score = 0;
        for record in &mut records {
            if record.word == word {
                record.score += 1;
                new_score = record.score;
            }
        }
        self.save(name, &records)?;
        Ok(new_score)
    }

    pub fn reset_scores(&self, name: &str) -> Result<(), StoreError> {
        let mut records = self.load_words(name)?;
        for record in &mut records {
            record.score = 0;
        }
        self.save(name, &records)
    }

    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let path = self.book_path(name);
        if !path.exists() {
            return Err(StoreError::NotFound(name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    fn save(&self, name: &str, records: &[WordRecord]) -> Result<(), StoreError> {
        let path = self.book_path(name);
        let tmp_path = path.with_extension("tmp");

        let mut out = String::with_capacity(HEADER.len() + 1 + records.len() * 16);
        out.push_str(HEADER);
        out.push('\n');
        for record in records {
            out.push_str(&record.word);
            out.push(',');
            out.push_str(&record.score.to_string());
            out.push('\n');
        }

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(out.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
