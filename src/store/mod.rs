pub mod wordbook;

pub use wordbook::{StoreError, WordRecord, WordbookStore, import_from_line_file, is_valid_word};
