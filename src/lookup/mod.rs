pub mod client;
pub mod metadata;

pub use client::{DictApiClient, WordLookup};
pub use metadata::{Meaning, Phonetic, WordMetadata};
