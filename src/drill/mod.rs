pub mod present;
pub mod scheduler;

pub use scheduler::{Round, SpellingResponse};
