use std::collections::VecDeque;

use crate::nav::PromptOutcome;
use crate::store::WordRecord;

/// What the user's reply to the spelling prompt means, as an explicit sum
/// type so "leave the whole round" unwinds as a value, not a panic or a
/// deeply nested early return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpellingResponse {
    /// `r`: present the same word again from the top.
    Repeat,
    /// Blank line: move on without attempting.
    Skip,
    /// Anything else is a spelling attempt.
    Attempt(String),
    /// Back/Esc: exit the round entirely.
    Quit,
}

pub fn interpret(outcome: PromptOutcome) -> SpellingResponse {
    match outcome {
        PromptOutcome::Submitted(text) if text == "r" => SpellingResponse::Repeat,
        PromptOutcome::Submitted(text) => SpellingResponse::Attempt(text),
        PromptOutcome::Empty => SpellingResponse::Skip,
        PromptOutcome::Cancelled => SpellingResponse::Quit,
    }
}

pub fn attempt_matches(attempt: &str, word: &str) -> bool {
    attempt.trim().to_lowercase() == word.to_lowercase()
}

/// One practice round over a wordbook.
///
/// Each pass queues every record tied at the current minimum score, in
/// wordbook order. When the pass is exhausted the minimum is recomputed
/// over the (possibly updated) scores and the queue refills, so the round
/// never ends on its own — only an explicit quit does.
pub struct Round {
    records: Vec<WordRecord>,
    queue: VecDeque<usize>,
    current: Option<usize>,
}

impl Round {
    pub fn new(records: Vec<WordRecord>) -> Self {
        Self {
            records,
            queue: VecDeque::new(),
            current: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn current(&self) -> Option<&WordRecord> {
        self.current.map(|index| &self.records[index])
    }

    /// Move to the next drill word, refilling the pass queue from the
    /// current minimum score when the previous pass is exhausted.
    /// Returns `None` only for an empty wordbook.
    pub fn advance(&mut self) -> Option<&WordRecord> {
        if self.records.is_empty() {
            self.current = None;
            return None;
        }
        if self.queue.is_empty() {
            self.refill();
        }
        self.current = self.queue.pop_front();
        self.current()
    }

    fn refill(&mut self) {
        let min = self.records.iter().map(|r| r.score).min().unwrap_or(0);
        self.queue = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.score == min)
            .map(|(index, _)| index)
            .collect();
    }

    /// Record a correct attempt on the current word. Returns the new score.
    pub fn mark_correct(&mut self) -> Option<u32> {
        let index = self.current?;
        self.records[index].score += 1;
        Some(self.records[index].score)
    }
}
