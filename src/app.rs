use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::drill::scheduler::{self, Round, SpellingResponse};
use crate::drill::present;
use crate::lookup::{DictApiClient, WordLookup, WordMetadata};
use crate::nav::{
    Message, NavAction, PromptOutcome, PromptState, SelectOption, SelectOutcome, SelectState,
};
use crate::speech::{self, Pronounce};
use crate::store::{import_from_line_file, WordbookStore};
use crate::ui::layout;
use crate::ui::theme::Theme;

/// Every screen the app can sit on. Transitions happen only in the handler
/// methods below, one hop per key, so there is no nested event loop to
/// unwind when a deep screen quits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Home,
    NewWordbook,
    Wordbook,
    AddWords,
    AddManually,
    AddFromFile,
    RemoveWords,
    ConfirmDelete,
    Drill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Select,
    Prompt,
}

impl Screen {
    pub fn input_mode(self) -> InputMode {
        match self {
            Screen::Home
            | Screen::Wordbook
            | Screen::AddWords
            | Screen::RemoveWords
            | Screen::ConfirmDelete => InputMode::Select,
            Screen::NewWordbook | Screen::AddManually | Screen::AddFromFile | Screen::Drill => {
                InputMode::Prompt
            }
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub select: SelectState,
    pub prompt: PromptState,
    pub config: Config,
    pub theme: &'static Theme,
    pub should_quit: bool,
    store: WordbookStore,
    lookup: Box<dyn WordLookup>,
    speaker: Box<dyn Pronounce>,
    /// Wordbook names backing the home screen options.
    book_names: Vec<String>,
    /// The wordbook currently opened, if any.
    book: Option<String>,
    /// Words backing the remove-words options.
    book_words: Vec<String>,
    round: Option<Round>,
    /// Metadata for the word being drilled; kept so a repeat does not
    /// re-fetch.
    current_meta: Option<WordMetadata>,
}

impl App {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let config = Config::load().unwrap_or_default();
        let theme: &'static Theme =
            Box::leak(Box::new(Theme::load(&config.theme).unwrap_or_default()));
        let store = match data_dir {
            Some(dir) => WordbookStore::with_base_dir(dir.join("wordbooks"))?,
            None => WordbookStore::new()?,
        };
        let speaker = speech::from_config(config.speech_command.as_deref());

        let mut app = Self {
            screen: Screen::Home,
            select: SelectState::new("", "", Vec::new(), Vec::new()),
            prompt: PromptState::new("", "", Vec::new()),
            config,
            theme,
            should_quit: false,
            store,
            lookup: Box::new(DictApiClient::new()),
            speaker,
            book_names: Vec::new(),
            book: None,
            book_words: Vec::new(),
            round: None,
            current_meta: None,
        };
        app.go_home(Vec::new());
        Ok(app)
    }

    #[cfg(test)]
    pub fn with_parts(
        data_dir: PathBuf,
        lookup: Box<dyn WordLookup>,
        speaker: Box<dyn Pronounce>,
    ) -> Result<Self> {
        let mut app = Self {
            screen: Screen::Home,
            select: SelectState::new("", "", Vec::new(), Vec::new()),
            prompt: PromptState::new("", "", Vec::new()),
            config: Config::default(),
            theme: Box::leak(Box::new(Theme::default())),
            should_quit: false,
            store: WordbookStore::with_base_dir(data_dir.join("wordbooks"))?,
            lookup,
            speaker,
            book_names: Vec::new(),
            book: None,
            book_words: Vec::new(),
            round: None,
            current_meta: None,
        };
        app.go_home(Vec::new());
        Ok(app)
    }

    pub fn set_theme(&mut self, theme: &'static Theme) {
        self.theme = theme;
    }

    /// Recompute select-screen pagination for the current terminal height.
    pub fn layout(&mut self, rows: u16) {
        if self.screen.input_mode() == InputMode::Select {
            let avail = layout::available_option_rows(rows, self.select.messages.len());
            self.select.layout(avail);
        }
    }

    pub fn handle_nav(&mut self, action: NavAction) {
        match self.select.handle(action) {
            None => {}
            Some(SelectOutcome::Quit) => self.should_quit = true,
            Some(SelectOutcome::Back) => self.go_back(),
            Some(SelectOutcome::Selected(index)) => self.on_select(index),
        }
    }

    pub fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Some(outcome) = self.prompt.handle(key) else {
            return;
        };
        match self.screen {
            Screen::NewWordbook => match outcome {
                PromptOutcome::Submitted(name) => self.create_wordbook(&name),
                PromptOutcome::Empty | PromptOutcome::Cancelled => self.go_home(Vec::new()),
            },
            Screen::AddManually => match outcome {
                PromptOutcome::Submitted(input) => self.add_words_manually(&input),
                PromptOutcome::Empty | PromptOutcome::Cancelled => self.go_add_words(Vec::new()),
            },
            Screen::AddFromFile => match outcome {
                PromptOutcome::Submitted(path) => self.add_words_from_file(&path),
                PromptOutcome::Empty | PromptOutcome::Cancelled => self.go_add_words(Vec::new()),
            },
            Screen::Drill => self.handle_drill_response(scheduler::interpret(outcome)),
            _ => {}
        }
    }

    fn go_back(&mut self) {
        match self.screen {
            Screen::Home => self.should_quit = true,
            Screen::NewWordbook | Screen::Wordbook => self.go_home(Vec::new()),
            Screen::AddWords => self.go_wordbook(Vec::new()),
            Screen::AddManually | Screen::AddFromFile => self.go_add_words(Vec::new()),
            Screen::RemoveWords | Screen::ConfirmDelete => self.go_wordbook(Vec::new()),
            Screen::Drill => self.end_round(),
        }
    }

    fn on_select(&mut self, index: usize) {
        match self.screen {
            Screen::Home => {
                if index < self.book_names.len() {
                    let name = self.book_names[index].clone();
                    self.open_wordbook(name);
                } else {
                    self.go_new_wordbook(Vec::new());
                }
            }
            Screen::Wordbook => match index {
                0 => self.start_round(),
                1 => self.go_add_words(Vec::new()),
                2 => self.go_remove_words(Vec::new()),
                3 => self.reset_scores(),
                4 => self.go_confirm_delete(),
                _ => {}
            },
            Screen::AddWords => match index {
                0 => self.go_add_manually(Vec::new()),
                1 => self.go_add_from_file(Vec::new()),
                _ => {}
            },
            Screen::RemoveWords => {
                if index < self.book_words.len() {
                    let word = self.book_words[index].clone();
                    self.remove_word(&word);
                }
            }
            Screen::ConfirmDelete => {
                if index == 1 {
                    self.delete_wordbook();
                } else {
                    self.go_wordbook(Vec::new());
                }
            }
            _ => {}
        }
    }

    // --- Screen builders -------------------------------------------------

    fn go_home(&mut self, mut messages: Vec<Message>) {
        self.book = None;
        self.book_names = match self.store.list() {
            Ok(names) => names,
            Err(err) => {
                messages.push(Message::error(format!("Error: {err}")));
                Vec::new()
            }
        };
        let mut options: Vec<SelectOption> = self
            .book_names
            .iter()
            .map(|name| SelectOption::new(name.clone()))
            .collect();
        options.push(SelectOption::warning("Create a new wordbook"));
        self.screen = Screen::Home;
        self.select = SelectState::new(
            "Welcome to spelldr!",
            "Select a wordbook:",
            messages,
            options,
        );
    }

    fn go_new_wordbook(&mut self, mut messages: Vec<Message>) {
        messages.push(Message::muted("Wordbook names must be unique."));
        self.screen = Screen::NewWordbook;
        self.prompt = PromptState::new("New wordbook", "Name: ", messages);
    }

    fn open_wordbook(&mut self, name: String) {
        self.book = Some(name);
        self.go_wordbook(Vec::new());
    }

    fn go_wordbook(&mut self, messages: Vec<Message>) {
        let Some(name) = self.book.clone() else {
            self.go_home(messages);
            return;
        };
        self.screen = Screen::Wordbook;
        self.select = SelectState::new(
            format!("Wordbook: {name}"),
            "Select an action:",
            messages,
            vec![
                SelectOption::new("Start practice (fetching definitions may take a moment)"),
                SelectOption::new("Add new word(s)"),
                SelectOption::danger("Remove word(s)"),
                SelectOption::danger("Reset scores"),
                SelectOption::danger("Delete wordbook"),
            ],
        );
    }

    fn go_add_words(&mut self, messages: Vec<Message>) {
        let name = self.book.clone().unwrap_or_default();
        self.screen = Screen::AddWords;
        self.select = SelectState::new(
            format!("{name}: Add word(s)"),
            "How would you like to add words?",
            messages,
            vec![
                SelectOption::new("Add manually"),
                SelectOption::new("Add from txt file"),
            ],
        );
    }

    fn go_add_manually(&mut self, mut messages: Vec<Message>) {
        messages.push(Message::muted(
            "Separate multiple words with commas. Duplicates are dropped.",
        ));
        let name = self.book.clone().unwrap_or_default();
        self.screen = Screen::AddManually;
        self.prompt = PromptState::new(format!("{name}: Add word(s)"), "Word(s): ", messages);
    }

    fn go_add_from_file(&mut self, mut messages: Vec<Message>) {
        messages.push(Message::muted(
            "Path to a txt file with one word per line. '.txt' is appended if missing.",
        ));
        let name = self.book.clone().unwrap_or_default();
        self.screen = Screen::AddFromFile;
        self.prompt = PromptState::new(format!("{name}: Add from file"), "Path: ", messages);
    }

    fn go_remove_words(&mut self, messages: Vec<Message>) {
        let Some(name) = self.book.clone() else {
            self.go_home(messages);
            return;
        };
        let records = match self.store.load_words(&name) {
            Ok(records) => records,
            Err(err) => {
                let mut messages = messages;
                messages.push(Message::error(format!("Error: {err}")));
                self.go_wordbook(messages);
                return;
            }
        };
        if records.is_empty() {
            let mut messages = messages;
            messages.push(Message::warning("This wordbook has no words yet."));
            self.go_wordbook(messages);
            return;
        }
        self.book_words = records.into_iter().map(|r| r.word).collect();
        let options = self
            .book_words
            .iter()
            .map(|word| SelectOption::danger(word.clone()))
            .collect();
        self.screen = Screen::RemoveWords;
        self.select = SelectState::new(
            format!("{name}: Remove word(s)"),
            "Select a word to remove:",
            messages,
            options,
        );
    }

    fn go_confirm_delete(&mut self) {
        let name = self.book.clone().unwrap_or_default();
        self.screen = Screen::ConfirmDelete;
        self.select = SelectState::new(
            format!("Delete wordbook '{name}'?"),
            "This removes the wordbook and all its scores:",
            Vec::new(),
            vec![
                SelectOption::new("Keep it"),
                SelectOption::danger("Delete it"),
            ],
        );
    }

    // --- Mutating actions -------------------------------------------------

    fn create_wordbook(&mut self, name: &str) {
        let name = name.trim();
        match self.store.create(name) {
            Ok(()) => self.go_home(vec![Message::success(format!(
                "Success: Created new wordbook named '{name}'."
            ))]),
            Err(err) => self.go_new_wordbook(vec![Message::error(format!("Error: {err}"))]),
        }
    }

    fn add_words_manually(&mut self, input: &str) {
        let Some(name) = self.book.clone() else {
            return;
        };
        let words: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        match self.store.insert_words(&name, &words) {
            Ok(()) => self.go_add_words(vec![Message::success("Success: Added the words.")]),
            Err(err) => self.go_add_manually(vec![Message::error(format!("Error: {err}"))]),
        }
    }

    fn add_words_from_file(&mut self, path: &str) {
        let Some(name) = self.book.clone() else {
            return;
        };
        let result = import_from_line_file(path.trim())
            .and_then(|words| self.store.insert_words(&name, &words));
        match result {
            Ok(()) => self.go_add_words(vec![Message::success("Success: Added the words.")]),
            Err(err) => self.go_add_from_file(vec![Message::error(format!("Error: {err}"))]),
        }
    }

    fn remove_word(&mut self, word: &str) {
        let Some(name) = self.book.clone() else {
            return;
        };
        match self.store.remove_word(&name, word) {
            Ok(()) => self.go_remove_words(vec![Message::success(format!(
                "Success: Removed '{word}'."
            ))]),
            Err(err) => self.go_wordbook(vec![Message::error(format!("Error: {err}"))]),
        }
    }

    fn reset_scores(&mut self) {
        let Some(name) = self.book.clone() else {
            return;
        };
        match self.store.reset_scores(&name) {
            Ok(()) => self.go_wordbook(vec![Message::success("Success: All scores reset to 0.")]),
            Err(err) => self.go_wordbook(vec![Message::error(format!("Error: {err}"))]),
        }
    }

    fn delete_wordbook(&mut self) {
        let Some(name) = self.book.take() else {
            self.go_home(Vec::new());
            return;
        };
        match self.store.delete(&name) {
            Ok(()) => self.go_home(vec![Message::success(format!(
                "Success: Deleted wordbook '{name}'."
            ))]),
            Err(err) => {
                self.book = Some(name);
                self.go_wordbook(vec![Message::error(format!("Error: {err}"))]);
            }
        }
    }

    // --- Drill ------------------------------------------------------------

    fn start_round(&mut self) {
        let Some(name) = self.book.clone() else {
            return;
        };
        let records = match self.store.load_words(&name) {
            Ok(records) => records,
            Err(err) => {
                self.go_wordbook(vec![Message::error(format!("Error: {err}"))]);
                return;
            }
        };
        if records.is_empty() {
            self.go_wordbook(vec![Message::warning(
                "This wordbook has no words yet. Add some first.",
            )]);
            return;
        }
        let mut round = Round::new(records);
        round.advance();
        self.round = Some(round);
        self.screen = Screen::Drill;
        self.present_current(true);
    }

    /// Rebuild the drill prompt for the current word and pronounce it.
    /// `refetch` controls whether the dictionary is consulted again; a
    /// repeat reuses the cached metadata.
    fn present_current(&mut self, refetch: bool) {
        let Some(word) = self
            .round
            .as_ref()
            .and_then(|r| r.current())
            .map(|r| r.word.clone())
        else {
            self.end_round();
            return;
        };
        if refetch || self.current_meta.is_none() {
            self.current_meta = Some(self.lookup.fetch(&word));
        }
        let meta = self
            .current_meta
            .get_or_insert_with(|| WordMetadata::empty(&word));
        let messages = present::drill_messages(meta);
        let phonetics = meta.phonetics.clone();
        let book = self.book.clone().unwrap_or_default();
        self.prompt = PromptState::new(format!("{book}: Practice"), "Spelling: ", messages);
        self.speaker.pronounce(&word, &phonetics);
    }

    fn handle_drill_response(&mut self, response: SpellingResponse) {
        match response {
            SpellingResponse::Quit => self.end_round(),
            SpellingResponse::Repeat => self.present_current(false),
            SpellingResponse::Skip => self.advance_word(Vec::new()),
            SpellingResponse::Attempt(attempt) => {
                let Some(word) = self
                    .round
                    .as_ref()
                    .and_then(|r| r.current())
                    .map(|r| r.word.clone())
                else {
                    self.end_round();
                    return;
                };
                if scheduler::attempt_matches(&attempt, &word) {
                    if let Some(round) = self.round.as_mut() {
                        round.mark_correct();
                    }
                    let name = self.book.clone().unwrap_or_default();
                    let mut messages = match self.store.increment_score(&name, &word) {
                        Ok(score) => {
                            vec![Message::success(format!(
                                "Correct! '{word}' is now at score {score}."
                            ))]
                        }
                        Err(err) => vec![
                            Message::success(format!("Correct! '{word}' it is.")),
                            Message::error(format!("Error saving score: {err}")),
                        ],
                    };
                    messages.reverse();
                    self.advance_word(messages);
                } else {
                    self.present_current(false);
                    self.prompt
                        .messages
                        .insert(0, Message::error("Not quite. Listen and try again."));
                }
            }
        }
    }

    /// Move the round to its next word and present it, carrying `messages`
    /// (already in reverse order) onto the new prompt.
    fn advance_word(&mut self, messages: Vec<Message>) {
        let advanced = self
            .round
            .as_mut()
            .map(|round| round.advance().is_some())
            .unwrap_or(false);
        if !advanced {
            self.end_round();
            return;
        }
        self.present_current(true);
        for message in messages {
            self.prompt.messages.insert(0, message);
        }
    }

    fn end_round(&mut self) {
        self.round = None;
        self.current_meta = None;
        self.go_wordbook(Vec::new());
    }

    // --- Footer -----------------------------------------------------------

    pub fn footer(&self) -> String {
        match self.screen.input_mode() {
            InputMode::Select => {
                let keys = &self.config.keys;
                format!(
                    " [{}] exit  [enter/{}] select  [{}] back  [{}/{}] move",
                    keys.hint(NavAction::Exit),
                    keys.hint(NavAction::Select),
                    keys.hint(NavAction::Back),
                    keys.hint(NavAction::Down),
                    keys.hint(NavAction::Up),
                )
            }
            InputMode::Prompt => {
                if self.screen == Screen::Drill {
                    " [enter] submit  [esc] end round".to_string()
                } else {
                    " [enter] submit  [esc] back".to_string()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use tempfile::TempDir;

    use crate::lookup::metadata::Phonetic;

    struct FixedLookup;

    impl WordLookup for FixedLookup {
        fn fetch(&self, word: &str) -> WordMetadata {
            WordMetadata {
                word: word.to_string(),
                phonetics: vec![Phonetic {
                    audio: None,
                    text: Some(format!("/{word}/")),
                }],
                meanings: Vec::new(),
            }
        }
    }

    struct Mute;

    impl Pronounce for Mute {
        fn pronounce(&self, _word: &str, _phonetics: &[Phonetic]) {}
    }

    fn make_app() -> (TempDir, App) {
        let dir = TempDir::new().unwrap();
        let app = App::with_parts(
            dir.path().to_path_buf(),
            Box::new(FixedLookup),
            Box::new(Mute),
        )
        .unwrap();
        (dir, app)
    }

    fn type_line(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_prompt_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        app.handle_prompt_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    fn select_option(app: &mut App, label: &str) {
        let index = app
            .select
            .options
            .iter()
            .position(|o| o.label.starts_with(label))
            .unwrap_or_else(|| panic!("no option starting with '{label}'"));
        while app.select.selected < index {
            app.handle_nav(NavAction::Down);
        }
        while app.select.selected > index {
            app.handle_nav(NavAction::Up);
        }
        app.handle_nav(NavAction::Select);
    }

    #[test]
    fn test_fresh_app_offers_only_creation() {
        let (_dir, app) = make_app();
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.select.options.len(), 1);
        assert_eq!(app.select.options[0].label, "Create a new wordbook");
    }

    #[test]
    fn test_create_wordbook_flow() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        assert_eq!(app.screen, Screen::NewWordbook);

        type_line(&mut app, "animals");
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.select.options[0].label, "animals");
        assert!(app.select.messages[0].text.contains("animals"));
    }

    #[test]
    fn test_duplicate_wordbook_reports_error_and_stays() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");

        assert_eq!(app.screen, Screen::NewWordbook);
        assert!(app
            .prompt
            .messages
            .iter()
            .any(|m| m.text.contains("already")));
    }

    #[test]
    fn test_add_words_manually_flow() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "animals");
        assert_eq!(app.screen, Screen::Wordbook);

        select_option(&mut app, "Add new word(s)");
        select_option(&mut app, "Add manually");
        type_line(&mut app, "cat, dog , cat");
        assert_eq!(app.screen, Screen::AddWords);
        assert!(app.select.messages[0].text.starts_with("Success"));
    }

    #[test]
    fn test_invalid_word_keeps_prompt_with_error() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "animals");
        select_option(&mut app, "Add new word(s)");
        select_option(&mut app, "Add manually");
        type_line(&mut app, "cat, 123");

        assert_eq!(app.screen, Screen::AddManually);
        assert!(app.prompt.messages[0].text.contains("123"));
    }

    #[test]
    fn test_drill_correct_attempt_advances_and_persists() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "animals");
        select_option(&mut app, "Add new word(s)");
        select_option(&mut app, "Add manually");
        type_line(&mut app, "cat, dog");
        app.handle_nav(NavAction::Back);

        select_option(&mut app, "Start practice");
        assert_eq!(app.screen, Screen::Drill);
        assert!(app.prompt.messages.iter().any(|m| m.text.contains("/cat/")));

        type_line(&mut app, "Cat");
        assert_eq!(app.screen, Screen::Drill);
        assert!(app.prompt.messages[0].text.starts_with("Correct!"));
        // Now drilling "dog"; a wrong attempt re-presents with an error.
        type_line(&mut app, "dug");
        assert_eq!(app.prompt.messages[0].text, "Not quite. Listen and try again.");

        // Esc unwinds the round back to the wordbook menu.
        app.handle_prompt_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.screen, Screen::Wordbook);

        // The correct attempt on "cat" was persisted.
        let records = app.store.load_words("animals").unwrap();
        assert_eq!(records[0].word, "cat");
        assert_eq!(records[0].score, 1);
        assert_eq!(records[1].score, 0);
    }

    #[test]
    fn test_drill_skip_and_repeat() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "animals");
        select_option(&mut app, "Add new word(s)");
        select_option(&mut app, "Add manually");
        type_line(&mut app, "cat, dog");
        app.handle_nav(NavAction::Back);
        select_option(&mut app, "Start practice");

        // Empty submit skips to the next word without scoring.
        type_line(&mut app, "");
        assert_eq!(app.screen, Screen::Drill);
        assert!(app.prompt.messages.iter().any(|m| m.text.contains("/dog/")));

        // "r" re-presents the same word.
        type_line(&mut app, "r");
        assert!(app.prompt.messages.iter().any(|m| m.text.contains("/dog/")));

        app.handle_prompt_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        let records = app.store.load_words("animals").unwrap();
        assert!(records.iter().all(|r| r.score == 0));
    }

    #[test]
    fn test_practice_on_empty_wordbook_warns() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "animals");
        select_option(&mut app, "Start practice");

        assert_eq!(app.screen, Screen::Wordbook);
        assert!(app.select.messages[0].text.contains("no words"));
    }

    #[test]
    fn test_remove_word_flow() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "animals");
        select_option(&mut app, "Add new word(s)");
        select_option(&mut app, "Add manually");
        type_line(&mut app, "cat, dog");
        app.handle_nav(NavAction::Back);

        select_option(&mut app, "Remove word(s)");
        assert_eq!(app.screen, Screen::RemoveWords);
        select_option(&mut app, "cat");
        // Back on the remove screen with the remaining word.
        assert_eq!(app.screen, Screen::RemoveWords);
        assert_eq!(app.select.options.len(), 1);
        assert_eq!(app.select.options[0].label, "dog");
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "animals");

        select_option(&mut app, "Delete wordbook");
        assert_eq!(app.screen, Screen::ConfirmDelete);
        select_option(&mut app, "Keep it");
        assert_eq!(app.screen, Screen::Wordbook);

        select_option(&mut app, "Delete wordbook");
        select_option(&mut app, "Delete it");
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.select.options.len(), 1);
    }

    #[test]
    fn test_reset_scores_from_menu() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "animals");
        select_option(&mut app, "Add new word(s)");
        select_option(&mut app, "Add manually");
        type_line(&mut app, "cat");
        app.handle_nav(NavAction::Back);
        app.store.increment_score("animals", "cat").unwrap();

        select_option(&mut app, "Reset scores");
        assert_eq!(app.screen, Screen::Wordbook);
        let records = app.store.load_words("animals").unwrap();
        assert_eq!(records[0].score, 0);
    }

    #[test]
    fn test_back_from_home_quits() {
        let (_dir, mut app) = make_app();
        app.handle_nav(NavAction::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn test_exit_quits_from_anywhere() {
        let (_dir, mut app) = make_app();
        select_option(&mut app, "Create a new wordbook");
        type_line(&mut app, "animals");
        select_option(&mut app, "animals");
        app.handle_nav(NavAction::Exit);
        assert!(app.should_quit);
    }
}
