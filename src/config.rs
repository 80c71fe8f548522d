use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::nav::NavAction;

pub const MIN_COLS: u16 = 50;
pub const MIN_ROWS: u16 = 10;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// External TTS command used to pronounce drill words, e.g. "espeak".
    /// The word is appended as the final argument. None disables speech.
    #[serde(default)]
    pub speech_command: Option<String>,
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_theme() -> String {
    "terminal-default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            speech_command: None,
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spelldr")
            .join("config.toml")
    }
}

/// Character keybindings for select screens. Arrow keys, Enter and Esc are
/// fixed; these only add vi-style (or user-chosen) characters on top. Built
/// once at startup and passed into the navigation layer as a value, never
/// consulted as global state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_down")]
    pub down: Vec<char>,
    #[serde(default = "default_up")]
    pub up: Vec<char>,
    #[serde(default = "default_select")]
    pub select: Vec<char>,
    #[serde(default = "default_back")]
    pub back: Vec<char>,
    #[serde(default = "default_exit")]
    pub exit: Vec<char>,
}

fn default_down() -> Vec<char> {
    vec!['j']
}
fn default_up() -> Vec<char> {
    vec!['k']
}
fn default_select() -> Vec<char> {
    vec!['l']
}
fn default_back() -> Vec<char> {
    vec!['h']
}
fn default_exit() -> Vec<char> {
    vec!['x']
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            down: default_down(),
            up: default_up(),
            select: default_select(),
            back: default_back(),
            exit: default_exit(),
        }
    }
}

impl KeyBindings {
    pub fn action_for(&self, code: KeyCode) -> Option<NavAction> {
        match code {
            KeyCode::Down => Some(NavAction::Down),
            KeyCode::Up => Some(NavAction::Up),
            KeyCode::Enter | KeyCode::Right => Some(NavAction::Select),
            KeyCode::Left | KeyCode::Esc => Some(NavAction::Back),
            KeyCode::Char(c) if self.down.contains(&c) => Some(NavAction::Down),
            KeyCode::Char(c) if self.up.contains(&c) => Some(NavAction::Up),
            KeyCode::Char(c) if self.select.contains(&c) => Some(NavAction::Select),
            KeyCode::Char(c) if self.back.contains(&c) => Some(NavAction::Back),
            KeyCode::Char(c) if self.exit.contains(&c) => Some(NavAction::Exit),
            _ => None,
        }
    }

    /// First configured character for an action, for the footer hints.
    pub fn hint(&self, action: NavAction) -> char {
        let (list, fallback) = match action {
            NavAction::Down => (&self.down, 'j'),
            NavAction::Up => (&self.up, 'k'),
            NavAction::Select => (&self.select, 'l'),
            NavAction::Back => (&self.back, 'h'),
            NavAction::Exit => (&self.exit, 'x'),
        };
        list.first().copied().unwrap_or(fallback)
    }
}
