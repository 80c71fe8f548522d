use std::process::{Command, Stdio};

use crate::lookup::metadata::Phonetic;

/// Pronunciation capability. Called once per drill presentation with the
/// target word and whatever phonetic hints the lookup returned.
pub trait Pronounce {
    fn pronounce(&self, word: &str, phonetics: &[Phonetic]);
}

/// Speaks through a user-configured external TTS command (e.g. `espeak` or
/// `say`), with the word appended as the final argument. Output is
/// discarded so the command can never scribble over the TUI. Phonetic
/// hints are ignored; the configured engine does its own lookup.
pub struct CommandSpeaker {
    program: String,
    args: Vec<String>,
}

impl CommandSpeaker {
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl Pronounce for CommandSpeaker {
    fn pronounce(&self, word: &str, _phonetics: &[Phonetic]) {
        // Synchronous on purpose: the drill waits for the word to be spoken
        // before prompting, like the rest of the single-threaded UI.
        let _ = Command::new(&self.program)
            .args(&self.args)
            .arg(word)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
    }
}

/// No-op fallback when no speech command is configured.
pub struct SilentSpeaker;

impl Pronounce for SilentSpeaker {
    fn pronounce(&self, _word: &str, _phonetics: &[Phonetic]) {}
}

pub fn from_config(command: Option<&str>) -> Box<dyn Pronounce> {
    match command.and_then(CommandSpeaker::from_command_line) {
        Some(speaker) => Box::new(speaker),
        None => Box::new(SilentSpeaker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_splits_program_and_args() {
        let speaker = CommandSpeaker::from_command_line("espeak -s 125").unwrap();
        assert_eq!(speaker.program, "espeak");
        assert_eq!(speaker.args, vec!["-s", "125"]);
    }

    #[test]
    fn test_blank_command_line_is_rejected() {
        assert!(CommandSpeaker::from_command_line("   ").is_none());
    }
}
