//! Hero typewriter: types a word, holds, deletes it, moves to the next.
//!
//! [`Typewriter::step`] advances one character and returns how long the host
//! should wait before calling it again.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

#[derive(Debug, thiserror::Error)]
pub enum TypewriterError {
    #[error("word list is not a JSON string array: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("word list is empty")]
    Empty,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterTiming {
    pub type_ms: u32,
    pub delete_ms: u32,
    /// Hold after a word is fully typed.
    pub wait_ms: u32,
    /// Hold after a word is fully deleted.
    pub empty_ms: u32,
    /// Delay from mount to the first character.
    pub start_ms: u32,
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self { type_ms: 300, delete_ms: 150, wait_ms: 3000, empty_ms: 2000, start_ms: 200 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    PausingFull,
    Deleting,
    PausingEmpty,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    words: Vec<String>,
    word_index: usize,
    /// Characters of the current word on screen.
    shown: usize,
    phase: TypewriterPhase,
    timing: TypewriterTiming,
}

impl Typewriter {
    pub fn new(words: Vec<String>, timing: TypewriterTiming) -> Result<Self, TypewriterError> {
        if words.is_empty() {
            return Err(TypewriterError::Empty);
        }
        Ok(Self { words, word_index: 0, shown: 0, phase: TypewriterPhase::Typing, timing })
    }

    /// Build from the `data-words` / `data-wait` attribute pair.
    ///
    /// A missing or non-numeric `wait` keeps the default hold.
    pub fn from_attrs(words_json: &str, wait: Option<&str>) -> Result<Self, TypewriterError> {
        let words: Vec<String> = serde_json::from_str(words_json)?;
        let mut timing = TypewriterTiming::default();
        if let Some(wait_ms) = wait.and_then(|w| w.trim().parse().ok()) {
            timing.wait_ms = wait_ms;
        }
        Self::new(words, timing)
    }

    pub fn timing(&self) -> TypewriterTiming {
        self.timing
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    fn current_word(&self) -> &str {
        &self.words[self.word_index]
    }

    /// Text currently on screen.
    pub fn text(&self) -> String {
        self.current_word().chars().take(self.shown).collect()
    }

    /// Type or delete one character; returns the delay until the next step.
    pub fn step(&mut self) -> u32 {
        let full = self.current_word().chars().count();
        let deleting = matches!(self.phase, TypewriterPhase::PausingFull | TypewriterPhase::Deleting);

        if deleting {
            self.shown = self.shown.saturating_sub(1);
        } else {
            self.shown = (self.shown + 1).min(full);
        }

        if !deleting && self.shown == full {
            self.phase = TypewriterPhase::PausingFull;
            self.timing.wait_ms
        } else if deleting && self.shown == 0 {
            self.word_index = (self.word_index + 1) % self.words.len();
            self.phase = TypewriterPhase::PausingEmpty;
            self.timing.empty_ms
        } else if deleting {
            self.phase = TypewriterPhase::Deleting;
            self.timing.delete_ms
        } else {
            self.phase = TypewriterPhase::Typing;
            self.timing.type_ms
        }
    }
}
