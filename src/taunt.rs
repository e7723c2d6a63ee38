//! Flavor text for lively games.
//!
//! A taunt is appended to the status line after every mark placed while
//! the game is still running. The pool remembers its last pick so the
//! same phrase never appears twice in a row.

use crate::rng::GameRng;
use serde::{Deserialize, Serialize};

/// Built-in taunt phrases.
pub const TAUNTS: [&str; 9] = [
    "Nice move!",
    "You're on fire! 🔥",
    "Well played!",
    "This is getting interesting 😏",
    "Ooooh, sneaky one!",
    "Watch out! 😮",
    "Let’s goooo! 🚀",
    "Boom! 👊",
    "Tension rising… 💥",
];

/// Taunt pool with repeat suppression.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TauntPool {
    /// Candidate phrases.
    phrases: Vec<String>,
    /// Index of the last phrase handed out.
    last: Option<usize>,
}

impl TauntPool {
    /// Creates a pool with the built-in phrases.
    pub fn new() -> Self {
        Self::with_phrases(TAUNTS.iter().map(|s| s.to_string()).collect())
    }

    /// Creates a pool with custom phrases.
    pub fn with_phrases(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            last: None,
        }
    }

    /// Picks a phrase, uniformly among those that differ from the last pick.
    ///
    /// A single-phrase pool repeats its phrase. An empty pool yields `None`.
    pub fn pick(&mut self, rng: &mut GameRng) -> Option<&str> {
        if self.phrases.is_empty() {
            return None;
        }

        let candidates: Vec<usize> = (0..self.phrases.len())
            .filter(|&index| Some(index) != self.last)
            .collect();
        let index = rng.choose(&candidates).copied().unwrap_or(0);

        self.last = Some(index);
        Some(&self.phrases[index])
    }

    /// Returns the last phrase handed out, if any.
    pub fn last(&self) -> Option<&str> {
        self.last.map(|index| self.phrases[index].as_str())
    }
}

impl Default for TauntPool {
    fn default() -> Self {
        Self::new()
    }
}
