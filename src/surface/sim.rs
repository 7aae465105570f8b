//! In-process model of the Spelling Bee game.
//!
//! Plays the same role as the real puzzle page: accepts keystrokes, scores
//! valid submissions, and exposes the rank ladder. Used as a rehearsal
//! surface in the binary and as the reference surface in tests.

use super::InputSurface;
use crate::engine::scoring::score_word;
use crate::feed::types::PuzzleAnswers;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// NYT rank ladder as fractions of the puzzle's total score. Queen Bee is
/// special-cased: it requires every answer, not a score fraction.
const RANK_LADDER: &[(&str, f64)] = &[
    ("Beginner", 0.0),
    ("Good Start", 0.02),
    ("Moving Up", 0.05),
    ("Good", 0.08),
    ("Solid", 0.15),
    ("Nice", 0.25),
    ("Great", 0.40),
    ("Amazing", 0.50),
    ("Genius", 0.70),
];

pub struct SimulatedSurface {
    answers: HashSet<String>,
    center_letter: Option<char>,
    letters: HashSet<char>,
    total_score: u32,
    score: u32,
    found: HashSet<String>,
    buffer: String,
}

impl SimulatedSurface {
    pub fn from_puzzle(puzzle: &PuzzleAnswers) -> Self {
        let answers: HashSet<String> =
            puzzle.words.iter().map(|w| w.text.clone()).collect();
        let total_score = answers.iter().map(|w| score_word(w)).sum();

        Self {
            answers,
            center_letter: puzzle.meta.center_letter,
            letters: puzzle.meta.letters.iter().copied().collect(),
            total_score,
            score: 0,
            found: HashSet::new(),
            buffer: String::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Current rank label, mirroring what the game renders.
    pub fn rank(&self) -> &'static str {
        if !self.answers.is_empty() && self.found.len() == self.answers.len() {
            return "Queen Bee";
        }
        if self.total_score == 0 {
            return "Beginner";
        }
        let mut current = "Beginner";
        for &(name, fraction) in RANK_LADDER {
            // ceil keeps each tier at "at least this fraction" on small puzzles
            let threshold = (fraction * f64::from(self.total_score)).ceil() as u32;
            if self.score >= threshold {
                current = name;
            }
        }
        current
    }

    /// Same checks the game applies before accepting a word.
    fn accepts(&self, word: &str) -> bool {
        if word.chars().count() < 4 {
            return false;
        }
        if let Some(center) = self.center_letter {
            if !word.contains(center) {
                return false;
            }
        }
        if !self.letters.is_empty() && !word.chars().all(|c| self.letters.contains(&c)) {
            return false;
        }
        self.answers.contains(word) && !self.found.contains(word)
    }
}

#[async_trait]
impl InputSurface for SimulatedSurface {
    async fn type_char(&mut self, c: char) -> Result<()> {
        self.buffer.push(c.to_ascii_lowercase());
        Ok(())
    }

    async fn press_submit(&mut self) -> Result<()> {
        let word = std::mem::take(&mut self.buffer);
        if self.accepts(&word) {
            self.score += score_word(&word);
            self.found.insert(word);
        }
        // Rejected words just clear the input, same as the game.
        Ok(())
    }

    async fn read_rank_label(&mut self) -> Result<Option<String>> {
        Ok(Some(self.rank().to_string()))
    }

    async fn is_text_visible(&mut self, text: &str) -> Result<bool> {
        Ok(text == self.rank())
    }
}
