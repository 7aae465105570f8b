use crate::feed::types::PuzzleAnswers;
use std::collections::HashSet;

/// An answer with its computed score, ready for ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub text: String,
    pub score: u32,
    pub is_pangram: bool,
}

/// Score a word by Spelling Bee rules.
///
/// 4-letter words are worth 1 point, longer words their length, and a
/// pangram (all 7 puzzle letters used) earns a 7-point bonus.
pub fn score_word(word: &str) -> u32 {
    let len = word.chars().count() as u32;
    if len == 4 {
        return 1;
    }
    let mut score = len;
    if distinct_letters(word) == 7 {
        score += 7;
    }
    score
}

fn distinct_letters(word: &str) -> usize {
    word.chars().collect::<HashSet<_>>().len()
}

/// Playable entries only: the API occasionally carries junk rows.
fn is_well_formed(text: &str) -> bool {
    text.chars().count() >= 4 && text.chars().all(|c| c.is_ascii_lowercase())
}

/// Order the day's answers into the sequence they should be played.
///
/// Highest score first (stable on ties), except the opening word is never a
/// pangram: solving the pangram first looks scripted, so the first
/// non-pangram is pulled to the front while everything else keeps its
/// relative order. Malformed entries are dropped, never an error; an empty
/// result means there is nothing to play.
pub fn prioritize(answers: &PuzzleAnswers) -> Vec<String> {
    let mut scored: Vec<ScoredWord> = answers
        .words
        .iter()
        .filter(|w| is_well_formed(&w.text))
        .map(|w| {
            // Our own distinct-letter count is authoritative for scoring; the
            // provider flag only widens the pangram marker.
            ScoredWord {
                text: w.text.clone(),
                score: score_word(&w.text),
                is_pangram: w.pangram_flag || distinct_letters(&w.text) == 7,
            }
        })
        .collect();

    // sort_by is stable: equal scores keep their input order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    if scored.first().is_some_and(|w| w.is_pangram) {
        if let Some(i) = scored.iter().position(|w| !w.is_pangram) {
            let non_pangram = scored.remove(i);
            scored.insert(0, non_pangram);
        }
        // pangram-only puzzle: leave as-is
    }

    scored.into_iter().map(|w| w.text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::types::{PuzzleMeta, RawAnswer};

    fn answers_from(words: &[(&str, bool)]) -> PuzzleAnswers {
        PuzzleAnswers {
            meta: PuzzleMeta {
                date: String::new(),
                center_letter: None,
                letters: Vec::new(),
            },
            words: words
                .iter()
                .map(|(text, flag)| RawAnswer {
                    text: (*text).to_string(),
                    pangram_flag: *flag,
                })
                .collect(),
        }
    }

    #[test]
    fn test_score_four_letter_word() {
        assert_eq!(score_word("word"), 1);
    }

    #[test]
    fn test_score_longer_word() {
        // 7 letters, 5 distinct: no bonus
        assert_eq!(score_word("letters"), 7);
    }

    #[test]
    fn test_score_pangram() {
        // 7 letters, all distinct: 7 + 7 bonus
        assert_eq!(score_word("abcdefg"), 14);
        // real words qualify the same way, flag or not
        assert_eq!(score_word("tabloid"), 14);
    }

    #[test]
    fn test_score_long_word_with_repeats() {
        // 8 letters but only 5 distinct: no bonus
        assert_eq!(score_word("assesses"), 8);
    }

    #[test]
    fn test_prioritize_sorts_by_score_descending() {
        // "balloon" has only 5 distinct letters, so no pangram demotion
        let answers = answers_from(&[("bolt", false), ("balloon", false), ("blot", false)]);
        let words = prioritize(&answers);
        assert_eq!(words, vec!["balloon", "bolt", "blot"]);
    }

    #[test]
    fn test_prioritize_ties_keep_input_order() {
        let answers = answers_from(&[("bolt", false), ("blot", false), ("bold", false)]);
        let words = prioritize(&answers);
        assert_eq!(words, vec!["bolt", "blot", "bold"]);
    }

    #[test]
    fn test_prioritize_demotes_leading_pangram() {
        // "gallery" is the sole pangram-flagged top scorer; the best
        // non-pangram opens instead, and the pangram keeps second place.
        let answers = answers_from(&[
            ("bee", false),
            ("label", false),
            ("allege", false),
            ("aegis", false),
            ("gallery", true),
        ]);
        let words = prioritize(&answers);
        assert_eq!(words[0], "allege");
        assert_eq!(words[1], "gallery");
        assert_eq!(words, vec!["allege", "gallery", "label", "aegis"]);
    }

    #[test]
    fn test_prioritize_computed_pangram_without_flag() {
        // 7 distinct letters, provider flag absent: still treated as pangram
        let answers = answers_from(&[("abcdefg", false), ("face", false)]);
        let words = prioritize(&answers);
        assert_eq!(words, vec!["face", "abcdefg"]);
    }

    #[test]
    fn test_prioritize_pangram_only_puzzle_unchanged() {
        let answers = answers_from(&[("abcdefg", true), ("gabcdef", true)]);
        let words = prioritize(&answers);
        assert_eq!(words, vec!["abcdefg", "gabcdef"]);
    }

    #[test]
    fn test_prioritize_drops_malformed_entries() {
        let answers = answers_from(&[
            ("bolt", false),
            ("", false),
            ("abc", false),
            ("has space", false),
            ("Upper", false),
            ("balloon", false),
        ]);
        let words = prioritize(&answers);
        assert_eq!(words.len(), 2);
        assert_eq!(words, vec!["balloon", "bolt"]);
    }

    #[test]
    fn test_prioritize_empty_input() {
        let answers = answers_from(&[]);
        assert!(prioritize(&answers).is_empty());
    }

    #[test]
    fn test_prioritize_is_idempotent() {
        let answers = answers_from(&[
            ("tabloid", true),
            ("bolt", false),
            ("blot", false),
            ("adroit", false),
        ]);
        assert_eq!(prioritize(&answers), prioritize(&answers));
    }
}
