use serde::Deserialize;

/// Normalized internal types used by the engine (provider-agnostic).

#[derive(Debug, Clone)]
pub struct PuzzleAnswers {
    pub meta: PuzzleMeta,
    pub words: Vec<RawAnswer>,
}

#[derive(Debug, Clone)]
pub struct PuzzleMeta {
    /// Display date, e.g. "February 3, 2026".
    pub date: String,
    pub center_letter: Option<char>,
    /// Full allowed alphabet, lowercased. Seven letters on a well-formed puzzle.
    pub letters: Vec<char>,
}

/// One answer as the provider reported it, before scoring.
#[derive(Debug, Clone)]
pub struct RawAnswer {
    pub text: String,
    /// Provider-reported pangram flag. Cross-checked against our own
    /// distinct-letter count during scoring.
    pub pangram_flag: bool,
}

/// sbsolver workers API response: `{ puzzle: {...}, words: [...] }`
///
/// Everything is defaulted so a partial or malformed payload deserializes to
/// empty fields instead of failing the whole fetch.
#[derive(Debug, Deserialize)]
pub struct SbApiResponse {
    #[serde(default)]
    pub puzzle: SbApiPuzzle,
    #[serde(default)]
    pub words: Vec<SbApiWord>,
}

#[derive(Debug, Deserialize, Default)]
pub struct SbApiPuzzle {
    #[serde(default)]
    pub date: String,
    /// Center letter, e.g. "T".
    #[serde(default)]
    pub letters: String,
    #[serde(default)]
    pub all_letters: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SbApiWord {
    #[serde(default)]
    pub word: String,
    /// 0 or 1 on the wire.
    #[serde(default)]
    pub is_pangram: u8,
}
