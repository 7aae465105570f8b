use super::types::*;
use super::AnswerFeed;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Client for the sbsolver workers API (`GET {base}/today`).
pub struct SbSolverApi {
    client: Client,
    base_url: String,
}

impl SbSolverApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Flatten the wire response into provider-agnostic puzzle data.
///
/// Answer words are lowercased; letter casing from the API is inconsistent.
pub fn normalize(resp: SbApiResponse) -> PuzzleAnswers {
    let center_letter = resp
        .puzzle
        .letters
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase());

    let letters: Vec<char> = resp
        .puzzle
        .all_letters
        .iter()
        .filter_map(|l| l.chars().next())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    let words = resp
        .words
        .into_iter()
        .map(|w| RawAnswer {
            text: w.word.to_ascii_lowercase(),
            pangram_flag: w.is_pangram == 1,
        })
        .collect();

    PuzzleAnswers {
        meta: PuzzleMeta {
            date: resp.puzzle.date,
            center_letter,
            letters,
        },
        words,
    }
}

#[async_trait]
impl AnswerFeed for SbSolverApi {
    async fn fetch_today(&self) -> Result<PuzzleAnswers> {
        let url = format!("{}/today", self.base_url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("answers API request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("answers API returned {} for {}: {}", status, url, body);
        }

        let parsed: SbApiResponse = resp
            .json()
            .await
            .context("failed to parse answers API response")?;

        Ok(normalize(parsed))
    }
}
