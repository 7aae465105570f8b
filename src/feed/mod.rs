pub mod sb_api;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;
use types::PuzzleAnswers;

#[async_trait]
pub trait AnswerFeed: Send + Sync {
    async fn fetch_today(&self) -> Result<PuzzleAnswers>;
}
