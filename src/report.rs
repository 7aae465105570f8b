//! Upload metadata for the recorded run.
//!
//! The video pipeline (recording, encoding, upload) lives outside this
//! crate; it consumes these strings unchanged.

use crate::engine::sequencer::PlayOutcome;
use crate::feed::types::PuzzleMeta;

/// YouTube category "Gaming".
const CATEGORY_GAMING: &str = "20";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: String,
    /// Uploads default to private so a bad run never goes public.
    pub privacy_status: String,
}

pub fn video_metadata(meta: &PuzzleMeta, game_url: &str, outcome: &PlayOutcome) -> VideoMetadata {
    let date = if meta.date.is_empty() {
        chrono::Local::now().format("%B %d, %Y").to_string()
    } else {
        meta.date.clone()
    };

    let mut description = format!(
        "Here are the answers for the NYT Spelling Bee on {date}.\n\nPlay the game: {game_url}"
    );
    if let Some(rank) = outcome.reached_rank.as_deref() {
        description.push_str(&format!("\n\nSolved through {rank}."));
    }

    VideoMetadata {
        title: format!("NYT Spelling Bee {date} Answer | Today's Solution"),
        description,
        tags: vec![
            "NYT Spelling Bee".to_string(),
            "Spelling Bee Answers".to_string(),
            "Spelling Bee Solver".to_string(),
            "NYT Games".to_string(),
        ],
        category_id: CATEGORY_GAMING.to_string(),
        privacy_status: "private".to_string(),
    }
}
