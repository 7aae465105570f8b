use crate::config::GameConfig;
use crate::surface::InputSurface;
use anyhow::Result;

/// One way of detecting that the run should stop.
///
/// The game exposes progress through two channels: a structured rank label
/// and free text on the page. Probes are checked in a fixed order and
/// OR-combined, so a single brittle detection path never decides the run.
#[derive(Debug, Clone)]
pub enum StopProbe {
    /// Rank label matches one of the target ranks (trimmed, case-sensitive).
    RankLabel { targets: Vec<String> },
    /// The phrase is visible somewhere on the surface.
    VisibleText { phrase: String },
}

impl StopProbe {
    /// Probe order: structured rank read first, then each text fallback.
    pub fn from_game_config(game: &GameConfig) -> Vec<StopProbe> {
        let mut probes = vec![StopProbe::RankLabel {
            targets: game.stop_ranks.clone(),
        }];
        probes.extend(game.stop_phrases.iter().map(|p| StopProbe::VisibleText {
            phrase: p.clone(),
        }));
        probes
    }

    /// Returns the reached label when this probe triggers.
    pub async fn check<S>(&self, surface: &mut S) -> Result<Option<String>>
    where
        S: InputSurface + ?Sized,
    {
        match self {
            Self::RankLabel { targets } => match surface.read_rank_label().await? {
                Some(label) => {
                    let label = label.trim().to_string();
                    Ok(targets.contains(&label).then_some(label))
                }
                None => Ok(None),
            },
            Self::VisibleText { phrase } => Ok(surface
                .is_text_visible(phrase)
                .await?
                .then(|| phrase.clone())),
        }
    }
}
