//! Drives the prioritized word list into the puzzle surface.
//!
//! One word at a time: type it with humanized jitter, submit, let the UI
//! settle, then check the stop probes. Exactly one surface call is in
//! flight at any point; all pacing happens at explicit await points.

use crate::config::PacingConfig;
use crate::engine::stop::StopProbe;
use crate::surface::InputSurface;
use anyhow::{Context, Result};
use rand::Rng;
use std::time::Duration;
use tokio::sync::watch;

/// Terminal result of one automation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// Words actually submitted (includes the word that triggered the stop).
    pub submitted: usize,
    pub stopped_early: bool,
    /// Label that triggered the stop, when one did.
    pub reached_rank: Option<String>,
}

pub struct PlaySequencer {
    pacing: PacingConfig,
    probes: Vec<StopProbe>,
}

impl PlaySequencer {
    pub fn new(pacing: PacingConfig, probes: Vec<StopProbe>) -> Self {
        Self { pacing, probes }
    }

    /// Play words in order until a stop probe fires or the list runs out.
    ///
    /// Typing and submit failures are fatal and abort the run; probe
    /// failures are best-effort and only risk one extra submission. The
    /// abort channel is checked between words, never mid-word.
    pub async fn play<S>(
        &self,
        words: &[String],
        surface: &mut S,
        abort_rx: watch::Receiver<bool>,
    ) -> Result<PlayOutcome>
    where
        S: InputSurface + ?Sized,
    {
        let mut submitted = 0usize;

        for word in words {
            if *abort_rx.borrow() {
                tracing::warn!(submitted, "abort requested, stopping between words");
                break;
            }

            tracing::info!(word = %word, "typing word");
            for c in word.chars() {
                surface
                    .type_char(c)
                    .await
                    .with_context(|| format!("failed to type '{c}' of '{word}'"))?;
                self.sleep_range(self.pacing.char_delay_min_ms, self.pacing.char_delay_max_ms)
                    .await;
            }

            self.sleep_range(self.pacing.pre_submit_min_ms, self.pacing.pre_submit_max_ms)
                .await;
            surface
                .press_submit()
                .await
                .with_context(|| format!("failed to submit '{word}'"))?;
            submitted += 1;

            // Let the score/rank UI update before reading it back.
            sleep_ms(self.pacing.settle_ms).await;

            if let Some(label) = self.observe(surface).await {
                tracing::info!(rank = %label, submitted, "stop condition reached");
                // Let the success animation render before the caller tears
                // the surface down.
                sleep_ms(self.pacing.stop_grace_ms).await;
                return Ok(PlayOutcome {
                    submitted,
                    stopped_early: true,
                    reached_rank: Some(label),
                });
            }

            self.sleep_range(self.pacing.word_gap_min_ms, self.pacing.word_gap_max_ms)
                .await;
        }

        Ok(PlayOutcome {
            submitted,
            stopped_early: false,
            reached_rank: None,
        })
    }

    /// Run stop probes in order. A failed probe is logged and skipped: a
    /// missed detection costs at most one extra word, aborting would lose
    /// the whole run.
    async fn observe<S>(&self, surface: &mut S) -> Option<String>
    where
        S: InputSurface + ?Sized,
    {
        for probe in &self.probes {
            match probe.check(surface).await {
                Ok(Some(label)) => return Some(label),
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "stop probe failed, continuing");
                }
            }
        }
        None
    }

    async fn sleep_range(&self, min_ms: u64, max_ms: u64) {
        let ms = if min_ms >= max_ms {
            min_ms
        } else {
            rand::thread_rng().gen_range(min_ms..=max_ms)
        };
        sleep_ms(ms).await;
    }
}

async fn sleep_ms(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
