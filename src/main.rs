use anyhow::Result;
use bee_auto::config::Config;
use bee_auto::engine::scoring;
use bee_auto::engine::sequencer::PlaySequencer;
use bee_auto::engine::stop::StopProbe;
use bee_auto::feed::sb_api::SbSolverApi;
use bee_auto::feed::AnswerFeed;
use bee_auto::report;
use bee_auto::surface::sim::SimulatedSurface;
use std::path::Path;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bee_auto=info")),
        )
        .init();

    let config = Config::load(Path::new("config.toml"))?;

    // --- Phase 1: fetch today's answers ---
    let feed = SbSolverApi::new(&config.api.base_url);
    let answers = feed.fetch_today().await?;
    tracing::info!(
        date = %answers.meta.date,
        words = answers.words.len(),
        "fetched daily puzzle"
    );

    // --- Phase 2: order the play list ---
    let words = scoring::prioritize(&answers);
    if words.is_empty() {
        // Nothing playable: abort rather than drive an empty run.
        anyhow::bail!("no playable words in today's puzzle data");
    }
    tracing::info!(count = words.len(), opener = %words[0], "prioritized word list");

    // Ctrl-C stops the run between words, never mid-word.
    let (abort_tx, abort_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("ctrl-c received, finishing current word");
            let _ = abort_tx.send(true);
        }
    });

    // --- Phase 3: play ---
    // Rehearsal surface: an in-process model of the game. A browser-backed
    // surface plugs in here without touching the sequencer.
    let mut surface = SimulatedSurface::from_puzzle(&answers);
    let sequencer = PlaySequencer::new(
        config.pacing.clone(),
        StopProbe::from_game_config(&config.game),
    );

    // A submission failure propagates here and exits non-zero: "aborted due
    // to submission failure" is distinct from the two outcomes below.
    let outcome = sequencer.play(&words, &mut surface, abort_rx).await?;

    if outcome.stopped_early {
        tracing::info!(
            rank = outcome.reached_rank.as_deref().unwrap_or("?"),
            submitted = outcome.submitted,
            "stopped early at target rank"
        );
    } else {
        tracing::info!(submitted = outcome.submitted, "completed all words");
    }

    // --- Phase 4: hand off upload metadata ---
    let metadata = report::video_metadata(&answers.meta, &config.game.url, &outcome);
    println!("{}", metadata.title);
    println!();
    println!("{}", metadata.description);

    Ok(())
}
