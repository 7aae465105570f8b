pub mod sim;

use anyhow::Result;
use async_trait::async_trait;

/// Capability set the sequencer needs from a puzzle UI.
///
/// Implementations inject keystrokes and read back visible state. The
/// sequencer calls nothing else, so a browser driver, a remote agent, or the
/// in-process [`sim::SimulatedSurface`] are interchangeable here.
#[async_trait]
pub trait InputSurface: Send {
    /// Type one character into the puzzle input. A failure here is fatal to
    /// the run: the surface is unusable.
    async fn type_char(&mut self, c: char) -> Result<()>;

    /// Press the submit key for the currently typed word.
    async fn press_submit(&mut self) -> Result<()>;

    /// Read the achievement rank label, if one is rendered.
    async fn read_rank_label(&mut self) -> Result<Option<String>>;

    /// Whether the given text is visible anywhere on the surface.
    async fn is_text_visible(&mut self, text: &str) -> Result<bool>;
}
