//! Per-stage progress display for loading and compositing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Drives one progress bar through the stages of a collage run
///
/// A hidden manager accepts the same calls and draws nothing, so library
/// callers and `--quiet` runs share one code path.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressManager {
    /// Create a manager that draws to the terminal
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(STAGE_STYLE.clone());
        Self { bar }
    }

    /// Create a manager that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Visible when `visible` is set, hidden otherwise
    pub fn with_visibility(visible: bool) -> Self {
        if visible { Self::new() } else { Self::hidden() }
    }

    /// Reset the bar for a stage of `len` items
    pub fn start_stage(&self, label: &str, len: usize) {
        self.bar.reset();
        self.bar.set_length(len as u64);
        self.bar.set_prefix(label.to_string());
        self.bar.set_message(String::new());
    }

    /// Mark one item of the current stage as done
    pub fn advance(&self, item: &str) {
        self.bar.set_message(item.to_string());
        self.bar.inc(1);
    }

    /// Items completed in the current stage
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Leave the finished stage on screen
    pub fn finish_stage(&self) {
        self.bar.set_message(String::new());
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
