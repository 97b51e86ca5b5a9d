//! Batch progress display for multi-file runs

use std::path::Path;
use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::{MIN_FILES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] Sessions: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over a batch of session files
///
/// Single files finish too quickly to need a bar, so one is only drawn for
/// batches of at least `MIN_FILES_FOR_PROGRESS` files.
#[derive(Default)]
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a manager with no bar yet
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Prepare the display for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count >= MIN_FILES_FOR_PROGRESS {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(bar);
        }
    }

    /// Whether a bar is being drawn
    pub const fn is_active(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Show the file currently being analysed
    pub fn start_file(&self, path: &Path) {
        if let Some(bar) = &self.batch_bar {
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(name.into_owned());
        }
    }

    /// Count one file as done
    pub fn complete_file(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.finish_and_clear();
        }
    }
}
