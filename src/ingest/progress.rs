//! Progress bar for line-oriented loads

use indicatif::{ProgressBar, ProgressStyle};

/// Counts lines as they are pulled from a source
///
/// Draws to stderr and stays hidden when stderr is not a terminal. The bar
/// is cleared on drop, so a load that bails out with `?` does not leave it
/// on screen above the error.
pub struct LineProgress {
    bar: ProgressBar,
}

impl LineProgress {
    pub fn new(label: &'static str, limit: usize) -> Self {
        let bar = ProgressBar::new(limit as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(label);
        Self { bar }
    }

    pub fn tick(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Drop for LineProgress {
    fn drop(&mut self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}
