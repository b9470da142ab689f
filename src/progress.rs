//! progress reporting functionality

use indicatif::{ProgressBar, ProgressStyle};

const PROGRESS_TEMPLATE: &str = "{spinner:.green} [{elapsed_precise}] {pos} entries {msg}";

pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// create new entry counter, only shows a spinner if enabled
    pub fn new(enabled: bool) -> Self {
        let bar = if enabled {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template(PROGRESS_TEMPLATE)
                    .expect("invalid progress template"),
            );
            Some(pb)
        } else {
            None
        };

        Self { bar }
    }

    /// count one more visited entry
    pub fn inc(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// entries counted so far
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, |bar| bar.position())
    }

    /// finish progress and clear
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
