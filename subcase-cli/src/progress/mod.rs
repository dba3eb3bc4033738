//! Progress display for batch normalization

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Tracks normalized documents and the paragraphs they changed.
///
/// Shared by reference across worker threads; a bar is only drawn for
/// batches of two or more documents.
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    paragraphs_changed: AtomicUsize,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            paragraphs_changed: AtomicUsize::new(0),
            quiet,
        }
    }

    /// Start the bar for `total_documents` documents
    pub fn start(&mut self, total_documents: u64) {
        if self.quiet || total_documents < 2 {
            return;
        }

        let pb = ProgressBar::new(total_documents);
        if let Ok(style) =
            ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] {bar:40.green/white} {pos}/{len} documents {msg}")
        {
            pb.set_style(style.progress_chars("=> "));
        }
        pb.enable_steady_tick(Duration::from_millis(100));

        self.progress_bar = Some(pb);
    }

    /// Record one normalized document
    pub fn document_done(&self, source: &str, paragraphs_changed: usize) {
        let total = self.paragraphs_changed.fetch_add(paragraphs_changed, Ordering::Relaxed) + paragraphs_changed;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{source}: {paragraphs_changed} changed ({total} total)"));
            pb.inc(1);
        }
    }

    /// Paragraphs changed across every document recorded so far
    pub fn paragraphs_changed(&self) -> usize {
        self.paragraphs_changed.load(Ordering::Relaxed)
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} paragraphs changed", self.paragraphs_changed()));
        }
    }
}
