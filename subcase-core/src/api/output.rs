//! Output types for the normalization API

use crate::domain::FixRecord;
use std::time::Duration;

/// Result of a full normalization run
#[derive(Debug, Clone)]
pub struct Report {
    /// Every fix written back, in application order
    pub fixes: Vec<FixRecord>,
    pub stats: ReportStats,
}

#[derive(Debug, Clone, Default)]
pub struct ReportStats {
    pub paragraphs: usize,
    pub periods_added: usize,
    pub casing_fixes: usize,
    pub duration: Duration,
}

impl Report {
    /// Number of distinct paragraphs touched by any fix
    pub fn paragraphs_changed(&self) -> usize {
        let mut indices: Vec<usize> = self.fixes.iter().map(|f| f.index).collect();
        indices.sort_unstable();
        indices.dedup();
        indices.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.fixes.is_empty()
    }
}
