//! Batch outcome reporting.

/// Typed outcome of one or more fetch calls.
///
/// The download policy is best effort: per-item failures are absorbed by
/// yt-dlp's ignore-errors flag and transcode failures never stop the batch.
/// This report is how callers and tests observe what actually happened
/// without parsing logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// Items the download tool reported as finished.
    pub completed: u64,

    /// Finished items successfully converted to the audio container.
    pub transcoded: u64,

    /// Finished items whose conversion failed (original file retained).
    pub transcode_failed: u64,

    /// Whether the external tool failed as a whole (spawn failure or
    /// non-zero exit). Items counted before the failure remain counted.
    pub batch_failed: bool,
}

impl FetchReport {
    /// Fold another report into this one.
    pub fn merge(&mut self, other: &FetchReport) {
        self.completed += other.completed;
        self.transcoded += other.transcoded;
        self.transcode_failed += other.transcode_failed;
        self.batch_failed |= other.batch_failed;
    }

    /// True when nothing went wrong at any level.
    pub fn is_clean(&self) -> bool {
        !self.batch_failed && self.transcode_failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_accumulates() {
        let mut total = FetchReport::default();
        total.merge(&FetchReport {
            completed: 2,
            transcoded: 2,
            transcode_failed: 0,
            batch_failed: false,
        });
        total.merge(&FetchReport {
            completed: 1,
            transcoded: 0,
            transcode_failed: 1,
            batch_failed: true,
        });

        assert_eq!(total.completed, 3);
        assert_eq!(total.transcoded, 2);
        assert_eq!(total.transcode_failed, 1);
        assert!(total.batch_failed);
        assert!(!total.is_clean());
    }

    #[test]
    fn test_default_is_clean() {
        assert!(FetchReport::default().is_clean());
    }
}
