//! Presentation seam for screening results.
//!
//! The pipeline has no dependency on any rendering technology. It drives a
//! [`ResultSink`]: one progress tick per ticker processed (including the
//! skipped ones) and a single delivery of the final ranked records.

use crate::types::ScoreRecord;

/// Consumer of screening progress and results.
///
/// Implementations must be thread-safe; the pipeline may invoke
/// [`ResultSink::progress`] from an async task.
pub trait ResultSink: Send + Sync {
    /// Called after each ticker is processed, whether it produced a record
    /// or was skipped. `done` counts processed tickers out of `total`.
    fn progress(&self, done: usize, total: usize);

    /// Called once with the final list, sorted by total score descending.
    /// An empty slice means no ticker survived all three evaluators.
    fn results(&self, records: &[ScoreRecord]);
}

/// A sink that discards everything.
///
/// Useful for tests and for callers that only want the returned records.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ResultSink for NullSink {
    fn progress(&self, _done: usize, _total: usize) {}

    fn results(&self, _records: &[ScoreRecord]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct Recording {
        ticks: Mutex<Vec<(usize, usize)>>,
    }

    impl ResultSink for Recording {
        fn progress(&self, done: usize, total: usize) {
            self.ticks.lock().unwrap().push((done, total));
        }

        fn results(&self, _records: &[ScoreRecord]) {}
    }

    #[test]
    fn test_sink_is_object_safe() {
        let sink: Box<dyn ResultSink> = Box::new(NullSink);
        sink.progress(1, 10);
        sink.results(&[]);
    }

    #[test]
    fn test_recording_sink() {
        let sink = Recording {
            ticks: Mutex::new(Vec::new()),
        };
        sink.progress(1, 2);
        sink.progress(2, 2);
        assert_eq!(*sink.ticks.lock().unwrap(), vec![(1, 2), (2, 2)]);
    }
}
