//! Search errors raised by the hard deadline guard.

use std::time::Duration;

/// Errors from a deadline-guarded search invocation.
///
/// The soft time limit never produces an error — it is a predicate the
/// engines consult. Every error here comes from
/// [`run_with_deadline`](crate::guard::run_with_deadline).
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The guarded operation outran its wall-clock budget. The worker is
    /// abandoned; callers recover with a precomputed fallback move.
    #[error("search exceeded its deadline of {limit:?}")]
    DeadlineExceeded {
        /// The budget the operation was given.
        limit: Duration,
    },

    /// The worker panicked before producing a result (out-of-memory during
    /// clone-heavy expansion, arithmetic bug, ...). Fatal for this search
    /// call; re-raised by the caller rather than recovered here.
    #[error("search worker panicked before producing a result")]
    WorkerPanicked,

    /// The worker vanished without a result or a panic payload.
    #[error("search worker disappeared without producing a result")]
    WorkerLost,

    /// The worker thread could not be spawned.
    #[error("failed to spawn search worker: {source}")]
    Spawn {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::SearchError;
    use std::time::Duration;

    #[test]
    fn deadline_display_names_the_limit() {
        let err = SearchError::DeadlineExceeded {
            limit: Duration::from_millis(100),
        };
        let text = format!("{err}");
        assert!(text.contains("deadline"), "unexpected message: {text}");
        assert!(text.contains("100ms"), "unexpected message: {text}");
    }

    #[test]
    fn spawn_wraps_io_error() {
        let io = std::io::Error::other("no threads left");
        let err: SearchError = io.into();
        assert!(matches!(err, SearchError::Spawn { .. }));
    }
}
