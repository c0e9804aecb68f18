//! Hard wall-clock deadline for an otherwise uninterruptible search.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::error::SearchError;

/// Run `op` on its own thread, waiting at most `limit` for the result.
///
/// The recursive search has no internal yield points, so the hard limit
/// is enforced from outside: the operation runs isolated on a worker
/// thread while the caller blocks on a bounded channel receive.
///
/// - Completion within the limit returns the operation's value unchanged.
/// - A panic inside the operation surfaces as [`SearchError::WorkerPanicked`]
///   through the same channel as a normal result.
/// - On timeout the call fails with [`SearchError::DeadlineExceeded`]; the
///   worker keeps running in the background but is never joined and its
///   result is discarded. The clone-on-expand discipline of
///   [`GameState::apply`](verso_core::GameState::apply) means the abandoned
///   worker shares no mutable state with the caller.
pub fn run_with_deadline<T, F>(op: F, limit: Duration) -> Result<T, SearchError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);

    thread::Builder::new()
        .name("verso-search".into())
        .spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(op));
            let _ = tx.send(outcome);
        })?;

    match rx.recv_timeout(limit) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(_payload)) => Err(SearchError::WorkerPanicked),
        Err(mpsc::RecvTimeoutError::Timeout) => Err(SearchError::DeadlineExceeded { limit }),
        Err(mpsc::RecvTimeoutError::Disconnected) => Err(SearchError::WorkerLost),
    }
}
