//! Search control — stop flag and soft time budget.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Cooperative stop condition for one top-level search.
///
/// The engines and the iterative-deepening driver poll
/// [`no_more_time()`](SearchControl::no_more_time) at well-defined points
/// (between children of a node, between deepening iterations). Polling
/// reads a clock and an atomic flag; it never blocks and never errors.
/// Two modes:
/// - **Infinite**: only responds to the external stop flag
/// - **Timed**: additionally expires once the budget has elapsed
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    started: Instant,
    budget: Option<Duration>,
}

impl SearchControl {
    /// Create control with no time budget; only the stop flag ends it.
    pub fn new_infinite(stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            started: Instant::now(),
            budget: None,
        }
    }

    /// Create control whose clock starts immediately with the given budget.
    pub fn new_timed(stopped: Arc<AtomicBool>, budget: Duration) -> Self {
        Self {
            stopped,
            started: Instant::now(),
            budget: Some(budget),
        }
    }

    /// Whether the search must stop consuming further work.
    ///
    /// Returns `true` if the external stop flag was set, or a budget exists
    /// and has elapsed. Once the budget fires, the stop flag is set so
    /// subsequent calls return immediately without re-reading the clock.
    pub fn no_more_time(&self) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if let Some(budget) = self.budget
            && self.elapsed() >= budget
        {
            self.stopped.store(true, Ordering::Release);
            return true;
        }

        false
    }

    /// Elapsed time since this control was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Reference to the shared stop flag.
    pub fn stop_flag(&self) -> &Arc<AtomicBool> {
        &self.stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag() -> Arc<AtomicBool> {
        Arc::new(AtomicBool::new(false))
    }

    #[test]
    fn infinite_control_never_expires() {
        let control = SearchControl::new_infinite(flag());
        assert!(!control.no_more_time());
        assert!(!control.no_more_time());
    }

    #[test]
    fn stop_flag_trips_infinite_control() {
        let stopped = flag();
        let control = SearchControl::new_infinite(Arc::clone(&stopped));
        stopped.store(true, Ordering::Release);
        assert!(control.no_more_time());
    }

    #[test]
    fn zero_budget_expires_immediately() {
        let control = SearchControl::new_timed(flag(), Duration::ZERO);
        assert!(control.no_more_time());
    }

    #[test]
    fn expiry_latches_the_stop_flag() {
        let stopped = flag();
        let control = SearchControl::new_timed(Arc::clone(&stopped), Duration::ZERO);
        assert!(control.no_more_time());
        assert!(stopped.load(Ordering::Acquire), "budget expiry should latch");
    }

    #[test]
    fn generous_budget_does_not_expire_at_once() {
        let control = SearchControl::new_timed(flag(), Duration::from_secs(3600));
        assert!(!control.no_more_time());
    }

    #[test]
    fn elapsed_is_monotonic() {
        let control = SearchControl::new_infinite(flag());
        let first = control.elapsed();
        let second = control.elapsed();
        assert!(second >= first);
    }
}
