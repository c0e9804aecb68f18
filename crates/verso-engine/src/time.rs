//! Per-round time budgeting across a sequence of moves.

use std::time::Duration;

/// Safety margin withheld from every move's share of the round.
const MARGIN: Duration = Duration::from_millis(50);

/// Smallest budget ever handed out.
const MIN_BUDGET: Duration = Duration::from_millis(1);

/// Splits a recurring time allowance evenly over the moves of a round.
///
/// A player receives `time_per_round` for every `turns_per_round` moves.
/// Each move gets an even share of whatever remains in the current round,
/// less a safety margin; completing the round restores the allowance in
/// full. The search core never consults this — callers convert the budget
/// into a [`SearchControl`](crate::search::SearchControl).
#[derive(Debug, Clone)]
pub struct RoundBudget {
    time_per_round: Duration,
    turns_per_round: u32,
    time_left: Duration,
    turns_left: u32,
}

impl RoundBudget {
    /// Create a budget of `time_per_round` per `turns_per_round` moves.
    ///
    /// # Panics
    ///
    /// Panics if `turns_per_round` is zero.
    pub fn new(time_per_round: Duration, turns_per_round: u32) -> Self {
        assert!(turns_per_round >= 1, "a round contains at least one turn");
        Self {
            time_per_round,
            turns_per_round,
            time_left: time_per_round,
            turns_left: turns_per_round,
        }
    }

    /// Wall-clock budget for the next move: an even share of the remaining
    /// round time, less [`MARGIN`], floored at [`MIN_BUDGET`].
    pub fn move_budget(&self) -> Duration {
        let share = self.time_left / self.turns_left;
        share.saturating_sub(MARGIN).max(MIN_BUDGET)
    }

    /// Account for a finished move that took `spent`.
    ///
    /// The final turn of a round resets the allowance instead of
    /// deducting from it.
    pub fn record(&mut self, spent: Duration) {
        if self.turns_left <= 1 {
            self.time_left = self.time_per_round;
            self.turns_left = self.turns_per_round;
        } else {
            self.turns_left -= 1;
            self.time_left = self.time_left.saturating_sub(spent);
        }
    }

    /// Moves remaining in the current round.
    pub fn turns_left(&self) -> u32 {
        self.turns_left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_share_minus_margin() {
        let budget = RoundBudget::new(Duration::from_secs(3), 3);
        assert_eq!(budget.move_budget(), Duration::from_millis(950));
    }

    #[test]
    fn share_grows_as_turns_shrink() {
        let mut budget = RoundBudget::new(Duration::from_secs(3), 3);
        budget.record(Duration::from_millis(100));
        // 2.9s left over 2 turns
        assert_eq!(budget.move_budget(), Duration::from_millis(1400));
    }

    #[test]
    fn round_resets_after_last_turn() {
        let mut budget = RoundBudget::new(Duration::from_secs(3), 3);
        budget.record(Duration::from_secs(1));
        budget.record(Duration::from_secs(1));
        assert_eq!(budget.turns_left(), 1);
        budget.record(Duration::from_secs(1));
        assert_eq!(budget.turns_left(), 3);
        assert_eq!(budget.move_budget(), Duration::from_millis(950));
    }

    #[test]
    fn overspent_round_still_hands_out_a_floor() {
        let mut budget = RoundBudget::new(Duration::from_millis(200), 3);
        budget.record(Duration::from_secs(5));
        assert_eq!(budget.move_budget(), MIN_BUDGET);
    }

    #[test]
    #[should_panic(expected = "at least one turn")]
    fn zero_turn_rounds_are_rejected() {
        let _ = RoundBudget::new(Duration::from_secs(1), 0);
    }
}
