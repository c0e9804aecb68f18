//! Search engines and the iterative-deepening driver.

pub mod alphabeta;
pub mod control;
pub mod minimax;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use verso_core::{GameState, Winner};

pub use alphabeta::AlphaBeta;
pub use control::SearchControl;
pub use minimax::MiniMax;

/// Score sentinel dominating any heuristic value.
///
/// A finite stand-in for infinity: winning positions score `+INFINITY`,
/// losing ones `-INFINITY`, and all arithmetic on scores stays
/// well-defined.
pub const INFINITY: f64 = 6000.0;

/// Ceiling on deepening iterations, far beyond any reachable depth.
pub const MAX_DEPTH: u32 = 128;

/// Result of searching one node: the backed-up value, and the chosen move
/// when the node decides on behalf of the searching side.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// The minimax value of the node.
    pub value: f64,
    /// The move achieving `value`. `None` at minimizing nodes, at leaves,
    /// and when time expired before any child was explored.
    pub best: Option<M>,
}

/// A recursive game-tree search with a depth limit.
///
/// Implemented by [`MiniMax`] and [`AlphaBeta`], which share this contract:
/// identical root values on any tree explored without time pressure.
pub trait SearchEngine<S: GameState> {
    /// Search `state` to `depth` plies, `maximizing` for the engine's side.
    fn search(&mut self, state: &S, depth: u32, maximizing: bool) -> SearchResult<S::Move>;
}

/// Selective-deepening predicate that never extends the search.
pub fn never_deepen<S>(_state: &S) -> bool {
    false
}

/// Score a terminal position for `side`.
fn outcome_value<S: GameState>(state: &S, side: S::Player) -> f64 {
    match state.winner() {
        Winner::Decided(winner) if winner == side => INFINITY,
        Winner::Decided(_) => -INFINITY,
        Winner::Tie => 0.0,
    }
}

/// A move chosen by the deepening driver.
#[derive(Debug, Clone, PartialEq)]
pub struct BestMove<M> {
    /// The chosen move.
    pub mv: M,
    /// Backed-up value from the deepest retained iteration; `None` when
    /// the move was forced or picked at random under a spent budget.
    pub value: Option<f64>,
    /// Depth of the retained iteration (0 for forced/random moves).
    pub depth: u32,
}

/// Pick a move for the side to move by iterative deepening.
///
/// Runs `engine` at depth 1, 2, 3, ... and keeps the most recent result
/// that produced a root move. `no_more_time` is consulted before every
/// iteration; deeper completed iterations strictly refine the answer, and
/// the shallowest one guarantees a move under a tight budget. Two
/// shortcuts:
/// - a forced move (single candidate) is returned without searching;
/// - if the budget was already spent before depth 1 completed, a uniformly
///   random candidate from `rng` is returned — the driver never comes back
///   empty-handed while a legal move exists.
///
/// Returns `None` only for terminal positions.
pub fn best_move<S, E, T, R>(
    state: &S,
    engine: &mut E,
    no_more_time: T,
    rng: &mut R,
) -> Option<BestMove<S::Move>>
where
    S: GameState,
    E: SearchEngine<S>,
    T: Fn() -> bool,
    R: Rng + ?Sized,
{
    let moves = state.legal_moves();
    if moves.is_empty() {
        return None;
    }
    if let [only] = moves.as_slice() {
        return Some(BestMove {
            mv: only.clone(),
            value: None,
            depth: 0,
        });
    }

    let mut retained: Option<BestMove<S::Move>> = None;
    for depth in 1..=MAX_DEPTH {
        if no_more_time() {
            break;
        }
        let result = engine.search(state, depth, true);
        if let Some(mv) = result.best {
            debug!(depth, value = result.value, "deepening iteration complete");
            retained = Some(BestMove {
                mv,
                value: Some(result.value),
                depth,
            });
        }
    }

    retained.or_else(|| {
        let mv = moves.choose(rng).cloned()?;
        Some(BestMove {
            mv,
            value: None,
            depth: 0,
        })
    })
}
