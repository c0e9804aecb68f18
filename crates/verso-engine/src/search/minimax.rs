//! Depth-limited MiniMax search without pruning.

use verso_core::GameState;

use crate::search::{INFINITY, SearchEngine, SearchResult, outcome_value};

/// MiniMax engine: explores every child of every node to the depth limit.
///
/// Construction fixes who the engine is searching for (`side`), the
/// heuristic used at depth-exhausted nodes, the cooperative soft-time
/// predicate, and a selective-deepening predicate that may extend the
/// search past the depth limit at chosen states (pass
/// [`never_deepen`](crate::search::never_deepen) to disable).
pub struct MiniMax<S, E, T, D>
where
    S: GameState,
{
    side: S::Player,
    evaluate: E,
    no_more_time: T,
    deepen: D,
    nodes: u64,
    evals: u64,
}

impl<S, E, T, D> MiniMax<S, E, T, D>
where
    S: GameState,
    E: Fn(&S) -> f64,
    T: Fn() -> bool,
    D: Fn(&S) -> bool,
{
    /// Create an engine searching on behalf of `side`.
    pub fn new(side: S::Player, evaluate: E, no_more_time: T, deepen: D) -> Self {
        Self {
            side,
            evaluate,
            no_more_time,
            deepen,
            nodes: 0,
            evals: 0,
        }
    }

    /// Total nodes visited across all searches by this engine.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Total heuristic evaluations across all searches by this engine.
    pub fn evals(&self) -> u64 {
        self.evals
    }

    fn search_node(&mut self, state: &S, depth: u32, maximizing: bool) -> SearchResult<S::Move> {
        self.nodes += 1;

        if depth == 0 && !(self.deepen)(state) {
            self.evals += 1;
            return SearchResult {
                value: (self.evaluate)(state),
                best: None,
            };
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return SearchResult {
                value: outcome_value(state, self.side),
                best: None,
            };
        }

        let mut best: Option<(f64, S::Move)> = None;
        for mv in moves {
            if (self.no_more_time)() {
                break;
            }
            let child = state.apply(&mv);
            let value = self
                .search_node(&child, depth.saturating_sub(1), !maximizing)
                .value;
            let improves = match &best {
                None => true,
                Some((incumbent, _)) => {
                    if maximizing {
                        value > *incumbent
                    } else {
                        value < *incumbent
                    }
                }
            };
            if improves {
                best = Some((value, mv));
            }
        }

        match best {
            Some((value, mv)) => SearchResult {
                value,
                // Only nodes choosing for the searching side report a move
                best: if maximizing { Some(mv) } else { None },
            },
            None => SearchResult {
                value: if maximizing { -INFINITY } else { INFINITY },
                best: None,
            },
        }
    }
}

impl<S, E, T, D> SearchEngine<S> for MiniMax<S, E, T, D>
where
    S: GameState,
    E: Fn(&S) -> f64,
    T: Fn() -> bool,
    D: Fn(&S) -> bool,
{
    fn search(&mut self, state: &S, depth: u32, maximizing: bool) -> SearchResult<S::Move> {
        self.search_node(state, depth, maximizing)
    }
}
