//! Depth-limited MiniMax search with alpha-beta pruning.

use verso_core::GameState;

use crate::search::{INFINITY, SearchEngine, SearchResult, outcome_value};

/// Alpha-beta engine: same value and move contract as
/// [`MiniMax`](crate::search::MiniMax), but prunes siblings that provably
/// cannot change the decision at the root.
///
/// For any tree explored without time pressure, the root value equals the
/// MiniMax value; only the amount of work differs.
pub struct AlphaBeta<S, E, T, D>
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

impl<S, E, T, D> AlphaBeta<S, E, T, D>
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

    fn search_node(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> SearchResult<S::Move> {
        self.nodes += 1;

        // Query moves once: the terminal test must come before the depth
        // test can be trusted, and the same list feeds the expansion loop.
        let moves = state.legal_moves();
        if moves.is_empty() {
            return SearchResult {
                value: outcome_value(state, self.side),
                best: None,
            };
        }

        if depth == 0 && !(self.deepen)(state) {
            self.evals += 1;
            return SearchResult {
                value: (self.evaluate)(state),
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
                .search_node(&child, depth.saturating_sub(1), alpha, beta, !maximizing)
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

            // The child's result narrows this node's own bound only; the
            // parent narrows its window after we return.
            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }

        match best {
            Some((value, mv)) => SearchResult {
                value,
                best: if maximizing { Some(mv) } else { None },
            },
            None => SearchResult {
                value: if maximizing { -INFINITY } else { INFINITY },
                best: None,
            },
        }
    }
}

impl<S, E, T, D> SearchEngine<S> for AlphaBeta<S, E, T, D>
where
    S: GameState,
    E: Fn(&S) -> f64,
    T: Fn() -> bool,
    D: Fn(&S) -> bool,
{
    fn search(&mut self, state: &S, depth: u32, maximizing: bool) -> SearchResult<S::Move> {
        self.search_node(state, depth, -INFINITY, INFINITY, maximizing)
    }
}
