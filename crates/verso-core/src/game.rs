//! The capability surface a game exposes to a search engine.

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner<P> {
    /// One side won.
    Decided(P),
    /// Neither side won.
    Tie,
}

/// A two-player, zero-sum, perfect-information game position.
///
/// Search engines consume positions exclusively through this trait. The
/// contract is clone-on-expand: [`apply`](GameState::apply) never mutates
/// the receiver, so sibling branches of a search tree never observe each
/// other's work and no synchronization is needed within a search.
pub trait GameState: Clone {
    /// A legal transition out of a position. Identity is defined by the
    /// game, not by the engine.
    type Move: Clone;

    /// A side in the game.
    type Player: Copy + Eq;

    /// All legal moves for the side to move. An empty list means the
    /// position is terminal.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// The position reached by playing `mv`, as a fresh value.
    ///
    /// Callers only pass moves obtained from [`legal_moves`](GameState::legal_moves)
    /// on the same position.
    fn apply(&self, mv: &Self::Move) -> Self;

    /// The outcome of the game. Only meaningful on terminal positions.
    fn winner(&self) -> Winner<Self::Player>;
}
