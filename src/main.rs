use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use verso_core::{Board, Color, GameState};
use verso_engine::{
    AlphaBeta, MiniMax, RoundBudget, SearchControl, best_move, evaluate, never_deepen,
};

/// Self-play demo: Alpha-Beta (Dark) against plain MiniMax (Light), each on
/// a small per-round time allowance.
fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    info!("verso starting");

    let mut board = Board::starting_position();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut budgets = [
        RoundBudget::new(Duration::from_secs(2), 5),
        RoundBudget::new(Duration::from_secs(2), 5),
    ];

    while !board.legal_moves().is_empty() {
        let side = board.side_to_move();
        let budget = budgets[side.index()].move_budget();
        let control = SearchControl::new_timed(Arc::new(AtomicBool::new(false)), budget);
        let started = Instant::now();

        let picked = match side {
            Color::Dark => {
                let mut engine = AlphaBeta::new(
                    side,
                    |b: &Board| evaluate(b, side),
                    || control.no_more_time(),
                    never_deepen,
                );
                best_move(&board, &mut engine, || control.no_more_time(), &mut rng)
            }
            Color::Light => {
                let mut engine = MiniMax::new(
                    side,
                    |b: &Board| evaluate(b, side),
                    || control.no_more_time(),
                    never_deepen,
                );
                best_move(&board, &mut engine, || control.no_more_time(), &mut rng)
            }
        };

        let Some(picked) = picked else { break };
        budgets[side.index()].record(started.elapsed());
        info!(%side, mv = %picked.mv, depth = picked.depth, "played");
        board = board.make_move(picked.mv);
    }

    let dark = board.count(Color::Dark);
    let light = board.count(Color::Light);
    info!(dark, light, winner = ?board.winner(), "game over");
    Ok(())
}
