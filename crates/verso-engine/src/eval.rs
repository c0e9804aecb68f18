//! Heuristic evaluation of Reversi positions.

use verso_core::{Board, Color, GameState, Square, Winner};

use crate::search::INFINITY;

const CORNERS: [(u8, u8); 4] = [(0, 0), (0, 7), (7, 0), (7, 7)];

/// Score `board` for `side`.
///
/// Finished games score `±INFINITY`/0 by winner. Otherwise the score
/// blends disc parity, corner control, closeness to open corners, and
/// mobility:
///
/// `10·parity + 25·corners − 0.25·closeness_diff + 2·mobility`
///
/// Corner control dominates the blend; discs beside a still-open corner
/// count against their owner.
pub fn evaluate(board: &Board, side: Color) -> f64 {
    if board.mobility(board.side_to_move()) == 0 {
        return match board.winner() {
            Winner::Decided(winner) if winner == side => INFINITY,
            Winner::Decided(_) => -INFINITY,
            Winner::Tie => 0.0,
        };
    }

    let my_discs = board.count(side) as f64;
    let opp_discs = board.count(!side) as f64;
    if my_discs == 0.0 {
        return -INFINITY;
    }
    if opp_discs == 0.0 {
        return INFINITY;
    }

    let parity = signed_share(my_discs, opp_discs);
    let corners = corner_occupancy(board, side) - corner_occupancy(board, !side);
    let closeness = corner_closeness(board, side) - corner_closeness(board, !side);
    let mobility = signed_share(board.mobility(side) as f64, board.mobility(!side) as f64);

    10.0 * parity + 25.0 * corners - 0.25 * closeness + 2.0 * mobility
}

/// The searcher's share of a quantity, signed by who holds more of it.
fn signed_share(mine: f64, theirs: f64) -> f64 {
    if mine == theirs {
        0.0
    } else if mine < theirs {
        -mine / (mine + theirs)
    } else {
        mine / (mine + theirs)
    }
}

fn corner_occupancy(board: &Board, color: Color) -> f64 {
    CORNERS
        .iter()
        .filter(|&&(row, col)| board.disc_at(Square::new(row, col)) == Some(color))
        .count() as f64
}

/// Discs of `color` on the three squares flanking each still-open corner.
fn corner_closeness(board: &Board, color: Color) -> f64 {
    CORNERS
        .iter()
        .map(|&(row, col)| {
            let corner = Square::new(row, col);
            if board.disc_at(corner).is_some() {
                return 0;
            }
            let dr: i8 = if row == 0 { 1 } else { -1 };
            let dc: i8 = if col == 0 { 1 } else { -1 };
            [(dr, 0), (0, dc), (dr, dc)]
                .iter()
                .filter(|&&(a, b)| {
                    corner
                        .offset(a, b)
                        .is_some_and(|sq| board.disc_at(sq) == Some(color))
                })
                .count()
        })
        .sum::<usize>() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::starting_position();
        assert_eq!(evaluate(&board, Color::Dark), 0.0);
        assert_eq!(evaluate(&board, Color::Light), 0.0);
    }

    #[test]
    fn corner_holder_scores_higher() {
        let board: Board = "
            ........
            ........
            ........
            ...xo...
            ...ox...
            ........
            ........
            x.......
            x"
        .parse()
        .expect("diagram");
        assert!(evaluate(&board, Color::Dark) > 0.0);
        assert!(evaluate(&board, Color::Light) < 0.0);
    }

    #[test]
    fn squares_beside_an_open_corner_are_penalized() {
        let board: Board = "
            ........
            ........
            ........
            ...xo...
            ...ox...
            ........
            .x......
            ........
            x"
        .parse()
        .expect("diagram");
        let with_b2: f64 = evaluate(&board, Color::Dark);
        let without: Board = "
            ........
            ........
            ........
            ...xo...
            ...ox...
            .x......
            ........
            ........
            x"
        .parse()
        .expect("diagram");
        // Same material and no corners either way; only the closeness and
        // mobility terms move, and b2 must not come out ahead.
        assert!(with_b2 <= evaluate(&without, Color::Dark));
    }

    #[test]
    fn finished_game_scores_by_winner() {
        // Lone dark disc, light to move with nowhere to go
        let board: Board = "
            ........
            ........
            ........
            ........
            ........
            ........
            ........
            x.......
            o"
        .parse()
        .expect("diagram");
        assert_eq!(evaluate(&board, Color::Dark), INFINITY);
        assert_eq!(evaluate(&board, Color::Light), -INFINITY);
    }

    #[test]
    fn finished_tie_scores_zero() {
        let board: Board = "
            .......o
            ........
            ........
            ........
            ........
            ........
            ........
            x.......
            x"
        .parse()
        .expect("diagram");
        assert_eq!(evaluate(&board, Color::Dark), 0.0);
        assert_eq!(evaluate(&board, Color::Light), 0.0);
    }
}
