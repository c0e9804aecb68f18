//! The Reversi board: disc placement, move generation, and game end.

use crate::color::Color;
use crate::game::{GameState, Winner};
use crate::square::Square;

/// The eight ray directions a placement can capture along.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Complete Reversi position state.
///
/// A plain value type: making a move produces a new board, the original is
/// untouched. The game ends as soon as the side to move has no legal
/// placement; the side with more discs wins.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Disc on each square, indexed by [`Square::index()`].
    cells: [Option<Color>; Square::COUNT],
    /// Which side places the next disc.
    turn: Color,
}

impl Board {
    /// Return the standard starting position: four center discs, Dark to move.
    pub fn starting_position() -> Board {
        let mut cells = [None; Square::COUNT];
        cells[Square::new(3, 3).index()] = Some(Color::Light);
        cells[Square::new(3, 4).index()] = Some(Color::Dark);
        cells[Square::new(4, 3).index()] = Some(Color::Dark);
        cells[Square::new(4, 4).index()] = Some(Color::Light);
        Board {
            cells,
            turn: Color::Dark,
        }
    }

    /// Construct a board from raw components. Used by diagram parsing.
    pub(crate) fn from_raw(cells: [Option<Color>; Square::COUNT], turn: Color) -> Board {
        Board { cells, turn }
    }

    /// Return the disc on the given square, if any.
    #[inline]
    pub fn disc_at(&self, sq: Square) -> Option<Color> {
        self.cells[sq.index()]
    }

    /// Which side places the next disc.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.turn
    }

    /// Number of discs of the given color on the board.
    pub fn count(&self, color: Color) -> u32 {
        self.cells.iter().filter(|c| **c == Some(color)).count() as u32
    }

    /// Number of discs captured along one ray if `color` played `sq`.
    ///
    /// A capture requires an unbroken run of opposing discs terminated by a
    /// disc of `color`; anything else (edge, empty square) captures nothing.
    fn captured_along(&self, sq: Square, color: Color, dr: i8, dc: i8) -> usize {
        let mut run = 0;
        let mut cursor = sq;
        while let Some(next) = cursor.offset(dr, dc) {
            match self.disc_at(next) {
                Some(disc) if disc == color.flip() => run += 1,
                Some(_) => return run,
                None => return 0,
            }
            cursor = next;
        }
        // Ran off the board without closing the run
        0
    }

    /// Whether `color` may place a disc on `sq`.
    pub fn is_legal(&self, sq: Square, color: Color) -> bool {
        self.disc_at(sq).is_none()
            && DIRECTIONS
                .iter()
                .any(|&(dr, dc)| self.captured_along(sq, color, dr, dc) > 0)
    }

    /// All legal placements for `color`, in square index order.
    pub fn moves_for(&self, color: Color) -> Vec<Square> {
        Square::all()
            .filter(|&sq| self.is_legal(sq, color))
            .collect()
    }

    /// Number of legal placements available to `color`.
    ///
    /// Defined for either side regardless of whose turn it is.
    pub fn mobility(&self, color: Color) -> usize {
        Square::all().filter(|&sq| self.is_legal(sq, color)).count()
    }

    /// Play a disc for the side to move and return the resulting position.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the placement is legal; an illegal placement
    /// indicates a caller bug, not a runtime condition.
    pub fn make_move(&self, sq: Square) -> Board {
        debug_assert!(
            self.is_legal(sq, self.turn),
            "illegal placement {sq} for {}",
            self.turn
        );

        let mut next = *self;
        next.cells[sq.index()] = Some(self.turn);
        for &(dr, dc) in &DIRECTIONS {
            let run = self.captured_along(sq, self.turn, dr, dc);
            let mut cursor = sq;
            for _ in 0..run {
                // offset stays on the board for the length of the counted run
                cursor = match cursor.offset(dr, dc) {
                    Some(next_sq) => next_sq,
                    None => break,
                };
                next.cells[cursor.index()] = Some(self.turn);
            }
        }
        next.turn = self.turn.flip();
        next
    }
}

impl GameState for Board {
    type Move = Square;
    type Player = Color;

    fn legal_moves(&self) -> Vec<Square> {
        self.moves_for(self.turn)
    }

    fn apply(&self, mv: &Square) -> Board {
        self.make_move(*mv)
    }

    fn winner(&self) -> Winner<Color> {
        let dark = self.count(Color::Dark);
        let light = self.count(Color::Light);
        if dark > light {
            Winner::Decided(Color::Dark)
        } else if light > dark {
            Winner::Decided(Color::Light)
        } else {
            Winner::Tie
        }
    }
}
