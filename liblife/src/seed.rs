use itertools::Itertools;
use rand::Rng;

use super::board::{Board, CellState};
use super::pos::Position;

/// One-in-five cells start out alive.
const ALIVE_ODDS: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    pub name: &'static str,
    /// (row, col) offsets from the stamp origin.
    pub cells: &'static [[usize; 2]],
}

/// Pentadecathlon-like column. The lower flanker pair sits at row
/// offset 6 rather than 7, so unlike a true pentadecathlon this variant
/// does not oscillate with period 15.
pub const PENTA_DECATHLON: Pattern = Pattern {
    name: "penta-decathlon",
    cells: &[
        [0, 1],
        [1, 1],
        [2, 0],
        [2, 2],
        [3, 1],
        [4, 1],
        [5, 1],
        [6, 0],
        [6, 2],
        [7, 1],
        [8, 1],
        [9, 1],
    ],
};

pub const PULSAR: Pattern = Pattern {
    name: "pulsar",
    cells: &[
        [0, 2], [0, 3], [0, 4], [0, 8], [0, 9], [0, 10],
        [2, 0], [2, 5], [2, 7], [2, 12],
        [3, 0], [3, 5], [3, 7], [3, 12],
        [4, 0], [4, 5], [4, 7], [4, 12],
        [5, 2], [5, 3], [5, 4], [5, 8], [5, 9], [5, 10],
        [7, 2], [7, 3], [7, 4], [7, 8], [7, 9], [7, 10],
        [8, 0], [8, 5], [8, 7], [8, 12],
        [9, 0], [9, 5], [9, 7], [9, 12],
        [10, 0], [10, 5], [10, 7], [10, 12],
        [12, 2], [12, 3], [12, 4], [12, 8], [12, 9], [12, 10],
    ],
};

pub const MIDDLEWEIGHT_SPACESHIP: Pattern = Pattern {
    name: "middleweight spaceship",
    cells: &[
        [0, 1],
        [0, 2],
        [0, 3],
        [0, 4],
        [1, 0],
        [1, 4],
        [2, 4],
        [3, 0],
        [3, 3],
    ],
};

/// The fixed set of patterns stamped onto every starting board, with
/// their (row, col) origins.
pub const STARTING_PATTERNS: &[(Pattern, [usize; 2])] = &[
    (PENTA_DECATHLON, [10, 14]),
    (PULSAR, [5, 1]),
    (MIDDLEWEIGHT_SPACESHIP, [30, 9]),
];

/// Builds the initial board: a random fill followed by the fixed pattern
/// stamps. The caller supplies the RNG, so a fixed seed reproduces the
/// same board.
pub fn starting_board<R>(width: usize, height: usize, rng: &mut R) -> anyhow::Result<Board>
where
    R: Rng,
{
    let mut board = Board::new(width, height)?;

    randomize(&mut board, rng);

    for (pattern, origin) in STARTING_PATTERNS {
        stamp(&mut board, pattern, *origin);
    }

    Ok(board)
}

pub fn randomize<R>(board: &mut Board, rng: &mut R)
where
    R: Rng,
{
    let positions = (0..board.width)
        .cartesian_product(0..board.height)
        .map(|(x, y)| Position { x, y })
        .collect_vec();

    for pos in positions {
        if rng.random_range(0..ALIVE_ODDS) == 0 {
            // SAFETY: The cartesian product above only yields in-range positions.
            *board.cell_mut(pos).unwrap() = CellState::Alive;
        }
    }
}

/// Sets each of the pattern's listed cells alive at `origin` (row, col).
/// Only the listed cells are touched: unlisted cells inside the pattern's
/// bounding box keep whatever state the random fill left there, matching
/// the original program. Offsets falling off the board are skipped.
pub fn stamp(board: &mut Board, pattern: &Pattern, origin: [usize; 2]) {
    let [origin_row, origin_col] = origin;

    for [row, col] in pattern.cells {
        let pos = Position {
            x: origin_col + col,
            y: origin_row + row,
        };

        if let Some(cell) = board.cell_mut(pos) {
            *cell = CellState::Alive;
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn same_seed_same_board() {
        let board_a = starting_board(160, 120, &mut StdRng::seed_from_u64(42)).unwrap();
        let board_b = starting_board(160, 120, &mut StdRng::seed_from_u64(42)).unwrap();

        assert_eq!(board_a, board_b);
    }

    #[test]
    fn different_seeds_differ() {
        let board_a = starting_board(160, 120, &mut StdRng::seed_from_u64(1)).unwrap();
        let board_b = starting_board(160, 120, &mut StdRng::seed_from_u64(2)).unwrap();

        assert_ne!(board_a, board_b);
    }

    #[test]
    fn stamp_sets_only_listed_cells() {
        let mut board = Board::new(20, 20).unwrap();

        // Pre-fill the penta-decathlon's bounding box so we can tell
        // listed cells from untouched ones.
        *board.cell_mut([5, 7]).unwrap() = CellState::Alive;

        stamp(&mut board, &PENTA_DECATHLON, [5, 4]);

        for [row, col] in PENTA_DECATHLON.cells {
            let pos = [4 + col, 5 + row];
            assert_eq!(board.cell(pos), Some(&CellState::Alive));
        }

        // The pre-filled cell sits inside the bounding box but is not
        // listed, so it keeps its prior state; a cell that is neither
        // listed nor pre-filled stays dead.
        assert_eq!(board.cell([5, 7]), Some(&CellState::Alive));
        assert_eq!(board.cell([4, 6]), Some(&CellState::Dead));

        let alive_count = board
            .cells
            .iter()
            .filter(|cell| **cell == CellState::Alive)
            .count();
        assert_eq!(alive_count, PENTA_DECATHLON.cells.len() + 1);
    }

    #[test]
    fn stamp_skips_out_of_range_offsets() {
        let mut board = Board::new(10, 10).unwrap();

        stamp(&mut board, &PULSAR, [5, 5]);

        let alive_count = board
            .cells
            .iter()
            .filter(|cell| **cell == CellState::Alive)
            .count();

        let in_range = PULSAR
            .cells
            .iter()
            .filter(|[row, col]| 5 + row < 10 && 5 + col < 10)
            .count();

        assert_eq!(alive_count, in_range);
    }

    #[test]
    fn starting_patterns_fit_default_dimensions() {
        let mut board = Board::new(160, 120).unwrap();

        for (pattern, origin) in STARTING_PATTERNS {
            for [row, col] in pattern.cells {
                let pos = [origin[1] + col, origin[0] + row];
                assert!(
                    board.cell(pos).is_some(),
                    "{} cell {:?} off the board",
                    pattern.name,
                    pos,
                );
            }
            stamp(&mut board, pattern, *origin);
        }
    }
}
