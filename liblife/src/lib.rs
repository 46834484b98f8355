use board::{Board, CellState};
use pos::Position;
use rule::Rule;

pub mod board;
pub mod pos;
pub mod rule;
pub mod seed;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub rule: Rule,
}

impl Game {
    pub fn new(board: Board, rule: Rule) -> Self {
        Self { board, rule }
    }

    /// Advances the board by one generation. Every cell's next state is
    /// computed against the pre-tick board, and the whole generation is
    /// materialized into a fresh buffer before the board is replaced, so
    /// no cell ever observes a half-updated neighborhood.
    pub fn tick(&mut self) {
        let next_cells = self
            .board
            .enumerate_cells()
            .map(|(cell_pos, cell)| self.tick_cell(cell_pos, cell))
            .collect();

        self.board = Board::with_cells(self.board.width, self.board.height, next_cells);
    }

    fn tick_cell(&self, cell_pos: Position, cell: &CellState) -> CellState {
        let alive_neighbor_count = self.board.live_neighbor_count(cell_pos);

        let alive = match cell {
            CellState::Alive => self.rule.survive.contains(&alive_neighbor_count),
            CellState::Dead => self.rule.birth.contains(&alive_neighbor_count),
        };

        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}
