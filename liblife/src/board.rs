use anyhow::ensure;

use super::pos::Position;

/// Fixed-size 2D cell field backed by a flat row-major buffer.
/// Dimensions never change after construction and every in-range
/// coordinate always holds a defined state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<CellState>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> anyhow::Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "Board dimensions must be positive (got {width}x{height})"
        );

        let cells = vec![CellState::default(); width * height];
        Ok(Self::with_cells(width, height, cells))
    }

    pub fn with_cells(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn cell<P>(&self, pos: P) -> Option<&CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index)
    }

    pub fn cell_mut<P>(&mut self, pos: P) -> Option<&mut CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, &CellState)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    /// Counts alive cells among the up-to-8 neighbors of `pos`. Offsets
    /// falling outside the board are skipped: the edges are hard, not
    /// wrap-around.
    pub fn live_neighbor_count<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        fn abs_pos(center_pos: usize, offset_pos: isize) -> Option<usize> {
            let abs_pos = center_pos as isize + offset_pos;

            if abs_pos < 0 {
                None
            } else {
                Some(abs_pos as usize)
            }
        }

        let center: Position = pos.into();

        NEIGHBOR_RELATIVE_POSITIONS
            .iter()
            .filter_map(|rel_pos| {
                let pos = Position {
                    x: abs_pos(center.x, rel_pos[0])?,
                    y: abs_pos(center.y, rel_pos[1])?,
                };

                self.cell(pos)
            })
            .filter(|neighbor| **neighbor == CellState::Alive)
            .count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { x, y } = pos.into();

        if x >= self.width {
            return None;
        }

        if y >= self.height {
            return None;
        }

        Some(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}
