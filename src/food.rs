use macroquad::rand::gen_range;

use crate::grid::{Cell, GRID, PLAY_TOP_ROW};

/// Off-board position held until the food is first placed.
pub const UNPLACED: Cell = Cell::new(1000, 1000);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pos: Cell,
}

impl Food {
    pub fn new() -> Self {
        Self { pos: UNPLACED }
    }

    #[cfg(test)]
    pub fn at(pos: Cell) -> Self {
        Self { pos }
    }

    pub fn pos(&self) -> Cell {
        self.pos
    }

    pub fn is_placed(&self) -> bool {
        self.pos.in_bounds()
    }

    /// Jumps to a uniformly random cell below the header band.
    /// Does not look at the snake; callers resample if it lands on one.
    pub fn place_random(&mut self) {
        self.pos = Cell::new(gen_range(0, GRID), gen_range(PLAY_TOP_ROW, GRID));
    }

    pub fn place_at(&mut self, pos: Cell) {
        self.pos = pos;
    }

    pub fn unplace(&mut self) {
        self.pos = UNPLACED;
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new()
    }
}
