use macroquad::prelude::Rect;

/// Number of cells along each side of the square board.
pub const GRID: i32 = 20;

/// First row food may appear on; rows above it hold the score header.
pub const PLAY_TOP_ROW: i32 = 3;

pub const DEFAULT_BOARD_WIDTH: u32 = 500;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn in_bounds(self) -> bool {
        (0..GRID).contains(&self.x) && (0..GRID).contains(&self.y)
    }
}

/// Pixel geometry of the square board. All game logic works in cells;
/// this is only consulted when drawing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Board {
    width: f32,
}

impl Board {
    pub fn new(width: u32) -> Self {
        Self { width: width as f32 }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cell_size(&self) -> f32 {
        self.width / GRID as f32
    }

    pub fn cell_to_rect(&self, cell: Cell) -> Rect {
        let size = self.cell_size();
        Rect::new(cell.x as f32 * size, cell.y as f32 * size, size, size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_cover_exactly_the_board() {
        assert!(Cell::new(0, 0).in_bounds());
        assert!(Cell::new(GRID - 1, GRID - 1).in_bounds());
        assert!(!Cell::new(-1, 5).in_bounds());
        assert!(!Cell::new(5, -1).in_bounds());
        assert!(!Cell::new(GRID, 5).in_bounds());
        assert!(!Cell::new(5, GRID).in_bounds());
    }

    #[test]
    fn cell_maps_to_its_pixel_square() {
        let board = Board::default();
        assert_eq!(board.cell_size(), 25.0);

        let rect = board.cell_to_rect(Cell::new(3, 4));
        assert_eq!(rect, Rect::new(75.0, 100.0, 25.0, 25.0));
        // pure: same input, same output
        assert_eq!(rect, board.cell_to_rect(Cell::new(3, 4)));
    }

    #[test]
    fn offset_moves_by_delta() {
        assert_eq!(Cell::new(5, 5).offset(1, 0), Cell::new(6, 5));
        assert_eq!(Cell::new(0, 0).offset(0, -1), Cell::new(0, -1));
    }
}
