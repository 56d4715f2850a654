use crate::grid::Cell;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Displacement applied to the head on each movement tick.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The player's snake. Head is `body[0]`.
#[derive(Clone, Debug)]
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
}

impl Snake {
    pub fn new() -> Self {
        Self::with_body(
            vec![Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)],
            Direction::Right,
        )
    }

    pub fn with_body(body: Vec<Cell>, direction: Direction) -> Self {
        debug_assert!(!body.is_empty());
        Self { body, direction }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Every segment takes the previous position of the one ahead of it,
    /// then the head advances one cell.
    pub fn advance(&mut self) {
        // Walk tail to head so each read sees the not-yet-shifted neighbour.
        for i in (1..self.body.len()).rev() {
            self.body[i] = self.body[i - 1];
        }
        let (dx, dy) = self.direction.delta();
        self.body[0] = self.body[0].offset(dx, dy);
    }

    /// Rejects the turn when either delta component matches the current one.
    /// With four cardinal headings this only lets perpendicular turns through,
    /// so the snake can never fold back onto its neck.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let (cx, cy) = self.direction.delta();
        if dx == cx || dy == cy {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Duplicates the tail; the copy separates into a real segment on the next move.
    pub fn eat(&mut self) {
        let tail = self.body[self.body.len() - 1];
        self.body.push(tail);
    }

    pub fn is_collision(&self) -> bool {
        let head = self.head();
        !head.in_bounds() || self.body[1..].contains(&head)
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GRID;

    fn cells(points: &[(i32, i32)]) -> Vec<Cell> {
        points.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn starts_with_three_segments_heading_right() {
        let snake = Snake::new();
        assert_eq!(snake.body(), cells(&[(10, 10), (9, 10), (8, 10)]).as_slice());
        assert_eq!(snake.direction(), Direction::Right);
        assert!(!snake.is_collision());
    }

    #[test]
    fn move_then_eat_then_move() {
        let mut snake = Snake::with_body(cells(&[(5, 5), (4, 5), (3, 5)]), Direction::Right);

        snake.advance();
        assert_eq!(snake.body(), cells(&[(6, 5), (5, 5), (4, 5)]).as_slice());

        snake.eat();
        assert_eq!(snake.body(), cells(&[(6, 5), (5, 5), (4, 5), (4, 5)]).as_slice());

        snake.advance();
        assert_eq!(snake.body(), cells(&[(7, 5), (6, 5), (5, 5), (4, 5)]).as_slice());
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn growth_keeps_segment_order() {
        let mut snake = Snake::new();
        let before = snake.body().to_vec();
        snake.eat();
        snake.advance();
        assert_eq!(snake.len(), before.len() + 1);
        // everything behind the new head is the old body in order
        assert_eq!(&snake.body()[1..], before.as_slice());
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new();
        assert!(!snake.change_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        // same heading is a harmless no-op
        assert!(!snake.change_direction(Direction::Right));

        assert!(snake.change_direction(Direction::Down));
        assert_eq!(snake.direction(), Direction::Down);
        assert!(!snake.change_direction(Direction::Up));
        assert_eq!(snake.direction(), Direction::Down);
    }

    #[test]
    fn leaving_the_board_is_a_collision() {
        let mut snake = Snake::with_body(
            cells(&[(GRID - 1, 4), (GRID - 2, 4), (GRID - 3, 4)]),
            Direction::Right,
        );
        assert!(!snake.is_collision());
        snake.advance();
        assert!(snake.is_collision());

        let mut snake = Snake::with_body(cells(&[(4, 0), (4, 1), (4, 2)]), Direction::Up);
        snake.advance();
        assert_eq!(snake.head(), Cell::new(4, -1));
        assert!(snake.is_collision());
    }

    #[test]
    fn running_into_own_body_is_a_collision() {
        // head at (5,5) moving down into a loop of body
        let mut snake = Snake::with_body(
            cells(&[(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]),
            Direction::Down,
        );
        assert!(!snake.is_collision());
        snake.advance();
        assert_eq!(snake.head(), Cell::new(5, 6));
        assert!(snake.is_collision());
    }

    #[test]
    fn walking_the_board_stays_in_bounds_until_collision() {
        let mut snake = Snake::new();
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];
        for step in 0..200 {
            if step % 7 == 0 {
                snake.change_direction(turns[(step / 7) % turns.len()]);
            }
            snake.advance();
            if snake.is_collision() {
                break;
            }
            assert!(snake.body().iter().all(|c| c.in_bounds()));
        }
    }
}
