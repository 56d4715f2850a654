use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::food::Food;
use crate::grid::{Cell, GRID, PLAY_TOP_ROW};
use crate::snake::{Direction, Snake};
use crate::theme::{Shape, Theme};

/// Random draws before falling back to scanning for a free cell.
const MAX_FOOD_DRAWS: usize = (GRID * GRID * 4) as usize;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Menu,
    Playing,
    GameOver,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Seconds between snake moves.
    pub fn move_interval(self) -> f64 {
        match self {
            Difficulty::Easy => 0.200,
            Difficulty::Normal => 0.150,
            Difficulty::Hard => 0.100,
        }
    }

    /// Seconds an uneaten food item stays put before jumping elsewhere.
    pub fn respawn_interval(self) -> f64 {
        match self {
            Difficulty::Easy => 8.0,
            Difficulty::Normal => 6.0,
            Difficulty::Hard => 4.0,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Normal,
            Difficulty::Normal => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Start,
    ReturnToMenu,
    CycleTheme,
    CycleShape,
    CycleDifficulty,
}

pub struct Game {
    mode: Mode,
    difficulty: Difficulty,
    theme: Theme,
    shape: Shape,
    score: u32,
    high_score: u32,
    snake: Snake,
    food: Food,
    snake_clock: f64,
    food_clock: f64,
}

impl Game {
    pub fn new(difficulty: Difficulty, theme: Theme, shape: Shape) -> Self {
        Self {
            mode: Mode::Menu,
            difficulty,
            theme,
            shape,
            score: 0,
            high_score: 0,
            snake: Snake::new(),
            food: Food::new(),
            snake_clock: 0.0,
            food_clock: 0.0,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Applies one player command. Commands that make no sense in the
    /// current mode are dropped.
    pub fn apply(&mut self, command: Command, now: f64) {
        match (command, self.mode) {
            (Command::Steer(direction), Mode::Playing) => {
                self.snake.change_direction(direction);
            }
            (Command::Start, Mode::Menu | Mode::GameOver) => self.start(now),
            (Command::ReturnToMenu, Mode::GameOver) => {
                info!("back to menu");
                self.mode = Mode::Menu;
            }
            (Command::CycleTheme, Mode::Menu | Mode::GameOver) => {
                self.theme = self.theme.next();
                debug!("theme -> {:?}", self.theme);
            }
            (Command::CycleShape, Mode::Menu | Mode::GameOver) => {
                self.shape = self.shape.next();
                debug!("shape -> {:?}", self.shape);
            }
            (Command::CycleDifficulty, Mode::Menu | Mode::GameOver) => {
                self.difficulty = self.difficulty.next();
                info!("difficulty -> {}", self.difficulty.label());
            }
            _ => {}
        }
    }

    /// Fresh snake and food, zeroed score. The first food goes down straight
    /// away; the first move waits one full movement interval.
    fn start(&mut self, now: f64) {
        info!("new game on {}", self.difficulty.label());
        self.snake = Snake::new();
        self.food = Food::new();
        self.score = 0;
        self.snake_clock = now;
        self.food_clock = now;
        self.relocate_food();
        self.mode = Mode::Playing;
    }

    /// Advances the simulation to `now` (seconds on a monotonic clock).
    /// Called once per rendered frame; the snake and food only change when
    /// their own interval has elapsed.
    pub fn update(&mut self, now: f64) {
        if self.mode != Mode::Playing {
            return;
        }

        if now - self.snake_clock > self.difficulty.move_interval() {
            self.snake.advance();
            self.snake_clock = now;
        }

        if now - self.food_clock > self.difficulty.respawn_interval() {
            self.food_clock = now;
            self.relocate_food();
        }

        if self.snake.head() == self.food.pos() {
            self.score += 1;
            if self.score >= self.high_score {
                self.high_score = self.score;
            }
            debug!("ate food at {:?}, score {}", self.food.pos(), self.score);
            self.snake.eat();
            self.food_clock = now;
            self.relocate_food();
        }

        if self.snake.is_collision() {
            info!(
                "game over: score {} (best {}), length {}",
                self.score,
                self.high_score,
                self.snake.len()
            );
            self.mode = Mode::GameOver;
        }
    }

    fn relocate_food(&mut self) {
        for _ in 0..MAX_FOOD_DRAWS {
            self.food.place_random();
            if !self.snake.occupies(self.food.pos()) {
                return;
            }
        }

        let free = (PLAY_TOP_ROW..GRID)
            .flat_map(|y| (0..GRID).map(move |x| Cell::new(x, y)))
            .find(|cell| !self.snake.occupies(*cell));
        match free {
            Some(cell) => self.food.place_at(cell),
            None => {
                warn!("no free cell left for food");
                self.food.unplace();
            }
        }
    }
}
