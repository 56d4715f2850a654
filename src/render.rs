use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use macroquad::prelude::*;

use crate::game::{Game, Mode};
use crate::grid::{Board, Cell};
use crate::settings::Settings;
use crate::theme::{GREY, MAUVE, ORANGE, PINK, RED, Shape, YELLOW};

const SPRITE_SIZE: u16 = 16;
const MARGIN: f32 = 10.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HAnchor {
    Left,
    Center,
    Right,
    At(f32),
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum VAnchor {
    Top(f32),
    Center,
}

/// Left edge for text `text_width` wide on a board `board_width` wide.
fn resolve_x(anchor: HAnchor, text_width: f32, board_width: f32) -> f32 {
    match anchor {
        HAnchor::Left => MARGIN,
        HAnchor::Center => board_width / 2.0 - text_width / 2.0,
        HAnchor::Right => board_width - text_width - MARGIN,
        HAnchor::At(x) => x,
    }
}

/// Top edge for text `text_height` tall.
fn resolve_y(anchor: VAnchor, text_height: f32, board_width: f32) -> f32 {
    match anchor {
        VAnchor::Top(y) => y,
        VAnchor::Center => board_width / 2.0 - text_height / 2.0,
    }
}

/// Pixel-art apple, drawn into an image so no asset files are needed.
fn apple_image() -> Image {
    let size = SPRITE_SIZE as u32;
    let mut image = Image::gen_image_color(SPRITE_SIZE, SPRITE_SIZE, Color::new(0.0, 0.0, 0.0, 0.0));
    let (cx, cy, r) = (7.5_f32, 9.0_f32, 6.5_f32);
    for y in 0..size {
        for x in 0..size {
            let (dx, dy) = (x as f32 - cx, y as f32 - cy);
            if dx * dx + dy * dy <= r * r {
                image.set_pixel(x, y, RED);
            }
        }
    }
    // highlight
    image.set_pixel(5, 7, Color::new(1.0, 0.55, 0.5, 1.0));
    image.set_pixel(5, 8, Color::new(1.0, 0.55, 0.5, 1.0));
    // stem and leaf
    for y in 0..3 {
        image.set_pixel(8, y, Color::new(0.4, 0.25, 0.1, 1.0));
    }
    for x in 9..12 {
        image.set_pixel(x, 1, Color::new(0.2, 0.7, 0.2, 1.0));
    }
    image
}

async fn load_font(settings: &Settings) -> Result<Option<Font>> {
    let Some(path) = &settings.font else {
        return Ok(None);
    };
    let path_str = path
        .to_str()
        .with_context(|| format!("font path {} is not valid UTF-8", path.display()))?;
    let font = load_ttf_font(path_str)
        .await
        .map_err(|e| anyhow!("{e:?}"))
        .with_context(|| format!("loading font {}", path.display()))?;
    Ok(Some(font))
}

pub struct Renderer {
    board: Board,
    title: String,
    font: Option<Font>,
    apple: Texture2D,
}

impl Renderer {
    pub async fn new(settings: &Settings) -> Self {
        let font = match load_font(settings).await {
            Ok(font) => font,
            Err(e) => {
                warn!("{e:#}; using the built-in font");
                None
            }
        };
        if font.is_some() {
            info!("loaded custom font");
        }
        let apple = Texture2D::from_image(&apple_image());
        apple.set_filter(FilterMode::Nearest);
        Self {
            board: Board::new(settings.board_width),
            title: settings.title.clone(),
            font,
            apple,
        }
    }

    pub fn draw(&self, game: &Game) {
        match game.mode() {
            Mode::Menu => self.draw_menu(game),
            Mode::Playing => self.draw_playing(game),
            Mode::GameOver => self.draw_game_over(game),
        }
    }

    fn write(&self, text: &str, size: u16, x: HAnchor, y: VAnchor, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), size, 1.0);
        let w = self.board.width();
        let left = resolve_x(x, dims.width, w);
        let top = resolve_y(y, dims.height, w);
        let params = TextParams {
            font: self.font.as_ref(),
            font_size: size,
            color,
            ..Default::default()
        };
        // draw_text_ex positions by baseline
        draw_text_ex(text, left, top + dims.offset_y, params);
    }

    fn draw_menu(&self, game: &Game) {
        let w = self.board.width();
        let mid = w / 2.0;
        clear_background(MAUVE);

        self.write(&self.title, 72, HAnchor::Center, VAnchor::Top(12.0), PINK);
        self.write(&self.title, 70, HAnchor::Center, VAnchor::Top(10.0), YELLOW);

        self.write("Difficulty", 30, HAnchor::Center, VAnchor::Top(150.0), YELLOW);
        draw_rectangle(mid - 50.0, 200.0, 100.0, 30.0, PINK);
        let selector = format!("<<  {}  >>", game.difficulty().label());
        self.write(&selector, 25, HAnchor::Center, VAnchor::Top(203.0), WHITE);

        let theme = game.theme();
        self.write("Theme", 25, HAnchor::At(mid - 195.0), VAnchor::Top(150.0), YELLOW);
        draw_rectangle(mid - 205.0, 180.0, 100.0, 85.0, WHITE);
        draw_rectangle(mid - 200.0, 185.0, 90.0, 50.0, theme.background());
        draw_rectangle(mid - 200.0, 235.0, 90.0, 25.0, theme.snake_color());

        self.write("Shape", 25, HAnchor::At(mid + 120.0), VAnchor::Top(150.0), YELLOW);
        let shape_box = Rect::new(mid + 125.0, 180.0, 60.0, 60.0);
        match game.shape() {
            Shape::Circle => {
                let c = shape_box.center();
                draw_circle(c.x, c.y, 35.0, WHITE);
                draw_circle(c.x, c.y, 30.0, YELLOW);
            }
            Shape::Square => {
                let b = shape_box;
                draw_rectangle(b.x, b.y, b.w, b.h, WHITE);
                draw_rectangle(b.x + 5.0, b.y + 5.0, b.w - 10.0, b.h - 10.0, YELLOW);
            }
        }

        self.write("press [ SPACE ] to start", 30, HAnchor::Center, VAnchor::Top(mid + 100.0), WHITE);
        self.write(
            "[T]-Theme   |   [D]-Difficulty   |   [S]-Shape",
            20,
            HAnchor::Center,
            VAnchor::Top(w - 40.0),
            WHITE,
        );
    }

    fn draw_game_over(&self, game: &Game) {
        let w = self.board.width();
        let mid = w / 2.0;
        clear_background(RED);

        self.write("Gameover!", 72, HAnchor::Center, VAnchor::Top(22.0), GREY);
        self.write("Gameover!", 70, HAnchor::Center, VAnchor::Top(20.0), WHITE);

        draw_rectangle(mid - 120.0, mid - 130.0, 240.0, 30.0, WHITE);
        self.write("Scoreboard", 30, HAnchor::Center, VAnchor::Top(mid - 126.0), ORANGE);
        draw_rectangle_lines(mid - 120.0, mid - 100.0, 240.0, 110.0, 5.0, WHITE);
        let score = format!("Score: {}", game.score());
        self.write(&score, 40, HAnchor::Center, VAnchor::Top(mid - 85.0), YELLOW);
        let best = format!("Highscore: {}", game.high_score());
        self.write(&best, 35, HAnchor::Center, VAnchor::Top(mid - 40.0), YELLOW);

        self.write("press [ SPACE ] to play again...", 30, HAnchor::Center, VAnchor::Top(mid + 50.0), WHITE);
        self.write("[M]-Main Menu", 30, HAnchor::Center, VAnchor::Top(w - 50.0), WHITE);
    }

    fn draw_playing(&self, game: &Game) {
        let theme = game.theme();
        clear_background(theme.background());

        // tail first so the head ends up on top
        let body = game.snake().body();
        for (i, cell) in body.iter().enumerate().rev() {
            let color = if i == 0 { YELLOW } else { theme.snake_color() };
            self.draw_segment(*cell, game.shape(), color);
        }

        let food = game.food();
        if food.is_placed() {
            let rect = self.board.cell_to_rect(food.pos());
            let params = DrawTextureParams {
                dest_size: Some(vec2(rect.w, rect.h)),
                ..Default::default()
            };
            draw_texture_ex(&self.apple, rect.x, rect.y, WHITE, params);
        }

        let score = format!("Score: {}", game.score());
        self.write(&score, 30, HAnchor::Left, VAnchor::Top(10.0), WHITE);
        let best = format!("Best: {}", game.high_score());
        self.write(&best, 30, HAnchor::Right, VAnchor::Top(10.0), WHITE);
        let mode = game.difficulty().label().to_uppercase();
        self.write(&mode, 18, HAnchor::Center, VAnchor::Top(16.0), WHITE);
    }

    fn draw_segment(&self, cell: Cell, shape: Shape, color: Color) {
        let rect = self.board.cell_to_rect(cell);
        match shape {
            Shape::Circle => {
                let c = rect.center();
                draw_circle(c.x, c.y, rect.w / 2.0, color);
            }
            Shape::Square => draw_rectangle(rect.x, rect.y, rect.w, rect.h, color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_anchors() {
        assert_eq!(resolve_x(HAnchor::Left, 80.0, 500.0), 10.0);
        assert_eq!(resolve_x(HAnchor::Center, 80.0, 500.0), 210.0);
        assert_eq!(resolve_x(HAnchor::Right, 80.0, 500.0), 410.0);
        assert_eq!(resolve_x(HAnchor::At(55.0), 80.0, 500.0), 55.0);
    }

    #[test]
    fn vertical_anchors() {
        assert_eq!(resolve_y(VAnchor::Top(42.0), 30.0, 500.0), 42.0);
        assert_eq!(resolve_y(VAnchor::Center, 30.0, 500.0), 235.0);
    }

    #[test]
    fn apple_sprite_is_red_on_transparent() {
        let image = apple_image();
        assert_eq!(image.width(), SPRITE_SIZE as usize);
        let center = image.get_pixel(8, 9);
        assert!(center.r > 0.8 && center.g < 0.2 && center.a == 1.0);
        assert_eq!(image.get_pixel(0, 15).a, 0.0);
    }
}
