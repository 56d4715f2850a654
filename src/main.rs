use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use macroquad::input::prevent_quit;
use macroquad::prelude::*;
use simplelog::{Config, WriteLogger};

mod food;
mod game;
mod grid;
mod input;
mod render;
mod settings;
mod snake;
mod theme;

use game::Game;
use input::FrameInput;
use render::Renderer;
use settings::{SETTINGS_FILE, Settings};

fn init_logging(settings: &Settings) -> Result<()> {
    let level = LevelFilter::from_str(&settings.log_level).unwrap_or(LevelFilter::Info);
    let file = File::create(&settings.log_file)
        .with_context(|| format!("creating log file {}", settings.log_file.display()))?;
    WriteLogger::init(level, Config::default(), file).context("installing logger")?;
    Ok(())
}

fn window_conf(settings: &Settings) -> Conf {
    Conf {
        window_title: settings.title.clone(),
        window_width: settings.board_width as i32,
        window_height: settings.board_width as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Sleeps off whatever is left of the frame budget.
fn pace_frame(frame_start: f64, frame_rate: u32) {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let budget = 1.0 / frame_rate as f64;
        let spent = get_time() - frame_start;
        if spent < budget {
            std::thread::sleep(std::time::Duration::from_secs_f64(budget - spent));
        }
    }
    #[cfg(target_arch = "wasm32")]
    let _ = (frame_start, frame_rate);
}

async fn run(settings: Settings) {
    prevent_quit();
    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let renderer = Renderer::new(&settings).await;
    let mut game = Game::new(settings.difficulty, settings.theme, settings.shape);

    loop {
        let now = get_time();
        let frame = FrameInput::poll();
        if frame.quit {
            info!("quit requested, best score this session: {}", game.high_score());
            break;
        }

        for command in input::map_commands(&frame, game.mode()) {
            game.apply(command, now);
        }
        game.update(now);
        renderer.draw(&game);

        pace_frame(now, settings.frame_rate);
        next_frame().await;
    }
}

fn main() -> Result<()> {
    let loaded = Settings::load(Path::new(SETTINGS_FILE));
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(&settings)?;
    info!("starting {}", settings.title);
    if let Err(e) = loaded {
        warn!("{e:#}; falling back to default settings");
    }

    let conf = window_conf(&settings);
    macroquad::Window::from_config(conf, run(settings));
    info!("shut down");
    Ok(())
}
