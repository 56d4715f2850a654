use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::game::Difficulty;
use crate::grid::DEFAULT_BOARD_WIDTH;
use crate::theme::{Shape, Theme};

pub const SETTINGS_FILE: &str = "little_snake.json";

/// Startup options. Read once, never written back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub title: String,
    pub board_width: u32,
    pub frame_rate: u32,
    pub difficulty: Difficulty,
    pub theme: Theme,
    pub shape: Shape,
    pub font: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Little Snake".to_string(),
            board_width: DEFAULT_BOARD_WIDTH,
            frame_rate: 60,
            difficulty: Difficulty::default(),
            theme: Theme::default(),
            shape: Shape::default(),
            font: None,
            log_file: PathBuf::from("little_snake.log"),
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Missing file means defaults; a file that exists but can't be read or
    /// parsed is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings.clamped())
    }

    fn clamped(mut self) -> Self {
        self.board_width = self.board_width.clamp(200, 1200);
        self.frame_rate = self.frame_rate.clamp(1, 240);
        self
    }
}
