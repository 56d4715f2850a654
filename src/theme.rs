use macroquad::prelude::Color;
use serde::{Deserialize, Serialize};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
}

pub const BROWN: Color = rgb(130, 90, 44);
pub const MAUVE: Color = rgb(118, 96, 138);
pub const GREEN: Color = rgb(46, 204, 113);
pub const PINK: Color = rgb(233, 30, 99);
pub const YELLOW: Color = rgb(241, 196, 15);
pub const VIOLET: Color = rgb(156, 39, 176);
pub const CYAN: Color = rgb(27, 161, 226);
pub const RED: Color = rgb(229, 20, 0);
pub const TEAL: Color = rgb(0, 150, 136);
pub const ORANGE: Color = rgb(230, 126, 34);
pub const GREY: Color = rgb(190, 190, 190);

/// Background and snake body colors, cycled together from the menu.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Brown,
    Mauve,
    Teal,
}

impl Theme {
    const ALL: [Theme; 3] = [Theme::Brown, Theme::Mauve, Theme::Teal];

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn background(self) -> Color {
        match self {
            Theme::Brown => BROWN,
            Theme::Mauve => MAUVE,
            Theme::Teal => TEAL,
        }
    }

    pub fn snake_color(self) -> Color {
        match self {
            Theme::Brown => CYAN,
            Theme::Mauve => GREEN,
            Theme::Teal => VIOLET,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Circle,
    Square,
}

impl Shape {
    pub fn next(self) -> Self {
        match self {
            Shape::Circle => Shape::Square,
            Shape::Square => Shape::Circle,
        }
    }
}
