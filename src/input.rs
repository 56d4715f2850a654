use macroquad::input::{KeyCode, is_key_down, is_key_released, is_quit_requested};

use crate::game::{Command, Mode};
use crate::snake::Direction;

/// Keys that act on release rather than while held.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Confirm,
    Menu,
    Theme,
    Shape,
    Difficulty,
}

const RELEASE_BINDINGS: [(KeyCode, Key); 5] = [
    (KeyCode::Space, Key::Confirm),
    (KeyCode::M, Key::Menu),
    (KeyCode::T, Key::Theme),
    (KeyCode::S, Key::Shape),
    (KeyCode::D, Key::Difficulty),
];

/// Arrow keys in the order they win when several are held.
const STEER_BINDINGS: [(KeyCode, Direction); 4] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
];

/// Everything the loop needs from the keyboard for one frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub quit: bool,
    pub held: Option<Direction>,
    pub released: Vec<Key>,
}

impl FrameInput {
    pub fn poll() -> Self {
        let held = STEER_BINDINGS
            .iter()
            .find(|(code, _)| is_key_down(*code))
            .map(|(_, direction)| *direction);
        let released = RELEASE_BINDINGS
            .iter()
            .filter(|(code, _)| is_key_released(*code))
            .map(|(_, key)| *key)
            .collect();
        Self { quit: is_quit_requested(), held, released }
    }
}

pub fn map_commands(input: &FrameInput, mode: Mode) -> Vec<Command> {
    let mut commands = Vec::new();
    for key in &input.released {
        let command = match (key, mode) {
            (Key::Confirm, Mode::Menu | Mode::GameOver) => Command::Start,
            (Key::Menu, Mode::GameOver) => Command::ReturnToMenu,
            (Key::Theme, Mode::Menu | Mode::GameOver) => Command::CycleTheme,
            (Key::Shape, Mode::Menu | Mode::GameOver) => Command::CycleShape,
            (Key::Difficulty, Mode::Menu | Mode::GameOver) => Command::CycleDifficulty,
            _ => continue,
        };
        commands.push(command);
    }
    if let Some(direction) = input.held {
        commands.push(Command::Steer(direction));
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn released(keys: &[Key]) -> FrameInput {
        FrameInput { released: keys.to_vec(), ..Default::default() }
    }

    #[test]
    fn confirm_starts_from_menu_and_game_over() {
        let input = released(&[Key::Confirm]);
        assert_eq!(map_commands(&input, Mode::Menu), vec![Command::Start]);
        assert_eq!(map_commands(&input, Mode::GameOver), vec![Command::Start]);
        assert!(map_commands(&input, Mode::Playing).is_empty());
    }

    #[test]
    fn menu_key_only_after_game_over() {
        let input = released(&[Key::Menu]);
        assert_eq!(map_commands(&input, Mode::GameOver), vec![Command::ReturnToMenu]);
        assert!(map_commands(&input, Mode::Menu).is_empty());
        assert!(map_commands(&input, Mode::Playing).is_empty());
    }

    #[test]
    fn setting_keys_ignored_while_playing() {
        let input = released(&[Key::Theme, Key::Shape, Key::Difficulty]);
        assert_eq!(
            map_commands(&input, Mode::Menu),
            vec![Command::CycleTheme, Command::CycleShape, Command::CycleDifficulty]
        );
        assert!(map_commands(&input, Mode::Playing).is_empty());
    }

    #[test]
    fn held_direction_becomes_steer() {
        let input = FrameInput { held: Some(Direction::Up), ..Default::default() };
        assert_eq!(map_commands(&input, Mode::Playing), vec![Command::Steer(Direction::Up)]);
    }

    #[test]
    fn steer_bindings_follow_priority() {
        let order: Vec<Direction> = STEER_BINDINGS.iter().map(|(_, d)| *d).collect();
        assert_eq!(
            order,
            vec![Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
    }
}
