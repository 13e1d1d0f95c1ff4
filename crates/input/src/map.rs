//! Key mapping from terminal events to game commands.

use crate::types::{Command, Orientation};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game commands.
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(Command::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(Command::MoveRight)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(Command::SoftDrop)
        }

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('z')
        | KeyCode::Char('Z') => Some(Command::RotateLeft),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(Command::RotateRight),

        KeyCode::Char(' ') => Some(Command::HardDrop),

        _ => None,
    }
}

/// Map the digit row to a simulated device orientation ("tilt").
///
/// `1`..`4` select up, left, down and right.
pub fn orientation_for_key(key: KeyEvent) -> Option<Orientation> {
    match key.code {
        KeyCode::Char('1') => Some(Orientation::Up),
        KeyCode::Char('2') => Some(Orientation::Left),
        KeyCode::Char('3') => Some(Orientation::Down),
        KeyCode::Char('4') => Some(Orientation::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
