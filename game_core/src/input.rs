//! Input model: game modes, key bindings and paddle actions
//!
//! Input handlers only flip key-held state or store a pointer target here;
//! the frame step is what moves paddles.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::components::Side;

/// Who drives the left paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Opponent {
    /// Reactive AI tracking the ball
    Computer,
    /// Second player on the keyboard
    Human,
}

/// How the right (player) paddle is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Paddle follows the pointer
    Pointer,
    /// Paddle steps while keys are held
    Keys,
}

/// Session variant, selected once at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    pub opponent: Opponent,
    pub input: InputMode,
}

impl GameMode {
    /// Player on the keyboard against the computer
    pub fn single_player() -> Self {
        Self {
            opponent: Opponent::Computer,
            input: InputMode::Keys,
        }
    }

    /// Player on the mouse against the computer
    pub fn mouse() -> Self {
        Self {
            opponent: Opponent::Computer,
            input: InputMode::Pointer,
        }
    }

    /// Two players sharing a keyboard
    pub fn multiplayer() -> Self {
        Self {
            opponent: Opponent::Human,
            input: InputMode::Keys,
        }
    }

    /// Parse the mode names used by the web page
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "single" | "single_player" => Some(Self::single_player()),
            "mouse" => Some(Self::mouse()),
            "multi" | "multiplayer" => Some(Self::multiplayer()),
            _ => None,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        Self::mouse()
    }
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    W,
    S,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "w" | "W" => Some(Key::W),
            "s" | "S" => Some(Key::S),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MoveUp,
    MoveDown,
}

impl Direction {
    /// Sign of the y step (screen y grows downward)
    pub fn sign(self) -> f32 {
        match self {
            Direction::MoveUp => -1.0,
            Direction::MoveDown => 1.0,
        }
    }
}

/// What a held key does to which paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleAction {
    pub side: Side,
    pub dir: Direction,
}

#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub held: bool,
    pub action: PaddleAction,
}

/// Key → action mapping with held state.
///
/// Ordered so held keys are applied in a stable order each frame.
#[derive(Debug, Clone, Default)]
pub struct KeyBindings {
    bindings: BTreeMap<Key, KeyBinding>,
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_mode(mode: GameMode) -> Self {
        let mut keys = Self::new();
        match (mode.opponent, mode.input) {
            (Opponent::Human, _) => {
                keys.bind(Key::W, Side::Left, Direction::MoveUp);
                keys.bind(Key::S, Side::Left, Direction::MoveDown);
                keys.bind(Key::ArrowUp, Side::Right, Direction::MoveUp);
                keys.bind(Key::ArrowDown, Side::Right, Direction::MoveDown);
            }
            (Opponent::Computer, InputMode::Keys) => {
                keys.bind(Key::W, Side::Right, Direction::MoveUp);
                keys.bind(Key::S, Side::Right, Direction::MoveDown);
                keys.bind(Key::ArrowUp, Side::Right, Direction::MoveUp);
                keys.bind(Key::ArrowDown, Side::Right, Direction::MoveDown);
            }
            (Opponent::Computer, InputMode::Pointer) => {}
        }
        keys
    }

    pub fn bind(&mut self, key: Key, side: Side, dir: Direction) {
        self.bindings.insert(
            key,
            KeyBinding {
                held: false,
                action: PaddleAction { side, dir },
            },
        );
    }

    /// Update held state. Returns false for unbound keys.
    pub fn set_held(&mut self, key: Key, held: bool) -> bool {
        match self.bindings.get_mut(&key) {
            Some(binding) => {
                binding.held = held;
                true
            }
            None => false,
        }
    }

    pub fn release_all(&mut self) {
        for binding in self.bindings.values_mut() {
            binding.held = false;
        }
    }

    /// Actions of every currently held key
    pub fn held_actions(&self) -> impl Iterator<Item = PaddleAction> + '_ {
        self.bindings
            .values()
            .filter(|b| b.held)
            .map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("ArrowUp"), Some(Key::ArrowUp));
        assert_eq!(Key::from_dom("S"), Some(Key::S));
        assert_eq!(Key::from_dom("w"), Some(Key::W));
        assert_eq!(Key::from_dom("Enter"), None);
    }

    #[test]
    fn test_multiplayer_bindings() {
        let mut keys = KeyBindings::for_mode(GameMode::multiplayer());
        assert!(keys.set_held(Key::S, true));
        assert!(keys.set_held(Key::ArrowUp, true));

        let actions: Vec<_> = keys.held_actions().collect();
        assert_eq!(actions.len(), 2);
        assert!(actions.contains(&PaddleAction {
            side: Side::Left,
            dir: Direction::MoveDown
        }));
        assert!(actions.contains(&PaddleAction {
            side: Side::Right,
            dir: Direction::MoveUp
        }));
    }

    #[test]
    fn test_single_player_keys_drive_right_paddle() {
        let mut keys = KeyBindings::for_mode(GameMode::single_player());
        keys.set_held(Key::W, true);
        let action = keys.held_actions().next().unwrap();
        assert_eq!(action.side, Side::Right);
    }

    #[test]
    fn test_pointer_mode_has_no_bindings() {
        let mut keys = KeyBindings::for_mode(GameMode::mouse());
        assert!(!keys.set_held(Key::ArrowUp, true));
        assert_eq!(keys.held_actions().count(), 0);
    }

    #[test]
    fn test_release_all() {
        let mut keys = KeyBindings::for_mode(GameMode::multiplayer());
        keys.set_held(Key::W, true);
        keys.set_held(Key::ArrowDown, true);
        keys.release_all();
        assert_eq!(keys.held_actions().count(), 0);
    }

    #[test]
    fn test_game_mode_from_name() {
        assert_eq!(GameMode::from_name("multi"), Some(GameMode::multiplayer()));
        assert_eq!(GameMode::from_name("Mouse"), Some(GameMode::mouse()));
        assert_eq!(GameMode::from_name("single"), Some(GameMode::single_player()));
        assert_eq!(GameMode::from_name("online"), None);
    }
}
