use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Logical actions the game understands, independent of physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Jump];
}

/// Pressed state of every action, copied once at the start of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl ActionSnapshot {
    /// Snapshot with nothing pressed.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Returns a copy with `action` pressed.
    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        match action {
            Action::MoveLeft => self.move_left = pressed,
            Action::MoveRight => self.move_right = pressed,
            Action::Jump => self.jump = pressed,
        }
    }

    pub fn is_active(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Jump => self.jump,
        }
    }
}

/// Physical key codes (`KeyboardEvent.code`) bound to each action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub move_left: Vec<String>,
    pub move_right: Vec<String>,
    pub jump: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            move_left: vec!["ArrowLeft".to_string(), "KeyA".to_string()],
            move_right: vec!["ArrowRight".to_string(), "KeyD".to_string()],
            jump: vec![
                "Space".to_string(),
                "ArrowUp".to_string(),
                "KeyW".to_string(),
            ],
        }
    }
}

impl KeyBindings {
    pub fn keys_for(&self, action: Action) -> &[String] {
        match action {
            Action::MoveLeft => &self.move_left,
            Action::MoveRight => &self.move_right,
            Action::Jump => &self.jump,
        }
    }

    /// Whether `code` is bound to any action. Hosts use this to suppress
    /// default browser handling (page scrolling) for game keys.
    pub fn is_bound(&self, code: &str) -> bool {
        Action::ALL
            .iter()
            .any(|&a| self.keys_for(a).iter().any(|k| k == code))
    }
}

/// Keyboard state, written asynchronously by host key events.
///
/// Only the current state matters; there is no event queue. The game reads
/// it through [`InputState::snapshot`] once per tick, so a press that lands
/// mid-tick is seen on the next one.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Keys currently held down.
    pub keys_down: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_key_down(&mut self, code: String) {
        self.keys_down.insert(code);
    }

    pub fn on_key_up(&mut self, code: &str) {
        self.keys_down.remove(code);
    }

    pub fn is_key_down(&self, code: &str) -> bool {
        self.keys_down.contains(code)
    }

    /// Release everything, e.g. when the page loses focus and key-up
    /// events will never arrive.
    pub fn release_all(&mut self) {
        self.keys_down.clear();
    }

    /// Resolve held keys into logical actions.
    pub fn snapshot(&self, bindings: &KeyBindings) -> ActionSnapshot {
        let mut snap = ActionSnapshot::idle();
        for action in Action::ALL {
            let held = bindings
                .keys_for(action)
                .iter()
                .any(|k| self.is_key_down(k));
            snap.set(action, held);
        }
        snap
    }
}
