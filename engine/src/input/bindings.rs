//! Input Bindings Module
//!
//! Maps physical keys to logical keyboard actions so the keyboard adapter can
//! be remapped without touching the controllers.

use std::collections::{HashMap, HashSet};

use super::KeyCode;

/// Logical keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Sprint modifier (default: Shift)
    Sprint,
    /// Jump (default: Space)
    Jump,
    /// Look up, coarse (default: Arrow Up)
    LookUp,
    /// Look down, coarse (default: Arrow Down)
    LookDown,
    /// Turn left, coarse (default: Arrow Left)
    LookLeft,
    /// Turn right, coarse (default: Arrow Right)
    LookRight,
}

impl InputAction {
    /// Actions that drive the look axis from the keyboard.
    pub const LOOK: [InputAction; 4] = [
        InputAction::LookUp,
        InputAction::LookDown,
        InputAction::LookLeft,
        InputAction::LookRight,
    ];
}

/// Maps physical keys to logical actions, one key per action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    /// Map from physical key to logical action
    key_to_action: HashMap<KeyCode, InputAction>,
    /// Map from logical action to physical key (for reverse lookup and display)
    action_to_key: HashMap<InputAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W/S/A/D = move forward/back/left/right
    /// - Shift (Left) = Sprint
    /// - Space = Jump
    /// - Arrow keys = look
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ShiftLeft, InputAction::Sprint);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::ArrowUp, InputAction::LookUp);
        bindings.bind(KeyCode::ArrowDown, InputAction::LookDown);
        bindings.bind(KeyCode::ArrowLeft, InputAction::LookLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::LookRight);

        bindings
    }

    /// Bindings with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action.
    ///
    /// If the key was previously bound to another action, that binding is removed.
    /// If the action was previously bound to another key, that binding is also removed.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    /// Remove the binding for a specific action.
    pub fn unbind_action(&mut self, action: InputAction) {
        if let Some(key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&key);
        }
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Get the key bound to a logical action, if any.
    pub fn get_key(&self, action: InputAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }

    /// Check if an action's key is in `keys`. Unbound actions are never in it.
    pub fn is_action_in(&self, action: InputAction, keys: &HashSet<KeyCode>) -> bool {
        self.action_to_key
            .get(&action)
            .is_some_and(|key| keys.contains(key))
    }

    /// `+1` for `positive`, `-1` for `negative`, `0` for both or neither.
    pub fn axis(
        &self,
        positive: InputAction,
        negative: InputAction,
        keys: &HashSet<KeyCode>,
    ) -> f32 {
        self.is_action_in(positive, keys) as i32 as f32
            - self.is_action_in(negative, keys) as i32 as f32
    }

    /// Get all current bindings as key-action pairs.
    pub fn all_bindings(&self) -> impl Iterator<Item = (KeyCode, InputAction)> + '_ {
        self.key_to_action.iter().map(|(&k, &a)| (k, a))
    }
}
