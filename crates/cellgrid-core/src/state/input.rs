use serde::{Deserialize, Serialize};

/// Grid-level action produced by a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridAction {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Tab: next column, wrapping onto the next row
    NextCell,

    // Editing
    StartEdit,
    CancelEdit,

    // Unknown/unmapped
    None,
}

/// Keys the grid reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Tab,
    Enter,
    Escape,
    Unknown,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Tab" => Key::Tab,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Unknown,
        }
    }
}

/// Modifier keys state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }

    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }

    /// Ctrl on most platforms, Cmd on macOS
    pub fn ctrl_or_meta(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Maps a key to a grid action. Modifiers do not change navigation:
/// Shift+Tab still advances.
pub fn key_to_action(key: Key) -> GridAction {
    match key {
        Key::ArrowUp => GridAction::MoveUp,
        Key::ArrowDown => GridAction::MoveDown,
        Key::ArrowLeft => GridAction::MoveLeft,
        Key::ArrowRight => GridAction::MoveRight,
        Key::Tab => GridAction::NextCell,
        Key::Enter => GridAction::StartEdit,
        Key::Escape => GridAction::CancelEdit,
        Key::Unknown => GridAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dom_key() {
        assert_eq!(Key::from_dom_key("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_dom_key("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_dom_key("Tab"), Key::Tab);
        assert_eq!(Key::from_dom_key("Enter"), Key::Enter);
        assert_eq!(Key::from_dom_key("Escape"), Key::Escape);
        assert_eq!(Key::from_dom_key("Esc"), Key::Escape);
        assert_eq!(Key::from_dom_key("a"), Key::Unknown);
        assert_eq!(Key::from_dom_key("Home"), Key::Unknown);
    }

    #[test]
    fn test_modifiers_new() {
        let mods = Modifiers::new();
        assert_eq!(mods, Modifiers::default());
        assert!(!mods.shift && !mods.ctrl && !mods.alt && !mods.meta);
    }

    #[test]
    fn test_modifiers_chaining() {
        let mods = Modifiers::new().with_shift(true).with_alt(true);
        assert!(mods.shift);
        assert!(mods.alt);
        assert!(!mods.ctrl);
        assert!(!mods.ctrl_or_meta());
    }

    #[test]
    fn test_modifiers_ctrl_or_meta() {
        assert!(Modifiers::new().with_ctrl(true).ctrl_or_meta());
        assert!(Modifiers::new().with_meta(true).ctrl_or_meta());
        assert!(!Modifiers::new().with_shift(true).ctrl_or_meta());
    }

    #[test]
    fn test_arrow_keys_navigation() {
        assert_eq!(key_to_action(Key::ArrowUp), GridAction::MoveUp);
        assert_eq!(key_to_action(Key::ArrowDown), GridAction::MoveDown);
        assert_eq!(key_to_action(Key::ArrowLeft), GridAction::MoveLeft);
        assert_eq!(key_to_action(Key::ArrowRight), GridAction::MoveRight);
    }

    #[test]
    fn test_edit_keys() {
        assert_eq!(key_to_action(Key::Enter), GridAction::StartEdit);
        assert_eq!(key_to_action(Key::Escape), GridAction::CancelEdit);
        assert_eq!(key_to_action(Key::Tab), GridAction::NextCell);
        assert_eq!(key_to_action(Key::Unknown), GridAction::None);
    }
}
