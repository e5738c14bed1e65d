//! Input mapping
//!
//! Raw device events are reduced to the two logical signals the game
//! understands. Everything else is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyCode {
    Space,
    Enter,
    Escape,
    Other,
}

/// Raw event from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Key(KeyCode),
    /// Mouse button or touch down anywhere on the play area
    PointerDown,
    /// Click on the status message overlay
    MessageClick,
}

/// Logical signal delivered to the loop controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSignal {
    /// Flap while running, start / restart otherwise
    Flap,
    /// Restart only; ignored while running
    Restart,
}

impl InputEvent {
    pub fn signal(self) -> Option<InputSignal> {
        match self {
            InputEvent::Key(KeyCode::Space) | InputEvent::PointerDown => Some(InputSignal::Flap),
            InputEvent::MessageClick => Some(InputSignal::Restart),
            InputEvent::Key(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flap_triggers() {
        assert_eq!(InputEvent::Key(KeyCode::Space).signal(), Some(InputSignal::Flap));
        assert_eq!(InputEvent::PointerDown.signal(), Some(InputSignal::Flap));
    }

    #[test]
    fn test_message_click_is_restart() {
        assert_eq!(InputEvent::MessageClick.signal(), Some(InputSignal::Restart));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(InputEvent::Key(KeyCode::Enter).signal(), None);
        assert_eq!(InputEvent::Key(KeyCode::Escape).signal(), None);
        assert_eq!(InputEvent::Key(KeyCode::Other).signal(), None);
    }
}
