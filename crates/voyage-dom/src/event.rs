//! Input events delivered by the host page

use serde::{Deserialize, Serialize};

use crate::document::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    /// Any key the controllers do not act on
    Other(String),
}

impl Key {
    /// Map a `KeyboardEvent.key` identifier.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            other => Key::Other(other.to_string()),
        }
    }

    /// Map a legacy `KeyboardEvent.keyCode`.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            37 => Key::ArrowLeft,
            39 => Key::ArrowRight,
            other => Key::Other(format!("keyCode:{}", other)),
        }
    }

    pub fn is_horizontal_arrow(&self) -> bool {
        matches!(self, Key::ArrowLeft | Key::ArrowRight)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    /// Pointer click or equivalent activation
    Click { target: ElementId },
    KeyDown { target: ElementId, key: Key },
}

impl Event {
    pub fn target(&self) -> ElementId {
        match self {
            Event::Click { target } | Event::KeyDown { target, .. } => *target,
        }
    }
}
