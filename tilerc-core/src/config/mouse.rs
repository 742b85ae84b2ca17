use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Main button (left click for right-handed)
    Button1,
    /// Middle button (pressing the scroll wheel)
    Button2,
    /// Secondary button (right click for right-handed)
    Button3,
    Button4,
    Button5,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    SetPositionFloating,
    SetSizeFloating,
    BringToFront,
    GetPosition,
    GetSize,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseBindingKind {
    /// `start` runs on press, `action` on every motion until release.
    Drag,
    Click,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MouseBinding {
    pub kind: MouseBindingKind,
    pub modifier: Vec<String>,
    pub button: MouseButton,
    pub action: MouseAction,
    pub start: Option<MouseAction>,
}

impl MouseBinding {
    pub fn drag(button: MouseButton, start: MouseAction, action: MouseAction) -> Self {
        Self {
            kind: MouseBindingKind::Drag,
            modifier: vec!["modkey".to_owned()],
            button,
            action,
            start: Some(start),
        }
    }

    pub fn click(button: MouseButton, action: MouseAction) -> Self {
        Self {
            kind: MouseBindingKind::Click,
            modifier: vec!["modkey".to_owned()],
            button,
            action,
            start: None,
        }
    }
}
