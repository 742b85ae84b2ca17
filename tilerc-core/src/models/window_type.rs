use serde::{Deserialize, Serialize};

/// `_NET_WM_WINDOW_TYPE` of a window, as reported by the host.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowType {
    Desktop,
    Dock,
    Toolbar,
    Menu,
    Utility,
    Splash,
    Dialog,
    Notification,
    #[default]
    Normal,
}
