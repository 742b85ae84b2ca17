use serde::{Deserialize, Serialize};

/// Actions the host performs when a binding fires.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,
    ShuffleLeft,
    ShuffleRight,
    ShuffleUp,
    ShuffleDown,
    GrowLeft,
    GrowRight,
    GrowUp,
    GrowDown,
    /// Reset all window sizes of the current layout.
    Normalize,
    /// Toggle between split and unsplit sides of the stack.
    ToggleSplit,
    ToggleFullScreen,
    ToggleFloating,
    /// Run a shell command.
    Execute(String),
    NextLayout,
    PreviousLayout,
    CloseWindow,
    ReloadConfig,
    Shutdown,
    GotoGroup(String),
    MoveToGroup {
        group: String,
        switch_group: bool,
    },
    ToggleScratchPad {
        scratchpad: String,
        dropdown: String,
    },
}
