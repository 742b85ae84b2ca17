use serde::{Deserialize, Serialize};

/// The command half of a binding as written in the config file. Commands
/// that take an argument read it from the binding's `value`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    Execute,
    CloseWindow,
    ReloadConfig,
    Shutdown,
    ToggleScratchPad,
    ToggleFullScreen,
    ToggleFloating,
    ToggleSplit,
    Normalize,
    GotoGroup,
    MoveToGroup,
    SendToGroup,
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
    NextLayout,
    PreviousLayout,
}

impl BaseCommand {
    /// Whether the binding's `value` is required.
    pub fn takes_value(self) -> bool {
        matches!(
            self,
            Self::Execute
                | Self::ToggleScratchPad
                | Self::GotoGroup
                | Self::MoveToGroup
                | Self::SendToGroup
        )
    }
}
