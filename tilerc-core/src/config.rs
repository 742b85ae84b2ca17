//! Host-facing records produced by the configuration.
mod group;
mod keybind;
mod mouse;
mod scratchpad;

pub use group::Group;
pub use keybind::Keybind;
pub use mouse::{MouseAction, MouseBinding, MouseBindingKind, MouseButton};
pub use scratchpad::{DropDown, ScratchPad};
