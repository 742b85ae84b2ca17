//! Typed building blocks of a tiling window manager configuration.
// We deny clippy pedantic lints, primarily to keep code as correct as possible.
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
mod command;
pub mod config;
pub mod errors;
pub mod models;
pub mod utils;

pub use command::Command;
pub use config::{Group, Keybind, MouseBinding, ScratchPad};
pub use errors::{Result, TileError};
pub use utils::child_process;
