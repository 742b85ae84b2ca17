//! A tiling window manager configuration: keys, groups, palettes, layouts,
//! bar widgets, screens and behaviour, loaded from `config.ron`.
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
mod command;
mod config;
pub mod utils;

pub use command::*;
pub use config::*;
