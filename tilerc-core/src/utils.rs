//! Helpers shared by the configuration and its host-facing tools.
pub mod child_process;
pub mod modmask_lookup;
