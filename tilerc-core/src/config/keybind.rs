use crate::utils::modmask_lookup::{into_modmask, ModMask};
use crate::Command;
use serde::{Deserialize, Serialize};

/// A key binding with its modifiers spelled out, as handed to the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: Command,
    pub modifier: Vec<String>,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Keybind {
    pub fn modmask(&self) -> ModMask {
        into_modmask(&self.modifier)
    }

    /// The (modifier set, key) pair the host grabs. Two bindings with the
    /// same combo shadow each other.
    pub fn combo(&self) -> (ModMask, &str) {
        (self.modmask(), &self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keybind(modifier: &[&str], key: &str) -> Keybind {
        Keybind {
            command: Command::NextLayout,
            modifier: modifier.iter().map(|m| (*m).to_owned()).collect(),
            key: key.to_owned(),
            description: None,
        }
    }

    #[test]
    fn combo_ignores_modifier_order_and_spelling() {
        let a = keybind(&["Mod1", "Shift"], "Return");
        let b = keybind(&["shift", "Alt"], "Return");
        assert_eq!(a.combo(), b.combo());
        assert_ne!(a.combo(), keybind(&["Mod1"], "Return").combo());
    }
}
