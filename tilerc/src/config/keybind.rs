use super::Config;
use crate::BaseCommand;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use tilerc_core::Command;

/// A binding as written in the config file. `value` carries the argument of
/// commands that take one (the shell command to run, a group name, a dropdown
/// name).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Keybind {
    pub fn new(command: BaseCommand, modifier: &[&str], key: &str) -> Self {
        Self {
            command,
            value: String::default(),
            modifier: Some(
                modifier
                    .iter()
                    .map(|m| (*m).to_owned())
                    .collect::<Vec<_>>()
                    .into(),
            ),
            key: key.to_owned(),
            description: None,
        }
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Modifiers with `modkey` replaced by the configured mod key.
    pub fn mapped_modifier(&self, modkey: &str) -> Vec<String> {
        self.modifier
            .iter()
            .flatten()
            .map(|m| if m == "modkey" { modkey.to_owned() } else { m })
            .collect()
    }

    /// # Errors
    ///
    /// Errors when the `value` is missing for a command that needs it, or
    /// names a group or dropdown that is not configured.
    pub fn try_convert_to_core_keybind(&self, config: &Config) -> Result<tilerc_core::Keybind> {
        if self.command.takes_value() {
            ensure!(!self.value.is_empty(), "value must not be empty");
        }
        let command = match self.command {
            BaseCommand::Execute => Command::Execute(self.value.clone()),
            BaseCommand::GotoGroup => Command::GotoGroup(self.known_group(config)?),
            BaseCommand::MoveToGroup => Command::MoveToGroup {
                group: self.known_group(config)?,
                switch_group: true,
            },
            BaseCommand::SendToGroup => Command::MoveToGroup {
                group: self.known_group(config)?,
                switch_group: false,
            },
            BaseCommand::ToggleScratchPad => {
                let scratchpad = config
                    .scratchpad
                    .as_ref()
                    .context("no scratchpad is configured")?;
                ensure!(
                    scratchpad.dropdown(&self.value).is_some(),
                    "scratchpad `{}` has no dropdown named `{}`",
                    scratchpad.name,
                    self.value
                );
                Command::ToggleScratchPad {
                    scratchpad: scratchpad.name.clone(),
                    dropdown: self.value.clone(),
                }
            }
            BaseCommand::CloseWindow => Command::CloseWindow,
            BaseCommand::ReloadConfig => Command::ReloadConfig,
            BaseCommand::Shutdown => Command::Shutdown,
            BaseCommand::ToggleFullScreen => Command::ToggleFullScreen,
            BaseCommand::ToggleFloating => Command::ToggleFloating,
            BaseCommand::ToggleSplit => Command::ToggleSplit,
            BaseCommand::Normalize => Command::Normalize,
            BaseCommand::FocusLeft => Command::FocusLeft,
            BaseCommand::FocusRight => Command::FocusRight,
            BaseCommand::FocusUp => Command::FocusUp,
            BaseCommand::FocusDown => Command::FocusDown,
            BaseCommand::ShuffleLeft => Command::ShuffleLeft,
            BaseCommand::ShuffleRight => Command::ShuffleRight,
            BaseCommand::ShuffleUp => Command::ShuffleUp,
            BaseCommand::ShuffleDown => Command::ShuffleDown,
            BaseCommand::GrowLeft => Command::GrowLeft,
            BaseCommand::GrowRight => Command::GrowRight,
            BaseCommand::GrowUp => Command::GrowUp,
            BaseCommand::GrowDown => Command::GrowDown,
            BaseCommand::NextLayout => Command::NextLayout,
            BaseCommand::PreviousLayout => Command::PreviousLayout,
        };
        Ok(tilerc_core::Keybind {
            command,
            modifier: self.mapped_modifier(&config.modkey),
            key: self.key.clone(),
            description: self.description.clone(),
        })
    }

    fn known_group(&self, config: &Config) -> Result<String> {
        ensure!(
            config.groups.iter().any(|g| g.name == self.value),
            "unknown group `{}`",
            self.value
        );
        Ok(self.value.clone())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let ms = match self {
            Modifier::Single(m) => vec![m.clone()],
            Modifier::List(ms) => ms.clone(),
        };
        ms.into_iter()
    }
}

impl From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modkey_is_substituted() {
        let keybind = Keybind::new(BaseCommand::NextLayout, &["modkey", "Shift"], "Tab");
        assert_eq!(keybind.mapped_modifier("Mod1"), ["Mod1", "Shift"]);
    }

    #[test]
    fn convert_spawn_binding() {
        let config = Config::default();
        let keybind = Keybind::new(BaseCommand::Execute, &["modkey"], "Return")
            .value("kitty")
            .describe("Launch terminal");
        let core = keybind.try_convert_to_core_keybind(&config).unwrap();
        assert_eq!(core.command, Command::Execute("kitty".to_owned()));
        assert_eq!(core.modifier, [config.modkey.clone()]);
        assert_eq!(core.description.as_deref(), Some("Launch terminal"));
    }

    #[test]
    fn value_is_required() {
        let config = Config::default();
        let keybind = Keybind::new(BaseCommand::Execute, &["modkey"], "Return");
        assert!(keybind.try_convert_to_core_keybind(&config).is_err());
    }

    #[test]
    fn groups_and_dropdowns_must_exist() {
        let config = Config::default();
        let unknown_group = Keybind::new(BaseCommand::GotoGroup, &["modkey"], "0").value("nope");
        assert!(unknown_group.try_convert_to_core_keybind(&config).is_err());

        let unknown_dropdown =
            Keybind::new(BaseCommand::ToggleScratchPad, &["modkey"], "m").value("music");
        assert!(unknown_dropdown.try_convert_to_core_keybind(&config).is_err());

        let term = Keybind::new(BaseCommand::ToggleScratchPad, &["modkey"], "m").value("term");
        assert_eq!(
            term.try_convert_to_core_keybind(&config).unwrap().command,
            Command::ToggleScratchPad {
                scratchpad: "scratchpad".to_owned(),
                dropdown: "term".to_owned(),
            }
        );
    }

    #[test]
    fn deserialize_single_and_list_modifiers() {
        let single: Keybind =
            ron::from_str(r#"(command: CloseWindow, modifier: Some("Mod1"), key: "q")"#).unwrap();
        assert_eq!(single.modifier, Some(Modifier::Single("Mod1".to_owned())));
        let list: Keybind = ron::from_str(
            r#"(command: Execute, value: "kitty", modifier: Some(["modkey", "Shift"]), key: "Return")"#,
        )
        .unwrap();
        assert_eq!(list.mapped_modifier("Mod4"), ["Mod4", "Shift"]);
    }
}
