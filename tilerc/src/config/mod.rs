//! tilerc general configuration

mod checks;
mod default;
mod export;
mod keybind;

pub use checks::{Issue, Severity};
pub use export::HostConfig;
pub use keybind::{Keybind, Modifier};

use crate::utils::file_handler;
use crate::BaseCommand;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tilerc_core::{
    child_process::StartupHook,
    models::{
        Bar, Behavior, FloatingLayout, LayoutSpec, Palettes, Screen, ScreenSpec, WidgetDefaults,
        WidgetSpec, WindowProps,
    },
    utils::modmask_lookup::ModMask,
    Group, MouseBinding, ScratchPad,
};

/// General configuration
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub modkey: String,
    pub log_level: String,
    pub keybind: Vec<Keybind>,
    pub groups: Vec<Group>,
    /// One key per group, in group order. Each key switches to its group with
    /// `modkey` held and moves the focused window there with `modkey+Shift`.
    pub group_hotkeys: String,
    pub scratchpad: Option<ScratchPad>,
    pub palettes: Palettes,
    pub layouts: Vec<LayoutSpec>,
    pub floating_layout: FloatingLayout,
    pub widget_defaults: WidgetDefaults,
    /// Every widget of a primary screen's bar, left to right.
    pub bar_widgets: Vec<WidgetSpec>,
    pub screens: Vec<ScreenSpec>,
    pub mouse: Vec<MouseBinding>,
    /// Script spawned once the host has started. May start with `~`.
    pub autostart: Option<String>,
    pub behavior: Behavior,
}

#[must_use]
pub fn load() -> Config {
    file_handler::load_config_file()
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

impl Config {
    /// The two generated bindings of every group that has a hotkey.
    pub fn group_bindings(&self) -> Vec<Keybind> {
        self.groups
            .iter()
            .zip(self.group_hotkeys.chars())
            .flat_map(|(group, hotkey)| {
                let key = hotkey.to_string();
                [
                    Keybind::new(BaseCommand::GotoGroup, &["modkey"], &key)
                        .value(&group.name)
                        .describe(format!("Switch to group {}", group.name)),
                    Keybind::new(BaseCommand::MoveToGroup, &["modkey", "Shift"], &key)
                        .value(&group.name)
                        .describe(format!(
                            "Switch to & move focused window to group {}",
                            group.name
                        )),
                ]
            })
            .collect()
    }

    /// The literal bindings followed by the group bindings, before any
    /// conversion.
    pub fn raw_bindings(&self) -> Vec<Keybind> {
        let mut bindings = self.keybind.clone();
        bindings.extend(self.group_bindings());
        bindings
    }

    /// Every binding as handed to the host. Invalid bindings are dropped, and
    /// when two bindings share a key combination the later one wins.
    pub fn mapped_bindings(&self) -> Vec<tilerc_core::Keybind> {
        let converted = self
            .raw_bindings()
            .into_iter()
            .filter_map(|keybind| match keybind.try_convert_to_core_keybind(self) {
                Ok(binding) => Some(binding),
                Err(err) => {
                    tracing::error!("Invalid key binding: {err}\n{keybind:?}");
                    None
                }
            });

        let mut seen: HashMap<(ModMask, String), usize> = HashMap::new();
        let mut bindings: Vec<Option<tilerc_core::Keybind>> = vec![];
        for binding in converted {
            let combo = (binding.modmask(), binding.key.clone());
            if let Some(index) = seen.insert(combo, bindings.len()) {
                if let Some(shadowed) = bindings[index].take() {
                    tracing::warn!(
                        "{}+{} is bound twice, {:?} replaces {:?}",
                        binding.modifier.join("+"),
                        binding.key,
                        binding.command,
                        shadowed.command
                    );
                }
            }
            bindings.push(Some(binding));
        }
        bindings.into_iter().flatten().collect()
    }

    pub fn mapped_mouse(&self) -> Vec<MouseBinding> {
        self.mouse
            .iter()
            .cloned()
            .map(|mut binding| {
                for modifier in &mut binding.modifier {
                    if modifier == "modkey" {
                        modifier.clone_from(&self.modkey);
                    }
                }
                binding
            })
            .collect()
    }

    /// The bar widgets of a screen, with unset styles taken from
    /// `widget_defaults`. Secondary screens drop the sections that only make
    /// sense once.
    pub fn widgets(&self, primary: bool) -> Vec<WidgetSpec> {
        self.bar_widgets
            .iter()
            .filter(|widget| primary || !widget.section.is_primary_only())
            .map(|widget| widget.clone().with_defaults(&self.widget_defaults))
            .collect()
    }

    /// Defaults for launcher style extensions. They share the widget style.
    pub fn extension_defaults(&self) -> WidgetDefaults {
        self.widget_defaults.clone()
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.screens
            .iter()
            .map(|spec| Screen {
                wallpaper: spec.wallpaper.as_deref().map(expand_path),
                wallpaper_mode: spec.wallpaper_mode,
                top: spec
                    .top
                    .as_ref()
                    .map(|bar| Bar::new(bar, self.widgets(spec.role.is_primary()))),
            })
            .collect()
    }

    pub fn should_float(&self, window: &WindowProps) -> bool {
        self.floating_layout.should_float(window)
    }

    pub fn startup_hook(&self) -> Option<StartupHook> {
        self.autostart
            .as_deref()
            .map(|script| StartupHook::new(expand_path(script)))
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tilerc_core::models::{Section, Themed, WidgetKind, WindowType};
    use tilerc_core::Command;

    #[test]
    fn mapped_combos_are_unique() {
        let config = Config::default();
        let bindings = config.mapped_bindings();
        let combos: HashSet<_> = bindings
            .iter()
            .map(|b| (b.modmask(), b.key.clone()))
            .collect();
        assert_eq!(combos.len(), bindings.len());
    }

    #[test]
    fn every_default_binding_is_valid() {
        let config = Config::default();
        assert_eq!(config.mapped_bindings().len(), config.raw_bindings().len());
    }

    #[test]
    fn duplicate_combos_keep_the_last_binding() {
        let mut config = Config::default();
        config.keybind = vec![
            Keybind::new(BaseCommand::Execute, &["modkey"], "Return").value("kitty"),
            Keybind::new(BaseCommand::CloseWindow, &["modkey"], "q"),
            Keybind::new(BaseCommand::Execute, &["modkey"], "Return").value("alacritty"),
        ];
        config.groups.clear();
        let bindings = config.mapped_bindings();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].command, Command::CloseWindow);
        assert_eq!(bindings[1].command, Command::Execute("alacritty".to_owned()));
    }

    #[test]
    fn invalid_bindings_are_dropped() {
        let mut config = Config::default();
        config.keybind = vec![
            Keybind::new(BaseCommand::Execute, &["modkey"], "Return"),
            Keybind::new(BaseCommand::CloseWindow, &["modkey"], "q"),
        ];
        config.groups.clear();
        assert_eq!(config.mapped_bindings().len(), 1);
    }

    #[test]
    fn two_bindings_per_group() {
        let config = Config::default();
        let bindings = config.mapped_bindings();
        for (group, hotkey) in config.groups.iter().zip(config.group_hotkeys.chars()) {
            let key = hotkey.to_string();
            let goto = bindings
                .iter()
                .find(|b| b.key == key && b.modifier == [config.modkey.clone()])
                .unwrap();
            assert_eq!(goto.command, Command::GotoGroup(group.name.clone()));
            let shift = bindings
                .iter()
                .find(|b| b.key == key && b.modifier.len() == 2)
                .unwrap();
            assert_eq!(
                shift.command,
                Command::MoveToGroup {
                    group: group.name.clone(),
                    switch_group: true,
                }
            );
        }
    }

    #[test]
    fn scratchpad_toggle_is_bound_once() {
        let config = Config::default();
        let toggles = config
            .mapped_bindings()
            .into_iter()
            .filter(|b| matches!(b.command, Command::ToggleScratchPad { .. }))
            .count();
        assert_eq!(toggles, 1);
    }

    #[test]
    fn nine_groups_and_one_dropdown() {
        let config = Config::default();
        assert_eq!(config.groups.len(), 9);
        assert_eq!(config.group_hotkeys.chars().count(), 9);
        let scratchpad = config.scratchpad.unwrap();
        assert_eq!(scratchpad.dropdowns.len(), 1);
        assert!(scratchpad.dropdown("term").is_some());
    }

    #[test]
    fn tray_only_on_primary_screen() {
        let config = Config::default();
        let primary = config.widgets(true);
        let secondary = config.widgets(false);
        assert_eq!(primary.iter().filter(|w| w.is_tray()).count(), 1);
        assert!(!secondary.iter().any(WidgetSpec::is_tray));
        assert!(secondary.len() < primary.len());
        assert!(secondary
            .iter()
            .all(|w| !matches!(w.section, Section::Status | Section::Tray)));
    }

    #[test]
    fn tray_follows_cpu_meter() {
        let widgets = Config::default().widgets(true);
        let cpu = widgets
            .iter()
            .position(|w| matches!(w.kind, WidgetKind::Cpu { .. }))
            .unwrap();
        assert!(widgets[cpu + 1].is_tray());
    }

    #[test]
    fn widgets_inherit_defaults() {
        let config = Config::default();
        for widget in config.widgets(true) {
            assert!(widget.font.is_some());
            assert!(widget.fontsize.is_some());
            assert!(widget.padding.is_some());
            assert!(widget.foreground.is_some());
        }
        assert_eq!(config.extension_defaults(), config.widget_defaults);
    }

    #[test]
    fn every_color_resolves() {
        let config = Config::default();
        let mut refs = config.layouts.color_refs();
        refs.extend(config.floating_layout.color_refs());
        refs.push(&config.widget_defaults.foreground);
        refs.extend(config.bar_widgets.color_refs());
        for color in refs {
            assert!(color.resolve(&config.palettes).is_ok(), "{color}");
        }
        let screens = config.screens();
        for color in screens.color_refs() {
            assert!(color.resolve(&config.palettes).is_ok(), "{color}");
        }
    }

    #[test]
    fn one_screen_with_primary_bar() {
        let config = Config::default();
        let screens = config.screens();
        assert_eq!(screens.len(), 1);
        let screen = &screens[0];
        let wallpaper = screen.wallpaper.as_ref().unwrap();
        assert!(!wallpaper.as_os_str().is_empty());
        assert!(!wallpaper.starts_with("~"));
        assert_eq!(screen.top.as_ref().unwrap().widgets, config.widgets(true));
    }

    #[test]
    fn mouse_modkey_is_substituted() {
        let config = Config::default();
        let mouse = config.mapped_mouse();
        assert_eq!(mouse.len(), 3);
        assert!(mouse.iter().all(|m| m.modifier == [config.modkey.clone()]));
    }

    #[test]
    fn dialogs_and_user_rules_float() {
        let config = Config::default();
        let dialog = WindowProps {
            wm_type: WindowType::Dialog,
            ..WindowProps::default()
        };
        let askpass = WindowProps {
            wm_class: vec!["ssh-askpass".to_owned()],
            ..WindowProps::default()
        };
        let kitty = WindowProps {
            wm_class: vec!["kitty".to_owned()],
            title: Some("zsh".to_owned()),
            ..WindowProps::default()
        };
        assert!(config.should_float(&dialog));
        assert!(config.should_float(&askpass));
        assert!(!config.should_float(&kitty));
    }

    #[test]
    fn startup_hook_path_is_expanded() {
        let hook = Config::default().startup_hook().unwrap();
        assert!(hook.script().ends_with(".config/qtile/autostart.sh"));
        assert!(!hook.script().starts_with("~"));
        assert!(!hook.has_fired());
    }
}
