use super::MatchRule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What the host does when a client asks to be activated.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusOnActivation {
    /// Focus if the window is on the current group, mark it urgent otherwise.
    #[default]
    Smart,
    Focus,
    Urgent,
    Never,
}

/// Sends windows matching `matches` to `group` as they appear.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppRule {
    pub matches: MatchRule,
    pub group: Option<String>,
}

/// Window-manager wide switches.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Behavior {
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Whether to honour clients (e.g. games) minimising themselves on focus loss.
    pub auto_minimize: bool,
    /// Reported as the WM name; some java toolkits only work with names they know.
    pub wmname: String,
    /// Binder generating keys for dynamically created groups. `None` keeps
    /// the generated group bindings only.
    pub dgroups_key_binder: Option<String>,
    pub dgroups_app_rules: Vec<AppRule>,
    /// Per-device input settings, keyed by device identifier. Only read
    /// under Wayland.
    pub wl_input_rules: Option<BTreeMap<String, BTreeMap<String, String>>>,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: false,
            wmname: "LG3D".to_owned(),
            dgroups_key_binder: None,
            dgroups_app_rules: vec![],
            wl_input_rules: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let behavior = Behavior::default();
        assert!(behavior.follow_mouse_focus);
        assert_eq!(behavior.wmname, "LG3D");
        assert_eq!(behavior.dgroups_key_binder, None);
        assert!(behavior.dgroups_app_rules.is_empty());
        assert_eq!(behavior.wl_input_rules, None);
    }

    #[test]
    fn partial_behavior_keeps_defaults() {
        let behavior: Behavior = ron::from_str(
            r#"(cursor_warp: true, wl_input_rules: Some({"type:touchpad": {"tap": "true"}}))"#,
        )
        .unwrap();
        assert!(behavior.cursor_warp);
        assert!(behavior.auto_fullscreen);
        assert_eq!(
            behavior.wl_input_rules.unwrap()["type:touchpad"]["tap"],
            "true"
        );
        assert!(behavior.dgroups_app_rules.is_empty());
    }
}
