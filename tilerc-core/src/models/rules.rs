use super::WindowType;
use serde::{Deserialize, Serialize};

/// Properties of a client window a [`MatchRule`] is tested against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowProps {
    /// `WM_CLASS` in X11: instance name followed by class name.
    pub wm_class: Vec<String>,
    /// `_NET_WM_NAME` in X11
    pub title: Option<String>,
    pub wm_type: WindowType,
    /// `WM_WINDOW_ROLE` in X11
    pub role: Option<String>,
    /// Whether `WM_TRANSIENT_FOR` is set.
    pub transient: bool,
    /// Whether the size hints pin the window to one size.
    pub fixed_size: bool,
}

/// Selects windows by class, title, type or role. Every field that is set
/// has to match; a rule without any field set matches nothing.
///
/// # Example
///
/// In `config.ron`
///
/// ```ron
/// float_rules: [
///     (wm_class: "ssh-askpass"),
///     (title: "pinentry"),
/// ]
/// ```
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct MatchRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_type: Option<WindowType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transient: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_size: Option<bool>,
}

impl MatchRule {
    pub fn wm_class(class: &str) -> Self {
        Self {
            wm_class: Some(class.to_owned()),
            ..Self::default()
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.to_owned()),
            ..Self::default()
        }
    }

    pub fn wm_type(wm_type: WindowType) -> Self {
        Self {
            wm_type: Some(wm_type),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, window: &WindowProps) -> bool {
        if self.is_empty() {
            return false;
        }
        let class = self
            .wm_class
            .as_ref()
            .map_or(true, |class| window.wm_class.contains(class));
        let title = self
            .title
            .as_ref()
            .map_or(true, |title| window.title.as_ref() == Some(title));
        let role = self
            .role
            .as_ref()
            .map_or(true, |role| window.role.as_ref() == Some(role));
        class
            && title
            && role
            && self.wm_type.map_or(true, |t| t == window.wm_type)
            && self.transient.map_or(true, |t| t == window.transient)
            && self.fixed_size.map_or(true, |f| f == window.fixed_size)
    }

    /// Windows which float no matter what the user configured.
    pub fn default_float_rules() -> Vec<Self> {
        let by_type = [
            WindowType::Utility,
            WindowType::Notification,
            WindowType::Toolbar,
            WindowType::Splash,
            WindowType::Dialog,
        ]
        .into_iter()
        .map(Self::wm_type);
        let by_class = [
            "file_progress",
            "confirm",
            "dialog",
            "download",
            "error",
            "notification",
            "splash",
            "toolbar",
        ]
        .into_iter()
        .map(Self::wm_class);
        let transient = Self {
            transient: Some(true),
            ..Self::default()
        };
        let fixed_size = Self {
            fixed_size: Some(true),
            ..Self::default()
        };
        by_type
            .chain(by_class)
            .chain([transient, fixed_size])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(class: &str, title: &str) -> WindowProps {
        WindowProps {
            wm_class: vec![class.to_owned(), class.to_uppercase()],
            title: Some(title.to_owned()),
            ..WindowProps::default()
        }
    }

    #[test]
    fn match_by_class_instance_or_class_name() {
        let rule = MatchRule::wm_class("SSH-ASKPASS");
        assert!(rule.matches(&window("ssh-askpass", "Password")));
        assert!(!rule.matches(&window("kitty", "Password")));
    }

    #[test]
    fn every_set_field_has_to_match() {
        let rule = MatchRule {
            wm_class: Some("gitk".to_owned()),
            title: Some("branchdialog".to_owned()),
            ..MatchRule::default()
        };
        assert!(rule.matches(&window("gitk", "branchdialog")));
        assert!(!rule.matches(&window("gitk", "main")));
    }

    #[test]
    fn empty_rule_matches_nothing() {
        assert!(!MatchRule::default().matches(&WindowProps::default()));
    }

    #[test]
    fn dialogs_and_transients_float_by_default() {
        let rules = MatchRule::default_float_rules();
        let dialog = WindowProps {
            wm_type: WindowType::Dialog,
            ..WindowProps::default()
        };
        let transient = WindowProps {
            transient: true,
            ..window("gimp", "Export")
        };
        let normal = window("kitty", "zsh");
        assert!(rules.iter().any(|r| r.matches(&dialog)));
        assert!(rules.iter().any(|r| r.matches(&transient)));
        assert!(!rules.iter().any(|r| r.matches(&normal)));
    }

    #[test]
    fn rules_skip_unset_fields_when_serialized() {
        let rule = MatchRule::title("pinentry");
        let ron = ron::to_string(&rule).unwrap();
        assert!(ron.contains("pinentry"));
        assert!(!ron.contains("wm_class"));
        assert_eq!(ron::from_str::<MatchRule>(&ron).unwrap(), rule);
    }
}
