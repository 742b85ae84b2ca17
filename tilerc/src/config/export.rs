use super::Config;
use serde::Serialize;
use tilerc_core::models::{
    Behavior, FloatingLayout, LayoutSpec, MatchRule, Screen, Themed, WidgetDefaults,
};
use tilerc_core::{Group, Keybind, MouseBinding, Result, ScratchPad};

/// Everything the host needs, with bindings mapped, widget lists built and
/// every colour resolved to a literal.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub keys: Vec<Keybind>,
    pub mouse: Vec<MouseBinding>,
    pub groups: Vec<Group>,
    pub scratchpad: Option<ScratchPad>,
    pub layouts: Vec<LayoutSpec>,
    pub floating_layout: FloatingLayout,
    /// The floating layout's rules with the host defaults included.
    pub float_rules: Vec<MatchRule>,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    pub screens: Vec<Screen>,
    pub behavior: Behavior,
}

impl Config {
    /// # Errors
    ///
    /// Errors on the first colour reference that does not resolve.
    pub fn host_config(&self) -> Result<HostConfig> {
        let mut layouts = self.layouts.clone();
        layouts.resolve_colors(&self.palettes)?;
        let mut floating_layout = self.floating_layout.clone();
        floating_layout.resolve_colors(&self.palettes)?;
        let mut widget_defaults = self.widget_defaults.clone();
        widget_defaults.foreground.resolve_colors(&self.palettes)?;
        let mut screens = self.screens();
        screens.resolve_colors(&self.palettes)?;

        Ok(HostConfig {
            keys: self.mapped_bindings(),
            mouse: self.mapped_mouse(),
            groups: self.groups.clone(),
            scratchpad: self.scratchpad.clone(),
            layouts,
            float_rules: floating_layout.rules(),
            floating_layout,
            extension_defaults: widget_defaults.clone(),
            widget_defaults,
            screens,
            behavior: self.behavior.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilerc_core::models::ColorRef;

    fn is_literal(color: &ColorRef) -> bool {
        matches!(color, ColorRef::Literal(_))
    }

    #[test]
    fn every_color_is_resolved() {
        let host = Config::default().host_config().unwrap();
        assert!(host.layouts.color_refs().into_iter().all(is_literal));
        assert!(host.floating_layout.color_refs().into_iter().all(is_literal));
        assert!(host.screens.color_refs().into_iter().all(is_literal));
        assert!(is_literal(&host.widget_defaults.foreground));
        assert_eq!(
            host.widget_defaults.foreground,
            ColorRef::literal("#F6f6E6")
        );
    }

    #[test]
    fn unresolved_colors_fail_the_export() {
        let mut config = Config::default();
        config.floating_layout.border_focus = ColorRef::named("nord", "bg");
        assert!(config.host_config().is_err());
    }

    #[test]
    fn export_is_json() {
        let host = Config::default().host_config().unwrap();
        let json = serde_json::to_value(&host).unwrap();
        assert_eq!(json["groups"].as_array().map(Vec::len), Some(9));
        assert_eq!(json["layouts"][0]["MonadTall"]["border_focus"], "#665c54");
        assert_eq!(json["behavior"]["wmname"], "LG3D");
    }
}
