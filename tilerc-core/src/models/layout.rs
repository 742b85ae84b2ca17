use super::{ColorRef, CustomMargins, Margins, MatchRule, Themed, WindowProps};
use crate::errors::{Result, TileError};
use serde::{Deserialize, Serialize};

/// Styling shared by the master/stack layouts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonadStyle {
    pub margin: CustomMargins,
    pub border_width: u32,
    pub border_focus: ColorRef,
    pub border_normal: ColorRef,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TreeTabStyle {
    pub sections: Vec<String>,
    pub active_bg: ColorRef,
    pub bg_color: ColorRef,
    pub font: String,
    pub fontsize: u32,
    pub section_top: u32,
}

/// A tiling algorithm implemented by the host, with the style it is drawn in.
/// The order of the layout list is the order the host cycles through.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum LayoutSpec {
    /// One main window with a vertical stack next to it.
    MonadTall(MonadStyle),
    /// One main window with a horizontal stack below it.
    MonadWide(MonadStyle),
    /// Every window maximised, tabs listed in a side panel.
    TreeTab(TreeTabStyle),
    Max,
}

impl LayoutSpec {
    pub fn name(&self) -> &'static str {
        match self {
            Self::MonadTall(_) => "monadtall",
            Self::MonadWide(_) => "monadwide",
            Self::TreeTab(_) => "treetab",
            Self::Max => "max",
        }
    }

    /// Gaps around each tiled window.
    ///
    /// # Errors
    ///
    /// Errors if the margin list is empty or has more than four entries.
    pub fn margins(&self) -> Result<Margins> {
        match self {
            Self::MonadTall(style) | Self::MonadWide(style) => {
                Margins::try_from(style.margin.clone()).map_err(TileError::InvalidMargins)
            }
            Self::TreeTab(_) | Self::Max => Ok(Margins::new(0)),
        }
    }
}

impl Themed for LayoutSpec {
    fn color_refs(&self) -> Vec<&ColorRef> {
        match self {
            Self::MonadTall(style) | Self::MonadWide(style) => {
                vec![&style.border_focus, &style.border_normal]
            }
            Self::TreeTab(style) => vec![&style.active_bg, &style.bg_color],
            Self::Max => vec![],
        }
    }

    fn color_refs_mut(&mut self) -> Vec<&mut ColorRef> {
        match self {
            Self::MonadTall(style) | Self::MonadWide(style) => {
                vec![&mut style.border_focus, &mut style.border_normal]
            }
            Self::TreeTab(style) => vec![&mut style.active_bg, &mut style.bg_color],
            Self::Max => vec![],
        }
    }
}

/// The layout floating windows are drawn with, and the rules deciding which
/// windows float.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FloatingLayout {
    pub border_focus: ColorRef,
    pub border_normal: Option<ColorRef>,
    pub border_width: u32,
    /// Prepend [`MatchRule::default_float_rules`] to `float_rules`.
    pub include_default_rules: bool,
    pub float_rules: Vec<MatchRule>,
}

impl FloatingLayout {
    pub fn rules(&self) -> Vec<MatchRule> {
        let mut rules = if self.include_default_rules {
            MatchRule::default_float_rules()
        } else {
            vec![]
        };
        rules.extend(self.float_rules.iter().cloned());
        rules
    }

    pub fn should_float(&self, window: &WindowProps) -> bool {
        self.rules().iter().any(|rule| rule.matches(window))
    }
}

impl Themed for FloatingLayout {
    fn color_refs(&self) -> Vec<&ColorRef> {
        let mut refs = vec![&self.border_focus];
        refs.extend(self.border_normal.color_refs());
        refs
    }

    fn color_refs_mut(&mut self) -> Vec<&mut ColorRef> {
        let mut refs = vec![&mut self.border_focus];
        refs.extend(self.border_normal.color_refs_mut());
        refs
    }
}
