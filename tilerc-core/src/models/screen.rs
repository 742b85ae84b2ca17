use super::{ColorRef, Themed, WidgetSpec};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallpaperMode {
    /// Scale keeping the aspect ratio, cropping what overflows.
    Fill,
    /// Scale to the screen size, ignoring the aspect ratio.
    Stretch,
}

/// Decides which widgets a screen's bar carries.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenRole {
    #[default]
    Primary,
    Secondary,
}

impl ScreenRole {
    pub fn is_primary(self) -> bool {
        self == Self::Primary
    }
}

/// A bar as configured: its widgets come from the screen's role.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BarSpec {
    /// Height in pixels.
    pub size: u32,
    pub background: ColorRef,
    pub opacity: f32,
}

/// One physical display as configured.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScreenSpec {
    /// May start with `~`.
    pub wallpaper: Option<String>,
    pub wallpaper_mode: Option<WallpaperMode>,
    pub role: ScreenRole,
    pub top: Option<BarSpec>,
}

/// A bar as handed to the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bar {
    pub size: u32,
    pub background: ColorRef,
    pub opacity: f32,
    pub widgets: Vec<WidgetSpec>,
}

impl Bar {
    pub fn new(spec: &BarSpec, widgets: Vec<WidgetSpec>) -> Self {
        Self {
            size: spec.size,
            background: spec.background.clone(),
            opacity: spec.opacity,
            widgets,
        }
    }
}

impl Themed for Bar {
    fn color_refs(&self) -> Vec<&ColorRef> {
        let mut refs = vec![&self.background];
        refs.extend(self.widgets.color_refs());
        refs
    }

    fn color_refs_mut(&mut self) -> Vec<&mut ColorRef> {
        let mut refs = vec![&mut self.background];
        refs.extend(self.widgets.color_refs_mut());
        refs
    }
}

/// A screen as handed to the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Screen {
    pub wallpaper: Option<PathBuf>,
    pub wallpaper_mode: Option<WallpaperMode>,
    pub top: Option<Bar>,
}

impl Themed for Screen {
    fn color_refs(&self) -> Vec<&ColorRef> {
        self.top.color_refs()
    }

    fn color_refs_mut(&mut self) -> Vec<&mut ColorRef> {
        self.top.color_refs_mut()
    }
}
