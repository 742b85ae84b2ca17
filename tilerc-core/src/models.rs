//! Declarative pieces of the configuration: colours, layouts, widgets and screens.
mod behavior;
mod color;
mod layout;
mod margins;
mod rules;
mod screen;
mod size;
mod widget;
mod window_type;

pub use behavior::{AppRule, Behavior, FocusOnActivation};
pub use color::{Color, ColorRef, Palette, Palettes, Themed};
pub use layout::{FloatingLayout, LayoutSpec, MonadStyle, TreeTabStyle};
pub use margins::{CustomMargins, Margins};
pub use rules::{MatchRule, WindowProps};
pub use screen::{Bar, BarSpec, Screen, ScreenRole, ScreenSpec, WallpaperMode};
pub use size::Size;
pub use widget::{HighlightMethod, Section, WidgetDefaults, WidgetKind, WidgetSpec};
pub use window_type::WindowType;
