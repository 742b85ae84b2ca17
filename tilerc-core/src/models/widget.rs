use super::{ColorRef, Themed};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

/// Fields the host fills into a CPU widget's format string.
const CPU_FIELDS: &[&str] = &["load_percent", "freq_current", "freq_max", "freq_min"];

/// Fields the host fills into a memory widget's format string.
const MEMORY_FIELDS: &[&str] = &[
    "MemUsed",
    "MemTotal",
    "MemFree",
    "MemPercent",
    "Buffers",
    "Active",
    "Inactive",
    "Shmem",
    "SwapTotal",
    "SwapFree",
    "SwapUsed",
    "SwapPercent",
    "mm",
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightMethod {
    #[default]
    Border,
    Block,
    Text,
    Line,
}

/// What a status-bar widget shows. Rendering is done by the host.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// Empty space of a fixed width.
    Spacer { length: u32 },
    TextBox { text: String },
    /// One label per group, highlighted by state.
    GroupBox {
        highlight_method: HighlightMethod,
        active: ColorRef,
        inactive: ColorRef,
        this_current_screen_border: ColorRef,
        highlight_color: ColorRef,
    },
    WindowName,
    PulseVolume { fmt: String },
    Cpu { format: String },
    ThermalSensor,
    Memory { format: String },
    /// `format` is a `strftime` pattern.
    Clock { format: String },
    Systray,
}

impl WidgetKind {
    /// Check the format string against the fields the host provides.
    ///
    /// # Errors
    ///
    /// Returns a description of the first problem found.
    pub fn check_format(&self) -> Result<(), String> {
        match self {
            Self::Cpu { format } => check_fields(format, CPU_FIELDS),
            Self::Memory { format } => check_fields(format, MEMORY_FIELDS),
            Self::PulseVolume { fmt } => {
                let names = placeholders(fmt)?;
                match names.as_slice() {
                    [""] => Ok(()),
                    _ => Err(format!(
                        "`{fmt}` must contain exactly one `{{}}` placeholder"
                    )),
                }
            }
            Self::Clock { format } => {
                if StrftimeItems::new(format).any(|item| item == Item::Error) {
                    Err(format!("`{format}` is not a valid strftime pattern"))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }
}

/// Names of the `{name[:spec]}` placeholders in a python style format string.
fn placeholders(format: &str) -> Result<Vec<&str>, String> {
    let mut names = vec![];
    let mut rest = format;
    while let Some(start) = rest.find(&['{', '}'][..]) {
        let tail = &rest[start..];
        if tail.starts_with("{{") || tail.starts_with("}}") {
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('}') {
            return Err(format!("unmatched `}}` in `{format}`"));
        }
        let end = tail
            .find('}')
            .ok_or_else(|| format!("unclosed `{{` in `{format}`"))?;
        let field = &tail[1..end];
        names.push(field.split(':').next().unwrap_or_default());
        rest = &tail[end + 1..];
    }
    Ok(names)
}

fn check_fields(format: &str, known: &[&str]) -> Result<(), String> {
    for name in placeholders(format)? {
        if !known.contains(&name) {
            return Err(format!(
                "unknown field `{name}` in `{format}`, expected one of: {}",
                known.join(", ")
            ));
        }
    }
    Ok(())
}

/// Which part of the bar a widget belongs to. Secondary screens only carry
/// the parts that make sense once per screen.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Workspaces,
    Title,
    /// Resource meters, shown on the primary screen only.
    Status,
    /// There is one system tray per display server, so it lives on the primary screen.
    Tray,
    Clock,
}

impl Section {
    pub fn is_primary_only(self) -> bool {
        matches!(self, Self::Status | Self::Tray)
    }
}

/// Style applied to every widget that does not set its own.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: u32,
    pub foreground: ColorRef,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WidgetSpec {
    pub kind: WidgetKind,
    pub section: Section,
    pub foreground: Option<ColorRef>,
    pub background: Option<ColorRef>,
    pub font: Option<String>,
    pub fontsize: Option<u32>,
    pub padding: Option<u32>,
}

impl WidgetSpec {
    pub fn new(kind: WidgetKind, section: Section) -> Self {
        Self {
            kind,
            section,
            foreground: None,
            background: None,
            font: None,
            fontsize: None,
            padding: None,
        }
    }

    #[must_use]
    pub fn foreground(mut self, color: ColorRef) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub fn background(mut self, color: ColorRef) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn fontsize(mut self, fontsize: u32) -> Self {
        self.fontsize = Some(fontsize);
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Fill every unset style field from `defaults`.
    #[must_use]
    pub fn with_defaults(mut self, defaults: &WidgetDefaults) -> Self {
        self.font.get_or_insert_with(|| defaults.font.clone());
        self.fontsize.get_or_insert(defaults.fontsize);
        self.padding.get_or_insert(defaults.padding);
        self.foreground
            .get_or_insert_with(|| defaults.foreground.clone());
        self
    }

    pub fn is_tray(&self) -> bool {
        self.kind == WidgetKind::Systray
    }
}

impl Themed for WidgetSpec {
    fn color_refs(&self) -> Vec<&ColorRef> {
        let mut refs = self.foreground.color_refs();
        refs.extend(self.background.color_refs());
        if let WidgetKind::GroupBox {
            active,
            inactive,
            this_current_screen_border,
            highlight_color,
            ..
        } = &self.kind
        {
            refs.extend([active, inactive, this_current_screen_border, highlight_color]);
        }
        refs
    }

    fn color_refs_mut(&mut self) -> Vec<&mut ColorRef> {
        let mut refs = self.foreground.color_refs_mut();
        refs.extend(self.background.color_refs_mut());
        if let WidgetKind::GroupBox {
            active,
            inactive,
            this_current_screen_border,
            highlight_color,
            ..
        } = &mut self.kind
        {
            refs.extend([active, inactive, this_current_screen_border, highlight_color]);
        }
        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_names() {
        assert_eq!(
            placeholders("󰍛 {MemUsed:.0f}M/{MemTotal:.0f}M").unwrap(),
            ["MemUsed", "MemTotal"]
        );
        assert_eq!(placeholders("墳 {}").unwrap(), [""]);
        assert!(placeholders("{{literal}}").unwrap().is_empty());
        assert!(placeholders("{load_percent").is_err());
        assert!(placeholders("load}").is_err());
    }

    #[test]
    fn check_widget_formats() {
        let cpu = WidgetKind::Cpu {
            format: " {load_percent:04}%".to_owned(),
        };
        assert!(cpu.check_format().is_ok());
        let bad_cpu = WidgetKind::Cpu {
            format: "{load}%".to_owned(),
        };
        assert!(bad_cpu.check_format().is_err());
        let volume = WidgetKind::PulseVolume {
            fmt: "{} {}".to_owned(),
        };
        assert!(volume.check_format().is_err());
        let clock = WidgetKind::Clock {
            format: " %I:%M %p".to_owned(),
        };
        assert!(clock.check_format().is_ok());
        let bad_clock = WidgetKind::Clock {
            format: "%Q".to_owned(),
        };
        assert!(bad_clock.check_format().is_err());
    }

    #[test]
    fn defaults_only_fill_unset_fields() {
        let defaults = WidgetDefaults {
            font: "SF Pro Text Regular".to_owned(),
            fontsize: 13,
            padding: 3,
            foreground: ColorRef::named("fuji", "C"),
        };
        let text = WidgetSpec::new(
            WidgetKind::TextBox {
                text: "-".to_owned(),
            },
            Section::Status,
        )
        .padding(0)
        .fontsize(15)
        .with_defaults(&defaults);
        assert_eq!(text.padding, Some(0));
        assert_eq!(text.fontsize, Some(15));
        assert_eq!(text.font.as_deref(), Some("SF Pro Text Regular"));
        assert_eq!(text.foreground, Some(ColorRef::named("fuji", "C")));
    }

    #[test]
    fn group_box_colors_are_themed() {
        let group_box = WidgetSpec::new(
            WidgetKind::GroupBox {
                highlight_method: HighlightMethod::Text,
                active: ColorRef::named("gruvbox_material", "fg_4"),
                inactive: ColorRef::named("fuji", "J"),
                this_current_screen_border: ColorRef::named("gruvbox_material", "purple_2"),
                highlight_color: ColorRef::named("gruvbox_material", "orange"),
            },
            Section::Workspaces,
        )
        .background(ColorRef::named("gruvbox_material", "bg"));
        assert_eq!(group_box.color_refs().len(), 5);
    }
}
