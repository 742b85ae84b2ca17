use super::{BaseCommand, Config, Keybind};
use tilerc_core::config::{DropDown, MouseAction, MouseButton};
use tilerc_core::models::{
    BarSpec, Behavior, Color, ColorRef, CustomMargins, FloatingLayout, HighlightMethod, LayoutSpec,
    MatchRule, MonadStyle, Palette, Palettes, ScreenRole, ScreenSpec, Section, Size, TreeTabStyle,
    WallpaperMode, WidgetDefaults, WidgetKind, WidgetSpec,
};
use tilerc_core::{Group, MouseBinding, ScratchPad};

const TERMINAL: &str = "kitty";
const ROFI: &str = "./.config/rofi/scripts/launcher_t7";
const BRAVE: &str = "brave-nightly";
const BRAVE_GITHUB: &str = "brave-nightly \"github.com/GaboSO21\"";
const BRAVE_TEAMS: &str = "brave-nightly \"teams.microsoft.com\"";
const SCROT: &str = "scrot -s '/home/gabo-arch/Pictures/screenshots/%F_%T_$wx$h.png' -e 'xclip -selection clipboard -target image/png -i $f'";

const FONT: &str = "SF Pro Text Regular";
const TRANSPARENT: &str = "#00000000";

const GRUVBOX_MATERIAL: &[(&str, &str)] = &[
    ("bg", "#282828"),
    ("bg0_h", "#1d2021"),
    ("bg_1", "#3c3836"),
    ("bg_2", "#504945"),
    ("bg_3", "#665c54"),
    ("bg_4", "#7c6f64"),
    ("red", "#cc241d"),
    ("red_2", "#fb4934"),
    ("green", "#98971a"),
    ("green_2", "#b8bb26"),
    ("yellow", "#d79921"),
    ("yellow_2", "#fabd2f"),
    ("orange", "#d65d0e"),
    ("orange_2", "#fe8019"),
    ("blue", "#458588"),
    ("blue_2", "#83a598"),
    ("purple", "#b16286"),
    ("purple_2", "#d3869b"),
    ("aqua", "#689d6a"),
    ("aqua_2", "#8ec07c"),
    ("gray", "#a89984"),
    ("gray_2", "#928374"),
    ("gray_3", "#a89984"),
    ("fg_0", "#fbf1c7"),
    ("fg_1", "#ebdbb2"),
    ("fg_2", "#d5c4a1"),
    ("fg_3", "#bdae93"),
    ("fg_4", "#a89984"),
];

const FUJI: &[(&str, &str)] = &[
    ("A", "#304D57"),
    ("B", "#16252E"),
    ("C", "#F6f6E6"),
    ("D", "#E3E3C6"),
    ("E", "#E0C77A"),
    ("F", "#C0A05B"),
    ("H", "#5A7E7A"),
    ("I", "#8DAC97"),
    ("J", "#716C4B"),
    ("K", "#C6C9A8"),
];

fn gm(key: &str) -> ColorRef {
    ColorRef::named("gruvbox_material", key)
}

fn fuji(key: &str) -> ColorRef {
    ColorRef::named("fuji", key)
}

fn transparent() -> ColorRef {
    ColorRef::literal(TRANSPARENT)
}

fn palette(colors: &[(&str, &str)]) -> Palette {
    colors
        .iter()
        .filter_map(|(name, hex)| Some(((*name).to_owned(), hex.parse::<Color>().ok()?)))
        .collect()
}

fn palettes() -> Palettes {
    let mut palettes = Palettes::new();
    palettes.insert("gruvbox_material".to_owned(), palette(GRUVBOX_MATERIAL));
    palettes.insert("fuji".to_owned(), palette(FUJI));
    palettes
}

#[allow(clippy::too_many_lines)]
fn keybinds() -> Vec<Keybind> {
    vec![
        // Mod + h/l/j/k => move focus
        Keybind::new(BaseCommand::FocusLeft, &["modkey"], "h").describe("Move focus to left"),
        Keybind::new(BaseCommand::FocusRight, &["modkey"], "l").describe("Move focus to right"),
        Keybind::new(BaseCommand::FocusDown, &["modkey"], "j").describe("Move focus down"),
        Keybind::new(BaseCommand::FocusUp, &["modkey"], "k").describe("Move focus up"),
        // Mod + Shift + h/l/j/k => move the focused window
        Keybind::new(BaseCommand::ShuffleLeft, &["modkey", "Shift"], "h")
            .describe("Move window to the left"),
        Keybind::new(BaseCommand::ShuffleRight, &["modkey", "Shift"], "l")
            .describe("Move window to the right"),
        Keybind::new(BaseCommand::ShuffleDown, &["modkey", "Shift"], "j")
            .describe("Move window down"),
        Keybind::new(BaseCommand::ShuffleUp, &["modkey", "Shift"], "k").describe("Move window up"),
        // Mod + Ctrl + h/l/j/k => grow the focused window
        Keybind::new(BaseCommand::GrowLeft, &["modkey", "Control"], "h")
            .describe("Grow window to the left"),
        Keybind::new(BaseCommand::GrowRight, &["modkey", "Control"], "l")
            .describe("Grow window to the right"),
        Keybind::new(BaseCommand::GrowDown, &["modkey", "Control"], "j")
            .describe("Grow window down"),
        Keybind::new(BaseCommand::GrowUp, &["modkey", "Control"], "k").describe("Grow window up"),
        Keybind::new(BaseCommand::Normalize, &["modkey"], "n").describe("Reset all window sizes"),
        // Mod + Shift + Return belongs to the scratchpad terminal
        Keybind::new(BaseCommand::ToggleSplit, &["modkey", "Control"], "Return")
            .describe("Toggle between split and unsplit sides of stack"),
        Keybind::new(BaseCommand::ToggleFullScreen, &["modkey"], "f")
            .describe("Toggle fullscreen"),
        Keybind::new(BaseCommand::ToggleFloating, &["modkey"], "space")
            .describe("Toggle floating"),
        Keybind::new(BaseCommand::Execute, &["modkey"], "Return")
            .value(TERMINAL)
            .describe("Launch terminal"),
        Keybind::new(BaseCommand::Execute, &["modkey"], "d")
            .value(ROFI)
            .describe("Launch rofi"),
        Keybind::new(BaseCommand::Execute, &["modkey"], "b")
            .value(BRAVE)
            .describe("Launch brave browser"),
        Keybind::new(BaseCommand::Execute, &["modkey"], "g")
            .value(BRAVE_GITHUB)
            .describe("Launch brave browser on github"),
        Keybind::new(BaseCommand::Execute, &["modkey"], "t")
            .value(BRAVE_TEAMS)
            .describe("Launch brave browser on teams"),
        Keybind::new(BaseCommand::Execute, &["modkey", "Shift"], "s")
            .value(SCROT)
            .describe("Take screenshot"),
        Keybind::new(BaseCommand::NextLayout, &["modkey"], "Tab")
            .describe("Toggle between layouts"),
        Keybind::new(BaseCommand::CloseWindow, &["modkey"], "q").describe("Kill focused window"),
        Keybind::new(BaseCommand::ReloadConfig, &["modkey", "Control"], "r")
            .describe("Reload the config"),
        Keybind::new(BaseCommand::Shutdown, &["modkey", "Control"], "q")
            .describe("Shutdown the window manager"),
        Keybind::new(BaseCommand::ToggleScratchPad, &["modkey", "Shift"], "Return")
            .value("term")
            .describe("Toggle the drop-down terminal"),
    ]
}

fn groups() -> Vec<Group> {
    ["", "", "", "󰙯", "", "", "󰍳", "󰶈", "󰑴"]
        .into_iter()
        .map(Group::new)
        .collect()
}

fn scratchpad() -> ScratchPad {
    ScratchPad {
        name: "scratchpad".to_owned(),
        dropdowns: vec![DropDown {
            name: "term".to_owned(),
            command: TERMINAL.to_owned(),
            opacity: 0.9,
            x: Size::Fraction(0.1),
            y: Size::Fraction(0.2),
            width: Size::Fraction(0.8),
            height: Size::Fraction(0.5),
        }],
    }
}

fn layouts() -> Vec<LayoutSpec> {
    vec![
        LayoutSpec::MonadTall(MonadStyle {
            margin: CustomMargins::Int(10),
            border_width: 1,
            border_focus: gm("bg_3"),
            border_normal: gm("bg"),
        }),
        LayoutSpec::TreeTab(TreeTabStyle {
            sections: vec!["Windows".to_owned()],
            active_bg: fuji("I"),
            bg_color: transparent(),
            font: FONT.to_owned(),
            fontsize: 13,
            section_top: 30,
        }),
    ]
}

fn floating_layout() -> FloatingLayout {
    FloatingLayout {
        border_focus: gm("fg_0"),
        border_normal: None,
        border_width: 1,
        include_default_rules: true,
        float_rules: vec![
            MatchRule::wm_class("confirmreset"),
            MatchRule::wm_class("makebranch"),
            MatchRule::wm_class("maketag"),
            MatchRule::wm_class("ssh-askpass"),
            MatchRule::title("branchdialog"),
            MatchRule::title("pinentry"),
        ],
    }
}

fn spacer(length: u32, section: Section) -> WidgetSpec {
    WidgetSpec::new(WidgetKind::Spacer { length }, section).background(transparent())
}

/// The rounded cap drawn around the group box.
fn cap(glyph: &str) -> WidgetSpec {
    WidgetSpec::new(
        WidgetKind::TextBox {
            text: glyph.to_owned(),
        },
        Section::Workspaces,
    )
    .padding(0)
    .fontsize(30)
    .foreground(gm("bg"))
    .background(transparent())
}

fn bar_widgets() -> Vec<WidgetSpec> {
    vec![
        spacer(3, Section::Workspaces),
        cap(""),
        WidgetSpec::new(
            WidgetKind::GroupBox {
                highlight_method: HighlightMethod::Text,
                active: gm("fg_4"),
                inactive: fuji("J"),
                this_current_screen_border: gm("purple_2"),
                highlight_color: gm("orange"),
            },
            Section::Workspaces,
        )
        .foreground(gm("orange"))
        .background(gm("bg")),
        cap(""),
        WidgetSpec::new(WidgetKind::WindowName, Section::Title)
            .fontsize(12)
            .foreground(gm("fg_2")),
        spacer(10, Section::Title),
        WidgetSpec::new(
            WidgetKind::PulseVolume {
                fmt: "墳 {}".to_owned(),
            },
            Section::Status,
        )
        .foreground(gm("fg_2"))
        .background(transparent()),
        spacer(10, Section::Status),
        spacer(10, Section::Status),
        WidgetSpec::new(
            WidgetKind::Cpu {
                format: " {load_percent:04}%".to_owned(),
            },
            Section::Status,
        )
        .foreground(gm("fg_2"))
        .background(transparent()),
        WidgetSpec::new(WidgetKind::Systray, Section::Tray),
        WidgetSpec::new(
            WidgetKind::TextBox {
                text: "-".to_owned(),
            },
            Section::Status,
        )
        .padding(0)
        .fontsize(15)
        .foreground(gm("fg_2"))
        .background(transparent()),
        WidgetSpec::new(WidgetKind::ThermalSensor, Section::Status)
            .foreground(gm("fg_2"))
            .background(transparent()),
        spacer(10, Section::Status),
        WidgetSpec::new(
            WidgetKind::Memory {
                format: "󰍛 {MemUsed:.0f}M/{MemTotal:.0f}M".to_owned(),
            },
            Section::Status,
        )
        .foreground(gm("fg_2"))
        .background(transparent()),
        spacer(10, Section::Status),
        spacer(10, Section::Status),
        WidgetSpec::new(
            WidgetKind::Clock {
                format: " %I:%M %p".to_owned(),
            },
            Section::Clock,
        )
        .foreground(gm("fg_2"))
        .background(transparent()),
        spacer(10, Section::Clock),
    ]
}

fn mouse() -> Vec<MouseBinding> {
    vec![
        MouseBinding::drag(
            MouseButton::Button1,
            MouseAction::GetPosition,
            MouseAction::SetPositionFloating,
        ),
        MouseBinding::drag(
            MouseButton::Button3,
            MouseAction::GetSize,
            MouseAction::SetSizeFloating,
        ),
        MouseBinding::click(MouseButton::Button2, MouseAction::BringToFront),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            modkey: "Mod1".to_owned(),
            log_level: "info".to_owned(),
            keybind: keybinds(),
            groups: groups(),
            group_hotkeys: "123456789".to_owned(),
            scratchpad: Some(scratchpad()),
            palettes: palettes(),
            layouts: layouts(),
            floating_layout: floating_layout(),
            widget_defaults: WidgetDefaults {
                font: FONT.to_owned(),
                fontsize: 13,
                padding: 3,
                foreground: fuji("C"),
            },
            bar_widgets: bar_widgets(),
            screens: vec![ScreenSpec {
                wallpaper: Some("~/Pictures/wallpaper.png".to_owned()),
                wallpaper_mode: Some(WallpaperMode::Stretch),
                role: ScreenRole::Primary,
                top: Some(BarSpec {
                    size: 20,
                    background: transparent(),
                    opacity: 1.0,
                }),
            }],
            mouse: mouse(),
            autostart: Some("~/.config/qtile/autostart.sh".to_owned()),
            behavior: Behavior::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_are_complete() {
        let palettes = palettes();
        assert_eq!(palettes["gruvbox_material"].len(), GRUVBOX_MATERIAL.len());
        assert_eq!(palettes["fuji"].len(), FUJI.len());
    }

    #[test]
    fn widget_counts() {
        let config = Config::default();
        assert_eq!(config.widgets(true).len(), 19);
        assert_eq!(config.widgets(false).len(), 8);
    }

    #[test]
    fn widget_backgrounds() {
        for widget in bar_widgets() {
            let expected = match widget.kind {
                WidgetKind::GroupBox { .. } => Some(gm("bg")),
                WidgetKind::WindowName | WidgetKind::Systray => None,
                _ => Some(transparent()),
            };
            assert_eq!(widget.background, expected, "{:?}", widget.kind);
        }
    }
}
