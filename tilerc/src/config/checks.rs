use super::Config;
use std::collections::{HashMap, HashSet};
use lefthk_core::xkeysym_lookup;
use std::fmt;
use tilerc_core::models::{Section, Themed, WidgetKind};
use tilerc_core::utils::modmask_lookup;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

/// A problem found in a configuration. Errors are what the host would refuse
/// to start with; warnings still load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    /// The part of the configuration the issue is about.
    pub subject: String,
    pub message: String,
}

impl Issue {
    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            subject: subject.into(),
            message: message.into(),
        }
    }

    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "\x1b[1;93mWARN:",
            Severity::Error => "\x1b[1;91mERROR:",
        };
        write!(f, "{label}\x1b[0m\x1b[1m {}: {}\x1b[0m", self.subject, self.message)
    }
}

impl Config {
    /// Run every check, in the order `tilerc-check` reports them.
    pub fn check_all(&self, verbose: bool) -> Vec<Issue> {
        let mut issues = self.check_log_level(verbose);
        issues.extend(self.check_keybinds(verbose));
        issues.extend(self.check_mouse(verbose));
        issues.extend(self.check_groups(verbose));
        issues.extend(self.check_colors(verbose));
        issues.extend(self.check_layouts(verbose));
        issues.extend(self.check_widgets(verbose));
        issues.extend(self.check_screens(verbose));
        issues
    }

    pub fn check_log_level(&self, verbose: bool) -> Vec<Issue> {
        if verbose {
            println!("Trying to parse log_level.");
        }
        match EnvFilter::builder().parse(&self.log_level) {
            Ok(_) => vec![],
            Err(err) => vec![Issue::error(
                "log_level",
                format!("`{}` is invalid: {err}", self.log_level),
            )],
        }
    }

    /// Checks every literal and generated binding: the command converts, the
    /// key and modifiers exist, and no two bindings share a key combination.
    pub fn check_keybinds(&self, verbose: bool) -> Vec<Issue> {
        let mut issues = vec![];
        if !modmask_lookup::is_valid_mod(&self.modkey) {
            issues.push(Issue::error(
                "modkey",
                format!("`{}` is not a valid modifier", self.modkey),
            ));
        }
        let mut bindings = HashMap::new();
        for keybind in self.raw_bindings() {
            if verbose {
                println!(
                    "Keybind: {:?} value field is empty: {}",
                    keybind,
                    keybind.value.is_empty()
                );
            }
            let subject = format!(
                "keybind {}+{}",
                keybind.mapped_modifier(&self.modkey).join("+"),
                keybind.key
            );
            if let Err(err) = keybind.try_convert_to_core_keybind(self) {
                issues.push(Issue::error(&subject, err.to_string()));
            }
            if xkeysym_lookup::into_keysym(&keybind.key).is_none() {
                issues.push(Issue::error(
                    &subject,
                    format!("Key `{}` is not valid", keybind.key),
                ));
            }
            let modifiers = keybind.mapped_modifier(&self.modkey);
            for m in &modifiers {
                if !modmask_lookup::is_valid_mod(m) {
                    issues.push(Issue::error(&subject, format!("Modifier `{m}` is not valid")));
                }
            }

            let combo = (modmask_lookup::into_modmask(&modifiers), keybind.key.clone());
            if let Some(conflict) = bindings.insert(combo, keybind.command) {
                issues.push(Issue::error(
                    subject,
                    format!(
                        "Multiple commands bound to this key combination: {conflict:?} and {:?}. \
                        Only the last one is kept.",
                        keybind.command
                    ),
                ));
            }
        }
        issues
    }

    pub fn check_mouse(&self, verbose: bool) -> Vec<Issue> {
        let mut issues = vec![];
        for binding in self.mapped_mouse() {
            if verbose {
                println!("Mouse binding: {binding:?}");
            }
            let subject = format!("mouse {:?}", binding.button);
            if binding.modifier.is_empty() {
                issues.push(Issue::warning(
                    &subject,
                    "No modifier is set, this will cause windows to move/resize with just a mouse press.",
                ));
            }
            for m in &binding.modifier {
                if !modmask_lookup::is_valid_mod(m) {
                    issues.push(Issue::error(&subject, format!("Modifier `{m}` is not valid")));
                }
            }
        }
        issues
    }

    /// Group names are unique, every group has a hotkey, and the scratchpad
    /// holds well formed dropdowns.
    pub fn check_groups(&self, verbose: bool) -> Vec<Issue> {
        let mut issues = vec![];
        if verbose {
            println!("Checking {} groups.", self.groups.len());
        }
        if self.groups.is_empty() {
            issues.push(Issue::error("groups", "At least one group is required"));
        }
        let mut names = HashSet::new();
        for group in &self.groups {
            if group.name.is_empty() {
                issues.push(Issue::error("groups", "Group names must not be empty"));
            } else if !names.insert(group.name.as_str()) {
                issues.push(Issue::error(
                    "groups",
                    format!("Group `{}` is defined more than once", group.name),
                ));
            }
        }

        let hotkeys = self.group_hotkeys.chars().count();
        if hotkeys < self.groups.len() {
            issues.push(Issue::warning(
                "group_hotkeys",
                format!(
                    "{} groups but only {hotkeys} hotkeys, the last groups have no binding",
                    self.groups.len()
                ),
            ));
        } else if hotkeys > self.groups.len() {
            issues.push(Issue::warning(
                "group_hotkeys",
                format!(
                    "{hotkeys} hotkeys but only {} groups, the extra hotkeys are ignored",
                    self.groups.len()
                ),
            ));
        }

        let Some(scratchpad) = &self.scratchpad else {
            return issues;
        };
        let subject = format!("scratchpad `{}`", scratchpad.name);
        if names.contains(scratchpad.name.as_str()) {
            issues.push(Issue::error(&subject, "Scratchpad name clashes with a group"));
        }
        if scratchpad.dropdowns.is_empty() {
            issues.push(Issue::warning(&subject, "Scratchpad holds no dropdown"));
        }
        let mut dropdowns = HashSet::new();
        for dropdown in &scratchpad.dropdowns {
            if !dropdowns.insert(dropdown.name.as_str()) {
                issues.push(Issue::error(
                    &subject,
                    format!("Dropdown `{}` is defined more than once", dropdown.name),
                ));
            }
            if dropdown.command.trim().is_empty() {
                issues.push(Issue::error(
                    &subject,
                    format!("Dropdown `{}` has no command", dropdown.name),
                ));
            }
            for (field, range) in dropdown.out_of_bounds() {
                issues.push(Issue::error(
                    &subject,
                    format!("Dropdown `{}` needs `{field}` {range}", dropdown.name),
                ));
            }
        }
        issues
    }

    /// Every colour reference has to name a palette and a key that exist.
    pub fn check_colors(&self, verbose: bool) -> Vec<Issue> {
        let mut themed: Vec<(String, Vec<_>)> = vec![];
        for (i, layout) in self.layouts.iter().enumerate() {
            themed.push((format!("layouts[{i}] ({})", layout.name()), layout.color_refs()));
        }
        themed.push((
            "floating_layout".to_owned(),
            self.floating_layout.color_refs(),
        ));
        themed.push((
            "widget_defaults".to_owned(),
            vec![&self.widget_defaults.foreground],
        ));
        for (i, widget) in self.bar_widgets.iter().enumerate() {
            themed.push((format!("bar_widgets[{i}]"), widget.color_refs()));
        }
        for (i, screen) in self.screens.iter().enumerate() {
            if let Some(bar) = &screen.top {
                themed.push((format!("screens[{i}].top"), vec![&bar.background]));
            }
        }

        let mut issues = vec![];
        for (subject, refs) in themed {
            for color in refs {
                if verbose {
                    println!("Resolving {color} for {subject}");
                }
                if let Err(err) = color.resolve(&self.palettes) {
                    issues.push(Issue::error(&subject, err.to_string()));
                }
            }
        }
        issues
    }

    pub fn check_layouts(&self, verbose: bool) -> Vec<Issue> {
        let mut issues = vec![];
        if self.layouts.is_empty() {
            issues.push(Issue::error("layouts", "At least one layout is required"));
        }
        for (i, layout) in self.layouts.iter().enumerate() {
            if verbose {
                println!("Checking layout {}", layout.name());
            }
            if let Err(err) = layout.margins() {
                issues.push(Issue::error(
                    format!("layouts[{i}] ({})", layout.name()),
                    err.to_string(),
                ));
            }
        }
        for (i, rule) in self.floating_layout.float_rules.iter().enumerate() {
            if rule.is_empty() {
                issues.push(Issue::warning(
                    format!("floating_layout.float_rules[{i}]"),
                    "Rule sets no field and matches no window",
                ));
            }
        }
        issues
    }

    /// Format strings use the fields the host provides, and the tray is
    /// placed where secondary screens leave it out.
    pub fn check_widgets(&self, verbose: bool) -> Vec<Issue> {
        let mut issues = vec![];
        let mut trays = 0;
        for (i, widget) in self.bar_widgets.iter().enumerate() {
            if verbose {
                println!("Checking widget {:?}", widget.kind);
            }
            let subject = format!("bar_widgets[{i}]");
            if let Err(err) = widget.kind.check_format() {
                issues.push(Issue::error(&subject, err));
            }
            if widget.kind == WidgetKind::Systray {
                trays += 1;
                if widget.section != Section::Tray {
                    issues.push(Issue::error(
                        &subject,
                        "The tray must be in the `Tray` section, there can only be one per display",
                    ));
                }
            }
        }
        if trays > 1 {
            issues.push(Issue::error(
                "bar_widgets",
                format!("{trays} trays configured, only one can be shown"),
            ));
        }
        issues
    }

    pub fn check_screens(&self, verbose: bool) -> Vec<Issue> {
        let mut issues = vec![];
        let primaries = self.screens.iter().filter(|s| s.role.is_primary()).count();
        if primaries != 1 {
            issues.push(Issue::warning(
                "screens",
                format!("Expected exactly one primary screen, found {primaries}"),
            ));
        }
        for (i, (spec, screen)) in self.screens.iter().zip(self.screens()).enumerate() {
            let subject = format!("screens[{i}]");
            if let Some(wallpaper) = &screen.wallpaper {
                if verbose {
                    println!("Looking for wallpaper {}", wallpaper.display());
                }
                if !wallpaper.exists() {
                    issues.push(Issue::warning(
                        &subject,
                        format!("Wallpaper `{}` does not exist", wallpaper.display()),
                    ));
                }
            }
            if let Some(bar) = &spec.top {
                if bar.size == 0 {
                    issues.push(Issue::error(&subject, "Bar size must be greater than 0"));
                }
                if !(0.0..=1.0).contains(&bar.opacity) {
                    issues.push(Issue::error(&subject, "Bar opacity must be within [0, 1]"));
                }
            }
        }
        issues
    }
}
