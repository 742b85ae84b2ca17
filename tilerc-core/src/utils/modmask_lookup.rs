use bitflags::bitflags;

bitflags! {
    /// Represents the state of modifier keys
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ModMask: u16 {
        /// Used as the zero value
        const Zero = 0;
        const Any = 1;
        const Shift = 1 << 1;
        const Control = 1 << 2;
        /// Mod1
        const Alt = 1 << 3;
        /// Mod2
        const NumLock = 1 << 4;
        const Mod3 = 1 << 5;
        /// Mod4
        const Super = 1 << 6;
        const Mod5 = 1 << 7;
    }
}

#[must_use]
pub fn into_modmask(keys: &[String]) -> ModMask {
    let mut mask = ModMask::Zero;
    for s in keys {
        mask |= into_mod(s);
    }
    // clean the mask
    mask.remove(ModMask::NumLock);
    mask.intersection(
        ModMask::Shift
            | ModMask::Control
            | ModMask::Alt
            | ModMask::Mod3
            | ModMask::Super
            | ModMask::Mod5,
    )
}

/// Modifier names are matched case-insensitively, so `mod1` and `Mod1` are the same key.
#[must_use]
pub fn into_mod(key: &str) -> ModMask {
    match key.to_ascii_lowercase().as_str() {
        "none" => ModMask::Any,
        "shift" => ModMask::Shift,
        "control" | "ctrl" => ModMask::Control,
        "mod1" | "alt" => ModMask::Alt,
        // NOTE: we are ignoring the state of Numlock
        // this is left here as a reminder
        // "mod2" | "numlock" => ModMask::NumLock,
        "mod3" => ModMask::Mod3,
        "mod4" | "super" => ModMask::Super,
        "mod5" => ModMask::Mod5,
        _ => ModMask::Zero,
    }
}

#[must_use]
pub fn is_valid_mod(key: &str) -> bool {
    into_mod(key) != ModMask::Zero
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_names() {
        assert_eq!(into_mod("mod1"), ModMask::Alt);
        assert_eq!(into_mod("Shift"), ModMask::Shift);
        assert!(is_valid_mod("None"));
        assert!(!is_valid_mod("modkey"));
        assert!(!is_valid_mod("Hyper"));
    }

    #[test]
    fn none_and_numlock_are_dropped_from_masks() {
        let keys = vec!["None".to_owned(), "Mod4".to_owned()];
        assert_eq!(into_modmask(&keys), ModMask::Super);
    }
}
