use crate::models::Size;
use serde::{Deserialize, Serialize};

/// A floating window toggled in and out of view. Geometry is relative to the screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DropDown {
    pub name: String,
    pub command: String,
    pub opacity: f32,
    // relative x of the dropdown, 0.1 means 10% of the screen width
    pub x: Size,
    // relative y of the dropdown, 0.2 means 20% of the screen height
    pub y: Size,
    pub width: Size,
    pub height: Size,
}

impl DropDown {
    /// Fields whose values fall outside the screen, each with the range it
    /// has to be in.
    pub fn out_of_bounds(&self) -> Vec<(&'static str, &'static str)> {
        let mut fields = vec![];
        if !(0.0..=1.0).contains(&self.opacity) {
            fields.push(("opacity", "within [0, 1]"));
        }
        for (name, size) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !size.is_within_screen() {
                fields.push((name, size.screen_range()));
            }
        }
        fields
    }
}

/// The hidden group holding the drop-down windows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScratchPad {
    pub name: String,
    pub dropdowns: Vec<DropDown>,
}

impl ScratchPad {
    pub fn dropdown(&self, name: &str) -> Option<&DropDown> {
        self.dropdowns.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term() -> DropDown {
        DropDown {
            name: "term".to_owned(),
            command: "kitty".to_owned(),
            opacity: 0.9,
            x: Size::Fraction(0.1),
            y: Size::Fraction(0.2),
            width: Size::Fraction(0.8),
            height: Size::Fraction(0.5),
        }
    }

    #[test]
    fn dropdown_lookup() {
        let scratchpad = ScratchPad {
            name: "scratchpad".to_owned(),
            dropdowns: vec![term()],
        };
        assert!(scratchpad.dropdown("term").is_some());
        assert!(scratchpad.dropdown("music").is_none());
    }

    #[test]
    fn dropdown_geometry_bounds() {
        assert!(term().out_of_bounds().is_empty());
        let oversized = DropDown {
            opacity: 1.5,
            width: Size::Fraction(1.2),
            ..term()
        };
        assert_eq!(
            oversized.out_of_bounds(),
            [("opacity", "within [0, 1]"), ("width", "within [0, 1]")]
        );
        let negative = DropDown {
            y: Size::Pixel(-20),
            height: Size::Pixel(400),
            ..term()
        };
        assert_eq!(negative.out_of_bounds(), [("y", ">= 0")]);
    }
}
