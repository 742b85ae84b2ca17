use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    pub const fn new(size: u32) -> Self {
        Self {
            top: size,
            right: size,
            bottom: size,
            left: size,
        }
    }

    pub const fn new_from_pair(top_and_bottom: u32, left_and_right: u32) -> Self {
        Self {
            top: top_and_bottom,
            right: left_and_right,
            bottom: top_and_bottom,
            left: left_and_right,
        }
    }

    pub const fn new_from_triple(top: u32, left_and_right: u32, bottom: u32) -> Self {
        Self {
            top,
            right: left_and_right,
            bottom,
            left: left_and_right,
        }
    }
}

/// Margins as written by the user: one value for every side or a list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum CustomMargins {
    Int(u32),
    // format: [top, right, bottom, left] as per HTML
    Vec(Vec<u32>),
}

impl TryFrom<CustomMargins> for Margins {
    type Error = &'static str;

    fn try_from(c: CustomMargins) -> Result<Self, Self::Error> {
        match c {
            CustomMargins::Int(size) => Ok(Self::new(size)),
            CustomMargins::Vec(vec) => match vec[..] {
                [all] => Ok(Self::new(all)),
                [vertical, horizontal] => Ok(Self::new_from_pair(vertical, horizontal)),
                [top, horizontal, bottom] => Ok(Self::new_from_triple(top, horizontal, bottom)),
                [top, right, bottom, left] => Ok(Self {
                    top,
                    right,
                    bottom,
                    left,
                }),
                [] => Err("Empty margin array"),
                _ => Err("Too many entries in margin array"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_margins_expand_like_css() {
        assert_eq!(Margins::try_from(CustomMargins::Int(10)), Ok(Margins::new(10)));
        assert_eq!(
            Margins::try_from(CustomMargins::Vec(vec![1, 2])),
            Ok(Margins {
                top: 1,
                right: 2,
                bottom: 1,
                left: 2
            })
        );
        assert_eq!(
            Margins::try_from(CustomMargins::Vec(vec![1, 2, 3])),
            Ok(Margins {
                top: 1,
                right: 2,
                bottom: 3,
                left: 2
            })
        );
        assert!(Margins::try_from(CustomMargins::Vec(vec![])).is_err());
        assert!(Margins::try_from(CustomMargins::Vec(vec![1, 2, 3, 4, 5])).is_err());
    }
}
