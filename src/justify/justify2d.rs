use std::{fmt, str::FromStr};

use crate::{foundation::error::ArgumentError, justify::justify1d::Justify1D};

/// Horizontal component of a [`Justify2D`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JustifyX {
    /// Left edge.
    Left,
    /// Horizontal middle.
    Center,
    /// Right edge.
    Right,
}

impl JustifyX {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl From<JustifyX> for Justify1D {
    fn from(x: JustifyX) -> Self {
        match x {
            JustifyX::Left => Justify1D::Start,
            JustifyX::Center => Justify1D::Center,
            JustifyX::Right => Justify1D::End,
        }
    }
}

/// Vertical component of a [`Justify2D`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JustifyY {
    /// Top edge.
    Top,
    /// Vertical middle.
    Center,
    /// Bottom edge.
    Bottom,
}

impl JustifyY {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

impl From<JustifyY> for Justify1D {
    fn from(y: JustifyY) -> Self {
        match y {
            JustifyY::Top => Justify1D::Start,
            JustifyY::Center => Justify1D::Center,
            JustifyY::Bottom => Justify1D::End,
        }
    }
}

/// Two-axis justification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Justify2D {
    /// Horizontal component.
    pub x: JustifyX,
    /// Vertical component.
    pub y: JustifyY,
}

// Single-word codes, expanded to (y word, x word).
const ONE_WORD_ALIASES: &[(&str, (&str, &str))] = &[
    ("center", ("center", "center")),
    ("left", ("center", "left")),
    ("right", ("center", "right")),
    ("top", ("top", "center")),
    ("bottom", ("bottom", "center")),
];

impl Justify2D {
    /// Centered on both axes.
    pub const CENTER: Self = Self {
        x: JustifyX::Center,
        y: JustifyY::Center,
    };

    /// Top-left corner.
    pub const TOP_LEFT: Self = Self {
        x: JustifyX::Left,
        y: JustifyY::Top,
    };

    /// Construct from components.
    pub const fn new(x: JustifyX, y: JustifyY) -> Self {
        Self { x, y }
    }

    /// Parse a justification code such as `"top left"`, `"bottom"` or `"center-right"`.
    ///
    /// Words are runs of ASCII alphanumerics; anything else separates them. A two-word code reads
    /// y first, then x. One-word codes go through a fixed alias table.
    pub fn parse(code: &str) -> Result<Self, ArgumentError> {
        let lower = code.to_ascii_lowercase();
        let words: Vec<&str> = lower
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        let (y_word, x_word) = match words.as_slice() {
            [word] => ONE_WORD_ALIASES
                .iter()
                .find(|(alias, _)| alias == word)
                .map(|(_, expansion)| *expansion)
                .ok_or_else(|| ArgumentError::UnsupportedJustifyAlias {
                    code: code.to_string(),
                    word: word.to_string(),
                })?,
            [y, x] => (*y, *x),
            _ => {
                return Err(ArgumentError::JustifyWordCount {
                    code: code.to_string(),
                    count: words.len(),
                });
            }
        };

        let x = JustifyX::from_word(x_word).ok_or_else(|| ArgumentError::UnsupportedJustifyX {
            code: code.to_string(),
            word: x_word.to_string(),
        })?;
        let y = JustifyY::from_word(y_word).ok_or_else(|| ArgumentError::UnsupportedJustifyY {
            code: code.to_string(),
            word: y_word.to_string(),
        })?;
        Ok(Self { x, y })
    }

    /// `(x, y)` pair.
    pub fn pair(self) -> (JustifyX, JustifyY) {
        (self.x, self.y)
    }
}

impl Default for Justify2D {
    fn default() -> Self {
        Self::CENTER
    }
}

impl fmt::Display for Justify2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.y.as_str(), self.x.as_str())
    }
}

impl FromStr for Justify2D {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/justify/justify2d.rs"]
mod tests;
