use std::str::FromStr;

use crate::foundation::error::ArgumentError;

/// Position along a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify1D {
    /// Left or top.
    Start,
    /// Middle.
    Center,
    /// Right or bottom.
    End,
}

impl Justify1D {
    /// Case-insensitive lookup; `left`/`top` alias start and `right`/`bottom` alias end.
    pub fn from_name(name: &str) -> Result<Self, ArgumentError> {
        match name.to_ascii_lowercase().as_str() {
            "start" | "left" | "top" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" | "right" | "bottom" => Ok(Self::End),
            _ => Err(ArgumentError::UnknownJustifyName {
                name: name.to_string(),
            }),
        }
    }

    /// Index of the origin tile among `tile_count` tiles.
    pub fn origin_index(self, tile_count: u32) -> u32 {
        match self {
            Self::Start => 0,
            Self::Center => tile_count / 2,
            Self::End => tile_count.saturating_sub(1),
        }
    }

    /// Offset at which a window of `length` starts inside a span of `span`.
    pub fn crop_offset(self, span: u32, length: u32) -> u32 {
        let slack = span.saturating_sub(length);
        match self {
            Self::Start => 0,
            Self::Center => slack / 2,
            Self::End => slack,
        }
    }
}

impl FromStr for Justify1D {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Axis a 1-D feature tiles along.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Tiles repeat left to right.
    #[default]
    Horizontal,
    /// Tiles repeat top to bottom.
    Vertical,
}

impl Direction {
    /// Case-insensitive lookup of `horizontal`/`vertical`.
    pub fn from_name(name: &str) -> Result<Self, ArgumentError> {
        match name.to_ascii_lowercase().as_str() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(ArgumentError::UnknownDirection {
                name: name.to_string(),
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/justify/justify1d.rs"]
mod tests;
