use std::str::FromStr;

use crate::foundation::error::ArgumentError;

/// How an anchored overlay relates to the panel edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorMode {
    /// Inside the panel.
    Inside,
    /// Outside the panel.
    Outside,
    /// Straddling the panel edge.
    Edge,
}

/// Horizontal anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorX {
    /// Left edge.
    Left,
    /// Horizontal middle.
    Center,
    /// Right edge.
    Right,
    /// Inner side of the left edge; outside mode only.
    InsideLeft,
    /// Inner side of the right edge; outside mode only.
    InsideRight,
}

/// Vertical anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorY {
    /// Top edge.
    Top,
    /// Vertical middle.
    Center,
    /// Bottom edge.
    Bottom,
    /// Inner side of the top edge; outside mode only.
    InsideTop,
    /// Inner side of the bottom edge; outside mode only.
    InsideBottom,
}

const OUTSIDE_ONLY: &[AnchorMode] = &[AnchorMode::Outside];

impl AnchorX {
    /// Modes this value may be combined with; `None` means any.
    pub fn allowed_modes(self) -> Option<&'static [AnchorMode]> {
        match self {
            Self::InsideLeft | Self::InsideRight => Some(OUTSIDE_ONLY),
            Self::Left | Self::Center | Self::Right => None,
        }
    }

    /// Whether this is one of the `inside-*` values.
    pub fn is_inside(self) -> bool {
        matches!(self, Self::InsideLeft | Self::InsideRight)
    }
}

impl AnchorY {
    /// Modes this value may be combined with; `None` means any.
    pub fn allowed_modes(self) -> Option<&'static [AnchorMode]> {
        match self {
            Self::InsideTop | Self::InsideBottom => Some(OUTSIDE_ONLY),
            Self::Top | Self::Center | Self::Bottom => None,
        }
    }

    /// Whether this is one of the `inside-*` values.
    pub fn is_inside(self) -> bool {
        matches!(self, Self::InsideTop | Self::InsideBottom)
    }
}

fn anchor_key(s: &str) -> String {
    s.trim().to_ascii_uppercase().replace('-', "_")
}

impl FromStr for AnchorMode {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match anchor_key(s).as_str() {
            "INSIDE" => Ok(Self::Inside),
            "OUTSIDE" => Ok(Self::Outside),
            "EDGE" => Ok(Self::Edge),
            _ => Err(ArgumentError::UnknownAnchor {
                axis: "mode",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for AnchorX {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match anchor_key(s).as_str() {
            "LEFT" => Ok(Self::Left),
            "CENTER" => Ok(Self::Center),
            "RIGHT" => Ok(Self::Right),
            "INSIDE_LEFT" => Ok(Self::InsideLeft),
            "INSIDE_RIGHT" => Ok(Self::InsideRight),
            _ => Err(ArgumentError::UnknownAnchor {
                axis: "x",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for AnchorY {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match anchor_key(s).as_str() {
            "TOP" => Ok(Self::Top),
            "CENTER" => Ok(Self::Center),
            "BOTTOM" => Ok(Self::Bottom),
            "INSIDE_TOP" => Ok(Self::InsideTop),
            "INSIDE_BOTTOM" => Ok(Self::InsideBottom),
            _ => Err(ArgumentError::UnknownAnchor {
                axis: "y",
                value: s.to_string(),
            }),
        }
    }
}

/// Argument accepted by [`Anchor2D::valid`]: the enum itself or its name.
pub trait IntoAnchor<T> {
    /// Resolve to the anchor enum.
    fn into_anchor(self) -> Result<T, ArgumentError>;
}

impl<T> IntoAnchor<T> for T {
    fn into_anchor(self) -> Result<T, ArgumentError> {
        Ok(self)
    }
}

impl IntoAnchor<AnchorX> for &str {
    fn into_anchor(self) -> Result<AnchorX, ArgumentError> {
        self.parse()
    }
}

impl IntoAnchor<AnchorY> for &str {
    fn into_anchor(self) -> Result<AnchorY, ArgumentError> {
        self.parse()
    }
}

impl IntoAnchor<AnchorMode> for &str {
    fn into_anchor(self) -> Result<AnchorMode, ArgumentError> {
        self.parse()
    }
}

/// Anchor rules for overlays placed relative to a panel.
pub struct Anchor2D;

impl Anchor2D {
    /// Whether `(x, y)` may be used together under `mode`.
    ///
    /// `inside-*` values require [`AnchorMode::Outside`], and at most one axis may use one.
    pub fn valid(
        x: impl IntoAnchor<AnchorX>,
        y: impl IntoAnchor<AnchorY>,
        mode: impl IntoAnchor<AnchorMode>,
    ) -> Result<bool, ArgumentError> {
        let x = x.into_anchor()?;
        let y = y.into_anchor()?;
        let mode = mode.into_anchor()?;

        let x_ok = x.allowed_modes().is_none_or(|m| m.contains(&mode));
        let y_ok = y.allowed_modes().is_none_or(|m| m.contains(&mode));
        Ok(x_ok && y_ok && !(x.is_inside() && y.is_inside()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/justify/anchor.rs"]
mod tests;
