//! Flow orientation and cross-axis alignment.
//!
//! A wrap panel lays children out along a *flow* axis (`U`) and stacks rows
//! along the *cross* axis (`V`). [`Orientation`] is the only place that knows
//! how `U`/`V` map onto width and height, so measuring and converting back to
//! screen space always agree.

use crate::{HorizontalAlignment, LayoutError, StretchAxis, VerticalAlignment};

/// Direction children flow in before wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Children flow left to right and wrap into new rows.
    #[default]
    Horizontal,
    /// Children flow top to bottom and wrap into new columns.
    Vertical,
}

impl Orientation {
    /// Maps a `(width, height)` pair onto `(u, v)`.
    #[must_use]
    pub const fn uv(self, width: f32, height: f32) -> (f32, f32) {
        match self {
            Self::Horizontal => (width, height),
            Self::Vertical => (height, width),
        }
    }

    /// Maps a `(u, v)` pair back onto `(width, height)`.
    ///
    /// The mapping is a swap, so it is its own inverse.
    #[must_use]
    pub const fn xy(self, u: f32, v: f32) -> (f32, f32) {
        self.uv(u, v)
    }

    /// Axis a panel with this orientation fills: it needs the whole flow
    /// extent to know where to wrap.
    #[must_use]
    pub const fn flow_axis(self) -> StretchAxis {
        match self {
            Self::Horizontal => StretchAxis::Horizontal,
            Self::Vertical => StretchAxis::Vertical,
        }
    }
}

impl TryFrom<u8> for Orientation {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Horizontal),
            1 => Ok(Self::Vertical),
            other => Err(LayoutError::UnsupportedOrientation(other)),
        }
    }
}

/// Cross-axis alignment, independent of which screen axis is the cross axis.
///
/// Horizontal panels read each child's [`VerticalAlignment`], vertical panels
/// read its [`HorizontalAlignment`]; both lower onto this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrossAlignment {
    /// Flush with the start of the cross extent.
    #[default]
    Start,
    /// Centered within the cross extent.
    Center,
    /// Flush with the end of the cross extent.
    End,
    /// Sized to the full cross extent.
    Stretch,
}

impl From<VerticalAlignment> for CrossAlignment {
    fn from(value: VerticalAlignment) -> Self {
        match value {
            VerticalAlignment::Top => Self::Start,
            VerticalAlignment::Center => Self::Center,
            VerticalAlignment::Bottom => Self::End,
            VerticalAlignment::Stretch => Self::Stretch,
        }
    }
}

impl From<HorizontalAlignment> for CrossAlignment {
    fn from(value: HorizontalAlignment) -> Self {
        match value {
            HorizontalAlignment::Left => Self::Start,
            HorizontalAlignment::Center => Self::Center,
            HorizontalAlignment::Right => Self::End,
            HorizontalAlignment::Stretch => Self::Stretch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_mapping_is_inverse() {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let (u, v) = orientation.uv(3.0, 7.0);
            assert_eq!(orientation.xy(u, v), (3.0, 7.0));
        }
        assert_eq!(Orientation::Vertical.uv(3.0, 7.0), (7.0, 3.0));
    }

    #[test]
    fn test_orientation_from_raw() {
        assert_eq!(Orientation::try_from(0_u8), Ok(Orientation::Horizontal));
        assert_eq!(Orientation::try_from(1_u8), Ok(Orientation::Vertical));
        assert_eq!(
            Orientation::try_from(2_u8),
            Err(LayoutError::UnsupportedOrientation(2))
        );
    }

    #[test]
    fn test_alignment_lowering() {
        assert_eq!(CrossAlignment::from(VerticalAlignment::Bottom), CrossAlignment::End);
        assert_eq!(CrossAlignment::from(HorizontalAlignment::Right), CrossAlignment::End);
        assert_eq!(CrossAlignment::from(HorizontalAlignment::Left), CrossAlignment::Start);
        assert_eq!(
            CrossAlignment::from(VerticalAlignment::Stretch),
            CrossAlignment::Stretch
        );
    }
}
