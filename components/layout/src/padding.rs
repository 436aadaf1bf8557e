//! Edge insets applied around the rows of a wrap panel.

use crate::{Orientation, UvMeasure};

/// Insets applied to the four edges of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    top: f32,
    bottom: f32,
    leading: f32,
    trailing: f32,
}

#[allow(clippy::cast_possible_truncation)]
impl<T: Into<f64>> From<T> for EdgeInsets {
    fn from(value: T) -> Self {
        let v = value.into() as f32;
        Self::all(v)
    }
}

impl Default for EdgeInsets {
    fn default() -> Self {
        Self::all(0.0)
    }
}

impl EdgeInsets {
    /// Creates an [`EdgeInsets`] value with explicit edges.
    #[must_use]
    pub const fn new(top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self {
            top,
            bottom,
            leading,
            trailing,
        }
    }

    /// Returns equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal inset.
    #[must_use]
    pub const fn horizontal(&self) -> f32 {
        self.leading + self.trailing
    }

    /// Total vertical inset.
    #[must_use]
    pub const fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Leading and top insets expressed along the given orientation.
    pub(crate) const fn start(&self, orientation: Orientation) -> UvMeasure {
        UvMeasure::new(orientation, self.leading, self.top)
    }

    /// Trailing and bottom insets expressed along the given orientation.
    pub(crate) const fn end(&self, orientation: Orientation) -> UvMeasure {
        UvMeasure::new(orientation, self.trailing, self.bottom)
    }
}
