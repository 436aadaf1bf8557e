//! Axis-agnostic measures and rectangles.
//!
//! Working in `U`/`V` instead of width/height lets one packing loop serve both
//! horizontal and vertical panels.

use crate::{CrossAlignment, HorizontalAlignment, Orientation, Point, Rect, Size, VerticalAlignment};

/// A 2D extent along the flow (`u`) and cross (`v`) axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UvMeasure {
    /// Extent along the flow axis.
    pub u: f32,
    /// Extent along the cross axis.
    pub v: f32,
}

impl UvMeasure {
    /// The additive identity.
    pub const ZERO: Self = Self { u: 0.0, v: 0.0 };

    /// Maps a width/height pair onto flow and cross axes.
    ///
    /// Negative values pass through unchanged.
    #[must_use]
    pub const fn new(orientation: Orientation, width: f32, height: f32) -> Self {
        let (u, v) = orientation.uv(width, height);
        Self { u, v }
    }

    /// Maps a [`Size`] onto flow and cross axes.
    #[must_use]
    pub const fn from_size(orientation: Orientation, size: Size) -> Self {
        Self::new(orientation, size.width, size.height)
    }

    /// Returns a translated copy.
    #[must_use]
    pub const fn add(self, u: f32, v: f32) -> Self {
        Self {
            u: self.u + u,
            v: self.v + v,
        }
    }

    /// Converts back to a [`Size`]. Must use the orientation the measure was built with.
    #[must_use]
    pub const fn to_size(self, orientation: Orientation) -> Size {
        let (width, height) = orientation.xy(self.u, self.v);
        Size::new(width, height)
    }
}

/// A positioned, sized region in `U`/`V` space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UvRect {
    /// Offset of the region.
    pub position: UvMeasure,
    /// Extent of the region.
    pub size: UvMeasure,
}

impl UvRect {
    /// Creates a rect from a position and a size.
    #[must_use]
    pub const fn new(position: UvMeasure, size: UvMeasure) -> Self {
        Self { position, size }
    }

    /// Re-derives the cross-axis placement inside `max_extent`.
    ///
    /// Offsets are clamped at zero, so a child larger than `max_extent` stays
    /// flush with the start instead of being pushed off the row.
    #[must_use]
    pub fn with_cross_alignment(self, alignment: CrossAlignment, max_extent: f32) -> Self {
        match alignment {
            CrossAlignment::Start => self,
            CrossAlignment::Center => Self {
                position: self.position.add(0.0, ((max_extent - self.size.v) / 2.0).max(0.0)),
                size: self.size,
            },
            CrossAlignment::End => Self {
                position: self.position.add(0.0, (max_extent - self.size.v).max(0.0)),
                size: self.size,
            },
            CrossAlignment::Stretch => Self {
                position: self.position,
                size: UvMeasure {
                    u: self.size.u,
                    v: max_extent,
                },
            },
        }
    }

    /// Cross-axis alignment for a horizontally flowing panel.
    #[must_use]
    pub fn with_vertical_alignment(self, alignment: VerticalAlignment, max_height: f32) -> Self {
        self.with_cross_alignment(alignment.into(), max_height)
    }

    /// Cross-axis alignment for a vertically flowing panel.
    #[must_use]
    pub fn with_horizontal_alignment(
        self,
        alignment: HorizontalAlignment,
        max_width: f32,
    ) -> Self {
        self.with_cross_alignment(alignment.into(), max_width)
    }

    /// Returns a translated copy.
    #[must_use]
    pub const fn offset(self, u: f32, v: f32) -> Self {
        Self {
            position: self.position.add(u, v),
            size: self.size,
        }
    }

    /// Converts to a screen-space [`Rect`].
    ///
    /// `orientation` must be the one the rect was measured with.
    #[must_use]
    pub const fn to_rect(self, orientation: Orientation) -> Rect {
        let (x, y) = orientation.xy(self.position.u, self.position.v);
        Rect::new(Point::new(x, y), self.size.to_size(orientation))
    }

    /// Inverse of [`to_rect`](Self::to_rect).
    #[must_use]
    pub const fn from_rect(orientation: Orientation, rect: Rect) -> Self {
        Self {
            position: UvMeasure::new(orientation, rect.x(), rect.y()),
            size: UvMeasure::from_size(orientation, *rect.size()),
        }
    }
}
