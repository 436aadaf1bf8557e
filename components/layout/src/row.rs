//! A single line of a wrap panel.

use alloc::vec::Vec;

use crate::{UvMeasure, UvRect};

/// Children packed onto one flow-axis line, in visual order.
///
/// The row's [`size`](Self::size) is kept as the exact bounding measure of
/// every rect added so far.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    children: Vec<UvRect>,
    size: UvMeasure,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            children: Vec::new(),
            size: UvMeasure::ZERO,
        }
    }

    /// Appends a child at a row-local position.
    pub fn add(&mut self, position: UvMeasure, size: UvMeasure) {
        self.children.push(UvRect::new(position, size));
        self.size.u = self.size.u.max(position.u + size.u);
        self.size.v = self.size.v.max(size.v);
    }

    /// Rects of the children, in insertion order.
    #[must_use]
    pub fn children_rects(&self) -> &[UvRect] {
        &self.children
    }

    /// Bounding measure of the row.
    #[must_use]
    pub const fn size(&self) -> UvMeasure {
        self.size
    }

    /// Whether no child has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of children in the row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_tracks_bounding_size() {
        let mut row = Row::new();
        assert!(row.is_empty());
        assert_eq!(row.size(), UvMeasure::ZERO);

        row.add(UvMeasure { u: 0.0, v: 0.0 }, UvMeasure { u: 40.0, v: 20.0 });
        assert_eq!(row.size(), UvMeasure { u: 40.0, v: 20.0 });

        row.add(UvMeasure { u: 50.0, v: 0.0 }, UvMeasure { u: 10.0, v: 35.0 });
        assert_eq!(row.size(), UvMeasure { u: 60.0, v: 35.0 });

        // A short child placed before the current end never shrinks the row.
        row.add(UvMeasure { u: 5.0, v: 0.0 }, UvMeasure { u: 5.0, v: 1.0 });
        assert_eq!(row.size(), UvMeasure { u: 60.0, v: 35.0 });
        assert_eq!(row.len(), 3);
    }

    #[test]
    fn test_children_keep_insertion_order() {
        let mut row = Row::new();
        row.add(UvMeasure { u: 0.0, v: 0.0 }, UvMeasure { u: 1.0, v: 1.0 });
        row.add(UvMeasure { u: 1.0, v: 0.0 }, UvMeasure { u: 2.0, v: 2.0 });

        let rects = row.children_rects();
        assert_eq!(rects[0].size, UvMeasure { u: 1.0, v: 1.0 });
        assert_eq!(rects[1].position, UvMeasure { u: 1.0, v: 0.0 });
    }
}
