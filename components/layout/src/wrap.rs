//! Wrapping panel layout.
//!
//! Children are packed greedily along the flow axis. Once the next child would
//! run past the available flow extent, the current row is closed and a new one
//! starts below it (or beside it, for vertical panels). The first child of a
//! row always fits, so a child larger than the constraint still gets a row of
//! its own instead of being dropped.

use alloc::vec::Vec;

use crate::{
    CrossAlignment, EdgeInsets, Layout, Orientation, ProposalSize, Rect, Row, Size,
    StretchAxis, SubView, UvMeasure,
};

/// How the last visible child is sized along the flow axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StretchChild {
    /// Every child keeps its measured size.
    #[default]
    None,
    /// The last child fills whatever flow extent is left in its row.
    Last,
}

/// Layout engine for a wrap panel.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WrapLayout {
    /// Direction children flow in before wrapping.
    pub orientation: Orientation,
    /// Gap between horizontally adjacent children or columns.
    pub horizontal_spacing: f32,
    /// Gap between vertically adjacent children or rows.
    pub vertical_spacing: f32,
    /// Inset around all rows.
    pub padding: EdgeInsets,
    /// Sizing rule for the last visible child.
    pub stretch_child: StretchChild,
}

impl Default for WrapLayout {
    fn default() -> Self {
        Self::new(Orientation::Horizontal)
    }
}

impl WrapLayout {
    /// Creates a layout with no spacing and no padding.
    #[must_use]
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            horizontal_spacing: 0.0,
            vertical_spacing: 0.0,
            padding: EdgeInsets::all(0.0),
            stretch_child: StretchChild::None,
        }
    }

    /// Sets the flow orientation.
    #[must_use]
    pub const fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the horizontal gap.
    #[must_use]
    pub const fn horizontal_spacing(mut self, spacing: f32) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Sets the vertical gap.
    #[must_use]
    pub const fn vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Sets the padding around all rows.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<EdgeInsets>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the sizing rule for the last visible child.
    #[must_use]
    pub const fn stretch_child(mut self, stretch_child: StretchChild) -> Self {
        self.stretch_child = stretch_child;
        self
    }

    /// Spacing expressed as (flow gap, row gap).
    const fn spacing(&self) -> UvMeasure {
        UvMeasure::new(
            self.orientation,
            self.horizontal_spacing,
            self.vertical_spacing,
        )
    }

    /// Packs already-measured children into rows.
    ///
    /// `max_flow` is the extent available along the flow axis, padding
    /// included; pass [`f32::INFINITY`] for an unconstrained panel.
    #[must_use]
    pub fn arrange<I>(&self, items: I, max_flow: f32) -> WrapArrangement
    where
        I: IntoIterator<Item = WrapItem>,
    {
        let orientation = self.orientation;
        let spacing = self.spacing();
        let padding_start = self.padding.start(orientation);
        let padding_end = self.padding.end(orientation);
        // Compared as `padding + extent` so a panel placed at its own reported
        // size packs into the same rows.
        let padding_u = padding_start.u + padding_end.u;

        let items: Vec<WrapItem> = items.into_iter().collect();
        let last = items.len().checked_sub(1);

        let mut rows = Vec::new();
        let mut alignments = Vec::with_capacity(items.len());
        let mut row = Row::new();
        let mut cursor = 0.0_f32;

        for (index, item) in items.into_iter().enumerate() {
            let mut measure = UvMeasure::from_size(orientation, item.size);

            if !row.is_empty() && padding_u + (cursor + measure.u) > max_flow {
                tracing::trace!(row = rows.len(), extent = row.size().u, "wrapping");
                rows.push(core::mem::take(&mut row));
                cursor = 0.0;
            }

            if row.is_empty() && padding_u + measure.u > max_flow {
                tracing::debug!(index, extent = measure.u, max_flow, "child overflows the flow extent");
            }

            if self.stretch_child == StretchChild::Last && Some(index) == last && max_flow.is_finite()
            {
                measure.u = measure.u.max(max_flow - padding_u - cursor);
            }

            row.add(UvMeasure { u: cursor, v: 0.0 }, measure);
            alignments.push(item.alignment);
            cursor += measure.u + spacing.u;
        }

        if !row.is_empty() {
            rows.push(row);
        }

        tracing::debug!(rows = rows.len(), children = alignments.len(), "wrap arranged");

        WrapArrangement {
            orientation,
            rows,
            alignments,
            row_spacing: spacing.v,
            padding_start,
            padding_end,
        }
    }

    /// Flow extent offered by a proposal.
    fn max_flow(&self, proposal: ProposalSize) -> f32 {
        let (u, _) = self.orientation.uv(
            proposal.width_or(f32::INFINITY),
            proposal.height_or(f32::INFINITY),
        );
        u
    }

    /// Proposal handed to each child: the parent's proposal minus padding.
    fn child_proposal(&self, proposal: ProposalSize) -> ProposalSize {
        ProposalSize::new(
            proposal.width.map(|w| (w - self.padding.horizontal()).max(0.0)),
            proposal.height.map(|h| (h - self.padding.vertical()).max(0.0)),
        )
    }

    /// Measures every visible child.
    fn measure(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Vec<WrapItem> {
        children
            .iter()
            .filter(|child| !child.is_collapsed())
            .map(|child| WrapItem {
                size: child.size_that_fits(proposal),
                alignment: self.cross_alignment(*child),
            })
            .collect()
    }

    /// The child's alignment on this panel's cross axis.
    fn cross_alignment(&self, child: &dyn SubView) -> CrossAlignment {
        match self.orientation {
            Orientation::Horizontal => child.vertical_alignment().into(),
            Orientation::Vertical => child.horizontal_alignment().into(),
        }
    }
}

impl Layout for WrapLayout {
    fn size_that_fits(&self, proposal: ProposalSize, children: &[&dyn SubView]) -> Size {
        let items = self.measure(self.child_proposal(proposal), children);

        self.arrange(items, self.max_flow(proposal)).size()
    }

    fn place(&self, bounds: Rect, children: &[&dyn SubView]) -> Vec<Rect> {
        let proposal = ProposalSize::new(bounds.width(), bounds.height());
        let items = self.measure(self.child_proposal(proposal), children);
        let arrangement = self.arrange(items, self.max_flow(proposal));

        let mut placed = arrangement
            .child_rects()
            .into_iter()
            .map(|rect| rect.offset(bounds.x(), bounds.y()));

        children
            .iter()
            .map(|child| {
                if child.is_collapsed() {
                    Rect::new(bounds.origin(), Size::zero())
                } else {
                    placed.next().unwrap_or_default()
                }
            })
            .collect()
    }

    /// A wrap panel takes the whole flow extent it is offered.
    fn stretch_axis(&self) -> StretchAxis {
        self.orientation.flow_axis()
    }
}

/// A measured child ready to be packed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapItem {
    /// Size the child reported.
    pub size: Size,
    /// Where the child sits within its row's cross extent.
    pub alignment: CrossAlignment,
}

impl WrapItem {
    /// Creates an item.
    #[must_use]
    pub const fn new(size: Size, alignment: CrossAlignment) -> Self {
        Self { size, alignment }
    }
}

impl From<Size> for WrapItem {
    fn from(size: Size) -> Self {
        Self::new(size, CrossAlignment::Start)
    }
}

/// Result of packing children into rows.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapArrangement {
    orientation: Orientation,
    rows: Vec<Row>,
    alignments: Vec<CrossAlignment>,
    row_spacing: f32,
    padding_start: UvMeasure,
    padding_end: UvMeasure,
}

impl WrapArrangement {
    /// The packed rows, in order.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Extent of the rows alone: widest row by the stacked row heights.
    #[must_use]
    pub fn content_size(&self) -> UvMeasure {
        let u = self.rows.iter().map(|row| row.size().u).fold(0.0, f32::max);
        let v: f32 = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| if i == 0 { row.size().v } else { row.size().v + self.row_spacing })
            .sum();

        UvMeasure { u, v }
    }

    /// Total size of the panel, padding included.
    #[must_use]
    pub fn size(&self) -> Size {
        self.content_size()
            .add(self.padding_start.u + self.padding_end.u, self.padding_start.v + self.padding_end.v)
            .to_size(self.orientation)
    }

    /// Screen-space rects for every packed child, in child order, relative to
    /// the panel's origin.
    #[must_use]
    pub fn child_rects(&self) -> Vec<Rect> {
        let mut rects = Vec::with_capacity(self.alignments.len());
        let mut alignments = self.alignments.iter();
        let mut offset = self.padding_start.v;

        for row in &self.rows {
            let extent = row.size().v;
            for (rect, alignment) in row.children_rects().iter().zip(alignments.by_ref()) {
                let aligned = rect
                    .with_cross_alignment(*alignment, extent)
                    .offset(self.padding_start.u, offset);
                rects.push(aligned.to_rect(self.orientation));
            }
            offset += extent + self.row_spacing;
        }

        rects
    }
}
