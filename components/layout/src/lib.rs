#![no_std]
//! Wrapping panel layout for `WrapUI`.
//!
//! [`WrapLayout`] arranges children into successive rows (or columns) that wrap
//! once the available extent along the flow axis runs out, then aligns every
//! child inside its row's cross extent.
//!
//! The algorithm works in axis-agnostic terms: [`UvMeasure`] and [`UvRect`]
//! describe extents along the flow axis (`u`) and the cross axis (`v`), and
//! [`Orientation`] maps them to and from screen space. The same packing loop
//! therefore drives both horizontal and vertical panels.
//!
//! # Example
//!
//! ```rust
//! use wrapui_layout::{Orientation, Size, WrapItem, WrapLayout};
//!
//! let layout = WrapLayout::new(Orientation::Horizontal);
//! let sizes = [Size::new(40.0, 20.0); 3];
//! let arrangement = layout.arrange(sizes.map(WrapItem::from), 100.0);
//!
//! assert_eq!(arrangement.rows().len(), 2);
//! assert_eq!(arrangement.size(), Size::new(80.0, 40.0));
//! ```

extern crate alloc;

pub use wrapui_core::layout::*;

pub mod alignment;
pub use alignment::{CrossAlignment, Orientation};

mod error;
pub use error::LayoutError;

pub mod padding;
pub use padding::EdgeInsets;

pub mod row;
pub use row::Row;

pub mod uv;
pub use uv::{UvMeasure, UvRect};

pub mod wrap;
pub use wrap::{StretchChild, WrapArrangement, WrapItem, WrapLayout};
