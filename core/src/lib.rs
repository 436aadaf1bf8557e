#![no_std]
//! Core protocol shared by every `WrapUI` layout container.
//!
//! Containers never see concrete children. They talk to [`SubView`] proxies,
//! answer the parent's [`ProposalSize`] from
//! [`Layout::size_that_fits`], and later hand back one [`Rect`] per child
//! from [`Layout::place`].

extern crate alloc;

pub mod layout;

pub use layout::{
    HorizontalAlignment, Layout, Point, ProposalSize, Rect, Size, StretchAxis, SubView,
    VerticalAlignment,
};
