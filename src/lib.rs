#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;
pub use logging::install_tracing;

pub use wrapui_layout as layout;
pub use wrapui_storage as storage;

pub mod prelude {
    //! A collection of commonly used traits and types for easy importing.
    //!
    //! ```rust
    //! use wrapui::prelude::*;
    //!
    //! let layout = WrapLayout::new(Orientation::Vertical).vertical_spacing(4.0);
    //! assert_eq!(layout.stretch_axis(), StretchAxis::Vertical);
    //! ```
    pub use wrapui_layout::{
        CrossAlignment, EdgeInsets, HorizontalAlignment, Layout, Orientation, Point,
        ProposalSize, Rect, Size, StretchAxis, StretchChild, SubView, VerticalAlignment,
        WrapLayout,
    };
    pub use wrapui_storage::{FileStorage, FsStorage};
}

pub use tracing as log;

#[cfg(all(test, feature = "serde"))]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_layout_config_from_json() {
        let layout: WrapLayout = serde_json::from_str(
            r#"{ "orientation": "Vertical", "horizontal_spacing": 6.0, "stretch_child": "Last" }"#,
        )
        .unwrap();

        assert_eq!(
            layout,
            WrapLayout::new(Orientation::Vertical)
                .horizontal_spacing(6.0)
                .stretch_child(StretchChild::Last)
        );
    }
}
