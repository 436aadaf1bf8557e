//! Errors raised at the raw-value boundary of the layout engine.

use thiserror::Error;

/// Contract violations detected while decoding layout configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The orientation tag is neither horizontal nor vertical.
    #[error("unsupported orientation value: {0}")]
    UnsupportedOrientation(u8),
}
