//! # pytt-help
//!
//! Native side of the PyTT help viewer: re-exports the platform-agnostic core
//! and renders previews of what the browser pages would produce.

pub mod preview;

pub use pytt_help_core::*;
pub use preview::{Preview, PreviewError};
