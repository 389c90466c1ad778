//! Height computation for the navigator and content frames.

use serde::{Deserialize, Serialize};

/// Offset used when header and footer are not measured.
pub const FIXED_OFFSET_PX: u32 = 164;

/// Space kept free below the frames when header and footer are measured.
pub const DEFAULT_MARGIN_PX: u32 = 20;

/// Window and chrome dimensions, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub inner_height: u32,
    pub header_height: u32,
    pub footer_height: u32,
}

impl Viewport {
    pub fn new(inner_height: u32, header_height: u32, footer_height: u32) -> Self {
        Self {
            inner_height,
            header_height,
            footer_height,
        }
    }
}

/// How frame heights are derived from the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameSizing {
    /// Subtract the measured header and footer heights plus `margin_px`.
    /// When false, subtract `fixed_offset_px` instead.
    pub use_dynamic_header_footer_measurement: bool,
    pub margin_px: u32,
    pub fixed_offset_px: u32,
}

impl Default for FrameSizing {
    fn default() -> Self {
        Self {
            use_dynamic_header_footer_measurement: true,
            margin_px: DEFAULT_MARGIN_PX,
            fixed_offset_px: FIXED_OFFSET_PX,
        }
    }
}

impl FrameSizing {
    pub fn fixed() -> Self {
        Self {
            use_dynamic_header_footer_measurement: false,
            ..Self::default()
        }
    }

    /// Whether header and footer need to be measured for [`Self::frame_height`].
    pub fn measures_chrome(&self) -> bool {
        self.use_dynamic_header_footer_measurement
    }

    /// Height for both frames. Clamps at zero when the window is smaller than
    /// the chrome around the frames.
    pub fn frame_height(&self, viewport: Viewport) -> u32 {
        let taken = if self.use_dynamic_header_footer_measurement {
            viewport
                .header_height
                .saturating_add(viewport.footer_height)
                .saturating_add(self.margin_px)
        } else {
            self.fixed_offset_px
        };
        viewport.inner_height.saturating_sub(taken)
    }
}
