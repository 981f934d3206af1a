use serde::{Deserialize, Serialize};

/// Viewport width in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: u32,
}

impl Viewport {
    pub fn new(width_px: u32) -> Self {
        Self { width_px }
    }

    /// True when strictly narrower than `breakpoint_px`.
    pub fn is_narrow(&self, breakpoint_px: u32) -> bool {
        self.width_px < breakpoint_px
    }
}
