// SPDX-License-Identifier: MPL-2.0
//! Banner frame geometry.
//!
//! The state machine only reasons about two numbers: how tall the banner is
//! (`extent`) and where its top edge sits (`offset_y`, 0 = flush with the top
//! of the host, negative = above it). Everything else is derived by the
//! layout collaborator.

use super::NominalHeight;

/// Vertical geometry of the banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerFrame {
    /// Vertical origin of the banner's top edge.
    pub offset_y: f32,
    /// Live height of the banner.
    pub extent: f32,
}

impl BannerFrame {
    /// Creates a frame from an offset and an extent.
    #[must_use]
    pub fn new(offset_y: f32, extent: f32) -> Self {
        Self { offset_y, extent }
    }

    /// Resting on-screen frame.
    #[must_use]
    pub fn shown(nominal: NominalHeight) -> Self {
        Self::new(0.0, nominal.value())
    }

    /// Fully off-screen frame, one nominal height above the top edge.
    #[must_use]
    pub fn hidden(nominal: NominalHeight) -> Self {
        Self::new(-nominal.value(), nominal.value())
    }

    /// Position of the bottom edge.
    #[must_use]
    pub fn bottom(self) -> f32 {
        self.offset_y + self.extent
    }

    /// Height of the portion that is on screen.
    #[must_use]
    pub fn visible_height(self) -> f32 {
        self.bottom().max(0.0)
    }

    /// Linear interpolation towards `target` (`t` in `[0, 1]`).
    #[must_use]
    pub fn lerp(self, target: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            offset_y: self.offset_y + (target.offset_y - self.offset_y) * t,
            extent: self.extent + (target.extent - self.extent) * t,
        }
    }
}

/// Metrics of the container the banner is inserted into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostMetrics {
    /// Width available to the banner.
    pub width: f32,
    /// Whether the host's status bar is hidden.
    pub status_bar_hidden: bool,
}

impl HostMetrics {
    /// Creates host metrics.
    #[must_use]
    pub fn new(width: f32, status_bar_hidden: bool) -> Self {
        Self {
            width,
            status_bar_hidden,
        }
    }
}

impl Default for HostMetrics {
    fn default() -> Self {
        Self::new(375.0, false)
    }
}
