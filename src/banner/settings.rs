// SPDX-License-Identifier: MPL-2.0
//! Runtime tuning for the presenter.

use crate::domain::banner::{DragTuning, HostMetrics, NominalHeight, TransitionDuration};

/// Everything the presenter needs to know besides its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerSettings {
    /// Base entrance/exit duration.
    pub transition: TransitionDuration,
    /// Drag-to-geometry tuning.
    pub drag: DragTuning,
    /// Resting height when the status bar is visible.
    pub height_status_bar_visible: NominalHeight,
    /// Resting height when the status bar is hidden.
    pub height_status_bar_hidden: NominalHeight,
}

impl BannerSettings {
    /// Nominal height for a host.
    #[must_use]
    pub fn nominal_height(&self, host: HostMetrics) -> NominalHeight {
        if host.status_bar_hidden {
            self.height_status_bar_hidden
        } else {
            self.height_status_bar_visible
        }
    }
}

impl Default for BannerSettings {
    fn default() -> Self {
        Self {
            transition: TransitionDuration::default(),
            drag: DragTuning::default(),
            height_status_bar_visible: NominalHeight::for_status_bar(false),
            height_status_bar_hidden: NominalHeight::for_status_bar(true),
        }
    }
}
