// SPDX-License-Identifier: MPL-2.0
//! Rendering sink consumed by the presenter.

use super::content::BannerContent;
use crate::domain::banner::{BannerFrame, Easing, HostMetrics, NominalHeight};
use std::time::Duration;

/// A geometry change for the rendering layer to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUpdate {
    /// Frame to reach.
    pub frame: BannerFrame,
    /// How long the transition lasts. Zero means "apply now".
    pub duration: Duration,
    /// Curve used over `duration`.
    pub easing: Easing,
}

impl FrameUpdate {
    /// An update applied immediately, without animation.
    #[must_use]
    pub fn immediate(frame: BannerFrame) -> Self {
        Self {
            frame,
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    /// An animated update.
    #[must_use]
    pub fn animated(frame: BannerFrame, duration: Duration, easing: Easing) -> Self {
        Self {
            frame,
            duration,
            easing,
        }
    }

    /// Whether this update has no duration.
    #[must_use]
    pub fn is_immediate(&self) -> bool {
        self.duration.is_zero()
    }
}

/// Receives everything the presenter wants drawn.
///
/// Implementations apply updates; they never report intermediate animated
/// values back to the presenter.
pub trait RenderSink {
    /// Inserts the banner into its host.
    fn attach(&mut self, content: &BannerContent, host: HostMetrics, nominal: NominalHeight);

    /// Recomputes sub-element layout after a content or host change.
    fn relayout(&mut self, content: &BannerContent, host: HostMetrics, nominal: NominalHeight);

    /// Applies a geometry change.
    fn apply(&mut self, update: FrameUpdate);

    /// Removes the banner from its host.
    fn remove(&mut self);
}

/// Sink that records every request, for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    /// Every request, in order.
    pub requests: Vec<SinkRequest>,
}

/// A request recorded by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkRequest {
    /// `attach` was called with this title.
    Attach {
        /// Title of the attached content.
        title: String,
        /// Nominal height at attach time.
        nominal: f32,
    },
    /// `relayout` was called with this title.
    Relayout {
        /// Title of the content being laid out.
        title: String,
        /// Nominal height at relayout time.
        nominal: f32,
    },
    /// `apply` was called.
    Apply(FrameUpdate),
    /// `remove` was called.
    Remove,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every applied update.
    pub fn updates(&self) -> impl Iterator<Item = &FrameUpdate> {
        self.requests.iter().filter_map(|r| match r {
            SinkRequest::Apply(update) => Some(update),
            _ => None,
        })
    }

    /// Last applied update.
    #[must_use]
    pub fn last_update(&self) -> Option<FrameUpdate> {
        self.updates().last().copied()
    }

    /// Number of animated (non-immediate) updates.
    #[must_use]
    pub fn animated_count(&self) -> usize {
        self.updates().filter(|u| !u.is_immediate()).count()
    }

    /// Number of `remove` requests.
    #[must_use]
    pub fn removal_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| matches!(r, SinkRequest::Remove))
            .count()
    }

    /// Number of `attach` requests.
    #[must_use]
    pub fn attach_count(&self) -> usize {
        self.requests
            .iter()
            .filter(|r| matches!(r, SinkRequest::Attach { .. }))
            .count()
    }
}

impl RenderSink for RecordingSink {
    fn attach(&mut self, content: &BannerContent, _host: HostMetrics, nominal: NominalHeight) {
        self.requests.push(SinkRequest::Attach {
            title: content.title_text().to_string(),
            nominal: nominal.value(),
        });
    }

    fn relayout(&mut self, content: &BannerContent, _host: HostMetrics, nominal: NominalHeight) {
        self.requests.push(SinkRequest::Relayout {
            title: content.title_text().to_string(),
            nominal: nominal.value(),
        });
    }

    fn apply(&mut self, update: FrameUpdate) {
        self.requests.push(SinkRequest::Apply(update));
    }

    fn remove(&mut self) {
        self.requests.push(SinkRequest::Remove);
    }
}
