// SPDX-License-Identifier: MPL-2.0
//! Frame interpolation for the on-screen banner.
//!
//! [`AnimatedFrame`] is the [`RenderSink`] the demo shell hands to the
//! presenter. It keeps the content and layout of the attached banner and
//! turns each [`FrameUpdate`] into a time-based interpolation sampled by the
//! view.

use super::layout::{BannerLayout, TextMetrics};
use crate::banner::{BannerContent, FrameUpdate, RenderSink};
use crate::domain::banner::{BannerFrame, Easing, HostMetrics, NominalHeight};
use iced::widget::image::Handle;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct Transition {
    from: BannerFrame,
    to: BannerFrame,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    fn sample(&self, now: Instant) -> BannerFrame {
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };
        self.from.lerp(self.to, self.easing.evaluate(progress))
    }

    fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}

/// Animated banner sink.
pub struct AnimatedFrame {
    now: Instant,
    resting: BannerFrame,
    transition: Option<Transition>,
    content: Option<BannerContent>,
    image: Option<Handle>,
    layout: Option<BannerLayout>,
    metrics: TextMetrics,
}

impl AnimatedFrame {
    /// Creates a detached sink whose clock starts at `now`.
    #[must_use]
    pub fn starting_at(now: Instant) -> Self {
        Self {
            now,
            resting: BannerFrame::new(0.0, 0.0),
            transition: None,
            content: None,
            image: None,
            layout: None,
            metrics: TextMetrics::default(),
        }
    }

    /// Uses custom text metrics for layout.
    #[must_use]
    pub fn with_metrics(mut self, metrics: TextMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Moves the clock forward. Earlier instants are ignored.
    pub fn advance(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
        if self
            .transition
            .is_some_and(|transition| transition.is_finished(self.now))
        {
            if let Some(transition) = self.transition.take() {
                self.resting = transition.to;
            }
        }
    }

    /// Frame at the current clock.
    #[must_use]
    pub fn current(&self) -> BannerFrame {
        self.transition
            .map_or(self.resting, |transition| transition.sample(self.now))
    }

    /// Whether an interpolation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Whether a banner is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.content.is_some()
    }

    /// Attached content.
    #[must_use]
    pub fn content(&self) -> Option<&BannerContent> {
        self.content.as_ref()
    }

    /// Image handle for the attached content.
    #[must_use]
    pub fn image(&self) -> Option<&Handle> {
        self.image.as_ref()
    }

    /// Layout re-anchored to the current extent.
    #[must_use]
    pub fn layout(&self) -> Option<BannerLayout> {
        let extent = self.current().extent;
        self.layout.map(|layout| layout.with_extent(extent))
    }

    /// Whether a point in host coordinates is over the visible banner.
    #[must_use]
    pub fn contains(&self, y: f32) -> bool {
        self.is_attached() && y >= 0.0 && y <= self.current().bottom()
    }

    /// Whether a point in host coordinates is over the drag strip.
    #[must_use]
    pub fn in_gesture_strip(&self, y: f32) -> bool {
        let frame = self.current();
        self.contains(y)
            && self
                .layout()
                .is_some_and(|layout| layout.in_gesture_strip(y - frame.offset_y))
    }

    fn lay_out(&mut self, content: &BannerContent, host: HostMetrics, nominal: NominalHeight) {
        self.layout = Some(BannerLayout::compute(
            content,
            host.width,
            nominal,
            host.status_bar_hidden,
            &self.metrics,
        ));
    }
}

impl Default for AnimatedFrame {
    fn default() -> Self {
        Self::starting_at(Instant::now())
    }
}

impl RenderSink for AnimatedFrame {
    fn attach(&mut self, content: &BannerContent, host: HostMetrics, nominal: NominalHeight) {
        self.transition = None;
        self.resting = BannerFrame::hidden(nominal);
        self.relayout(content, host, nominal);
    }

    fn relayout(&mut self, content: &BannerContent, host: HostMetrics, nominal: NominalHeight) {
        self.image = content.image_ref().map(|image| {
            Handle::from_rgba(image.width(), image.height(), image.rgba_bytes().to_vec())
        });
        self.content = Some(content.clone());
        self.lay_out(content, host, nominal);
    }

    fn apply(&mut self, update: FrameUpdate) {
        if update.is_immediate() {
            self.transition = None;
            self.resting = update.frame;
            return;
        }

        let from = self.current();
        self.transition = Some(Transition {
            from,
            to: update.frame,
            started_at: self.now,
            duration: update.duration,
            easing: update.easing,
        });
        self.resting = update.frame;
    }

    fn remove(&mut self) {
        self.transition = None;
        self.content = None;
        self.image = None;
        self.layout = None;
        self.resting = BannerFrame::new(0.0, 0.0);
    }
}

impl std::fmt::Debug for AnimatedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedFrame")
            .field("frame", &self.current())
            .field("animating", &self.is_animating())
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, LAYOUT_EPSILON};

    fn nominal() -> NominalHeight {
        NominalHeight::for_status_bar(false)
    }

    fn attached(t0: Instant) -> AnimatedFrame {
        let mut sink = AnimatedFrame::starting_at(t0);
        let content = BannerContent::new("Hello");
        sink.attach(&content, HostMetrics::default(), nominal());
        sink.relayout(&content, HostMetrics::default(), nominal());
        sink
    }

    #[test]
    fn attach_starts_hidden() {
        let sink = attached(Instant::now());
        assert!(sink.is_attached());
        assert_eq!(sink.current(), BannerFrame::hidden(nominal()));
        assert!(!sink.contains(10.0));
    }

    #[test]
    fn linear_transition_interpolates_and_settles() {
        let t0 = Instant::now();
        let mut sink = attached(t0);
        sink.apply(FrameUpdate::animated(
            BannerFrame::shown(nominal()),
            Duration::from_millis(300),
            Easing::Linear,
        ));

        sink.advance(t0 + Duration::from_millis(150));
        assert_abs_diff_eq!(sink.current().offset_y, -42.0, epsilon = 1e-3);
        assert!(sink.is_animating());

        sink.advance(t0 + Duration::from_millis(300));
        assert!(!sink.is_animating());
        assert_eq!(sink.current(), BannerFrame::shown(nominal()));
    }

    #[test]
    fn retargeting_starts_from_current_frame() {
        let t0 = Instant::now();
        let mut sink = attached(t0);
        sink.apply(FrameUpdate::animated(
            BannerFrame::shown(nominal()),
            Duration::from_millis(300),
            Easing::Linear,
        ));
        sink.advance(t0 + Duration::from_millis(150));

        sink.apply(FrameUpdate::animated(
            BannerFrame::hidden(nominal()),
            Duration::from_millis(300),
            Easing::Linear,
        ));
        assert_abs_diff_eq!(sink.current().offset_y, -42.0, epsilon = 1e-3);
    }

    #[test]
    fn immediate_update_snaps() {
        let mut sink = attached(Instant::now());
        sink.apply(FrameUpdate::immediate(BannerFrame::new(0.0, 120.0)));
        assert_eq!(sink.current(), BannerFrame::new(0.0, 120.0));
        assert!(sink.contains(110.0));

        let layout = sink.layout().expect("layout");
        assert_abs_diff_eq!(layout.line.y, 119.0, epsilon = LAYOUT_EPSILON);
        assert!(sink.in_gesture_strip(110.0));
        assert!(!sink.in_gesture_strip(40.0));
    }

    #[test]
    fn remove_detaches() {
        let mut sink = attached(Instant::now());
        sink.apply(FrameUpdate::immediate(BannerFrame::shown(nominal())));
        sink.remove();
        assert!(!sink.is_attached());
        assert!(sink.layout().is_none());
        assert!(!sink.contains(10.0));
    }

    #[test]
    fn clock_never_moves_backwards() {
        let t0 = Instant::now();
        let mut sink = attached(t0 + Duration::from_secs(1));
        sink.apply(FrameUpdate::animated(
            BannerFrame::shown(nominal()),
            Duration::from_millis(300),
            Easing::Linear,
        ));
        sink.advance(t0);
        assert_eq!(sink.current(), BannerFrame::hidden(nominal()));
    }
}
