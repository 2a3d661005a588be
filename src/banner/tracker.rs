// SPDX-License-Identifier: MPL-2.0
//! Drag interaction tracking.
//!
//! Turns a stream of gesture samples into live frames while the finger is
//! down and into a single terminal [`Release`] when it lifts. A release
//! detaches the tracker for the rest of the banner's lifetime.

use crate::domain::banner::{BannerFrame, DragTuning, NominalHeight, Release, TransitionDuration};

/// Phase of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// The finger went down and moved past the recognizer's slop.
    Began,
    /// The finger moved.
    Changed,
    /// The finger lifted.
    Ended,
    /// The gesture was interrupted by the system.
    Cancelled,
}

/// One sample of a continuous vertical drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Gesture phase.
    pub phase: GesturePhase,
    /// Cumulative vertical translation since the gesture began.
    pub translation: f32,
}

impl GestureSample {
    /// A `Began` sample.
    #[must_use]
    pub fn began(translation: f32) -> Self {
        Self {
            phase: GesturePhase::Began,
            translation,
        }
    }

    /// A `Changed` sample.
    #[must_use]
    pub fn changed(translation: f32) -> Self {
        Self {
            phase: GesturePhase::Changed,
            translation,
        }
    }

    /// An `Ended` sample.
    #[must_use]
    pub fn ended(translation: f32) -> Self {
        Self {
            phase: GesturePhase::Ended,
            translation,
        }
    }

    /// A `Cancelled` sample.
    #[must_use]
    pub fn cancelled(translation: f32) -> Self {
        Self {
            phase: GesturePhase::Cancelled,
            translation,
        }
    }

    /// Whether the sample finishes the gesture.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

/// Callback interface a gesture source drives.
pub trait GestureListener {
    /// The finger moved; `translation` is cumulative.
    fn on_changed(&mut self, translation: f32);

    /// The finger lifted or the gesture was cancelled.
    fn on_ended(&mut self, translation: f32);
}

/// What a sample did to the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// The sample arrived after release and was dropped.
    Ignored,
    /// The banner should jump to this frame.
    Moved {
        /// Live frame.
        frame: BannerFrame,
        /// Whether this sample started tracking.
        started: bool,
    },
    /// The drag is over.
    Released(Release),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TrackerState {
    Idle,
    Tracking { translation: f32 },
    Detached,
}

/// Per-banner drag tracker.
#[derive(Debug, Clone)]
pub struct DragTracker {
    state: TrackerState,
    tuning: DragTuning,
}

impl DragTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new(tuning: DragTuning) -> Self {
        Self {
            state: TrackerState::Idle,
            tuning,
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackerState::Tracking { .. })
    }

    /// Whether the tracker stopped listening.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.state == TrackerState::Detached
    }

    /// Latest cumulative translation, while tracking.
    #[must_use]
    pub fn translation(&self) -> Option<f32> {
        match self.state {
            TrackerState::Tracking { translation } => Some(translation),
            _ => None,
        }
    }

    /// Stops accepting samples.
    pub fn detach(&mut self) {
        self.state = TrackerState::Detached;
    }

    /// Feeds one sample.
    ///
    /// `current_extent` is the live height used to scale the exit duration;
    /// `dismiss_intent` forces a collapse on release.
    pub fn handle(
        &mut self,
        sample: GestureSample,
        nominal: NominalHeight,
        current_extent: f32,
        dismiss_intent: bool,
        base: TransitionDuration,
    ) -> DragOutcome {
        if self.is_detached() {
            return DragOutcome::Ignored;
        }

        if sample.is_terminal() {
            self.detach();
            return DragOutcome::Released(self.tuning.release(
                nominal,
                sample.translation,
                current_extent,
                dismiss_intent,
                base,
            ));
        }

        let started = !self.is_tracking();
        self.state = TrackerState::Tracking {
            translation: sample.translation,
        };
        DragOutcome::Moved {
            frame: self.tuning.track(nominal, sample.translation),
            started,
        }
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new(DragTuning::default())
    }
}
