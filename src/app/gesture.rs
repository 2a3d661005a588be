// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-gesture translation.
//!
//! Desktop hosts have no touch recognizers, so the demo shell turns raw
//! pointer presses and moves into the two gestures the banner understands:
//! a tap anywhere on the banner, and a vertical pan that starts on the drag
//! strip. Movement beyond [`TAP_SLOP`] turns a press into a pan (or cancels
//! the tap when the press started outside the strip).

use crate::banner::GestureSample;

/// Pointer travel, in logical pixels, tolerated before a press stops being a tap.
pub const TAP_SLOP: f32 = 4.0;

/// Where a press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressRegion {
    /// Outside the banner.
    Outside,
    /// On the banner body.
    Body,
    /// On the drag strip at the bottom of the banner.
    Handle,
}

impl PressRegion {
    /// Classifies a press from the banner's hit tests.
    #[must_use]
    pub fn classify(on_banner: bool, on_handle: bool) -> Self {
        match (on_banner, on_handle) {
            (false, _) => PressRegion::Outside,
            (true, true) => PressRegion::Handle,
            (true, false) => PressRegion::Body,
        }
    }
}

/// Recognized gesture output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recognized {
    /// A press and release without significant movement.
    Tap,
    /// A pan sample.
    Pan(GestureSample),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum State {
    Idle,
    Pressed { origin_y: f32, region: PressRegion },
    Panning { origin_y: f32, last: f32 },
    /// The press moved off a tap without being allowed to pan.
    Abandoned,
}

/// Pointer gesture recognizer.
#[derive(Debug, Clone)]
pub struct PointerGesture {
    state: State,
}

impl PointerGesture {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Whether a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.state, State::Panning { .. })
    }

    /// The primary button went down at `y`.
    pub fn press(&mut self, y: f32, region: PressRegion) {
        self.state = match region {
            PressRegion::Outside => State::Idle,
            PressRegion::Body | PressRegion::Handle => State::Pressed {
                origin_y: y,
                region,
            },
        };
    }

    /// The pointer moved to `y`.
    pub fn move_to(&mut self, y: f32) -> Option<Recognized> {
        match self.state {
            State::Pressed { origin_y, region } => {
                let translation = y - origin_y;
                if translation.abs() <= TAP_SLOP {
                    return None;
                }
                if region == PressRegion::Handle {
                    self.state = State::Panning {
                        origin_y,
                        last: translation,
                    };
                    Some(Recognized::Pan(GestureSample::began(translation)))
                } else {
                    self.state = State::Abandoned;
                    None
                }
            }
            State::Panning { origin_y, .. } => {
                let translation = y - origin_y;
                self.state = State::Panning {
                    origin_y,
                    last: translation,
                };
                Some(Recognized::Pan(GestureSample::changed(translation)))
            }
            State::Idle | State::Abandoned => None,
        }
    }

    /// The primary button went up at `y`.
    pub fn release(&mut self, y: f32) -> Option<Recognized> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        match state {
            State::Pressed { .. } => Some(Recognized::Tap),
            State::Panning { origin_y, .. } => {
                Some(Recognized::Pan(GestureSample::ended(y - origin_y)))
            }
            State::Idle | State::Abandoned => None,
        }
    }

    /// The pointer left the window or focus was lost.
    pub fn cancel(&mut self) -> Option<Recognized> {
        let state = std::mem::replace(&mut self.state, State::Idle);
        match state {
            State::Panning { last, .. } => Some(Recognized::Pan(GestureSample::cancelled(last))),
            _ => None,
        }
    }
}

impl Default for PointerGesture {
    fn default() -> Self {
        Self::new()
    }
}
