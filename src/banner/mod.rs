// SPDX-License-Identifier: MPL-2.0
//! Transient notification banner.
//!
//! A banner slides down from the top edge of its host, stays for a display
//! duration, and slides back out. While on screen it can be tapped (runs an
//! optional action, then dismisses) or dragged (stretches with resistance
//! when pulled down, slides up when pushed up, and decides its exit on
//! release).
//!
//! # Architecture
//!
//! - [`BannerContent`]: what is shown
//! - [`Presenter`]: the lifecycle state machine
//! - [`TimerSource`] / [`DeadlineTimers`]: one-shot timers polled on tick
//! - [`DragTracker`]: gesture samples to frames and a terminal release
//! - [`RenderSink`]: where frame updates go
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use herald::banner::{BannerContent, DeadlineTimers, Phase, Presenter, RecordingSink};
//! use herald::domain::banner::HostMetrics;
//!
//! let start = Instant::now();
//! let mut presenter = Presenter::new(DeadlineTimers::starting_at(start), RecordingSink::new());
//! presenter.present(
//!     BannerContent::new("Upload complete").duration(Duration::from_secs(2)),
//!     HostMetrics::default(),
//!     None,
//! );
//!
//! presenter.tick(start + Duration::from_secs(2));
//! assert_eq!(presenter.phase(), Phase::Countdown);
//! presenter.tick(start + Duration::from_millis(2300));
//! assert_eq!(presenter.phase(), Phase::Hidden);
//! ```

mod content;
mod presenter;
mod settings;
mod sink;
mod timer;
mod tracker;

pub use content::{Action, BannerContent, BannerImage};
pub use presenter::{Completion, Phase, Presenter};
pub use settings::BannerSettings;
pub use sink::{FrameUpdate, RecordingSink, RenderSink, SinkRequest};
pub use timer::{DeadlineTimers, TimerHandle, TimerSource};
pub use tracker::{DragOutcome, DragTracker, GestureListener, GesturePhase, GestureSample};
