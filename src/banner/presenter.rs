// SPDX-License-Identifier: MPL-2.0
//! Banner presentation state machine.
//!
//! ```text
//! Hidden -> Entering -> Shown -> (Countdown | Dragging) -> Exiting -> Hidden
//! ```
//!
//! The presenter owns the only banner session. Every terminal path (tap,
//! display timer, explicit dismiss, drag release) funnels into one exit
//! animation whose completion timer runs the pending completion and removes
//! the banner exactly once.
//!
//! `Countdown` is the exit started by the display timer: the banner is
//! already leaving, but a drag may still grab it and decide the outcome on
//! release.

use super::content::BannerContent;
use super::settings::BannerSettings;
use super::sink::{FrameUpdate, RenderSink};
use super::timer::{TimerHandle, TimerSource};
use super::tracker::{DragOutcome, DragTracker, GestureListener, GestureSample};
use crate::diagnostics::{BannerEvent, DiagnosticsHandle, ExitTrigger, IgnoredInput};
use crate::domain::banner::{BannerFrame, Easing, HostMetrics, NominalHeight};
use std::fmt;
use std::time::{Duration, Instant};

/// Callback run once the banner has left the screen.
pub type Completion = Box<dyn FnOnce() + Send + 'static>;

/// Lifecycle phase of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing on screen.
    #[default]
    Hidden,
    /// Sliding in.
    Entering,
    /// Resting on screen, display timer armed.
    Shown,
    /// The display timer fired; sliding out, still grabbable.
    Countdown,
    /// Following the finger.
    Dragging,
    /// Committed to leaving.
    Exiting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnimationKind {
    Entrance,
    Exit,
}

struct Session {
    content: BannerContent,
    host: HostMetrics,
    nominal: NominalHeight,
    phase: Phase,
    frame: BannerFrame,
    dismiss_intent: bool,
    completion: Option<Completion>,
    display_timer: Option<TimerHandle>,
    animation: Option<(TimerHandle, AnimationKind)>,
    tracker: DragTracker,
}

impl Session {
    fn accepts_replacement(&self) -> bool {
        matches!(
            self.phase,
            Phase::Entering | Phase::Shown | Phase::Dragging
        )
    }
}

/// Drives one banner through its lifecycle.
pub struct Presenter<T: TimerSource, R: RenderSink> {
    timers: T,
    sink: R,
    settings: BannerSettings,
    session: Option<Session>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<T: TimerSource, R: RenderSink> Presenter<T, R> {
    /// Creates a presenter with default settings.
    pub fn new(timers: T, sink: R) -> Self {
        Self::with_settings(timers, sink, BannerSettings::default())
    }

    /// Creates a presenter with explicit settings.
    pub fn with_settings(timers: T, sink: R, settings: BannerSettings) -> Self {
        Self {
            timers,
            sink,
            settings,
            session: None,
            diagnostics: None,
        }
    }

    /// Sets the diagnostics handle for lifecycle events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Shows `content` in `host`.
    ///
    /// If a banner is already on screen and not leaving, its content is
    /// replaced in place and the display timer restarts; otherwise a fresh
    /// banner slides in. Any pending completion from the replaced
    /// presentation is dropped without running.
    pub fn present(
        &mut self,
        content: BannerContent,
        host: HostMetrics,
        on_dismissed: Option<Completion>,
    ) {
        let nominal = self.settings.nominal_height(host);

        if let Some(session) = self.session.as_mut().filter(|s| s.accepts_replacement()) {
            cancel_display_timer(&mut self.timers, session, self.diagnostics.as_ref());
            if session.completion.is_some() {
                log(self.diagnostics.as_ref(), BannerEvent::CompletionSuperseded);
            }

            session.content = content;
            session.completion = on_dismissed;
            session.dismiss_intent = false;
            session.host = host;
            self.sink.relayout(&session.content, host, nominal);
            if session.nominal != nominal {
                session.nominal = nominal;
                retarget_resting_frame(
                    &mut self.timers,
                    &mut self.sink,
                    session,
                    self.settings.transition.as_duration(),
                );
            }
            arm_display_timer(&mut self.timers, session, self.diagnostics.as_ref());
            log(self.diagnostics.as_ref(), BannerEvent::ContentReplaced);
            return;
        }

        if let Some(mut previous) = self.session.take() {
            cancel_display_timer(&mut self.timers, &mut previous, self.diagnostics.as_ref());
            if let Some((handle, _)) = previous.animation.take() {
                self.timers.cancel(handle);
            }
            if previous.completion.is_some() {
                log(self.diagnostics.as_ref(), BannerEvent::CompletionSuperseded);
            }
        }

        let hidden = BannerFrame::hidden(nominal);
        let shown = BannerFrame::shown(nominal);
        let transition = self.settings.transition.as_duration();

        log(
            self.diagnostics.as_ref(),
            BannerEvent::Presented {
                has_subtitle: content.subtitle_text().is_some(),
                has_image: content.image_ref().is_some(),
                nominal_height: nominal.value(),
            },
        );

        self.sink.attach(&content, host, nominal);
        self.sink.relayout(&content, host, nominal);
        self.sink.apply(FrameUpdate::immediate(hidden));
        self.sink
            .apply(FrameUpdate::animated(shown, transition, Easing::EaseOut));

        let mut session = Session {
            content,
            host,
            nominal,
            phase: Phase::Entering,
            frame: shown,
            dismiss_intent: false,
            completion: on_dismissed,
            display_timer: None,
            animation: Some((self.timers.schedule(transition), AnimationKind::Entrance)),
            tracker: DragTracker::new(self.settings.drag),
        };
        arm_display_timer(&mut self.timers, &mut session, self.diagnostics.as_ref());
        self.session = Some(session);
    }

    /// Slides the banner out and removes it.
    ///
    /// Idempotent: once an exit is committed, further calls do nothing.
    pub fn dismiss(&mut self) {
        self.start_exit(ExitTrigger::Explicit);
    }

    /// Runs the tap action, if any, then dismisses.
    pub fn handle_tap(&mut self) {
        let Some(session) = self.session.as_ref() else {
            log(
                self.diagnostics.as_ref(),
                BannerEvent::Ignored {
                    reason: IgnoredInput::NoSession,
                },
            );
            return;
        };

        match session.phase {
            Phase::Exiting | Phase::Hidden => {
                log(
                    self.diagnostics.as_ref(),
                    BannerEvent::Ignored {
                        reason: IgnoredInput::TapWhileExiting,
                    },
                );
                return;
            }
            // Tap and pan recognizers are exclusive.
            Phase::Dragging => return,
            Phase::Entering | Phase::Shown | Phase::Countdown => {}
        }

        let action = session.content.action().cloned();
        if let Some(action) = &action {
            action.invoke();
        }
        log(
            self.diagnostics.as_ref(),
            BannerEvent::Tapped {
                ran_action: action.is_some(),
            },
        );

        self.start_exit(ExitTrigger::Tap);
    }

    /// Feeds a drag sample.
    pub fn handle_pan(&mut self, sample: GestureSample) {
        let diagnostics = self.diagnostics.as_ref();
        let Some(session) = self.session.as_mut() else {
            log(
                diagnostics,
                BannerEvent::Ignored {
                    reason: IgnoredInput::NoSession,
                },
            );
            return;
        };

        if matches!(session.phase, Phase::Exiting | Phase::Hidden) {
            log(
                diagnostics,
                BannerEvent::Ignored {
                    reason: IgnoredInput::SampleAfterRelease,
                },
            );
            return;
        }

        let outcome = session.tracker.handle(
            sample,
            session.nominal,
            session.frame.extent,
            session.dismiss_intent,
            self.settings.transition,
        );

        match outcome {
            DragOutcome::Ignored => {
                log(
                    diagnostics,
                    BannerEvent::Ignored {
                        reason: IgnoredInput::SampleAfterRelease,
                    },
                );
            }
            DragOutcome::Moved { frame, started } => {
                cancel_display_timer(&mut self.timers, session, diagnostics);
                if started {
                    // The drag supersedes whatever animation was running.
                    if let Some((handle, _)) = session.animation.take() {
                        self.timers.cancel(handle);
                    }
                    log(diagnostics, BannerEvent::DragStarted);
                }
                session.phase = Phase::Dragging;
                session.frame = frame;
                self.sink.apply(FrameUpdate::immediate(frame));
            }
            DragOutcome::Released(release) => {
                cancel_display_timer(&mut self.timers, session, diagnostics);
                if let Some((handle, _)) = session.animation.take() {
                    self.timers.cancel(handle);
                }

                session.phase = Phase::Exiting;
                session.dismiss_intent = true;
                session.frame = release.target;
                self.sink.apply(FrameUpdate::animated(
                    release.target,
                    release.duration,
                    Easing::EaseInOut,
                ));
                session.animation = Some((
                    self.timers.schedule(release.duration),
                    AnimationKind::Exit,
                ));

                #[allow(clippy::cast_possible_truncation)]
                let duration_ms = release.duration.as_millis() as u64;
                log(
                    diagnostics,
                    BannerEvent::DragReleased {
                        translation: sample.translation,
                        collapsed: release.collapse,
                        duration_ms,
                    },
                );
                log(
                    diagnostics,
                    BannerEvent::ExitStarted {
                        trigger: ExitTrigger::DragRelease,
                    },
                );
            }
        }
    }

    /// Advances timers to `now` and handles everything that expired.
    pub fn tick(&mut self, now: Instant) {
        for handle in self.timers.expired(now) {
            self.on_timer_fired(handle);
        }
    }

    /// Re-reads host metrics after a rotation or resize.
    pub fn orientation_changed(&mut self, host: HostMetrics) {
        let nominal = self.settings.nominal_height(host);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.host = host;
        session.nominal = nominal;
        self.sink.relayout(&session.content, host, nominal);
        retarget_resting_frame(
            &mut self.timers,
            &mut self.sink,
            session,
            self.settings.transition.as_duration(),
        );
        log(
            self.diagnostics.as_ref(),
            BannerEvent::OrientationChanged {
                nominal_height: nominal.value(),
            },
        );
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map_or(Phase::Hidden, |s| s.phase)
    }

    /// Whether a banner session exists.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Frame the banner is at or heading to.
    #[must_use]
    pub fn frame(&self) -> Option<BannerFrame> {
        self.session.as_ref().map(|s| s.frame)
    }

    /// Content on screen.
    #[must_use]
    pub fn content(&self) -> Option<&BannerContent> {
        self.session.as_ref().map(|s| &s.content)
    }

    /// Nominal height of the current session.
    #[must_use]
    pub fn nominal_height(&self) -> Option<NominalHeight> {
        self.session.as_ref().map(|s| s.nominal)
    }

    /// Whether the banner is bound to leave on its next release.
    #[must_use]
    pub fn has_dismiss_intent(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.dismiss_intent)
    }

    /// Whether the display timer is armed.
    #[must_use]
    pub fn has_display_timer(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.display_timer.is_some())
    }

    /// Settings in use.
    #[must_use]
    pub fn settings(&self) -> &BannerSettings {
        &self.settings
    }

    /// Timer source.
    #[must_use]
    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Rendering sink.
    #[must_use]
    pub fn sink(&self) -> &R {
        &self.sink
    }

    /// Mutable rendering sink, for hosts that advance animations.
    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    fn on_timer_fired(&mut self, handle: TimerHandle) {
        let diagnostics = self.diagnostics.as_ref();
        let Some(session) = self.session.as_mut() else {
            log(
                diagnostics,
                BannerEvent::Ignored {
                    reason: IgnoredInput::StaleTimer,
                },
            );
            return;
        };

        if session.display_timer == Some(handle) {
            session.display_timer = None;
            session.dismiss_intent = true;
            let during_drag = session.phase == Phase::Dragging;
            log(diagnostics, BannerEvent::TimerFired { during_drag });
            if !during_drag {
                self.start_exit(ExitTrigger::Timer);
            }
            return;
        }

        let animation = session.animation;
        match animation {
            Some((pending, kind)) if pending == handle => {
                session.animation = None;
                match kind {
                    AnimationKind::Entrance => {
                        if session.phase == Phase::Entering {
                            session.phase = Phase::Shown;
                        }
                    }
                    AnimationKind::Exit => self.finish(),
                }
            }
            _ => log(
                diagnostics,
                BannerEvent::Ignored {
                    reason: IgnoredInput::StaleTimer,
                },
            ),
        }
    }

    /// Commits the banner to leaving.
    ///
    /// The display timer leaves the banner grabbable (`Countdown`); every
    /// other trigger commits to `Exiting`. A `Countdown` already in flight
    /// is committed in place without restarting its animation.
    fn start_exit(&mut self, trigger: ExitTrigger) {
        let diagnostics = self.diagnostics.as_ref();
        let Some(session) = self.session.as_mut() else {
            log(
                diagnostics,
                BannerEvent::Ignored {
                    reason: IgnoredInput::NoSession,
                },
            );
            return;
        };

        let grabbable = trigger == ExitTrigger::Timer;
        match session.phase {
            Phase::Exiting | Phase::Hidden => {
                log(
                    diagnostics,
                    BannerEvent::Ignored {
                        reason: IgnoredInput::RepeatedDismiss,
                    },
                );
                return;
            }
            Phase::Countdown => {
                if grabbable {
                    log(
                        diagnostics,
                        BannerEvent::Ignored {
                            reason: IgnoredInput::RepeatedDismiss,
                        },
                    );
                } else {
                    // The slide-out already in flight becomes final.
                    session.phase = Phase::Exiting;
                    session.tracker.detach();
                    log(diagnostics, BannerEvent::ExitStarted { trigger });
                }
                return;
            }
            Phase::Entering | Phase::Shown | Phase::Dragging => {}
        }

        cancel_display_timer(&mut self.timers, session, diagnostics);
        if let Some((handle, _)) = session.animation.take() {
            self.timers.cancel(handle);
        }

        session.dismiss_intent = true;
        if grabbable {
            session.phase = Phase::Countdown;
        } else {
            session.phase = Phase::Exiting;
            session.tracker.detach();
        }

        let transition = self.settings.transition.as_duration();
        let target = BannerFrame::hidden(session.nominal);
        session.frame = target;
        self.sink
            .apply(FrameUpdate::animated(target, transition, Easing::EaseIn));
        session.animation = Some((self.timers.schedule(transition), AnimationKind::Exit));
        log(diagnostics, BannerEvent::ExitStarted { trigger });
    }

    /// Ends the session: runs the completion and removes the banner.
    fn finish(&mut self) {
        let Some(mut session) = self.session.take() else {
            return;
        };

        cancel_display_timer(&mut self.timers, &mut session, self.diagnostics.as_ref());
        if let Some((handle, _)) = session.animation.take() {
            self.timers.cancel(handle);
        }

        if let Some(completion) = session.completion.take() {
            completion();
        }
        self.sink.remove();
        log(self.diagnostics.as_ref(), BannerEvent::Dismissed);
    }
}

impl<T: TimerSource, R: RenderSink> GestureListener for Presenter<T, R> {
    fn on_changed(&mut self, translation: f32) {
        self.handle_pan(GestureSample::changed(translation));
    }

    fn on_ended(&mut self, translation: f32) {
        self.handle_pan(GestureSample::ended(translation));
    }
}

impl<T: TimerSource, R: RenderSink> fmt::Debug for Presenter<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("phase", &self.phase())
            .field("frame", &self.frame())
            .field("settings", &self.settings)
            .finish()
    }
}

fn log(diagnostics: Option<&DiagnosticsHandle>, event: BannerEvent) {
    if let Some(handle) = diagnostics {
        handle.log(event);
    }
}

/// Points the banner at its resting frame for the session's nominal height.
///
/// A shown banner snaps there. An entering banner restarts its entrance
/// toward the new frame so the entrance ends at the right extent.
fn retarget_resting_frame<T: TimerSource, R: RenderSink>(
    timers: &mut T,
    sink: &mut R,
    session: &mut Session,
    transition: Duration,
) {
    match session.phase {
        Phase::Shown => {
            session.frame = BannerFrame::shown(session.nominal);
            sink.apply(FrameUpdate::immediate(session.frame));
        }
        Phase::Entering => {
            session.frame = BannerFrame::shown(session.nominal);
            if let Some((handle, _)) = session.animation.take() {
                timers.cancel(handle);
            }
            sink.apply(FrameUpdate::animated(
                session.frame,
                transition,
                Easing::EaseOut,
            ));
            session.animation = Some((timers.schedule(transition), AnimationKind::Entrance));
        }
        Phase::Hidden | Phase::Countdown | Phase::Dragging | Phase::Exiting => {}
    }
}

fn arm_display_timer<T: TimerSource>(
    timers: &mut T,
    session: &mut Session,
    diagnostics: Option<&DiagnosticsHandle>,
) {
    let delay = session.content.display_time();
    session.display_timer = Some(timers.schedule(delay.as_duration()));
    log(
        diagnostics,
        BannerEvent::TimerArmed {
            delay_secs: delay.as_secs_f64(),
        },
    );
}

fn cancel_display_timer<T: TimerSource>(
    timers: &mut T,
    session: &mut Session,
    diagnostics: Option<&DiagnosticsHandle>,
) {
    if let Some(handle) = session.display_timer.take() {
        timers.cancel(handle);
        log(diagnostics, BannerEvent::TimerCancelled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::sink::{RecordingSink, SinkRequest};
    use crate::banner::timer::DeadlineTimers;
    use crate::diagnostics::DiagnosticsCollector;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    struct Harness {
        t0: Instant,
        presenter: Presenter<DeadlineTimers, RecordingSink>,
        completions: Arc<AtomicUsize>,
    }

    impl Harness {
        fn new() -> Self {
            let t0 = Instant::now();
            Self {
                t0,
                presenter: Presenter::new(DeadlineTimers::starting_at(t0), RecordingSink::new()),
                completions: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn completion(&self) -> Option<Completion> {
            let counter = Arc::clone(&self.completions);
            Some(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }))
        }

        fn present(&mut self, title: &str, secs: f64) {
            let completion = self.completion();
            self.presenter.present(
                BannerContent::new(title).duration(Duration::from_secs_f64(secs)),
                HostMetrics::new(375.0, false),
                completion,
            );
        }

        fn at(&mut self, millis: u64) {
            self.presenter.tick(self.t0 + Duration::from_millis(millis));
        }

        fn completed(&self) -> usize {
            self.completions.load(Ordering::SeqCst)
        }

        fn removals(&self) -> usize {
            self.presenter.sink().removal_count()
        }
    }

    #[test]
    fn present_attaches_and_slides_in() {
        let mut h = Harness::new();
        h.present("hello", 2.0);

        assert_eq!(h.presenter.phase(), Phase::Entering);
        let requests = &h.presenter.sink().requests;
        assert!(matches!(requests[0], SinkRequest::Attach { nominal, .. } if nominal == 84.0));
        assert_eq!(
            h.presenter.sink().last_update(),
            Some(FrameUpdate::animated(
                BannerFrame::new(0.0, 84.0),
                Duration::from_millis(300),
                Easing::EaseOut
            ))
        );

        h.at(300);
        assert_eq!(h.presenter.phase(), Phase::Shown);
    }

    #[test]
    fn status_bar_hidden_uses_short_height() {
        let mut h = Harness::new();
        h.presenter.present(
            BannerContent::new("t"),
            HostMetrics::new(375.0, true),
            None,
        );
        assert_eq!(h.presenter.nominal_height().map(NominalHeight::value), Some(70.0));
    }

    #[test]
    fn timer_dismisses_after_duration_and_exit_animation() {
        let mut h = Harness::new();
        h.present("hello", 2.0);

        h.at(1900);
        assert_eq!(h.presenter.phase(), Phase::Shown);

        h.at(2000);
        assert_eq!(h.presenter.phase(), Phase::Countdown);
        assert!(h.presenter.has_dismiss_intent());
        assert_eq!(
            h.presenter.sink().last_update(),
            Some(FrameUpdate::animated(
                BannerFrame::new(-84.0, 84.0),
                Duration::from_millis(300),
                Easing::EaseIn
            ))
        );
        assert_eq!(h.completed(), 0);

        h.at(2300);
        assert_eq!(h.completed(), 1);
        assert_eq!(h.removals(), 1);
        assert_eq!(h.presenter.phase(), Phase::Hidden);

        h.at(10000);
        assert_eq!(h.completed(), 1);
    }

    #[test]
    fn dismiss_twice_completes_once() {
        let mut h = Harness::new();
        h.present("hello", 5.0);
        h.at(500);

        h.presenter.dismiss();
        let animations = h.presenter.sink().animated_count();
        h.presenter.dismiss();
        assert_eq!(h.presenter.sink().animated_count(), animations);

        h.at(1000);
        h.presenter.dismiss();
        assert_eq!(h.completed(), 1);
        assert_eq!(h.removals(), 1);
    }

    #[test]
    fn dismiss_without_session_is_noop() {
        let mut h = Harness::new();
        h.presenter.dismiss();
        h.presenter.handle_tap();
        h.presenter.handle_pan(GestureSample::began(3.0));
        assert!(h.presenter.sink().requests.is_empty());
    }

    #[test]
    fn tap_runs_action_then_dismisses() {
        let mut h = Harness::new();
        let taps = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&taps);
        let completion = h.completion();
        h.presenter.present(
            BannerContent::new("t").on_tap(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
            HostMetrics::default(),
            completion,
        );
        h.at(400);

        h.presenter.handle_tap();
        assert_eq!(taps.load(Ordering::SeqCst), 1);
        assert_eq!(h.presenter.phase(), Phase::Exiting);

        h.presenter.handle_tap();
        assert_eq!(taps.load(Ordering::SeqCst), 1);

        h.at(700);
        assert_eq!(h.completed(), 1);
    }

    #[test]
    fn tap_during_countdown_commits_without_restarting() {
        let mut h = Harness::new();
        h.present("t", 1.0);
        h.at(1000);
        assert_eq!(h.presenter.phase(), Phase::Countdown);
        let animations = h.presenter.sink().animated_count();

        h.presenter.handle_tap();
        assert_eq!(h.presenter.phase(), Phase::Exiting);
        assert_eq!(h.presenter.sink().animated_count(), animations);

        h.at(1300);
        assert_eq!(h.completed(), 1);
    }

    #[test]
    fn drag_suppresses_display_timer() {
        let mut h = Harness::new();
        h.present("t", 1.0);
        h.at(100);
        h.presenter.handle_pan(GestureSample::began(0.0));
        assert!(!h.presenter.has_display_timer());

        h.at(1500);
        assert_eq!(h.presenter.phase(), Phase::Dragging);
        assert!(!h.presenter.has_dismiss_intent());
        assert_eq!(h.completed(), 0);
        assert_eq!(h.presenter.timers().pending_count(), 0);
    }

    #[test]
    fn live_updates_are_immediate_and_clamped() {
        let mut h = Harness::new();
        h.present("t", 5.0);
        h.at(300);

        for translation in [0.0, -40.0, -400.0, 12.0, 37.0] {
            h.presenter.handle_pan(GestureSample::changed(translation));
            let update = h.presenter.sink().last_update().unwrap();
            assert!(update.is_immediate());
            assert!(update.frame.extent >= 84.0);
        }
        assert_eq!(h.presenter.frame().unwrap().extent, 97.0);
    }

    #[test]
    fn release_above_threshold_collapses() {
        let mut h = Harness::new();
        h.present("t", 5.0);
        h.presenter.handle_pan(GestureSample::began(0.0));
        h.presenter.handle_pan(GestureSample::changed(-6.0));
        h.presenter.handle_pan(GestureSample::ended(-6.0));

        let update = h.presenter.sink().last_update().unwrap();
        assert_eq!(update.frame, BannerFrame::new(-84.0, 0.0));
        assert_eq!(update.easing, Easing::EaseInOut);
        assert_eq!(h.presenter.phase(), Phase::Exiting);
    }

    #[test]
    fn release_at_boundary_slides_out_at_full_height() {
        let mut h = Harness::new();
        h.present("t", 5.0);
        h.presenter.handle_pan(GestureSample::began(0.0));
        h.presenter.handle_pan(GestureSample::ended(-5.0));

        let update = h.presenter.sink().last_update().unwrap();
        assert_eq!(update.frame, BannerFrame::new(-84.0, 84.0));
    }

    #[test]
    fn release_duration_scales_with_stretch() {
        let mut h = Harness::new();
        h.present("t", 5.0);
        // 84 + 12 + (Δy - 12) / 25 = 168  =>  Δy = 1812
        h.presenter.handle_pan(GestureSample::began(1812.0));
        assert_eq!(h.presenter.frame().unwrap().extent, 168.0);
        h.presenter.handle_pan(GestureSample::ended(1812.0));

        let update = h.presenter.sink().last_update().unwrap();
        assert_eq!(update.duration, Duration::from_millis(600));

        h.at(590);
        assert_eq!(h.completed(), 0);
        h.at(600);
        assert_eq!(h.completed(), 1);
        assert_eq!(h.removals(), 1);
    }

    #[test]
    fn samples_after_release_are_ignored() {
        let mut h = Harness::new();
        h.present("t", 5.0);
        h.presenter.handle_pan(GestureSample::began(0.0));
        h.presenter.handle_pan(GestureSample::ended(0.0));
        let before = h.presenter.sink().requests.len();

        h.presenter.handle_pan(GestureSample::began(10.0));
        h.presenter.handle_pan(GestureSample::changed(20.0));
        h.presenter.handle_pan(GestureSample::ended(20.0));
        assert_eq!(h.presenter.sink().requests.len(), before);
    }

    #[test]
    fn drag_grabbing_countdown_collapses_on_release() {
        let mut h = Harness::new();
        h.present("t", 1.0);
        h.at(1000);
        assert_eq!(h.presenter.phase(), Phase::Countdown);

        h.presenter.handle_pan(GestureSample::began(30.0));
        assert_eq!(h.presenter.phase(), Phase::Dragging);

        // The countdown's own exit must not finish the banner.
        h.at(1500);
        assert_eq!(h.completed(), 0);

        h.presenter.handle_pan(GestureSample::ended(30.0));
        assert_eq!(h.presenter.sink().last_update().unwrap().frame.extent, 0.0);

        h.at(5000);
        assert_eq!(h.completed(), 1);
        assert_eq!(h.removals(), 1);
    }

    #[test]
    fn timer_firing_during_drag_only_sets_intent() {
        let mut h = Harness::new();
        h.present("first", 5.0);
        h.presenter.handle_pan(GestureSample::began(3.0));
        // Re-presenting mid-drag re-arms the display timer.
        h.present("second", 1.0);

        h.at(1000);
        assert_eq!(h.presenter.phase(), Phase::Dragging);
        assert!(h.presenter.has_dismiss_intent());
        assert_eq!(h.removals(), 0);

        h.presenter.handle_pan(GestureSample::ended(3.0));
        assert_eq!(h.presenter.sink().last_update().unwrap().frame.extent, 0.0);
    }

    #[test]
    fn re_present_replaces_content_and_resets_window() {
        let mut h = Harness::new();
        h.present("first", 2.0);
        h.at(1500);
        h.present("second", 2.0);

        assert_eq!(h.presenter.content().unwrap().title_text(), "second");
        assert_eq!(h.presenter.sink().attach_count(), 1);

        h.at(3000);
        assert_eq!(h.presenter.phase(), Phase::Shown);
        h.at(3500);
        assert_eq!(h.presenter.phase(), Phase::Countdown);
        h.at(3800);
        assert_eq!(h.completed(), 1);
    }

    #[test]
    fn present_while_exiting_starts_fresh_banner() {
        let mut h = Harness::new();
        h.present("first", 5.0);
        h.presenter.dismiss();
        h.present("second", 5.0);

        assert_eq!(h.presenter.phase(), Phase::Entering);
        assert_eq!(h.presenter.sink().attach_count(), 2);

        h.at(1000);
        assert_eq!(h.completed(), 0);
        assert_eq!(h.removals(), 0);
    }

    #[test]
    fn orientation_change_recomputes_height() {
        let mut h = Harness::new();
        h.present("t", 5.0);
        h.at(300);

        h.presenter
            .orientation_changed(HostMetrics::new(812.0, true));
        assert_eq!(h.presenter.frame(), Some(BannerFrame::new(0.0, 70.0)));
        assert!(matches!(
            h.presenter.sink().requests.iter().rev().nth(1),
            Some(SinkRequest::Relayout { nominal, .. }) if *nominal == 70.0
        ));
    }

    #[test]
    fn orientation_change_while_entering_settles_at_new_height() {
        let mut h = Harness::new();
        h.present("t", 5.0);
        h.at(100);

        h.presenter
            .orientation_changed(HostMetrics::new(812.0, true));
        assert_eq!(
            h.presenter.sink().last_update(),
            Some(FrameUpdate::animated(
                BannerFrame::new(0.0, 70.0),
                Duration::from_millis(300),
                Easing::EaseOut,
            ))
        );

        h.at(399);
        assert_eq!(h.presenter.phase(), Phase::Entering);
        h.at(400);
        assert_eq!(h.presenter.phase(), Phase::Shown);
        assert_eq!(h.presenter.frame(), Some(BannerFrame::new(0.0, 70.0)));
    }

    #[test]
    fn re_present_with_new_height_while_entering_retargets_entrance() {
        let mut h = Harness::new();
        h.present("first", 5.0);
        h.at(100);

        h.presenter.present(
            BannerContent::new("second"),
            HostMetrics::new(375.0, true),
            None,
        );
        assert_eq!(h.presenter.sink().attach_count(), 1);

        h.at(400);
        assert_eq!(h.presenter.phase(), Phase::Shown);
        assert_eq!(h.presenter.frame(), Some(BannerFrame::new(0.0, 70.0)));
    }

    #[test]
    fn gesture_listener_drives_full_drag() {
        let mut h = Harness::new();
        h.present("t", 5.0);
        h.at(300);

        h.presenter.on_changed(37.0);
        assert_eq!(h.presenter.phase(), Phase::Dragging);
        assert_eq!(h.presenter.frame(), Some(BannerFrame::new(0.0, 97.0)));

        h.presenter.on_ended(-6.0);
        assert_eq!(h.presenter.phase(), Phase::Exiting);
        assert_eq!(h.presenter.frame(), Some(BannerFrame::new(-84.0, 0.0)));
        let release = h.presenter.sink().last_update().expect("release update");
        assert_eq!(release.easing, Easing::EaseInOut);

        let requests = h.presenter.sink().requests.len();
        h.presenter.on_changed(10.0);
        h.presenter.on_ended(10.0);
        assert_eq!(h.presenter.sink().requests.len(), requests);
        assert_eq!(h.presenter.frame(), Some(BannerFrame::new(-84.0, 0.0)));
    }

    #[test]
    fn tap_during_countdown_logs_committed_exit() {
        let mut collector = DiagnosticsCollector::default();
        let mut h = Harness::new();
        h.presenter.set_diagnostics(collector.handle());

        h.present("t", 1.0);
        h.at(1000);
        h.presenter.handle_tap();
        collector.process_pending();

        let kinds = collector.kinds();
        assert!(kinds.contains(&BannerEvent::ExitStarted {
            trigger: ExitTrigger::Tap
        }));
        assert!(!kinds.contains(&BannerEvent::Ignored {
            reason: IgnoredInput::RepeatedDismiss
        }));
    }

    #[test]
    fn diagnostics_record_lifecycle() {
        let mut collector = DiagnosticsCollector::default();
        let mut h = Harness::new();
        h.presenter.set_diagnostics(collector.handle());

        h.present("t", 1.0);
        h.at(1000);
        h.at(1300);
        h.presenter.dismiss();
        collector.process_pending();

        let kinds = collector.kinds();
        assert!(matches!(kinds[0], BannerEvent::Presented { .. }));
        assert!(kinds.contains(&BannerEvent::TimerFired { during_drag: false }));
        assert!(kinds.contains(&BannerEvent::ExitStarted {
            trigger: ExitTrigger::Timer
        }));
        assert!(kinds.contains(&BannerEvent::Dismissed));
        assert_eq!(
            kinds.last(),
            Some(&BannerEvent::Ignored {
                reason: IgnoredInput::NoSession
            })
        );
    }
}
