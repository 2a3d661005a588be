// SPDX-License-Identifier: MPL-2.0
//! End-to-end banner lifecycles on virtual time.
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use herald::banner::{
    BannerContent, DeadlineTimers, GestureSample, Phase, Presenter, RecordingSink, SinkRequest,
};
use herald::diagnostics::{BannerEvent, DiagnosticsCollector, ExitTrigger};
use herald::domain::banner::{BannerFrame, DisplayDuration, HostMetrics, NominalHeight};

fn presenter(t0: Instant) -> Presenter<DeadlineTimers, RecordingSink> {
    Presenter::new(DeadlineTimers::starting_at(t0), RecordingSink::new())
}

fn ms(t0: Instant, millis: u64) -> Instant {
    t0 + Duration::from_millis(millis)
}

fn shown() -> BannerFrame {
    BannerFrame::shown(NominalHeight::for_status_bar(false))
}

#[test]
fn banner_enters_waits_and_leaves_once() {
    let t0 = Instant::now();
    let mut presenter = presenter(t0);
    let completions = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&completions);

    presenter.present(
        BannerContent::new("Saved").display_duration(DisplayDuration::from_secs_f64(1.0)),
        HostMetrics::default(),
        Some(Box::new(move || {
            *counter.lock().expect("counter lock") += 1;
        })),
    );
    assert_eq!(presenter.phase(), Phase::Entering);

    presenter.tick(ms(t0, 300));
    assert_eq!(presenter.phase(), Phase::Shown);

    presenter.tick(ms(t0, 1000));
    assert_eq!(presenter.phase(), Phase::Countdown);

    presenter.tick(ms(t0, 1300));
    assert_eq!(presenter.phase(), Phase::Hidden);
    assert!(!presenter.is_active());
    assert_eq!(*completions.lock().expect("counter lock"), 1);

    let requests = &presenter.sink().requests;
    assert!(matches!(requests.first(), Some(SinkRequest::Attach { .. })));
    assert_eq!(requests.last(), Some(&SinkRequest::Remove));
    assert_eq!(presenter.sink().removal_count(), 1);

    // Nothing left to fire.
    presenter.tick(ms(t0, 10_000));
    assert_eq!(presenter.sink().removal_count(), 1);
    assert_eq!(*completions.lock().expect("counter lock"), 1);
}

#[test]
fn downward_drag_stretches_then_slides_out() {
    let t0 = Instant::now();
    let mut presenter = presenter(t0);
    presenter.present(BannerContent::new("Stretch"), HostMetrics::default(), None);
    presenter.tick(ms(t0, 300));

    presenter.handle_pan(GestureSample::began(12.0));
    assert_eq!(presenter.phase(), Phase::Dragging);
    assert_eq!(presenter.frame().map(|f| f.extent), Some(96.0));
    assert!(!presenter.has_display_timer());

    presenter.handle_pan(GestureSample::changed(262.0));
    assert_eq!(presenter.frame().map(|f| f.extent), Some(106.0));
    let last = presenter.sink().last_update().expect("drag update");
    assert!(last.is_immediate());

    presenter.handle_pan(GestureSample::ended(262.0));
    assert_eq!(presenter.phase(), Phase::Exiting);
    let exit = presenter.sink().last_update().expect("exit update");
    assert!(!exit.is_immediate());
    assert_eq!(exit.frame, BannerFrame::new(-84.0, 84.0));
    assert!(exit.duration > Duration::from_millis(300));

    presenter.tick(ms(t0, 2000));
    assert_eq!(presenter.phase(), Phase::Hidden);
}

#[test]
fn upward_flick_collapses_banner() {
    let t0 = Instant::now();
    let mut presenter = presenter(t0);
    presenter.present(BannerContent::new("Flick"), HostMetrics::default(), None);
    presenter.tick(ms(t0, 300));

    presenter.handle_pan(GestureSample::began(-10.0));
    presenter.handle_pan(GestureSample::ended(-30.0));

    assert_eq!(presenter.frame(), Some(BannerFrame::new(-84.0, 0.0)));
}

#[test]
fn timer_expiring_mid_drag_waits_for_release() {
    let t0 = Instant::now();
    let mut presenter = presenter(t0);
    presenter.present(
        BannerContent::new("Hold").display_duration(DisplayDuration::from_secs_f64(1.0)),
        HostMetrics::default(),
        None,
    );
    presenter.tick(ms(t0, 300));
    presenter.handle_pan(GestureSample::began(20.0));

    presenter.tick(ms(t0, 5000));
    assert_eq!(presenter.phase(), Phase::Dragging);

    // A downward release still collapses once the banner wants to leave.
    presenter.handle_pan(GestureSample::ended(20.0));
    assert_eq!(presenter.phase(), Phase::Exiting);
    assert_eq!(presenter.frame().map(|f| f.extent), Some(0.0));
}

#[test]
fn presenting_again_replaces_content_in_place() {
    let t0 = Instant::now();
    let mut collector = DiagnosticsCollector::default();
    let mut presenter = presenter(t0);
    presenter.set_diagnostics(collector.handle());

    presenter.present(
        BannerContent::new("First"),
        HostMetrics::default(),
        Some(Box::new(|| {})),
    );
    presenter.tick(ms(t0, 300));
    presenter.present(BannerContent::new("Second"), HostMetrics::default(), None);

    assert_eq!(presenter.phase(), Phase::Shown);
    assert_eq!(presenter.frame(), Some(shown()));
    assert_eq!(presenter.sink().attach_count(), 1);
    assert_eq!(
        presenter.content().map(BannerContent::title_text),
        Some("Second")
    );

    collector.process_pending();
    let kinds = collector.kinds();
    assert!(kinds.contains(&BannerEvent::CompletionSuperseded));
    assert!(kinds.contains(&BannerEvent::ContentReplaced));
}

#[test]
fn tap_runs_action_and_reports_lifecycle() {
    let t0 = Instant::now();
    let mut collector = DiagnosticsCollector::default();
    let mut presenter = presenter(t0);
    presenter.set_diagnostics(collector.handle());

    let taps = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&taps);
    presenter.present(
        BannerContent::new("Open").on_tap(move || {
            *counter.lock().expect("tap lock") += 1;
        }),
        HostMetrics::default(),
        None,
    );
    presenter.tick(ms(t0, 300));
    presenter.handle_tap();
    presenter.handle_tap();
    presenter.tick(ms(t0, 600));

    assert_eq!(*taps.lock().expect("tap lock"), 1);
    assert_eq!(presenter.phase(), Phase::Hidden);

    collector.process_pending();
    let kinds = collector.kinds();
    assert!(matches!(kinds.first(), Some(BannerEvent::Presented { .. })));
    assert!(kinds.contains(&BannerEvent::ExitStarted {
        trigger: ExitTrigger::Tap
    }));
    assert_eq!(kinds.last(), Some(&BannerEvent::Dismissed));
}

#[test]
fn status_bar_change_resizes_shown_banner() {
    let t0 = Instant::now();
    let mut presenter = presenter(t0);
    presenter.present(BannerContent::new("Rotate"), HostMetrics::default(), None);
    presenter.tick(ms(t0, 300));

    presenter.orientation_changed(HostMetrics::new(812.0, true));

    assert_eq!(presenter.nominal_height().map(NominalHeight::value), Some(70.0));
    assert_eq!(
        presenter.frame(),
        Some(BannerFrame::shown(NominalHeight::for_status_bar(true)))
    );
}
