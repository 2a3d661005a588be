// SPDX-License-Identifier: MPL-2.0
use std::time::{Duration, Instant};

use herald::banner::{BannerContent, DeadlineTimers, Phase, Presenter, RecordingSink};
use herald::config::{self, Config, LOAD_ERROR_WARNING};
use herald::domain::banner::{height_bounds, HostMetrics};
use tempfile::tempdir;

#[test]
fn saved_config_drives_presenter_timing() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut custom = Config::default();
    custom.animation.duration_ms = Some(500);
    custom.display.default_duration_secs = Some(1.5);
    custom.display.status_bar_hidden = Some(true);
    config::save_with_override(&custom, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, custom);

    let t0 = Instant::now();
    let mut presenter = Presenter::with_settings(
        DeadlineTimers::starting_at(t0),
        RecordingSink::new(),
        loaded.banner_settings(),
    );
    presenter.present(
        BannerContent::new("Configured").display_duration(loaded.default_content_duration()),
        loaded.host_metrics(375.0),
        None,
    );

    assert_eq!(
        presenter.nominal_height().map(|n| n.value()),
        Some(70.0)
    );

    presenter.tick(t0 + Duration::from_millis(499));
    assert_eq!(presenter.phase(), Phase::Entering);
    presenter.tick(t0 + Duration::from_millis(500));
    assert_eq!(presenter.phase(), Phase::Shown);

    presenter.tick(t0 + Duration::from_millis(1500));
    assert_eq!(presenter.phase(), Phase::Countdown);
    presenter.tick(t0 + Duration::from_millis(2000));
    assert_eq!(presenter.phase(), Phase::Hidden);
}

#[test]
fn out_of_range_values_are_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[animation]\nduration_ms = 1\n\n[layout]\nheight_status_bar_visible = 9000.0\n",
    )
    .expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let settings = loaded.banner_settings();

    assert_eq!(settings.transition.millis(), config::MIN_ANIMATION_DURATION_MS);
    assert_eq!(
        settings
            .nominal_height(HostMetrics::new(375.0, false))
            .value(),
        height_bounds::MAX
    );
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "animation = [not toml")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
}
