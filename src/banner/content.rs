// SPDX-License-Identifier: MPL-2.0
//! Banner content.
//!
//! `BannerContent` is supplied once per presentation and never mutated by
//! the presenter. Optional parts (subtitle, image, action) are plain
//! absences with their own layout and behavior defaults.

use crate::domain::banner::DisplayDuration;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Callback run when the user taps the banner.
#[derive(Clone)]
pub struct Action(Arc<dyn Fn() + Send + Sync>);

impl Action {
    /// Wraps a callback.
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Runs the callback.
    pub fn invoke(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Bitmap shown on the leading edge of the banner.
///
/// Opaque to the presenter; only the layout and view read it.
#[derive(Debug, Clone)]
pub struct BannerImage {
    width: u32,
    height: u32,
    rgba_bytes: Arc<Vec<u8>>,
}

impl BannerImage {
    /// Creates an image from RGBA pixels.
    ///
    /// Returns `None` when the buffer length does not match the dimensions.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Option<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if rgba_bytes.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        })
    }

    /// Image width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA pixels.
    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Shared handle to the pixel buffer.
    #[must_use]
    pub fn rgba_arc(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.rgba_bytes)
    }
}

/// What a banner shows and how long it stays.
#[derive(Debug, Clone)]
pub struct BannerContent {
    title: String,
    subtitle: Option<String>,
    image: Option<BannerImage>,
    duration: DisplayDuration,
    action: Option<Action>,
}

impl BannerContent {
    /// Creates content with a title and the default display duration.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            image: None,
            duration: DisplayDuration::default(),
            action: None,
        }
    }

    /// Sets the subtitle. An empty string counts as no subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        let subtitle = subtitle.into();
        self.subtitle = (!subtitle.is_empty()).then_some(subtitle);
        self
    }

    /// Sets the leading image.
    #[must_use]
    pub fn image(mut self, image: BannerImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Sets how long the banner stays before auto-dismissing.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration.into();
        self
    }

    /// Sets the display duration from an already validated value.
    #[must_use]
    pub fn display_duration(mut self, duration: DisplayDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the tap action.
    #[must_use]
    pub fn on_tap(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.action = Some(Action::new(f));
        self
    }

    /// Banner title.
    #[must_use]
    pub fn title_text(&self) -> &str {
        &self.title
    }

    /// Banner subtitle, if any.
    #[must_use]
    pub fn subtitle_text(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Leading image, if any.
    #[must_use]
    pub fn image_ref(&self) -> Option<&BannerImage> {
        self.image.as_ref()
    }

    /// Display duration.
    #[must_use]
    pub fn display_time(&self) -> DisplayDuration {
        self.duration
    }

    /// Tap action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }
}
