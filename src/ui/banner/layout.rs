// SPDX-License-Identifier: MPL-2.0
//! Sub-element geometry of a banner.
//!
//! Everything is in banner-local coordinates with the origin at the banner's
//! top-left corner. Content elements (image, title, subtitle) are laid out
//! against the nominal height; the bottom-anchored chrome (indicator, drag
//! strip, separator line) follows the live extent.

use crate::banner::BannerContent;
use crate::domain::banner::NominalHeight;
use crate::ui::design_tokens::{sizing, typography};
use iced::Rectangle;

/// Vertical nudge applied to the image when the status bar is visible.
const STATUS_BAR_VISIBLE_NUDGE: f32 = 10.0;
/// Vertical nudge applied to the image when the status bar is hidden.
const STATUS_BAR_HIDDEN_NUDGE: f32 = 2.5;
/// Lift applied to a lone title so it sits optically centered on the image.
const LONE_TITLE_LIFT: f32 = 2.5;
/// The subtitle tucks this far under the title's last line.
const SUBTITLE_OVERLAP: f32 = 1.0;

/// Approximate text measurement.
///
/// The banner never shapes text itself; it estimates wrapped height from an
/// average glyph width so layout stays a pure function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Title font size.
    pub title_size: f32,
    /// Subtitle font size.
    pub subtitle_size: f32,
    /// Line height as a multiple of font size.
    pub line_height_factor: f32,
    /// Average glyph advance as a fraction of font size.
    pub average_advance: f32,
}

impl TextMetrics {
    /// Height of one line at `size`.
    #[must_use]
    pub fn line_height(&self, size: f32) -> f32 {
        size * self.line_height_factor
    }

    /// Height of `text` wrapped into `width`, capped at `max_lines`.
    #[must_use]
    pub fn measure(&self, text: &str, size: f32, width: f32, max_lines: u32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }

        let advance = (size * self.average_advance).max(1.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let per_line = ((width / advance).floor() as usize).max(1);
        let lines = text
            .chars()
            .count()
            .div_ceil(per_line)
            .clamp(1, max_lines.max(1) as usize);

        #[allow(clippy::cast_precision_loss)]
        let lines = lines as f32;
        lines * self.line_height(size)
    }
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            title_size: typography::TITLE,
            subtitle_size: typography::SUBTITLE,
            line_height_factor: typography::LINE_HEIGHT_FACTOR,
            average_advance: 0.5,
        }
    }
}

/// Resolved sub-element frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerLayout {
    /// Banner width.
    pub width: f32,
    /// Extent the bottom chrome is anchored to.
    pub extent: f32,
    /// Leading image, if the content has one.
    pub image: Option<Rectangle>,
    /// Title label.
    pub title: Rectangle,
    /// Subtitle label, if the content has one.
    pub subtitle: Option<Rectangle>,
    /// Drag indicator pill.
    pub indicator: Rectangle,
    /// Strip along the bottom edge that accepts drags.
    pub gesture_strip: Rectangle,
    /// Separator along the bottom edge.
    pub line: Rectangle,
}

impl BannerLayout {
    /// Lays out `content` in a banner of `width` resting at `nominal`.
    #[must_use]
    pub fn compute(
        content: &BannerContent,
        width: f32,
        nominal: NominalHeight,
        status_bar_hidden: bool,
        metrics: &TextMetrics,
    ) -> Self {
        let height = nominal.value();
        let nudge = if status_bar_hidden {
            STATUS_BAR_HIDDEN_NUDGE
        } else {
            STATUS_BAR_VISIBLE_NUDGE
        };

        let (image_width, image_height) = content
            .image_ref()
            .map(|image| fit_image(image.width(), image.height()))
            .unwrap_or((0.0, 0.0));
        let image_top = (height - image_height) / 2.0 + nudge;
        let image_center_y = image_top + image_height / 2.0;
        let image = content.image_ref().map(|_| Rectangle {
            x: sizing::IMAGE_OFFSET,
            y: image_top,
            width: image_width,
            height: image_height,
        });

        let text_x = match image {
            Some(frame) => frame.x + frame.width + sizing::TEXT_MARGIN,
            None => sizing::IMAGE_OFFSET,
        };
        let text_width = (width - text_x - sizing::TEXT_MARGIN).max(0.0);

        let title_height = metrics.measure(
            content.title_text(),
            metrics.title_size,
            text_width,
            sizing::TEXT_MAX_LINES,
        );
        let subtitle_height = content.subtitle_text().map_or(0.0, |subtitle| {
            metrics.measure(
                subtitle,
                metrics.subtitle_size,
                text_width,
                sizing::TEXT_MAX_LINES,
            )
        });

        let text_top = if image.is_some() {
            image_center_y - (title_height + subtitle_height) / 2.0
        } else {
            sizing::IMAGE_OFFSET
        };

        let mut title = Rectangle {
            x: text_x,
            y: text_top,
            width: text_width,
            height: title_height,
        };
        let subtitle = content.subtitle_text().map(|_| Rectangle {
            x: text_x,
            y: title.y + title.height - SUBTITLE_OVERLAP,
            width: text_width,
            height: subtitle_height,
        });
        if subtitle.is_none() {
            title.y = image_center_y - LONE_TITLE_LIFT - title.height / 2.0;
        }

        let mut layout = Self {
            width,
            extent: height,
            image,
            title,
            subtitle,
            indicator: Rectangle::default(),
            gesture_strip: Rectangle::default(),
            line: Rectangle::default(),
        };
        layout.anchor_bottom(height);
        layout
    }

    /// The same layout with its bottom chrome re-anchored to `extent`.
    #[must_use]
    pub fn with_extent(mut self, extent: f32) -> Self {
        self.anchor_bottom(extent);
        self
    }

    fn anchor_bottom(&mut self, extent: f32) {
        self.extent = extent;
        self.line = Rectangle {
            x: 0.0,
            y: extent - sizing::LINE_HEIGHT,
            width: self.width,
            height: sizing::LINE_HEIGHT,
        };
        self.gesture_strip = Rectangle {
            x: 0.0,
            y: extent - sizing::GESTURE_STRIP_HEIGHT,
            width: self.width,
            height: sizing::GESTURE_STRIP_HEIGHT,
        };
        self.indicator = Rectangle {
            x: (self.width - sizing::INDICATOR_WIDTH) / 2.0,
            y: extent - sizing::INDICATOR_HEIGHT - sizing::INDICATOR_BOTTOM_PADDING,
            width: sizing::INDICATOR_WIDTH,
            height: sizing::INDICATOR_HEIGHT,
        };
    }

    /// Whether a banner-local `y` falls in the drag strip.
    #[must_use]
    pub fn in_gesture_strip(&self, y: f32) -> bool {
        y >= self.gesture_strip.y && y <= self.gesture_strip.y + self.gesture_strip.height
    }
}

/// Scales an image down to fit the image slot, preserving aspect ratio.
#[allow(clippy::cast_precision_loss)]
fn fit_image(width: u32, height: u32) -> (f32, f32) {
    let (w, h) = (width as f32, height as f32);
    let longest = w.max(h);
    if longest <= sizing::IMAGE_MAX || longest == 0.0 {
        return (w, h);
    }
    let scale = sizing::IMAGE_MAX / longest;
    (w * scale, h * scale)
}
