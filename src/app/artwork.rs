// SPDX-License-Identifier: MPL-2.0
//! Banner artwork loading.

use crate::banner::BannerImage;
use crate::error::{Error, Result};
use crate::ui::design_tokens::sizing;
use std::path::Path;

/// Decodes an image file into banner artwork no larger than the image slot.
pub fn load_banner_image(path: &Path) -> Result<BannerImage> {
    let dynamic = image_rs::open(path)?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let slot = sizing::IMAGE_MAX as u32;
    let fitted = if dynamic.width() > slot || dynamic.height() > slot {
        dynamic.thumbnail(slot, slot)
    } else {
        dynamic
    };

    let rgba = fitted.to_rgba8();
    let (width, height) = rgba.dimensions();
    BannerImage::from_rgba(width, height, rgba.into_raw())
        .ok_or_else(|| Error::Image(format!("invalid pixel buffer for {}", path.display())))
}
