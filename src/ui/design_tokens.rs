// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by the banner view and the demo shell.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Banner sub-element sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use herald::ui::design_tokens::{palette, opacity, sizing};
use iced::Color;

let background = Color {
    a: opacity::SURFACE,
    ..palette::WHITE
};
assert_eq!(sizing::INDICATOR_WIDTH, 29.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Banner background, nearly opaque so content underneath shows faintly.
    pub const SURFACE: f32 = 0.98;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Drag indicator pill.
    pub const INDICATOR_WIDTH: f32 = 29.0;
    pub const INDICATOR_HEIGHT: f32 = 4.0;
    /// Gap between the indicator and the bottom edge.
    pub const INDICATOR_BOTTOM_PADDING: f32 = 5.0;

    /// Bottom strip that accepts drags.
    pub const GESTURE_STRIP_HEIGHT: f32 = 20.0;

    /// Separator along the bottom edge.
    pub const LINE_HEIGHT: f32 = 1.0;

    /// Largest side of the leading image.
    pub const IMAGE_MAX: f32 = 48.0;
    /// Leading inset of the image.
    pub const IMAGE_OFFSET: f32 = 18.0;
    /// Gap between the image and the text column.
    pub const TEXT_MARGIN: f32 = 18.0;

    /// Text lines per label.
    pub const TEXT_MAX_LINES: u32 = 2;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Banner title.
    pub const TITLE: f32 = 15.0;

    /// Banner subtitle.
    pub const SUBTITLE: f32 = 13.0;

    /// Demo shell body text.
    pub const BODY: f32 = 14.0;

    /// Line height multiplier applied to font sizes.
    pub const LINE_HEIGHT_FACTOR: f32 = 1.3;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Hairline shadow under the banner.
    pub const BANNER: Shadow = Shadow {
        color: Color {
            a: opacity::OVERLAY_SUBTLE / 2.0,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 0.5 },
        blur_radius: 0.5,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::GESTURE_STRIP_HEIGHT > sizing::INDICATOR_HEIGHT + sizing::INDICATOR_BOTTOM_PADDING);
    assert!(sizing::IMAGE_MAX > 0.0);

    assert!(typography::TITLE > typography::SUBTITLE);
    assert!(typography::LINE_HEIGHT_FACTOR >= 1.0);
};
