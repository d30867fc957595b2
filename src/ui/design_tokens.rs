// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants for the chat head overlay and the demo host.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

Banner geometry that users may tune (insets, avatar size, corner radius)
lives in `config` instead.

## Examples

```
use chat_heads::ui::design_tokens::{opacity, palette};
use iced::Color;

let scrim = Color {
    a: opacity::SUBTITLE,
    ..palette::WHITE
};
assert!(scrim.a < 1.0);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    /// Banner card background
    pub const BANNER_BACKGROUND: Color = Color::from_rgb(0.13, 0.14, 0.16);

    // Avatar accents, picked by sender
    pub const ACCENT_BLUE: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const ACCENT_GREEN: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const ACCENT_ORANGE: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const ACCENT_RED: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const ACCENT_PURPLE: Color = Color::from_rgb(0.58, 0.4, 0.86);

    pub const ACCENTS: [Color; 5] = [
        ACCENT_BLUE,
        ACCENT_GREEN,
        ACCENT_ORANGE,
        ACCENT_RED,
        ACCENT_PURPLE,
    ];
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    /// Card background relative to banner opacity
    pub const SURFACE: f32 = 0.95;

    /// Subtitle text
    pub const SUBTITLE: f32 = 0.8;

    /// Subtitle of a self-deleting message
    pub const EPHEMERAL: f32 = 0.5;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const SIDEBAR_WIDTH: f32 = 240.0;

    /// Gap between title and subtitle baselines
    pub const LINE_GAP: f32 = 2.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// App title in the demo host
    pub const TITLE_MD: f32 = 20.0;

    /// Banner title (conversation or sender)
    pub const BANNER_TITLE: f32 = 14.0;

    /// Banner subtitle (message preview)
    pub const BANNER_SUBTITLE: f32 = 13.0;

    /// Avatar initials
    pub const INITIALS: f32 = 12.0;

    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;

    /// Rough average glyph width as a fraction of font size, used to
    /// truncate text without measuring it.
    pub const GLYPH_WIDTH_RATIO: f32 = 0.55;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::EPHEMERAL < opacity::SUBTITLE);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE <= 1.0);

    assert!(typography::BANNER_TITLE > typography::BANNER_SUBTITLE);
    assert!(typography::GLYPH_WIDTH_RATIO > 0.0 && typography::GLYPH_WIDTH_RATIO < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
    }

    #[test]
    fn accents_are_distinct() {
        for (i, a) in palette::ACCENTS.iter().enumerate() {
            for b in &palette::ACCENTS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
