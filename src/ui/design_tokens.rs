// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: the deep-blue / gold / neon scheme of the app
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Base background tone (#060735).
    pub const DEEP_BLUE: Color = Color::from_rgb(0.024, 0.027, 0.208);
    /// Slightly lifted surface over the deep background.
    pub const DEEP_BLUE_LIGHT: Color = Color::from_rgb(0.07, 0.08, 0.30);

    /// Accent gold used for active states, card borders, and highlights.
    pub const GOLD: Color = Color::from_rgb(0.85, 0.70, 0.30);
    pub const GOLD_DIM: Color = Color::from_rgb(0.60, 0.48, 0.20);

    // Neon accents for the decorative layer.
    pub const NEON_PURPLE: Color = Color::from_rgb(0.60, 0.30, 0.95);
    pub const NEON_BLUE: Color = Color::from_rgb(0.25, 0.55, 1.0);

    /// Muted foreground for secondary text.
    pub const MUTED: Color = Color::from_rgb(0.62, 0.64, 0.78);

    // Semantic mood colors (calendar badges).
    pub const MOOD_POSITIVE: Color = Color::from_rgb(0.20, 0.78, 0.55);
    pub const MOOD_NEUTRAL: Color = Color::from_rgb(0.92, 0.78, 0.25);
    pub const MOOD_NEGATIVE: Color = Color::from_rgb(0.90, 0.30, 0.30);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const GLOW_FAINT: f32 = 0.15;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Glass panel background.
    pub const GLASS: f32 = 0.35;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 50.0;

    // Tarot card dimensions (back-of-card widgets)
    pub const CARD_SM_WIDTH: f32 = 80.0;
    pub const CARD_SM_HEIGHT: f32 = 112.0;
    pub const CARD_LG_WIDTH: f32 = 192.0;
    pub const CARD_LG_HEIGHT: f32 = 288.0;

    // Decorative orbs
    pub const ORB_SM: f32 = 96.0;
    pub const ORB_MD: f32 = 128.0;

    // Bottom navigation
    pub const NAVBAR_HEIGHT: f32 = 72.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - main page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - section headings
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - card names, emphasized labels
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - badges, timestamps, nav labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const GLOW: Shadow = Shadow {
        color: palette::GOLD_DIM,
        offset: Vector::ZERO,
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLASS > 0.0 && opacity::GLASS < 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Card aspect sanity
    assert!(sizing::CARD_SM_HEIGHT > sizing::CARD_SM_WIDTH);
    assert!(sizing::CARD_LG_HEIGHT > sizing::CARD_LG_WIDTH);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn card_sizes_share_aspect_ratio() {
        let small = sizing::CARD_SM_HEIGHT / sizing::CARD_SM_WIDTH;
        let large = sizing::CARD_LG_HEIGHT / sizing::CARD_LG_WIDTH;
        assert!((small - 1.4).abs() < 0.01);
        assert!((large - 1.5).abs() < 0.01);
    }
}
