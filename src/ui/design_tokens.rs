// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! - **Palette**: base colors, maroon/saffron brand scheme
//! - **Opacity**: standardized overlay levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//!
//! Tokens are designed to stay consistent; keep the ratios (e.g. MD = XS * 2)
//! when adjusting them.

use iced::Color;

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

    // Brand colors: the restaurant's deep maroon surfaces
    pub const MAROON_900: Color = Color::from_rgb(0.18, 0.035, 0.027); // #2e0907
    pub const MAROON_700: Color = Color::from_rgb(0.29, 0.055, 0.043); // #4a0e0b
    pub const MAROON_500: Color = Color::from_rgb(0.545, 0.0, 0.0); // #8b0000
    pub const MAROON_300: Color = Color::from_rgb(0.68, 0.16, 0.14);

    // Accent colors: the saffron highlight used for headings and buttons
    pub const SAFFRON_600: Color = Color::from_rgb(0.85, 0.55, 0.0);
    pub const SAFFRON_500: Color = Color::from_rgb(0.92, 0.66, 0.12); // #eba81f
    pub const SAFFRON_400: Color = Color::from_rgb(0.98, 0.78, 0.25);
    pub const SAFFRON_200: Color = Color::from_rgb(1.0, 0.88, 0.55);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_LIGHTBOX: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;
}

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

pub mod sizing {
    /// Gallery thumbnail tile.
    pub const THUMB_WIDTH: f32 = 220.0;
    pub const THUMB_HEIGHT: f32 = 280.0;

    /// Cards on the specials and spaces sections.
    pub const CARD_WIDTH: f32 = 230.0;
    pub const CARD_IMAGE_HEIGHT: f32 = 140.0;

    /// Largest dimension of the lightbox image.
    pub const LIGHTBOX_MAX: f32 = 640.0;

    /// Hero banner height.
    pub const HERO_HEIGHT: f32 = 320.0;

    /// Width of modal dialogs (welcome, space detail).
    pub const MODAL_WIDTH: f32 = 420.0;
}

pub mod typography {
    /// Large title - hero headline
    pub const TITLE_XL: f32 = 44.0;

    /// Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Section headers, modal titles
    pub const TITLE_MD: f32 = 20.0;

    /// Sub-section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - hints, badges, small info
    pub const CAPTION: f32 = 12.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_LIGHTBOX > opacity::OVERLAY_STRONG);

    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);
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
    fn brand_colors_are_in_gamut() {
        for color in [
            palette::MAROON_700,
            palette::MAROON_500,
            palette::SAFFRON_500,
        ] {
            assert!(color.r >= 0.0 && color.r <= 1.0);
            assert!(color.g >= 0.0 && color.g <= 1.0);
            assert!(color.b >= 0.0 && color.b <= 1.0);
        }
    }
}
