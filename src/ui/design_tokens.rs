// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the slideshow and the screens around it.
//!
//! The slideshow card is always dark, so the palette leans on the gray scale
//! and a single blue accent for the primary "next" action. Sizing fixes the
//! card to a 4:3 stage; the final comic gets a wider column.
//!
//! ```
//! use panel_reel::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Card surface.
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    /// Card outline and secondary buttons.
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Muted text: counters, hints, the scene heading.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    /// Narration caption text.
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Accent, used for "next" and the speech bubble.
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
    pub const PRIMARY_700: Color = Color::from_rgb(0.15, 0.4, 0.7);

    /// Load failure heading.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    /// Settings warning banner.
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

/// Alpha values, from fully clear to fully solid.
pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Ghost button hover.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Content while a step transition is pending.
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Narration strip.
    pub const OVERLAY_STRONG: f32 = 0.7;
    /// Slideshow backdrop.
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
    /// Final comic and closed screen surfaces.
    pub const SURFACE: f32 = 0.95;
}

/// Gaps and padding, in logical pixels.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// The slideshow card is a fixed 4:3 stage.
    pub const CARD_WIDTH: f32 = 720.0;
    pub const CARD_HEIGHT: f32 = 540.0;

    pub const FINAL_COMIC_MAX_WIDTH: f32 = 960.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Final comic, closed, and error headings.
    pub const TITLE_LG: f32 = 30.0;
    /// Scene description.
    pub const TITLE_MD: f32 = 20.0;
    /// Panel counter.
    pub const TITLE_SM: f32 = 18.0;
    /// Dialogue lines and the comic title.
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    /// Step counter, hints, banners.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

/// Drop shadows; larger ones sit higher above the backdrop.
pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = lifted(2.0);
    pub const MD: Shadow = lifted(4.0);
    /// The slideshow card.
    pub const LG: Shadow = lifted(8.0);

    const fn lifted(height: f32) -> Shadow {
        Shadow {
            color: palette::BLACK,
            offset: Vector { x: 0.0, y: height },
            blur_radius: height * 2.0,
        }
    }
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_HOVER);
    assert!(opacity::SURFACE < opacity::OPAQUE);

    assert!(sizing::CARD_WIDTH * 3.0 == sizing::CARD_HEIGHT * 4.0);
    assert!(sizing::FINAL_COMIC_MAX_WIDTH > sizing::CARD_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(radius::SM < radius::MD && radius::MD < radius::LG);
};
