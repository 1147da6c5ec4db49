use ratatui::style::Color;

use crate::domain::phase::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub top: Color,
    pub bottom: Color,
    pub text: Color,
    pub muted_text: Color,
    pub accent: Color,
}

/// Backdrop colours per day phase; `None` (no sun times yet) gets a neutral slate.
#[must_use]
pub fn palette_for(phase: Option<Phase>) -> Palette {
    match phase {
        Some(Phase::Sunrise | Phase::Sunset) => Palette {
            top: Color::Rgb(58, 42, 108),
            bottom: Color::Rgb(238, 128, 74),
            text: Color::Rgb(255, 246, 232),
            muted_text: Color::Rgb(232, 200, 190),
            accent: Color::Rgb(255, 206, 120),
        },
        Some(Phase::Day) => Palette {
            top: Color::Rgb(62, 132, 206),
            bottom: Color::Rgb(160, 206, 240),
            text: Color::Rgb(12, 24, 44),
            muted_text: Color::Rgb(40, 64, 96),
            accent: Color::Rgb(255, 236, 140),
        },
        Some(Phase::Night) => Palette {
            top: Color::Rgb(8, 12, 36),
            bottom: Color::Rgb(30, 36, 74),
            text: Color::Rgb(220, 226, 250),
            muted_text: Color::Rgb(140, 150, 190),
            accent: Color::Rgb(190, 200, 255),
        },
        None => Palette {
            top: Color::Rgb(36, 38, 46),
            bottom: Color::Rgb(66, 70, 82),
            text: Color::Rgb(226, 228, 234),
            muted_text: Color::Rgb(150, 154, 166),
            accent: Color::Rgb(120, 200, 220),
        },
    }
}
