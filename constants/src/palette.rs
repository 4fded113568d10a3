use bevy::color::Color;

/// Scene background, fog and vignette tint (#050510)
pub const VOID: Color = Color::srgb(5.0 / 255.0, 5.0 / 255.0, 16.0 / 255.0);

pub const WORD: Color = Color::WHITE;

/// Hovered word (#d4a574)
pub const WORD_HOVER: Color = Color::srgb(212.0 / 255.0, 165.0 / 255.0, 116.0 / 255.0);

/// Cool fill light (#4a90d9)
pub const FILL_LIGHT: Color = Color::srgb(74.0 / 255.0, 144.0 / 255.0, 217.0 / 255.0);

pub const OVERLAY_TEXT: Color = Color::srgba(1.0, 1.0, 1.0, 0.6);
pub const OVERLAY_TEXT_DIM: Color = Color::srgba(1.0, 1.0, 1.0, 0.4);
pub const OVERLAY_TEXT_FAINT: Color = Color::srgba(1.0, 1.0, 1.0, 0.3);

pub const BUTTON_BACKGROUND: Color = Color::srgba(5.0 / 255.0, 5.0 / 255.0, 16.0 / 255.0, 0.3);
pub const BUTTON_BORDER: Color = Color::srgba(1.0, 1.0, 1.0, 0.2);
pub const BUTTON_BORDER_HOVER: Color = Color::srgba(1.0, 1.0, 1.0, 0.4);

pub const MARKER_ALPHA: f32 = 0.2;
pub const MARKER_CURRENT_ALPHA: f32 = 0.8;
