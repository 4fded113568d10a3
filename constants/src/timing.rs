/// Time between clicking a stanza and the poem advancing
pub const EXIT_DELAY_MS: u64 = 600;

/// How long the instructions line stays up after mount
pub const INSTRUCTIONS_VISIBLE_MS: u64 = 5000;

/// Fade in/out of the instructions line
pub const INSTRUCTIONS_FADE_SECS: f32 = 1.0;

pub const HEADER_REVEAL_DELAY_SECS: f32 = 0.5;
pub const FOOTER_REVEAL_DELAY_SECS: f32 = 0.7;
pub const PROGRESS_REVEAL_DELAY_SECS: f32 = 1.0;
pub const OVERLAY_REVEAL_SECS: f32 = 1.0;
