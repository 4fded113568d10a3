/// Horizontal distance between neighbouring word centres (world units)
pub const WORD_SPACING: f32 = 1.2;

/// Vertical distance between stanza lines (world units)
pub const LINE_HEIGHT: f32 = 0.7;

/// Delay added per word, counted across the whole stanza
pub const REVEAL_STAGGER_MS: u32 = 80;

/// Em height of a word label at scale 1.0 (world units)
pub const WORD_FONT_SIZE: f32 = 0.4;

/// Full width of the x/y box a dormant word is scattered into.
///
/// Offsets are drawn as `(r - 0.5) * SCATTER_SPREAD`, so each axis lands
/// within ±4 of home, not ±8.
pub const SCATTER_SPREAD: f32 = 8.0;

/// How far behind its home a dormant word sits
pub const SCATTER_DEPTH: f32 = 15.0;

/// Full width of the x/y box a freshly spawned word starts in
pub const INITIAL_SPREAD: f32 = 5.0;

/// How far behind its home a freshly spawned word starts
pub const INITIAL_DEPTH: f32 = 10.0;

/// Full width of the per-frame hover glitch offset on x and y
pub const HOVER_JITTER: f32 = 0.03;
