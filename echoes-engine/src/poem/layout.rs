use bevy::math::Vec3;
use constants::layout::{LINE_HEIGHT, REVEAL_STAGGER_MS, WORD_SPACING};

/// Where one word of a stanza rests and when it starts drifting home.
#[derive(Debug, Clone, PartialEq)]
pub struct WordPlacement {
    pub word: String,
    pub position: Vec3,
    pub reveal_delay_ms: u32,
    pub line_index: usize,
}

/// Lays out stanza lines around `anchor`.
///
/// Each line is centred on the anchor's x as a block of evenly spaced words,
/// lines stack downward, and all words share the anchor's depth. Reveal
/// delays keep counting across lines.
pub fn layout_stanza<S: AsRef<str>>(lines: &[S], anchor: Vec3) -> Vec<WordPlacement> {
    let mut placements = Vec::new();
    let mut word_index: u32 = 0;

    for (line_index, line) in lines.iter().enumerate() {
        let words: Vec<&str> = line.as_ref().split_whitespace().collect();
        let line_width = words.len() as f32 * WORD_SPACING;
        let start_x = -line_width / 2.0 + WORD_SPACING / 2.0;

        for (i, word) in words.into_iter().enumerate() {
            placements.push(WordPlacement {
                word: word.to_string(),
                position: Vec3::new(
                    anchor.x + start_x + i as f32 * WORD_SPACING,
                    anchor.y - line_index as f32 * LINE_HEIGHT,
                    anchor.z,
                ),
                reveal_delay_ms: word_index * REVEAL_STAGGER_MS,
                line_index,
            });
            word_index += 1;
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn two_line_stanza_at_origin() {
        let placements = layout_stanza(&["a b", "c"], Vec3::ZERO);

        let words: Vec<&str> = placements.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(words, ["a", "b", "c"]);

        assert!((placements[0].position.x + 0.6).abs() < EPS);
        assert!((placements[1].position.x - 0.6).abs() < EPS);
        assert!(placements[2].position.x.abs() < EPS);

        assert_eq!(placements[0].position.y, 0.0);
        assert_eq!(placements[1].position.y, 0.0);
        assert!((placements[2].position.y + 0.7).abs() < EPS);

        let lines: Vec<usize> = placements.iter().map(|p| p.line_index).collect();
        assert_eq!(lines, [0, 0, 1]);

        let delays: Vec<u32> = placements.iter().map(|p| p.reveal_delay_ms).collect();
        assert_eq!(delays, [0, 80, 160]);
    }

    #[test]
    fn delays_step_by_eighty_across_lines() {
        let placements = layout_stanza(&["one two", "three four"], Vec3::ZERO);
        let delays: Vec<u32> = placements.iter().map(|p| p.reveal_delay_ms).collect();
        assert_eq!(delays, [0, 80, 160, 240]);
    }

    #[test]
    fn anchor_offsets_every_word() {
        let anchor = Vec3::new(2.0, -1.0, -3.0);
        let at_origin = layout_stanza(&["x y z"], Vec3::ZERO);
        let moved = layout_stanza(&["x y z"], anchor);

        for (a, b) in at_origin.iter().zip(&moved) {
            assert!((b.position - a.position - anchor).length() < EPS);
        }
        assert!(moved.iter().all(|p| p.position.z == -3.0));
    }

    #[test]
    fn layout_is_deterministic() {
        let lines = ["In the silence of the void,", "words begin to breathe."];
        let anchor = Vec3::new(0.25, 0.5, 0.0);
        assert_eq!(layout_stanza(&lines, anchor), layout_stanza(&lines, anchor));
    }

    #[test]
    fn whitespace_runs_and_blank_lines_produce_no_words() {
        let placements = layout_stanza(&["  a   b ", "", "c"], Vec3::ZERO);
        let words: Vec<&str> = placements.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(words, ["a", "b", "c"]);
        // The blank line still takes up vertical space.
        assert!((placements[2].position.y + 1.4).abs() < EPS);
        assert_eq!(placements[2].reveal_delay_ms, 160);
    }
}
