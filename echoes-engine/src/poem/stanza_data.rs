/// One unit of the poem, shown and hidden as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stanza {
    pub id: u32,
    pub lines: &'static [&'static str],
}

pub const POEM: &[Stanza] = &[
    Stanza {
        id: 1,
        lines: &["In the silence of the void,", "words begin to breathe."],
    },
    Stanza {
        id: 2,
        lines: &["They float like embers,", "remnants of forgotten fires."],
    },
    Stanza {
        id: 3,
        lines: &["Each syllable a heartbeat,", "echoing through darkness."],
    },
    Stanza {
        id: 4,
        lines: &["We are but whispers,", "searching for the light."],
    },
    Stanza {
        id: 5,
        lines: &["And in the end,", "only echoes remain."],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stanza_ids_are_unique() {
        let mut ids: Vec<u32> = POEM.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), POEM.len());
    }

    #[test]
    fn every_stanza_has_words() {
        for stanza in POEM {
            assert!(
                stanza.lines.iter().any(|l| !l.trim().is_empty()),
                "stanza {} is empty",
                stanza.id
            );
        }
    }
}
