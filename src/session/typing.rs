/// Tracks progress through the study text riding on the key stream.
///
/// Each key press is compared case-insensitively against the expected
/// character; a match advances the cursor. A wrong character counts as a
/// typing miss only when the same press landed no note, so a press that hits
/// a note is never double-counted against the player.
#[derive(Debug, Clone)]
pub struct TypingTracker {
    text: String,
    cursor: usize,
    pub typed_correct: u32,
    pub typed_missed: u32,
}

impl TypingTracker {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cursor: 0,
            typed_correct: 0,
            typed_missed: 0,
        }
    }

    /// Feed one key press. `hit_note` is whether the press landed a note.
    /// Returns true if the cursor advanced.
    pub fn feed(&mut self, key: &str, hit_note: bool) -> bool {
        let Some(expected) = self.expected_char() else {
            return false;
        };

        let matches = match key {
            " " => expected == ' ',
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.eq_ignore_ascii_case(&expected),
                    // Multi-char identifiers (Shift, Escape) never match text.
                    _ => false,
                }
            }
        };

        if matches {
            self.cursor += expected.len_utf8();
            self.typed_correct += 1;
            true
        } else {
            if !hit_note {
                self.typed_missed += 1;
            }
            false
        }
    }

    /// Next character to type, if any text remains.
    pub fn expected_char(&self) -> Option<char> {
        self.text[self.cursor..].chars().next()
    }

    /// Byte offset of the cursor into the text.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Whitespace-separated words typed to completion.
    pub fn words_typed(&self) -> u32 {
        let typed = &self.text[..self.cursor];
        let mut count = typed.split_whitespace().count();

        // A word still under the cursor is not complete yet.
        let mid_word = self
            .text[self.cursor..]
            .chars()
            .next()
            .is_some_and(|c| !c.is_whitespace())
            && typed.chars().last().is_some_and(|c| !c.is_whitespace());
        if mid_word && count > 0 {
            count -= 1;
        }

        count as u32
    }

    /// Words per minute over the elapsed session time. Zero before any time
    /// has passed.
    pub fn wpm(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms <= 0.0 {
            return 0.0;
        }
        self.words_typed() as f64 / (elapsed_ms / 60_000.0)
    }

    /// Restart on a new text, clearing the counters.
    pub fn reset(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = 0;
        self.typed_correct = 0;
        self.typed_missed = 0;
    }
}
