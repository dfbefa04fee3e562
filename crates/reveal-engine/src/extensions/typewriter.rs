// extensions/typewriter.rs
//
// Title typing effect: after a start delay the text appears one character
// per interval. Works on chars, so multi-byte text never splits.

/// Progressive reveal of a fixed string.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    start_delay_ms: f32,
    char_interval_ms: f32,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, start_delay_ms: f32, char_interval_ms: f32) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self { text, char_count, start_delay_ms, char_interval_ms }
    }

    /// Number of characters visible at `elapsed_ms`.
    pub fn visible_chars(&self, elapsed_ms: f32) -> usize {
        let typing = elapsed_ms - self.start_delay_ms;
        if typing < 0.0 {
            return 0;
        }
        if self.char_interval_ms <= 0.0 {
            return self.char_count;
        }
        // First character lands right when the delay ends.
        let typed = (typing / self.char_interval_ms).floor() as usize + 1;
        typed.min(self.char_count)
    }

    /// The visible prefix at `elapsed_ms`.
    pub fn visible_text(&self, elapsed_ms: f32) -> &str {
        let n = self.visible_chars(elapsed_ms);
        match self.text.char_indices().nth(n) {
            Some((byte_idx, _)) => &self.text[..byte_idx],
            None => &self.text,
        }
    }

    pub fn is_complete(&self, elapsed_ms: f32) -> bool {
        self.visible_chars(elapsed_ms) == self.char_count
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
