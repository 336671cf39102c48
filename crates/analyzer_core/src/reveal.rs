/// Time-paced reveal of a feedback string, one character per tick.
///
/// The displayed text is always a char-boundary prefix of the source and
/// grows monotonically until it equals the source. Replacing the source
/// resets the reveal to the empty prefix; there is no splicing between
/// old and new text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    source: String,
    // Byte offset of the revealed prefix; always on a char boundary.
    revealed: usize,
}

impl Reveal {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            revealed: 0,
        }
    }

    /// Replace the source text and restart from the empty prefix.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = source.into();
        self.revealed = 0;
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn displayed(&self) -> &str {
        &self.source[..self.revealed]
    }

    pub fn is_complete(&self) -> bool {
        self.revealed == self.source.len()
    }

    /// Reveal one more character. Returns true once the full source is
    /// displayed; ticking a complete reveal is a no-op.
    pub fn tick(&mut self) -> bool {
        if let Some(ch) = self.source[self.revealed..].chars().next() {
            self.revealed += ch.len_utf8();
        }
        self.is_complete()
    }
}
