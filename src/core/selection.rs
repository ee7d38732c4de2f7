//! # Selection Tracking
//!
//! Character-offset ranges into the composer text.
//!
//! The composer reports every caret move and edit as a `(start, end)` pair.
//! The tracker keeps the current range plus the most recent *non-empty* one,
//! so a suggestion can still target a highlighted span after the caret has
//! collapsed it.
//!
//! ```text
//! SelectionTracker
//! ├── current: Selection              // what the composer shows right now
//! └── last_non_empty: Option<Selection> // depth-1 history, never cleared by collapse
//! ```
//!
//! Offsets count `char`s, not bytes. Use [`char_to_byte`] before slicing.

/// A `[start, end)` range of character offsets. Always stored with `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Build a selection from two offsets in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// A collapsed selection (plain caret) at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp both ends to `max` (typically the text's char count).
    pub fn clamped(&self, max: usize) -> Self {
        Self {
            start: self.start.min(max),
            end: self.end.min(max),
        }
    }
}

/// Current selection plus the last non-empty one the composer reported.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    current: Selection,
    last_non_empty: Option<Selection>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection report from the composer.
    ///
    /// A non-empty range overwrites the stored one; an empty range only
    /// updates `current`.
    pub fn record(&mut self, start: usize, end: usize) {
        let selection = Selection::new(start, end);
        self.current = selection;
        if !selection.is_empty() {
            self.last_non_empty = Some(selection);
        }
    }

    pub fn current(&self) -> Selection {
        self.current
    }

    pub fn last_non_empty(&self) -> Option<Selection> {
        self.last_non_empty
    }
}

/// Byte offset of the `char_idx`-th character, or `text.len()` past the end.
pub fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Replace the chars in `range` with `replacement`.
///
/// Returns the new text and the caret position right after the inserted text.
/// Out-of-range offsets are clamped to the text length.
pub fn splice(text: &str, range: Selection, replacement: &str) -> (String, usize) {
    let range = range.clamped(text.chars().count());
    let start_byte = char_to_byte(text, range.start);
    let end_byte = char_to_byte(text, range.end);

    let mut out = String::with_capacity(text.len() - (end_byte - start_byte) + replacement.len());
    out.push_str(&text[..start_byte]);
    out.push_str(replacement);
    out.push_str(&text[end_byte..]);

    (out, range.start + replacement.chars().count())
}
