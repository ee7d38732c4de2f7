//! Caret, selection anchor and horizontal scroll for the InputBox.
//!
//! `CursorState` works in char offsets so its ranges line up with
//! `core::selection::Selection`. All methods take `buffer: &str` explicitly;
//! the text itself is owned by `InputBox`.

use unicode_width::UnicodeWidthChar;

use crate::core::selection::Selection;

pub(super) struct CursorState {
    /// Caret position as a char offset (0..=char count)
    pub pos: usize,
    /// Fixed end of a shift-selection; `None` when nothing is selected
    pub anchor: Option<usize>,
    /// First visible char when the text is wider than the box
    pub scroll: usize,
}

impl CursorState {
    pub fn new() -> Self {
        Self {
            pos: 0,
            anchor: None,
            scroll: 0,
        }
    }

    /// The current range, normalized. Collapsed when there is no anchor.
    pub fn selection(&self) -> Selection {
        match self.anchor {
            Some(anchor) => Selection::new(anchor, self.pos),
            None => Selection::caret(self.pos),
        }
    }

    pub fn has_selection(&self) -> bool {
        !self.selection().is_empty()
    }

    /// Move the caret to `target` (clamped to `len`).
    ///
    /// With `extend`, the anchor is planted at the old position if missing;
    /// without it the selection collapses. Returns `true` if anything changed.
    pub fn move_to(&mut self, target: usize, len: usize, extend: bool) -> bool {
        let before = (self.pos, self.anchor);
        let target = target.min(len);
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.pos);
            }
        } else {
            self.anchor = None;
        }
        self.pos = target;
        if self.anchor == Some(self.pos) {
            self.anchor = None;
        }
        (self.pos, self.anchor) != before
    }

    /// Select everything. Returns `true` if the selection changed.
    pub fn select_all(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let before = (self.pos, self.anchor);
        self.anchor = Some(0);
        self.pos = len;
        (self.pos, self.anchor) != before
    }

    /// Place a collapsed caret at `pos`.
    pub fn set(&mut self, pos: usize) {
        self.pos = pos;
        self.anchor = None;
    }

    /// Keep the caret inside a viewport `width` columns wide.
    pub fn update_scroll(&mut self, buffer: &str, width: u16) {
        let width = width as usize;
        if self.scroll > self.pos {
            self.scroll = self.pos;
        }
        if width == 0 {
            self.scroll = self.pos;
            return;
        }
        // One cell is reserved for the caret itself
        while self.scroll < self.pos && display_width(buffer, self.scroll, self.pos) >= width {
            self.scroll += 1;
        }
    }

    /// Columns between the left edge of the viewport and the caret.
    pub fn column(&self, buffer: &str) -> u16 {
        display_width(buffer, self.scroll, self.pos) as u16
    }
}

/// Terminal columns occupied by chars `from..to` of `text`.
pub(super) fn display_width(text: &str, from: usize, to: usize) -> usize {
    text.chars()
        .skip(from)
        .take(to.saturating_sub(from))
        .map(|c| c.width().unwrap_or(0))
        .sum()
}
