//! Single-line text input with a character cursor.

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn byte_index_for_char(text: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    let max = char_len(text);
    let clamped = char_index.min(max);
    if clamped == max {
        return text.len();
    }

    text.char_indices().nth(clamped).map_or(text.len(), |(byte_index, _)| byte_index)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TextField {
    value: String,
    /// Cursor position in characters, `0..=char_len(value)`.
    cursor: usize,
}

impl TextField {
    #[cfg(test)]
    pub(crate) fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: char_len(value),
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(char_len(&self.value));
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        self.clamp_cursor();
        let insert_at = byte_index_for_char(&self.value, self.cursor);
        self.value.insert(insert_at, ch);
        self.cursor += 1;
    }

    /// Insert pasted text, dropping control characters. Returns whether
    /// anything was inserted.
    pub(crate) fn insert_str(&mut self, text: &str) -> bool {
        let mut inserted = false;
        for ch in text.chars().filter(|ch| !ch.is_control()) {
            self.insert_char(ch);
            inserted = true;
        }
        inserted
    }

    pub(crate) fn backspace(&mut self) -> bool {
        self.clamp_cursor();
        if self.cursor == 0 {
            return false;
        }

        let end = byte_index_for_char(&self.value, self.cursor);
        let start = byte_index_for_char(&self.value, self.cursor - 1);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    pub(crate) fn delete(&mut self) -> bool {
        self.clamp_cursor();
        if self.cursor >= char_len(&self.value) {
            return false;
        }

        let start = byte_index_for_char(&self.value, self.cursor);
        let end = byte_index_for_char(&self.value, self.cursor + 1);
        self.value.replace_range(start..end, "");
        true
    }

    pub(crate) fn move_left(&mut self) {
        self.clamp_cursor();
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(char_len(&self.value));
    }

    pub(crate) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = char_len(&self.value);
    }

    /// Text before the cursor, used to place the terminal cursor.
    pub(crate) fn before_cursor(&self) -> &str {
        &self.value[..byte_index_for_char(&self.value, self.cursor)]
    }
}

#[cfg(test)]
#[path = "../../test/tui/state/text_field.rs"]
mod tests;
