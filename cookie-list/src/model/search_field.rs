//! src/model/search_field.rs
//! Editable text of the search box. Submitted text becomes the list keyword.

use compact_str::CompactString;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchField {
    input: CompactString,
    // byte offset, always on a char boundary
    cursor: usize,
}

impl SearchField {
    #[inline]
    pub fn text(&self) -> &str {
        &self.input
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn clear(&mut self) {
        self.input = CompactString::const_new("");
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn delete_char_before(&mut self) -> bool {
        match self.input[..self.cursor].char_indices().next_back() {
            Some((pos, _)) => {
                self.input.remove(pos);
                self.cursor = pos;
                true
            }
            None => false,
        }
    }

    pub fn move_left(&mut self) {
        if let Some((pos, _)) = self.input[..self.cursor].char_indices().next_back() {
            self.cursor = pos;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(ch) = self.input[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }
}
