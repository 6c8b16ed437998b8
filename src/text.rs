//! Text buffers the slider writes into
//!
//! The slider never owns the text it edits. Anything that can take a trailing
//! character and give one back implements [`TextSink`].

/// An external, append-only-at-the-end text buffer
pub trait TextSink {
    /// Append one character at the end
    fn push_char(&mut self, c: char);

    /// Remove and return the last character, `None` when empty
    fn pop_char(&mut self) -> Option<char>;

    /// Current contents
    fn as_str(&self) -> &str;
}

impl TextSink for String {
    fn push_char(&mut self, c: char) {
        self.push(c);
    }

    fn pop_char(&mut self) -> Option<char> {
        self.pop()
    }

    fn as_str(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::TextSink;

    #[test]
    fn test_string_sink_pop_is_char_aware() {
        let mut s = String::from("añ");
        assert_eq!(s.pop_char(), Some('ñ'));
        assert_eq!(TextSink::as_str(&s), "a");
        assert_eq!(s.pop_char(), Some('a'));
        assert_eq!(s.pop_char(), None);
        assert_eq!(TextSink::as_str(&s), "");
    }
}
