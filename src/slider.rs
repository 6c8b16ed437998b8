//! Letter cursor controller
//!
//! Holds the alphabet and the active index. The index is plain state on the
//! struct; renderers read it, they never write it back.

use tracing::debug;

use crate::action::{Action, Direction};
use crate::alphabet::{Alphabet, LETTER_COUNT};
use crate::text::TextSink;

/// Circular cursor over the letters `a..=z`
#[derive(Debug, Clone, Default)]
pub struct LetterSlider {
    alphabet: Alphabet,
    /// `None` until the first rotate
    active: Option<usize>,
}

impl LetterSlider {
    /// Create a slider with no active letter
    #[must_use]
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::new(),
            active: None,
        }
    }

    /// Move the cursor one step, wrapping at both ends
    ///
    /// With no active letter the step starts from index 0, so the first
    /// `Right` lands on `b` and the first `Left` on `z`.
    pub fn rotate(&mut self, direction: Direction) -> usize {
        let current = self.active.unwrap_or(0);
        let next = match direction {
            Direction::Right => (current + 1) % LETTER_COUNT,
            Direction::Left => (current + LETTER_COUNT - 1) % LETTER_COUNT,
        };
        self.active = Some(next);
        next
    }

    /// Append the active letter to `sink`
    ///
    /// Returns the appended letter, or `None` (and leaves `sink` untouched) when
    /// no letter is active yet.
    pub fn write_text<S: TextSink + ?Sized>(&self, sink: &mut S) -> Option<char> {
        let letter = self.active_letter()?;
        sink.push_char(letter);
        Some(letter)
    }

    /// Drop the last character of `sink`; empty sinks are left as they are
    pub fn remove_text<S: TextSink + ?Sized>(&self, sink: &mut S) -> Option<char> {
        sink.pop_char()
    }

    /// Dispatch a single input action
    pub fn apply<S: TextSink + ?Sized>(&mut self, action: Action, sink: &mut S) {
        match action {
            Action::Rotate(direction) => {
                let index = self.rotate(direction);
                debug!(index, letter = ?self.alphabet.get(index), "cursor moved {}", action.name());
            }
            Action::WriteText => {
                let written = self.write_text(sink);
                debug!(?written, text = sink.as_str(), "write");
            }
            Action::RemoveText => {
                let removed = self.remove_text(sink);
                debug!(?removed, text = sink.as_str(), "remove");
            }
        }
    }

    /// Index of the active letter
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The active letter
    #[must_use]
    pub fn active_letter(&self) -> Option<char> {
        self.active.and_then(|i| self.alphabet.get(i))
    }

    /// Whether `index` is the active one
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn letters(&self) -> &[char] {
        self.alphabet.letters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn slider_at(index: usize) -> LetterSlider {
        let mut slider = LetterSlider::new();
        slider.active = Some(index);
        slider
    }

    #[test]
    fn test_new_has_no_active_letter() {
        let slider = LetterSlider::new();
        assert_eq!(slider.active_index(), None);
        assert_eq!(slider.active_letter(), None);
        assert!((0..26).all(|i| !slider.is_active(i)));
    }

    #[test]
    fn test_rotate_wraps_for_every_position() {
        for p in 0..LETTER_COUNT {
            let mut right = slider_at(p);
            assert_eq!(right.rotate(Direction::Right), (p + 1) % 26, "right from {p}");

            let mut left = slider_at(p);
            assert_eq!(left.rotate(Direction::Left), (p + 26 - 1) % 26, "left from {p}");
        }
    }

    #[test]
    fn test_exactly_one_active_after_rotate() {
        let mut slider = LetterSlider::new();
        for direction in [Direction::Right, Direction::Right, Direction::Left, Direction::Left, Direction::Left] {
            slider.rotate(direction);
            let active = (0..26).filter(|&i| slider.is_active(i)).count();
            assert_eq!(active, 1);
        }
    }

    #[test]
    fn test_rotate_right_from_z_lands_on_a() {
        let mut slider = slider_at(25);
        assert_eq!(slider.active_letter(), Some('z'));
        slider.rotate(Direction::Right);
        assert_eq!(slider.active_index(), Some(0));
        assert_eq!(slider.active_letter(), Some('a'));
    }

    #[rstest]
    #[case(Direction::Right, 1, 'b')]
    #[case(Direction::Left, 25, 'z')]
    fn test_first_rotate_starts_from_zero(
        #[case] direction: Direction,
        #[case] index: usize,
        #[case] letter: char,
    ) {
        let mut slider = LetterSlider::new();
        assert_eq!(slider.rotate(direction), index);
        assert_eq!(slider.active_letter(), Some(letter));
    }

    #[test]
    fn test_write_text_appends_active_letter() {
        let slider = slider_at(2);
        let mut buffer = String::from("ca");
        assert_eq!(slider.write_text(&mut buffer), Some('c'));
        assert_eq!(buffer, "cac");
    }

    #[test]
    fn test_write_text_without_active_letter_is_noop() {
        let slider = LetterSlider::new();
        let mut buffer = String::from("x");
        assert_eq!(slider.write_text(&mut buffer), None);
        assert_eq!(buffer, "x");
    }

    #[rstest]
    #[case("cat", "ca")]
    #[case("a", "")]
    #[case("", "")]
    fn test_remove_text(#[case] before: &str, #[case] after: &str) {
        let slider = LetterSlider::new();
        let mut buffer = before.to_string();
        slider.remove_text(&mut buffer);
        assert_eq!(buffer, after);
    }

    #[test]
    fn test_apply_spells_a_word() {
        let mut slider = LetterSlider::new();
        let mut buffer = String::new();
        // b, then back to a, then forward to c
        let steps = [
            Action::Rotate(Direction::Right),
            Action::WriteText,
            Action::Rotate(Direction::Left),
            Action::WriteText,
            Action::Rotate(Direction::Right),
            Action::Rotate(Direction::Right),
            Action::WriteText,
            Action::RemoveText,
            Action::WriteText,
        ];
        for step in steps {
            slider.apply(step, &mut buffer);
        }
        assert_eq!(buffer, "bac");
    }
}
