//! The fixed letter sequence the slider moves over

/// Number of letters in the alphabet
pub const LETTER_COUNT: usize = 26;

/// Ordered, immutable sequence of the lowercase letters `a` through `z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    letters: [char; LETTER_COUNT],
}

impl Alphabet {
    /// Build the `a..=z` sequence
    #[must_use]
    pub fn new() -> Self {
        let mut letters = ['a'; LETTER_COUNT];
        for (letter, c) in letters.iter_mut().zip('a'..='z') {
            *letter = c;
        }
        Self { letters }
    }

    /// Letter at `index`, or `None` past the end
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub const fn len(&self) -> usize {
        LETTER_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_a_to_z() {
        let alphabet = Alphabet::new();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.get(0), Some('a'));
        assert_eq!(alphabet.get(25), Some('z'));
        assert_eq!(alphabet.get(26), None);
        let joined: String = alphabet.letters().iter().collect();
        assert_eq!(joined, "abcdefghijklmnopqrstuvwxyz");
    }
}
