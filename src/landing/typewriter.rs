//! Typewriter Effect
//!
//! Types a word one character at a time, pauses, deletes it, pauses, then
//! moves on to the next word, forever.

use std::time::Duration;

pub const INITIAL_DELAY: Duration = Duration::from_millis(1000);
pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const HOLD_DELAY: Duration = Duration::from_millis(1500);
pub const NEXT_WORD_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    word_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    /// Returns `None` when `words` is empty
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Vec<char>> = words
            .into_iter()
            .map(|w| w.as_ref().chars().collect())
            .collect();
        if words.is_empty() {
            return None;
        }
        Some(Self {
            words,
            word_index: 0,
            char_index: 0,
            deleting: false,
        })
    }

    /// Delay before the first step
    pub fn initial_delay(&self) -> Duration {
        INITIAL_DELAY
    }

    /// Text currently visible
    pub fn text(&self) -> String {
        self.words[self.word_index][..self.char_index].iter().collect()
    }

    /// Advance one character. Returns the visible text and how long to wait
    /// before the next step.
    pub fn step(&mut self) -> (String, Duration) {
        let len = self.words[self.word_index].len();

        let mut delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.char_index = (self.char_index + 1).min(len);
            TYPE_DELAY
        };
        let text = self.text();

        if !self.deleting && self.char_index == len {
            self.deleting = true;
            delay = HOLD_DELAY;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay = NEXT_WORD_DELAY;
        }

        (text, delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_holds_deletes_and_advances() {
        let mut tw = Typewriter::new(["ab", "c"]).unwrap();

        assert_eq!(tw.step(), ("a".to_string(), TYPE_DELAY));
        assert_eq!(tw.step(), ("ab".to_string(), HOLD_DELAY));
        assert_eq!(tw.step(), ("a".to_string(), DELETE_DELAY));
        assert_eq!(tw.step(), ("".to_string(), NEXT_WORD_DELAY));
        assert_eq!(tw.step(), ("c".to_string(), HOLD_DELAY));
        assert_eq!(tw.step(), ("".to_string(), NEXT_WORD_DELAY));
        // Wraps around
        assert_eq!(tw.step(), ("a".to_string(), TYPE_DELAY));
    }

    #[test]
    fn test_multibyte_words() {
        let mut tw = Typewriter::new(["né"]).unwrap();
        tw.step();
        assert_eq!(tw.step().0, "né");
    }

    #[test]
    fn test_empty_word_list() {
        assert!(Typewriter::new(Vec::<String>::new()).is_none());
    }
}
