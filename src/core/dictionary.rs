use crate::core::constants::{DICT_SIZE, MAX_WORD_LEN, MIN_WORD_LEN};
use crate::util::error::Q3mError;
use std::collections::HashMap;
use std::sync::OnceLock;

/// The bundled word list, one word per line.
///
/// Its content is part of the address format: reordering or replacing words
/// changes every address.
static WORDS_RAW: &str = include_str!("../../data/words.txt");

static DICTIONARY: OnceLock<Dictionary> = OnceLock::new();

/// An ordered list of words with a case-insensitive reverse index.
#[derive(Debug)]
pub struct Dictionary {
    words: Vec<&'static str>,
    index: HashMap<&'static str, usize>,
}

impl Dictionary {
    /// Parses a newline-separated word list of exactly `DICT_SIZE` words.
    ///
    /// Words must be 4-8 lowercase ASCII letters in strictly ascending order.
    pub fn parse(raw: &'static str) -> Result<Self, Q3mError> {
        let words: Vec<&'static str> = raw
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .collect();

        if words.len() != DICT_SIZE {
            return Err(Q3mError::DictionaryMismatch {
                expected: DICT_SIZE,
                found: words.len(),
            });
        }

        for (i, word) in words.iter().enumerate() {
            if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
                || !word.bytes().all(|b| b.is_ascii_lowercase())
            {
                return Err(Q3mError::InvalidDictionary(format!(
                    "word {} {:?} is not 4-8 lowercase ASCII letters",
                    i, word
                )));
            }
            if i > 0 && words[i - 1] >= *word {
                return Err(Q3mError::InvalidDictionary(format!(
                    "word {} {:?} is not after {:?}",
                    i,
                    word,
                    words[i - 1]
                )));
            }
        }

        let index = words.iter().enumerate().map(|(i, &w)| (w, i)).collect();

        Ok(Self { words, index })
    }

    /// Returns the word at `index`, or `None` past the end.
    pub fn word_at(&self, index: usize) -> Option<&'static str> {
        self.words.get(index).copied()
    }

    /// Returns the position of `word`, ignoring ASCII case.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.index.get(word.to_ascii_lowercase().as_str()).copied()
        } else {
            self.index.get(word).copied()
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.words.iter().copied()
    }
}

/// Returns the process-wide dictionary, loading it on first use.
///
/// # Panics
///
/// Panics if the bundled word list is malformed. That is a build defect, not a
/// runtime condition, and no address can be produced without it.
pub fn dictionary() -> &'static Dictionary {
    DICTIONARY.get_or_init(|| match Dictionary::parse(WORDS_RAW) {
        Ok(dict) => dict,
        Err(e) => panic!("bundled dictionary is invalid: {}", e),
    })
}

/// Returns the dictionary word at `index`.
pub fn word_at(index: usize) -> Option<&'static str> {
    dictionary().word_at(index)
}

/// Returns the dictionary index of `word`, ignoring ASCII case.
///
/// # Example
/// ```
/// use q3m_rs::{index_of, word_at};
///
/// let word = word_at(0).unwrap();
/// assert_eq!(index_of(&word.to_uppercase()), Some(0));
/// assert_eq!(index_of("xyzzy12345"), None);
/// ```
pub fn index_of(word: &str) -> Option<usize> {
    dictionary().index_of(word)
}
