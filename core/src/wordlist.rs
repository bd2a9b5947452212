use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    alphabet::Alphabet,
    error::{ShamrockError, ShamrockResult},
};

/// An exhaustive wordlist over an alphabet, up to a maximum word length.
///
/// The wordlist covers every word of length 1 to `max_length` inclusive,
/// shortest words first and in alphabet order within a length. It is never
/// held in memory as a whole: [`Wordlist::words`] walks it lazily and
/// [`Wordlist::write_to`] streams it to a corpus file.
#[derive(Clone, Debug)]
pub struct Wordlist {
    alphabet: Alphabet,
    max_length: usize,
}

impl Wordlist {
    /// Creates the wordlist of every word of length 1..=`max_length`.
    pub fn new(alphabet: Alphabet, max_length: usize) -> ShamrockResult<Self> {
        if max_length == 0 {
            return Err(ShamrockError::InvalidMaxLength(max_length));
        }

        Ok(Self {
            alphabet,
            max_length,
        })
    }

    /// The number of words in the wordlist,
    /// `n + n^2 + ... + n^max_length` for an alphabet of `n` symbols.
    ///
    /// Saturates at `u128::MAX` instead of overflowing.
    pub fn word_count(&self) -> u128 {
        let n = self.alphabet.len() as u128;
        let mut count: u128 = 0;
        let mut words_of_length: u128 = 1;

        for _ in 0..self.max_length {
            words_of_length = match words_of_length.checked_mul(n) {
                Some(words) => words,
                None => return u128::MAX,
            };
            count = match count.checked_add(words_of_length) {
                Some(count) => count,
                None => return u128::MAX,
            };
        }

        count
    }

    /// Returns an iterator over every word of the wordlist.
    ///
    /// Each call restarts the enumeration from the first word, and two walks
    /// always yield the same sequence.
    pub fn words(&self) -> Words<'_> {
        Words {
            alphabet: self.alphabet.symbols(),
            max_length: self.max_length,
            digits: vec![0],
            done: false,
        }
    }

    /// Streams the whole wordlist to the file at `path`, one word per line.
    ///
    /// The file is created from scratch, truncating a previous one. Returns
    /// the number of words written.
    pub fn write_to(&self, path: &Path) -> ShamrockResult<u64> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        let mut words = 0;
        for word in self.words() {
            writer.write_all(word.as_bytes())?;
            writer.write_all(b"\n")?;
            words += 1;
        }
        writer.flush()?;

        debug!(words, path = %path.display(), "wordlist written");

        Ok(words)
    }
}

/// An iterator over the words of a [`Wordlist`].
///
/// The current word is kept as alphabet indices, most significant digit
/// first, and advanced like an odometer: the rightmost digit rolls over
/// first, and exhausting a length grows the word by one digit.
pub struct Words<'a> {
    alphabet: &'a [u8],
    max_length: usize,
    digits: Vec<usize>,
    done: bool,
}

impl Words<'_> {
    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.alphabet.len() {
                return;
            }
            *digit = 0;
        }

        // every digit rolled over, so this length is exhausted
        if self.digits.len() == self.max_length {
            self.done = true;
        } else {
            self.digits.push(0);
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let word = self
            .digits
            .iter()
            .map(|&digit| self.alphabet[digit] as char)
            .collect();
        self.advance();

        Some(word)
    }
}
