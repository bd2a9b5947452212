use crate::{
    error::{ShamrockError, ShamrockResult},
    DEFAULT_CHARSET,
};

/// An ordered set of symbols that words are drawn from.
///
/// The order of the symbols is significant: it is the column order of the
/// wordlist odometer, so two alphabets with the same symbols in a different
/// order enumerate the same words in a different sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<u8>,
}

impl Alphabet {
    /// Creates an alphabet from the given symbols, keeping their order.
    ///
    /// The symbols must be ASCII, non-empty and free of duplicates.
    pub fn new(symbols: &[u8]) -> ShamrockResult<Self> {
        if symbols.is_empty() {
            return Err(ShamrockError::EmptyAlphabet);
        }

        if !symbols.is_ascii() {
            return Err(ShamrockError::NonAsciiAlphabet);
        }

        let mut seen = [false; 128];
        for &symbol in symbols {
            if seen[symbol as usize] {
                return Err(ShamrockError::DuplicateSymbol(symbol as char));
            }
            seen[symbol as usize] = true;
        }

        Ok(Self {
            symbols: symbols.to_vec(),
        })
    }

    /// The symbols of the alphabet, in enumeration order.
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// The number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    /// The lowercase latin letters followed by the digits.
    fn default() -> Self {
        Self {
            symbols: DEFAULT_CHARSET.to_vec(),
        }
    }
}
