use thiserror::Error;

/// Number of symbols, and therefore the radix, of the encoding.
pub const RADIX: usize = 58;

/// Reasons a symbol table is refused. Only reachable while `ALPHABET` is
/// evaluated, so any of these is a compile error rather than a runtime one.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    #[error("Non-ascii character {character:#04x} at index {index}")]
    NonAsciiCharacter { character: u8, index: usize },
    #[error("Character '{character}' at indexes {first} and {second}")]
    DuplicateCharacter { character: char, first: usize, second: usize },
    #[error("Ambiguous character '{character}' at index {index}")]
    AmbiguousCharacter { character: char, index: usize },
}

/// The 58 digit symbols together with their reverse lookup table.
pub struct Alphabet {
    symbols: [u8; RADIX],
    digits: [Option<u8>; 256],
}

impl Alphabet {
    const fn new(symbols: &[u8; RADIX]) -> Result<Self, Error> {
        let mut digits: [Option<u8>; 256] = [None; 256];

        let mut index = 0;
        while index < RADIX {
            let character = symbols[index];
            if !character.is_ascii() {
                return Err(Error::NonAsciiCharacter { character, index });
            }
            if matches!(character, b'0' | b'O' | b'I' | b'l') {
                return Err(Error::AmbiguousCharacter {
                    character: character as char,
                    index,
                });
            }
            if let Some(first) = digits[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            digits[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { symbols: *symbols, digits })
    }

    /// Symbol for a digit value. Panics if `digit >= 58`.
    #[inline]
    pub const fn symbol(&self, digit: u8) -> u8 {
        self.symbols[digit as usize]
    }

    /// Digit value of a symbol, or `None` when the byte is not part of the alphabet.
    #[inline]
    pub const fn digit(&self, character: u8) -> Option<u8> {
        self.digits[character as usize]
    }

    pub const fn contains(&self, character: u8) -> bool {
        self.digit(character).is_some()
    }

    /// The symbol standing for a leading zero byte.
    pub const fn zero(&self) -> u8 {
        self.symbols[0]
    }

    pub const fn symbols(&self) -> &[u8; RADIX] {
        &self.symbols
    }

    pub fn as_str(&self) -> &str {
        // Alphabet::new only admits ascii symbols.
        unsafe { std::str::from_utf8_unchecked(&self.symbols) }
    }

    pub const fn len(&self) -> usize {
        RADIX
    }
}

pub const ALPHABET: Alphabet = match Alphabet::new(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};
