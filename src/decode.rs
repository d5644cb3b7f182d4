use crate::alphabet::{ALPHABET, RADIX};
use thiserror::Error;
use tracing::{debug, trace};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The output buffer was too small to contain the decoded bytes.
    #[error("Output buffer too small")]
    BufferTooSmall,
    /// `character` at byte offset `index` is not a Base58 symbol.
    #[error("Invalid character {} at index {index}", printable(.character))]
    InvalidCharacter { character: u8, index: usize },
}

fn printable(character: &u8) -> String {
    if character.is_ascii_graphic() {
        format!("'{}'", *character as char)
    } else {
        format!("{:#04x}", character)
    }
}

const SYMBOLS_PER_CHUNK: usize = 5;

// POWERS[k] = 58^k, the multiplier applied to the accumulator for a chunk of k symbols.
const POWERS: [u64; SYMBOLS_PER_CHUNK + 1] = {
    let mut powers = [1u64; SYMBOLS_PER_CHUNK + 1];
    let mut index = 1;
    while index < powers.len() {
        powers[index] = powers[index - 1] * RADIX as u64;
        index += 1;
    }
    powers
};

/// Upper bound on the number of bytes decoded from `len` symbols.
pub const fn decoded_len_bound(len: usize) -> usize {
    len
}

fn is_whitespace(character: u8) -> bool {
    matches!(character, b' ' | b'\t' | b'\n' | b'\r')
}

/// Decoded bytes of `input`, least significant first, with one trailing zero
/// byte per leading zero symbol. `offset` is the position of `input` inside
/// the text handed to the decoder and only affects reported indexes.
fn bytes(input: &[u8], offset: usize) -> Result<Vec<u8>, Error> {
    let zero = ALPHABET.zero();
    let zeros = input.iter().take_while(|&&character| character == zero).count();

    // Little-endian limbs in radix 2^32. The multiplier is at most 58^5 < 2^30,
    // so limb * multiplier + carry stays below 2^62.
    let mut limbs: Vec<u32> = Vec::with_capacity((input.len() - zeros) / SYMBOLS_PER_CHUNK + 1);
    let mut index = offset + zeros;
    for chunk in input[zeros..].chunks(SYMBOLS_PER_CHUNK) {
        let mut carry = 0u64;
        for &character in chunk {
            let digit = match ALPHABET.digit(character) {
                Some(digit) => digit,
                None => {
                    debug!(character, index, "base58 decode rejected input");
                    return Err(Error::InvalidCharacter { character, index });
                }
            };
            carry = carry * RADIX as u64 + digit as u64;
            index += 1;
        }
        let multiplier = POWERS[chunk.len()];
        for limb in &mut limbs {
            carry += *limb as u64 * multiplier;
            *limb = carry as u32;
            carry >>= 32;
        }
        while carry > 0 {
            limbs.push(carry as u32);
            carry >>= 32;
        }
    }

    let mut bytes: Vec<u8> = limbs.iter().flat_map(|limb| limb.to_le_bytes()).collect();
    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    bytes.resize(bytes.len() + zeros, 0);
    Ok(bytes)
}

/// Decoding options.
///
/// The default decoder is strict: every byte of the input must be a Base58
/// symbol. With `trim_whitespace` enabled, ascii whitespace (space, tab, line
/// feed, carriage return) is dropped from both ends first; whitespace anywhere
/// else is still rejected.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Decoder {
    trim_whitespace: bool,
}

impl Decoder {
    pub const fn new() -> Self {
        Self { trim_whitespace: false }
    }

    pub const fn trim_whitespace(self, trim_whitespace: bool) -> Self {
        Self { trim_whitespace }
    }

    /// The part of `input` to decode and its offset in `input`.
    fn trim<'a>(&self, input: &'a [u8]) -> (&'a [u8], usize) {
        if !self.trim_whitespace {
            return (input, 0);
        }
        let start = input.iter().take_while(|&&character| is_whitespace(character)).count();
        let end = input.len() - input[start..].iter().rev().take_while(|&&character| is_whitespace(character)).count();
        (&input[start..end], start)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let (input, offset) = self.trim(input.as_ref());
        let output = output.as_mut();
        let bytes = bytes(input, offset)?;
        let output = output.get_mut(..bytes.len()).ok_or(Error::BufferTooSmall)?;
        for (value, &byte) in output.iter_mut().zip(bytes.iter().rev()) {
            *value = byte;
        }
        trace!(input = input.len(), output = bytes.len(), "base58 decoded");
        Ok(bytes.len())
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let (input, offset) = self.trim(input.as_ref());
        let mut output = bytes(input, offset)?;
        output.reverse();
        trace!(input = input.len(), output = output.len(), "base58 decoded");
        Ok(output)
    }
}

const DECODER: Decoder = Decoder::new();

/// Decodes Base58 text, given as `&str` or as raw bytes.
///
/// Fails on the first byte that is not a Base58 symbol; no partial output is
/// returned. Non-ascii text is rejected at its first byte.
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    DECODER.decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    DECODER.decode_into(input, output)
}

#[cfg(test)]
mod tests {
    use super::{decoded_len_bound, Decoder, Error};

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("2g"), Ok(b"a".to_vec()));
        assert_eq!(super::decode("a3gV"), Ok(b"bbb".to_vec()));
        assert_eq!(super::decode("aPEr"), Ok(b"ccc".to_vec()));
        assert_eq!(super::decode("72k1xXWE62Qhp3v79r"), Ok(b"Hello Base58!".to_vec()));
        assert_eq!(super::decode("2cFupjhnEsSn59qHXstmK2ffpLv2"), Ok(b"simply a long string".to_vec()));
        assert_eq!(super::decode("ABnLTmg"), Ok(vec![0x51, 0x6b, 0x6f, 0xcd, 0x0f]));
        assert_eq!(super::decode("3SEo3LWLoPntC"), Ok(vec![0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]));
        assert_eq!(super::decode("5Q"), Ok(vec![0xff]));
        assert_eq!(super::decode("JEKNVnkbo3jma5nREBBJCDoXFVeKkD56V3xKrvRmWxFG"), Ok(vec![0xff; 32]));
        assert_eq!(super::decode(b"Rt5zm".to_vec()), Ok(vec![0x10, 0xc8, 0x51, 0x1e]));
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(super::decode("1"), Ok(vec![0x00]));
        assert_eq!(super::decode("1111111111"), Ok(vec![0x00; 10]));
        assert_eq!(super::decode("112"), Ok(vec![0x00, 0x00, 0x01]));
        assert_eq!(super::decode("111NvLz"), Ok(b"\x00\x00\x00ABC".to_vec()));
        assert_eq!(
            super::decode("1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"),
            Ok(vec![
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ])
        );
    }

    #[test]
    fn invalid_characters() {
        assert_eq!(super::decode("0OIl"), Err(Error::InvalidCharacter { character: b'0', index: 0 }));
        assert_eq!(super::decode("1O"), Err(Error::InvalidCharacter { character: b'O', index: 1 }));
        assert_eq!(super::decode("2gI"), Err(Error::InvalidCharacter { character: b'I', index: 2 }));
        assert_eq!(super::decode("a3gVl"), Err(Error::InvalidCharacter { character: b'l', index: 4 }));
        assert_eq!(super::decode("2cFupjh+"), Err(Error::InvalidCharacter { character: b'+', index: 7 }));
        assert_eq!(super::decode(" 2g"), Err(Error::InvalidCharacter { character: b' ', index: 0 }));
        assert_eq!(super::decode("2g\n"), Err(Error::InvalidCharacter { character: b'\n', index: 2 }));
        assert_eq!(super::decode("2gé"), Err(Error::InvalidCharacter { character: 0xc3, index: 2 }));
        assert_eq!(super::decode([b'2', 0x00]), Err(Error::InvalidCharacter { character: 0x00, index: 1 }));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            Error::InvalidCharacter { character: b'0', index: 3 }.to_string(),
            "Invalid character '0' at index 3"
        );
        assert_eq!(
            Error::InvalidCharacter { character: 0xc3, index: 0 }.to_string(),
            "Invalid character 0xc3 at index 0"
        );
        assert_eq!(Error::BufferTooSmall.to_string(), "Output buffer too small");
    }

    #[test]
    fn trim_whitespace() {
        let decoder = Decoder::new().trim_whitespace(true);
        assert_eq!(decoder.decode(" \t2g\r\n"), Ok(b"a".to_vec()));
        assert_eq!(decoder.decode(" \n "), Ok(vec![]));
        assert_eq!(decoder.decode("  111NvLz "), Ok(b"\x00\x00\x00ABC".to_vec()));
        assert_eq!(decoder.decode(" 2g a3gV"), Err(Error::InvalidCharacter { character: b' ', index: 3 }));
        assert_eq!(decoder.decode("\t0"), Err(Error::InvalidCharacter { character: b'0', index: 1 }));
        assert_eq!(Decoder::default(), Decoder::new());
    }

    #[test]
    fn decode_into() {
        let mut output = [0u8; 12];
        assert_eq!(super::decode_into("2NEpo7TZRRrLZSi2U", &mut output), Ok(12));
        assert_eq!(&output, b"Hello World!");

        let mut output = [0u8; 2];
        assert_eq!(super::decode_into("111", &mut output), Err(Error::BufferTooSmall));
        assert_eq!(
            super::decode_into("11O", &mut output),
            Err(Error::InvalidCharacter { character: b'O', index: 2 })
        );

        let input = "1111111111";
        let mut output = vec![0xaau8; decoded_len_bound(input.len())];
        assert_eq!(super::decode_into(input, &mut output), Ok(10));
        assert_eq!(output, vec![0x00; 10]);
    }
}
