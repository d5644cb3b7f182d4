use crate::alphabet::{ALPHABET, RADIX};
use thiserror::Error;
use tracing::trace;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The output buffer was too small to contain the entire encoding.
    #[error("Output buffer too small")]
    BufferTooSmall,
}

// 58^5 is the largest power of 58 that fits in a u32, so a limb carries five digits.
const DIGITS_PER_LIMB: usize = 5;
const LIMB_RADIX: u64 = (RADIX as u64).pow(DIGITS_PER_LIMB as u32);
const BYTES_PER_CHUNK: usize = 4;

/// Upper bound on the number of symbols produced for `len` input bytes.
///
/// A byte carries log(256)/log(58) ~ 1.366 digits, so 1.38 per byte plus one
/// for rounding is always enough.
/// Saturates at `usize::MAX` instead of overflowing.
pub const fn encoded_len_bound(len: usize) -> usize {
    (len / 100).saturating_mul(138).saturating_add((len % 100) * 138 / 100 + 1)
}

/// Base 58 digits of `input`, least significant first, with one trailing zero
/// digit per leading zero byte of the input.
fn digits(input: &[u8]) -> Vec<u8> {
    let zeros = input.iter().take_while(|&&value| value == 0).count();

    // Little-endian limbs in radix 58^5. Every limb is below 2^30 and is shifted
    // by at most 32 bits, so the carry never leaves a u64.
    let mut limbs: Vec<u32> = Vec::with_capacity((input.len() - zeros) / 3 + 1);
    for chunk in input[zeros..].chunks(BYTES_PER_CHUNK) {
        let shift = 8 * chunk.len();
        let mut carry = chunk.iter().fold(0u64, |accumulator, &value| (accumulator << 8) | value as u64);
        for limb in &mut limbs {
            carry += (*limb as u64) << shift;
            *limb = (carry % LIMB_RADIX) as u32;
            carry /= LIMB_RADIX;
        }
        while carry > 0 {
            limbs.push((carry % LIMB_RADIX) as u32);
            carry /= LIMB_RADIX;
        }
    }

    let mut digits = Vec::with_capacity(limbs.len() * DIGITS_PER_LIMB + zeros);
    for &limb in &limbs {
        let mut limb = limb;
        for _ in 0..DIGITS_PER_LIMB {
            digits.push((limb % RADIX as u32) as u8);
            limb /= RADIX as u32;
        }
    }
    while digits.last() == Some(&0) {
        digits.pop();
    }
    digits.resize(digits.len() + zeros, 0);
    digits
}

/// Encoder over the fixed alphabet. There are no options, so every instance
/// behaves like the `const` default the free functions use.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Encoder;

impl Encoder {
    pub const fn new() -> Self {
        Self
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let digits = digits(input);
        let output = output.get_mut(..digits.len()).ok_or(Error::BufferTooSmall)?;
        for (value, &digit) in output.iter_mut().zip(digits.iter().rev()) {
            *value = ALPHABET.symbol(digit);
        }
        trace!(input = input.len(), output = digits.len(), "base58 encoded");
        Ok(digits.len())
    }

    /// Encodes `input` as Base58 text. Never fails; empty input gives an empty string.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = digits(input);
        for value in &mut output {
            *value = ALPHABET.symbol(*value);
        }
        output.reverse();
        trace!(input = input.len(), output = output.len(), "base58 encoded");
        // Every symbol of ALPHABET is ascii.
        unsafe { String::from_utf8_unchecked(output) }
    }
}

const ENCODER: Encoder = Encoder::new();

pub fn encode(input: impl AsRef<[u8]>) -> String {
    ENCODER.encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    ENCODER.encode_into(input, output)
}
