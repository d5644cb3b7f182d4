//! Base58 encoding and decoding over the Bitcoin alphabet
//! (`123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz`).
//!
//! Leading zero bytes are significant: each one encodes as a leading `1` and
//! decodes back to a zero byte, so `decode(encode(x)) == x` for every input.
//!
//! ```
//! let encoded = qbase58::encode(b"\x00\x00\x00ABC");
//! assert_eq!(encoded, "111NvLz");
//! assert_eq!(qbase58::decode(&encoded).unwrap(), b"\x00\x00\x00ABC");
//! assert!(qbase58::decode("0OIl").is_err());
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod serde_base58;

pub use alphabet::{Alphabet, ALPHABET};
pub use decode::{decode, decode_into, decoded_len_bound, Decoder};
pub use encode::{encode, encode_into, encoded_len_bound, Encoder};
