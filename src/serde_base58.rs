//! Serde adapters storing byte fields as Base58 strings.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Account {
//!     #[serde(with = "qbase58::serde_base58")]
//!     key: [u8; 4],
//! }
//!
//! let json = serde_json::to_string(&Account { key: [0, 0, 0, 1] }).unwrap();
//! assert_eq!(json, r#"{"key":"1112"}"#);
//! ```

use crate::{decode, encode};
use serde::{de, Deserializer, Serializer};
use std::fmt;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsRef<[u8]>,
    S: Serializer,
{
    serializer.serialize_str(&encode(value))
}

/// Accepts a string or a byte string. The decoded bytes are converted into
/// `T`, so a fixed-size array rejects input of the wrong length.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: TryFrom<Vec<u8>>,
    D: Deserializer<'de>,
{
    let bytes = deserializer.deserialize_str(Base58Visitor)?;
    let len = bytes.len();
    T::try_from(bytes).map_err(|_| <D::Error as de::Error>::invalid_length(len, &"a byte length accepted by the target type"))
}

struct Base58Visitor;

impl<'de> de::Visitor<'de> for Base58Visitor {
    type Value = Vec<u8>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a base58 string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        decode(value).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        decode(value).map_err(E::custom)
    }
}
