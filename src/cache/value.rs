//! Stored Value Module
//!
//! Defines the value types the cache accepts and their canonical encodings.

use std::fmt::Write as _;

// == Stored Value ==
/// A value accepted by the cache.
///
/// Each variant has a canonical byte encoding: UTF-8 for text, the raw
/// bytes for blobs, and decimal ASCII for integers and floats. The
/// encoding is what lands in the store, so a value stored as `Int(42)`
/// reads back as the bytes `b"42"`.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredValue {
    /// UTF-8 text
    Text(String),
    /// Opaque binary blob
    Bytes(Vec<u8>),
    /// Signed integer
    Int(i64),
    /// Floating-point number
    Float(f64),
}

impl StoredValue {
    // == Canonical Encoding ==
    /// Returns the canonical byte encoding of the value.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            StoredValue::Text(text) => text.as_bytes().to_vec(),
            StoredValue::Bytes(bytes) => bytes.clone(),
            StoredValue::Int(n) => n.to_string().into_bytes(),
            StoredValue::Float(f) => f.to_string().into_bytes(),
        }
    }

    // == Recorded-Argument Rendering ==
    /// Renders the value for call-history recording.
    ///
    /// The format is fixed so replay output is deterministic:
    /// - text renders double-quoted with escapes (`"a"`)
    /// - integers and floats render in decimal
    /// - binary renders as `0x`-prefixed lowercase hex
    pub fn render(&self) -> String {
        match self {
            StoredValue::Text(text) => format!("{:?}", text),
            StoredValue::Bytes(bytes) => {
                let mut rendered = String::with_capacity(2 + bytes.len() * 2);
                rendered.push_str("0x");
                for byte in bytes {
                    // write! to a String cannot fail
                    let _ = write!(rendered, "{:02x}", byte);
                }
                rendered
            }
            StoredValue::Int(n) => n.to_string(),
            StoredValue::Float(f) => f.to_string(),
        }
    }
}

// == Conversions ==
impl From<&str> for StoredValue {
    fn from(text: &str) -> Self {
        StoredValue::Text(text.to_string())
    }
}

impl From<String> for StoredValue {
    fn from(text: String) -> Self {
        StoredValue::Text(text)
    }
}

impl From<Vec<u8>> for StoredValue {
    fn from(bytes: Vec<u8>) -> Self {
        StoredValue::Bytes(bytes)
    }
}

impl From<i64> for StoredValue {
    fn from(n: i64) -> Self {
        StoredValue::Int(n)
    }
}

impl From<f64> for StoredValue {
    fn from(f: f64) -> Self {
        StoredValue::Float(f)
    }
}
