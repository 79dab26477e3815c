#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use fstr::FStr;

use crate::error::{Error, Malformed};

/// Represents a Universally Unique IDentifier as a 16-byte big-endian array.
///
/// This is the input and output type of [`Codec`](crate::Codec). It carries no version semantics
/// of its own; [`Uuid::version`] and [`Uuid::variant`] read the control bits as they are.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUIDv7 object from field values.
    ///
    /// # Panics
    ///
    /// Panics if any argument is out of the range of its field: 48 bits for `unix_ts_ms`, 12 bits
    /// for `rand_a`, and 62 bits for `rand_b`.
    pub const fn from_fields_v7(unix_ts_ms: u64, rand_a: u16, rand_b: u64) -> Self {
        if unix_ts_ms >= 1 << 48 || rand_a >= 1 << 12 || rand_b >= 1 << 62 {
            panic!("invalid field value");
        }

        let ts = unix_ts_ms.to_be_bytes();
        let rb = rand_b.to_be_bytes();
        Self([
            ts[2],
            ts[3],
            ts[4],
            ts[5],
            ts[6],
            ts[7],
            0x70 | (rand_a >> 8) as u8,
            rand_a as u8,
            0x80 | rb[0],
            rb[1],
            rb[2],
            rb[3],
            rb[4],
            rb[5],
            rb[6],
            rb[7],
        ])
    }

    /// Returns the leading 48-bit field, which is the Unix timestamp in milliseconds for a UUIDv7
    /// and an opaque value for a facade produced by [`Codec::encode`](crate::Codec::encode).
    pub const fn unix_ts_ms(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// Returns the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 if u128::from_be_bytes(self.0) == 0 => Variant::Nil,
            0b0000..=0b0111 => Variant::Var0,
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ if u128::from_be_bytes(self.0) == u128::MAX => Variant::Max,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID, or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// structure that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid47::Uuid;
    ///
    /// let x = "018F2D9F-9A2A-7DEF-8C3F-7B1A2C4D5E6F".parse::<Uuid>()?;
    /// assert_eq!(&x.hyphenated() as &str, "018f2d9f-9a2a-7def-8c3f-7b1a2c4d5e6f");
    /// # Ok::<(), uuid47::ParseError>(())
    /// ```
    pub fn hyphenated(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [b'-'; 36];
        let mut pos = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += if matches!(i, 3 | 5 | 7 | 9) { 3 } else { 2 };
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hex digits and hyphens only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

/// The reserved variants of UUIDs.
///
/// [`Codec`](crate::Codec) always writes [`Variant::Var10`] to its output.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// The variant `0xxx` reserved for NCS backward compatibility.
    Var0,
    /// The variant `10xx` described in RFC 9562.
    Var10,
    /// The variant `110x` reserved for Microsoft backward compatibility.
    Var110,
    /// The variant `111x` reserved for future definition.
    VarReserved,
    /// The Nil UUID.
    Nil,
    /// The Max UUID.
    Max,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.hyphenated(), f)
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let src = src.as_bytes();
        if src.len() != 36 {
            return Err(ParseError {});
        }

        let mut dst = [0u8; 16];
        let mut pos = 0;
        for (i, e) in dst.iter_mut().enumerate() {
            let hi = hex_digit(src[pos]).ok_or(ParseError {})?;
            let lo = hex_digit(src[pos + 1]).ok_or(ParseError {})?;
            *e = (hi << 4) | lo;
            pos += 2;
            if matches!(i, 3 | 5 | 7 | 9) {
                if src[pos] != b'-' {
                    return Err(ParseError {});
                }
                pos += 1;
            }
        }
        Ok(Self(dst))
    }
}

const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    /// Creates an object from a byte slice, failing unless the slice is exactly 16 bytes long.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| Malformed::Length(src.len()).into())
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("invalid string representation")]
pub struct ParseError {}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.hyphenated().to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.hyphenated())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(UuidVisitor)
            } else {
                deserializer.deserialize_bytes(UuidVisitor)
            }
        }
    }

    struct UuidVisitor;

    impl de::Visitor<'_> for UuidVisitor {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::try_from(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes facades and restored identifiers alike
        #[test]
        fn serializes_facades_and_restored_identifiers_alike() {
            let cases: [(&str, &[u8; 16]); 2] = [
                (
                    "018f2d9f-9a2a-7def-8c3f-7b1a2c4d5e6f",
                    &[
                        0x01, 0x8f, 0x2d, 0x9f, 0x9a, 0x2a, 0x7d, 0xef, 0x8c, 0x3f, 0x7b, 0x1a,
                        0x2c, 0x4d, 0x5e, 0x6f,
                    ],
                ),
                (
                    "2463c780-7fca-4def-8c3f-7b1a2c4d5e6f",
                    &[
                        0x24, 0x63, 0xc7, 0x80, 0x7f, 0xca, 0x4d, 0xef, 0x8c, 0x3f, 0x7b, 0x1a,
                        0x2c, 0x4d, 0x5e, 0x6f,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::Str(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}
