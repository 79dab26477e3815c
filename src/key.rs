//! Secret key shared by encoder and decoder.

#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, str};

use rand::{CryptoRng, RngCore};

use crate::Error;

/// Represents a 128-bit secret key for [`Codec`](crate::Codec) and [`KeyedHash`](crate::KeyedHash).
///
/// The key is held as the 16 raw bytes supplied by the caller. Its `Debug` output never reveals the
/// bytes. The key memory is not zeroized on drop.
///
/// # Examples
///
/// ```rust
/// use uuid47::Key;
///
/// let a = "0123456789abcdeffedcba9876543210".parse::<Key>()?;
/// let b = Key::try_from(&b"\x01\x23\x45\x67\x89\xab\xcd\xef\xfe\xdc\xba\x98\x76\x54\x32\x10"[..])?;
/// assert_eq!(a, b);
/// assert!(Key::try_from(&b"too short"[..]).is_err());
/// # Ok::<(), uuid47::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Key([u8; 16]);

impl Key {
    /// Creates a key from 16 raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Generates a fresh key from a cryptographically secure random number generator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let key = uuid47::Key::generate(&mut rand::rngs::OsRng);
    /// ```
    pub fn generate<R: RngCore + CryptoRng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Returns a reference to the raw key bytes.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").finish_non_exhaustive()
    }
}

impl From<[u8; 16]> for Key {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    /// Creates a key from a byte slice, failing with [`Error::InvalidKeyLength`] unless the slice is
    /// exactly 16 bytes long. Shorter or longer input is never padded or truncated.
    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::InvalidKeyLength(src.len()))
    }
}

impl str::FromStr for Key {
    type Err = Error;

    /// Creates a key from 32 hexadecimal digits in either case.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        if !src.bytes().all(|c| c.is_ascii_hexdigit()) || src.len() % 2 != 0 {
            return Err(Error::InvalidKeyEncoding);
        }

        let mut bytes = [0u8; 16];
        if src.len() != 2 * bytes.len() {
            return Err(Error::InvalidKeyLength(src.len() / 2));
        }
        hex::decode_to_slice(src, &mut bytes).map_err(|_| Error::InvalidKeyEncoding)?;
        Ok(Self(bytes))
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Key};
    use serde::{de, Deserializer};

    /// Reads a key from its hexadecimal string form, or from 16 raw bytes in compact formats.
    impl<'de> serde::Deserialize<'de> for Key {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(KeyVisitor)
            } else {
                deserializer.deserialize_bytes(KeyVisitor)
            }
        }
    }

    struct KeyVisitor;

    impl de::Visitor<'_> for KeyVisitor {
        type Value = Key;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a 128-bit key as 32 hexadecimal digits or 16 bytes")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Key::try_from(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Key;
        use serde_test::{assert_de_tokens, assert_de_tokens_error, Configure, Token};

        /// Deserializes keys from configuration strings
        #[test]
        fn deserializes_keys_from_configuration_strings() {
            const RAW: &[u8; 16] = &[
                0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54,
                0x32, 0x10,
            ];
            let key = Key::new(*RAW);
            assert_de_tokens(
                &key.readable(),
                &[Token::Str("0123456789abcdeffedcba9876543210")],
            );
            assert_de_tokens(&key.compact(), &[Token::Bytes(RAW)]);
            assert_de_tokens_error::<serde_test::Readable<Key>>(
                &[Token::Str("0123456789abcdef")],
                "key must be 16 bytes long, got 8 bytes",
            );
        }
    }
}

#[cfg(feature = "std")]
#[cfg(test)]
mod tests {
    use super::Key;
    use crate::Error;

    const VECTOR_KEY: [u8; 16] = [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98, 0x76, 0x54, 0x32,
        0x10,
    ];

    /// Parses hexadecimal keys in either case
    #[test]
    fn parses_hexadecimal_keys_in_either_case() {
        let key = Key::new(VECTOR_KEY);
        assert_eq!("0123456789abcdeffedcba9876543210".parse(), Ok(key));
        assert_eq!("0123456789ABCDEFFEDCBA9876543210".parse(), Ok(key));
    }

    /// Rejects keys of wrong length without truncating or padding
    #[test]
    fn rejects_keys_of_wrong_length_without_truncating_or_padding() {
        for len in (0..40).filter(|&n| n != 16) {
            let bytes = vec![0x5au8; len];
            assert_eq!(
                Key::try_from(bytes.as_slice()),
                Err(Error::InvalidKeyLength(len))
            );
        }
        assert_eq!(Key::try_from(&[0x5au8; 16][..]), Ok(Key::new([0x5a; 16])));

        assert_eq!(
            "0123456789abcdeffedcba987654321000".parse::<Key>(),
            Err(Error::InvalidKeyLength(17))
        );
        assert_eq!("".parse::<Key>(), Err(Error::InvalidKeyLength(0)));
    }

    /// Rejects non-hexadecimal key strings
    #[test]
    fn rejects_non_hexadecimal_key_strings() {
        let cases = [
            "0123456789abcdeffedcba987654321",
            "0123456789abcdeffedcba987654321g",
            " 0123456789abcdeffedcba9876543210",
            "0123456789abcdef-fedcba9876543210",
            "0x0123456789abcdeffedcba98765432",
        ];
        for e in cases {
            assert_eq!(e.parse::<Key>(), Err(Error::InvalidKeyEncoding), "{e:?}");
        }
    }

    /// Hides key material from debug output
    #[test]
    fn hides_key_material_from_debug_output() {
        let text = format!("{:?}", Key::new(VECTOR_KEY));
        assert_eq!(text, "Key { .. }");
        assert!(!text.contains("01"));
    }

    /// Generates distinct keys from random number generator
    #[test]
    fn generates_distinct_keys_from_random_number_generator() {
        let mut rng = rand::thread_rng();
        let a = Key::generate(&mut rng);
        let b = Key::generate(&mut rng);
        assert_ne!(a, b);
    }
}
