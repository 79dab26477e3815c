//! Keyed pseudorandom function over byte strings.

#[cfg(not(feature = "std"))]
use core as std;

use std::{fmt, hash::Hasher};

use siphasher::sip::SipHasher24;

use crate::{Error, Key};

/// A SipHash-2-4 PRF bound to a 128-bit key, producing 8-byte outputs.
///
/// The byte order around the primitive is fixed so that independently built encoders agree on the
/// same facades:
///
/// - Each 8-byte half of the key is byte-reversed before being handed to SipHash, which loads its
///   two key words little-endian. Equivalently, each half is read as a big-endian `u64`.
/// - The SipHash output, natively a little-endian byte string, is byte-reversed before being
///   returned. Equivalently, the `u64` result is written big-endian.
///
/// The instance is immutable after construction and can be shared freely across threads.
///
/// # Examples
///
/// ```rust
/// use uuid47::KeyedHash;
///
/// let h = KeyedHash::new(b"\x01\x23\x45\x67\x89\xab\xcd\xef\xfe\xdc\xba\x98\x76\x54\x32\x10")?;
/// assert_eq!(h.hash(b"message"), h.hash(b"message"));
/// assert!(KeyedHash::new(b"short").is_err());
/// # Ok::<(), uuid47::Error>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct KeyedHash {
    k0: u64,
    k1: u64,
}

impl KeyedHash {
    /// Creates an instance from raw key bytes, failing with [`Error::InvalidKeyLength`] unless the
    /// key is exactly 16 bytes long.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        Key::try_from(key).map(|key| Self::from_key(&key))
    }

    /// Creates an instance from a validated key.
    pub const fn from_key(key: &Key) -> Self {
        let k = u128::from_be_bytes(*key.as_bytes());
        Self {
            k0: (k >> 64) as u64,
            k1: k as u64,
        }
    }

    /// Computes the 8-byte keyed hash of `message`.
    pub fn hash(&self, message: &[u8]) -> [u8; 8] {
        let mut hasher = SipHasher24::new_with_keys(self.k0, self.k1);
        hasher.write(message);
        hasher.finish().to_be_bytes()
    }
}

impl fmt::Debug for KeyedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedHash").finish_non_exhaustive()
    }
}
