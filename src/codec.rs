//! Conversion between UUIDv7 and UUIDv4 facades.

use crate::{Error, Key, KeyedHash, Malformed, Uuid};

/// Encodes and decodes UUIDv4 facades of UUIDv7 under one key.
///
/// The key length is validated once at construction. Every method is a pure function of its
/// argument and the key, so a `Codec` can be shared read-only across threads without locking.
///
/// # Examples
///
/// ```rust
/// use uuid47::{Codec, Uuid};
///
/// let codec = Codec::new(b"\x01\x23\x45\x67\x89\xab\xcd\xef\xfe\xdc\xba\x98\x76\x54\x32\x10")?;
///
/// let v7: Uuid = "018f2d9f-9a2a-7def-8c3f-7b1a2c4d5e6f".parse().unwrap();
/// let facade = codec.encode(v7)?;
/// assert_eq!(facade.to_string(), "2463c780-7fca-4def-8c3f-7b1a2c4d5e6f");
/// assert_eq!(codec.decode(facade)?, v7);
/// # Ok::<(), uuid47::Error>(())
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Codec {
    hash: KeyedHash,
}

impl Codec {
    /// Creates a codec from raw key bytes, failing with [`Error::InvalidKeyLength`] unless the key
    /// is exactly 16 bytes long.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        KeyedHash::new(key).map(|hash| Self { hash })
    }

    /// Creates a codec from a validated key.
    pub const fn from_key(key: &Key) -> Self {
        Self {
            hash: KeyedHash::from_key(key),
        }
    }

    /// Converts a UUIDv7 into its UUIDv4 facade.
    ///
    /// Fails with [`Error::MalformedIdentifier`] if the version nibble of `v7` is not 7.
    pub fn encode(&self, v7: Uuid) -> Result<Uuid, Error> {
        check_version(&v7, 7)?;
        Ok(self.encode_unchecked(v7))
    }

    /// Restores the UUIDv7 from a facade produced by [`Codec::encode`] under the same key.
    ///
    /// Fails with [`Error::MalformedIdentifier`] if the version nibble of `v4` is not 4. A facade
    /// decoded under a different key yields an unrelated UUIDv7 rather than an error.
    pub fn decode(&self, v4: Uuid) -> Result<Uuid, Error> {
        check_version(&v4, 4)?;
        Ok(self.decode_unchecked(v4))
    }

    /// Converts any 16-byte identifier as [`Codec::encode`] does, without checking its version.
    ///
    /// The output always carries version 4 and variant `10`. The round trip through
    /// [`Codec::decode_unchecked`] restores the input only if the input had version 7 and variant
    /// `10`, since those bits are overwritten.
    pub fn encode_unchecked(&self, v7: Uuid) -> Uuid {
        self.apply(v7.as_bytes(), 4)
    }

    /// Restores an identifier as [`Codec::decode`] does, without checking its version.
    pub fn decode_unchecked(&self, v4: Uuid) -> Uuid {
        self.apply(v4.as_bytes(), 7)
    }

    /// XORs the keyed mask into the timestamp field and rewrites the control bits.
    ///
    /// The mask depends only on the free bits, which this function never changes; applying it
    /// twice with the same key restores the timestamp field.
    fn apply(&self, src: &[u8; 16], version: u8) -> Uuid {
        let digest = self.hash.hash(&prf_message(src));

        let mut dst = *src;
        for (e, m) in dst[..6].iter_mut().zip(&digest[2..]) {
            *e ^= m;
        }
        set_version_and_variant(&mut dst, version);
        Uuid::from(dst)
    }
}

/// Converts a UUIDv7 given as 16 raw bytes into its UUIDv4 facade under `key`.
///
/// The key is validated first; the identifier must then be exactly 16 bytes long with version 7.
///
/// # Examples
///
/// ```rust
/// let key = b"\x01\x23\x45\x67\x89\xab\xcd\xef\xfe\xdc\xba\x98\x76\x54\x32\x10";
/// let v7: uuid47::Uuid = "018f2d9f-9a2a-7def-8c3f-7b1a2c4d5e6f".parse().unwrap();
///
/// let facade = uuid47::encode(v7.as_bytes(), key)?;
/// assert_eq!(uuid47::decode(facade.as_bytes(), key)?, v7);
///
/// assert!(uuid47::encode(v7.as_bytes(), &key[..15]).is_err());
/// # Ok::<(), uuid47::Error>(())
/// ```
pub fn encode(v7: &[u8], key: &[u8]) -> Result<Uuid, Error> {
    let codec = Codec::new(key)?;
    codec.encode(Uuid::try_from(v7).inspect_err(log_rejection)?)
}

/// Restores a UUIDv7 from a facade given as 16 raw bytes under `key`.
///
/// The key is validated first; the identifier must then be exactly 16 bytes long with version 4.
pub fn decode(v4: &[u8], key: &[u8]) -> Result<Uuid, Error> {
    let codec = Codec::new(key)?;
    codec.decode(Uuid::try_from(v4).inspect_err(log_rejection)?)
}

fn check_version(id: &Uuid, expected: u8) -> Result<(), Error> {
    let found = id.as_bytes()[6] >> 4;
    if found == expected {
        Ok(())
    } else {
        let err = Error::from(Malformed::Version { expected, found });
        log_rejection(&err);
        Err(err)
    }
}

fn log_rejection(err: &Error) {
    log::debug!("uuid47: rejected identifier: {err}");
}

/// Builds the 10-byte PRF input from the 74 free bits, with the version and variant bits cleared.
fn prf_message(bytes: &[u8; 16]) -> [u8; 10] {
    let mut msg = [0u8; 10];
    msg[0] = bytes[6] & 0x0f;
    msg[1] = bytes[7];
    msg[2] = bytes[8] & 0x3f;
    msg[3..].copy_from_slice(&bytes[9..]);
    msg
}

/// Sets the version nibble and the RFC 4122 variant `10`, leaving the free bits untouched.
fn set_version_and_variant(bytes: &mut [u8; 16], version: u8) {
    bytes[6] = (bytes[6] & 0x0f) | (version << 4);
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
}
