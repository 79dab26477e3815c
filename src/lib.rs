//! Keyed, reversible masking of UUIDv7 timestamps behind UUIDv4 facades
//!
//! A UUIDv7 leaks its creation time through the leading 48 bits. This crate converts a UUIDv7 into
//! a *facade* that carries the version and variant of a UUIDv4 and cannot be told apart from a
//! random UUIDv4 without the secret key, and converts the facade back with the same key.
//!
//! ```rust
//! use uuid47::{Codec, Key, Uuid};
//!
//! let key: Key = "0123456789abcdeffedcba9876543210".parse()?;
//! let codec = Codec::from_key(&key);
//!
//! let v7: Uuid = "018f2d9f-9a2a-7def-8c3f-7b1a2c4d5e6f".parse().unwrap();
//! let facade = codec.encode(v7)?;
//! println!("{}", facade); // "2463c780-7fca-4def-8c3f-7b1a2c4d5e6f"
//! assert_eq!(codec.decode(facade)?, v7);
//! # Ok::<(), uuid47::Error>(())
//! ```
//!
//! # Field and bit layout
//!
//! Both directions operate on the following layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           timestamp                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           timestamp           |  ver  |         free          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                          free                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             free                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `timestamp` field holds the Unix timestamp in milliseconds in a UUIDv7 and the
//!   masked timestamp in a facade.
//! - The 4-bit `ver` field is `0111` in a UUIDv7 and `0100` in a facade.
//! - The 2-bit `var` field is set at `10` in both.
//! - The 74 `free` bits are copied unchanged in both directions.
//!
//! The mask XORed into the `timestamp` field is the low 48 bits of SipHash-2-4 computed over a
//! 10-byte message built from the `free` bits alone (with the `ver` and `var` positions cleared).
//! Since neither direction touches the `free` bits, the encoder and the decoder derive the same
//! mask, and the second XOR restores the timestamp exactly. See [`KeyedHash`] for the byte order
//! used around SipHash, which must be reproduced exactly by other implementations.
//!
//! This scheme hides the 48-bit timestamp from parties without the key, under the usual PRF
//! assumption on SipHash. It is not a general-purpose encryption scheme: the `free` bits are
//! exposed as they are.
//!
//! # Crate features
//!
//! - `std` (default): enables `String` conversions and `std::error::Error` integration.
//! - `serde`: enables (de)serialization of [`Uuid`] and deserialization of [`Key`] from 32
//!   hexadecimal digits.
//! - `uuid`: enables conversions between [`Uuid`] and `uuid::Uuid`.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod codec;
pub use codec::{decode, encode, Codec};

mod error;
pub use error::{Error, Malformed};

mod id;
pub use id::{ParseError, Uuid, Variant};

mod key;
pub use key::Key;

mod keyed_hash;
pub use keyed_hash::KeyedHash;
