//! Deterministic 32-bit hashing for fast, well-distributed keying.
//!
//! `elhash` provides the MurmurHash3 x86-32 hash as a pure, stateless
//! function: hash-table bucket selection, content fingerprints for cache
//! keys, and deduplication checks are the intended uses. It is **not**
//! cryptographic and offers no resistance to adversarial inputs.
//!
//! The output is identical on every platform: block words are assembled from
//! bytes in a fixed little-endian order, never by reinterpreting the buffer
//! at native width, so neither host byte order nor buffer alignment affects
//! the result.
//!
//! # Quick Start
//!
//! ```
//! use elhash::{FastHash, Murmur3_32, hash32, hash_of};
//!
//! // One-shot, explicit seed
//! assert_eq!(hash32(b"test", 0), 0xBA6B_D213);
//!
//! // The seed selects among a family of hash functions
//! assert_ne!(hash32(b"test", 1), hash32(b"test", 0));
//!
//! // Capability form of the same function
//! assert_eq!(Murmur3_32::hash_with_seed(0, b"test"), 0xBA6B_D213);
//!
//! // Fixed-size values hash by their byte image, seed fixed at 0
//! let key = 0x0123_4567_89AB_CDEFu64;
//! assert_eq!(hash_of(&key), hash32(&key.to_le_bytes(), 0));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Links `std` in the underlying crates; disable for `no_std` use |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! elhash = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub use hashes::fast;
pub use hashes::fast::{Murmur3_32, hash32, hash32_raw, hash_of};
pub use traits::{FastHash, FastHashKey, InvalidArgumentError};
