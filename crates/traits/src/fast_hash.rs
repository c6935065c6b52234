//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// This trait is intentionally one-shot. The hash is a pure function of
/// `(seed, data)`; no state survives a call.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type selecting among a family of hash functions.
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using the default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}

/// A fixed-size value hashable by its byte image.
///
/// Implementors expose the exact bytes a hash engine consumes: the image is
/// `size_of::<Self>()` bytes, in little-endian field order, so values of
/// different sizes never alias into the same byte count and the result does
/// not depend on host byte order.
///
/// Two semantically equal values whose byte images differ hash differently.
/// A type with padding, interior pointers, or any other non-canonical
/// in-memory form must implement this with a canonical field-by-field
/// encoding, never a raw memory snapshot.
pub trait FastHashKey: Copy {
  /// The byte image, exactly `size_of::<Self>()` bytes.
  type Bytes: AsRef<[u8]>;

  /// The value's byte image.
  #[must_use]
  fn key_bytes(&self) -> Self::Bytes;
}

macro_rules! impl_fast_hash_key_for_int {
  ($($t:ty),* $(,)?) => {
    $(
      impl FastHashKey for $t {
        type Bytes = [u8; core::mem::size_of::<$t>()];

        #[inline]
        fn key_bytes(&self) -> Self::Bytes {
          self.to_le_bytes()
        }
      }
    )*
  };
}

impl_fast_hash_key_for_int!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl<const N: usize> FastHashKey for [u8; N] {
  type Bytes = [u8; N];

  #[inline]
  fn key_bytes(&self) -> Self::Bytes {
    *self
  }
}
