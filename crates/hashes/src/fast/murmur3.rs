//! MurmurHash3 x86-32 (**NOT CRYPTO**).
//!
//! One-shot 32-bit hash for hash-table bucketing, cache-key fingerprints, and
//! deduplication checks. Output is well distributed over the `(seed, data)`
//! domain but offers no resistance to deliberately crafted collisions.

use traits::{FastHash, FastHashKey, InvalidArgumentError};

/// MurmurHash3, x86 32-bit variant.
#[derive(Clone, Default)]
pub struct Murmur3_32;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;
const BLOCK_ADD: u32 = 0xe654_6b64;
const FINAL_MUL1: u32 = 0x85eb_ca6b;
const FINAL_MUL2: u32 = 0xc2b2_ae35;

#[inline(always)]
fn mix_k(k: u32) -> u32 {
  k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline(always)]
fn murmur3_32(seed: u32, data: &[u8]) -> u32 {
  let mut h = seed;

  let (blocks, tail) = data.as_chunks::<4>();
  for block in blocks {
    h ^= mix_k(u32::from_le_bytes(*block));
    h = h.rotate_left(13);
    h = h.wrapping_mul(5).wrapping_add(BLOCK_ADD);
  }

  if !tail.is_empty() {
    // Tail bytes fold in from the highest address down; the assembled word
    // carries the lowest-addressed byte in bits 0..8, same as a full block.
    let mut k = 0u32;
    for &b in tail.iter().rev() {
      k = (k << 8) | u32::from(b);
    }
    h ^= mix_k(k);
  }

  h ^= data.len() as u32;
  h ^= h >> 16;
  h = h.wrapping_mul(FINAL_MUL1);
  h ^= h >> 13;
  h = h.wrapping_mul(FINAL_MUL2);
  h ^ (h >> 16)
}

/// Hash `data` with `seed`.
///
/// Deterministic on every platform: block words are assembled from bytes in
/// little-endian order, independent of host byte order and buffer alignment.
/// The empty input is a defined path; it runs finalization directly on the
/// seed (`hash32(b"", 0) == 0`).
#[inline]
#[must_use]
pub fn hash32(data: &[u8], seed: u32) -> u32 {
  murmur3_32(seed, data)
}

/// Hash `len` bytes starting at `data` with `seed`.
///
/// Raw-pointer entry point for callers holding `(pointer, length)` pairs.
///
/// # Errors
///
/// A null `data` with nonzero `len` is rejected with [`InvalidArgumentError`]
/// before any memory is touched. A null `data` with `len == 0` is the
/// well-defined empty-input path.
///
/// # Safety
///
/// When `data` is non-null it must point to `len` bytes readable for the
/// duration of the call.
pub unsafe fn hash32_raw(data: *const u8, len: usize, seed: u32) -> Result<u32, InvalidArgumentError> {
  if data.is_null() {
    if len != 0 {
      return Err(InvalidArgumentError::new());
    }
    return Ok(murmur3_32(seed, &[]));
  }
  // SAFETY: `data` is non-null and the caller guarantees `len` readable bytes.
  let bytes = unsafe { core::slice::from_raw_parts(data, len) };
  Ok(murmur3_32(seed, bytes))
}

/// Hash a fixed-size value by its byte image, with seed 0.
///
/// Consumes exactly `size_of::<T>()` bytes, so values of different sizes never
/// alias into the same byte count. Two semantically equal values whose byte
/// images differ hash differently; see [`FastHashKey`] for the canonical-image
/// contract.
#[inline]
#[must_use]
pub fn hash_of<T: FastHashKey>(value: &T) -> u32 {
  let bytes = value.key_bytes();
  debug_assert_eq!(bytes.as_ref().len(), core::mem::size_of::<T>());
  murmur3_32(0, bytes.as_ref())
}

impl FastHash for Murmur3_32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    murmur3_32(seed, data)
  }
}
