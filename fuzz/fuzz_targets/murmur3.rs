#![no_main]

use hashes::fast::Murmur3_32;
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

fuzz_target!(|input: &[u8]| {
  let seed_len = core::cmp::min(4, input.len());
  let (seed_bytes, data) = input.split_at(seed_len);

  let mut tmp = [0u8; 4];
  tmp[..seed_bytes.len()].copy_from_slice(seed_bytes);
  let seed = u32::from_le_bytes(tmp);

  let ours = Murmur3_32::hash_with_seed(seed, data);

  let mut cursor = std::io::Cursor::new(data);
  let expected = murmur3::murmur3_32(&mut cursor, seed).expect("in-memory read cannot fail");

  assert_eq!(ours, expected);
});
