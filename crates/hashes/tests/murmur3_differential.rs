use hashes::fast::Murmur3_32;
use proptest::prelude::*;
use traits::FastHash as _;

fn murmur3_ref(seed: u32, data: &[u8]) -> u32 {
  let mut cursor = std::io::Cursor::new(data);
  murmur3::murmur3_32(&mut cursor, seed).expect("in-memory read cannot fail")
}

proptest! {
  #[test]
  fn murmur3_32_matches_murmur3_crate(seed in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    let ours = Murmur3_32::hash_with_seed(seed, &data);
    let expected = murmur3_ref(seed, &data);
    prop_assert_eq!(ours, expected);
  }

  #[test]
  fn murmur3_32_is_deterministic(seed in any::<u32>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(Murmur3_32::hash_with_seed(seed, &data), Murmur3_32::hash_with_seed(seed, &data));
  }
}

#[test]
fn phase_boundary_lengths_match_oracle() {
  let data: Vec<u8> = (0u8..=66).collect();
  let seeds = [0u32, 1, 0x9747_B28C, 0xFFFF_FFFF];

  for &seed in &seeds {
    for len in [0usize, 1, 2, 3, 4, 5, 7, 8, 15, 16, 31, 32, 63, 64, 67] {
      let slice = &data[..len];
      assert_eq!(
        Murmur3_32::hash_with_seed(seed, slice),
        murmur3_ref(seed, slice),
        "mismatch (seed={seed:#010x}, len={len})"
      );
    }
  }
}
