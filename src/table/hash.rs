//! Key Hashing Module
//!
//! Byte-wise FNV-1a hashing and bucket selection.

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a hash over the raw key bytes.
#[inline]
pub fn fnv1a(key: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in key {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Maps a key to its bucket. `bucket_count` must be non-zero.
#[inline]
pub fn bucket_index(key: &[u8], bucket_count: usize) -> usize {
    (fnv1a(key) % bucket_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv1a_empty_is_offset_basis() {
        assert_eq!(fnv1a(b""), FNV_OFFSET_BASIS);
    }

    #[test]
    fn test_fnv1a_known_vectors() {
        assert_eq!(fnv1a(b"a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a(b"foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn test_fnv1a_distinguishes_embedded_zero() {
        assert_ne!(fnv1a(&[0, 1, 2]), fnv1a(&[0, 1, 3]));
        assert_ne!(fnv1a(&[0]), fnv1a(b""));
    }

    #[test]
    fn test_bucket_index_in_range() {
        let keys: [&[u8]; 4] = [b"hello", b"world", b"", &[0, 0, 0]];
        for n in [1usize, 2, 7, 16, 4000] {
            for key in keys {
                assert!(bucket_index(key, n) < n);
            }
        }
    }

    #[test]
    fn test_single_bucket_always_zero() {
        assert_eq!(bucket_index(b"a", 1), 0);
        assert_eq!(bucket_index(b"b", 1), 0);
        assert_eq!(bucket_index(b"c", 1), 0);
    }
}
