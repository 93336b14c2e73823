//! Deterministic per-entity jitter seeds.
//!
//! Layout jitter must be stable for a given entity across frames and
//! re-renders, so it is derived from an explicit hash of the entity's
//! list index and stable id rather than from any RNG stream. Lane salts
//! keep independent jitter channels uncorrelated.

/// splitmix64 mix step.
#[inline]
pub fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Fold a stable id into a 64-bit hash (FNV-1a).
#[inline]
pub fn id_hash(id: &str) -> u64 {
    let mut h: u64 = 0xCBF2_9CE4_8422_2325;
    for b in id.bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0000_0100_0000_01B3);
    }
    h
}

/// Seed for one entity from its list index and stable id.
#[inline]
pub fn entity_seed(index: usize, id: &str) -> u64 {
    splitmix64((index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ id_hash(id))
}

/// Uniform f32 in [0, 1) from a seed and lane salt.
#[inline]
pub fn unit_f32(seed: u64, salt: u64) -> f32 {
    let h = splitmix64(seed ^ salt);
    ((h >> 40) as f32) / ((1u64 << 24) as f32)
}

/// Uniform f32 in [-1, 1) from a seed and lane salt.
#[inline]
pub fn signed_unit(seed: u64, salt: u64) -> f32 {
    unit_f32(seed, salt) * 2.0 - 1.0
}
