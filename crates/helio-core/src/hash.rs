//! 128-bit content hashing.
//!
//! Everything that feeds a bake cache or change detector hashes through
//! [`Hash128`]. The primitive is MurmurHash3 x64-128 from `fastmurmur3`; all
//! multi-byte values are fed little endian so a hash computed on one
//! platform matches every other.

use std::fmt;
use std::str::FromStr;

use bytemuck::{Pod, Zeroable};
use glam::{Quat, Vec3, Vec4};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{HelioError, Result};

/// A 128-bit content fingerprint.
///
/// `h1` and `h2` are the two MurmurHash3 output lanes; the text form is
/// `h1` then `h2`, 16 hex digits each.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
pub struct Hash128 {
    pub h1: u64,
    pub h2: u64,
}

impl Hash128 {
    pub const ZERO: Self = Self { h1: 0, h2: 0 };

    pub const fn new(h1: u64, h2: u64) -> Self {
        Self { h1, h2 }
    }

    /// Hash `bytes` with a zero seed.
    pub fn compute(bytes: &[u8]) -> Self {
        Self::compute_seeded(bytes, 0)
    }

    pub fn compute_seeded(bytes: &[u8], seed: u32) -> Self {
        Self::from(fastmurmur3::murmur3_x64_128(bytes, u64::from(seed)))
    }

    /// Folds `other` into `self` by hashing both, `self` first. Order
    /// matters: `a.append(b)` and `b.append(a)` generally differ.
    pub fn append(&mut self, other: &Hash128) {
        let mut bytes = [0u8; 32];
        bytes[..16].copy_from_slice(&self.to_le_bytes());
        bytes[16..].copy_from_slice(&other.to_le_bytes());
        *self = Self::compute(&bytes);
    }

    pub fn to_le_bytes(&self) -> [u8; 16] {
        u128::from(*self).to_le_bytes()
    }

    pub fn is_valid(&self) -> bool {
        *self != Self::ZERO
    }
}

impl From<u128> for Hash128 {
    fn from(value: u128) -> Self {
        Self {
            h1: value as u64,
            h2: (value >> 64) as u64,
        }
    }
}

impl From<Hash128> for u128 {
    fn from(hash: Hash128) -> Self {
        ((hash.h2 as u128) << 64) | hash.h1 as u128
    }
}

impl fmt::Display for Hash128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.h1, self.h2)
    }
}

impl FromStr for Hash128 {
    type Err = HelioError;

    fn from_str(s: &str) -> Result<Self> {
        let len = s.chars().count();
        if len != 32 {
            return Err(HelioError::InvalidHashLength(len));
        }

        let mut value = 0u128;
        for c in s.chars() {
            let digit = c.to_digit(16).ok_or(HelioError::InvalidHashDigit(c))?;
            value = (value << 4) | digit as u128;
        }
        Ok(Self::new((value >> 64) as u64, value as u64))
    }
}

impl Serialize for Hash128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Anything that can produce a 128-bit fingerprint of its content.
pub trait Hashable128: fmt::Debug + Send + Sync {
    fn compute_hash(&self) -> Hash128;
}

impl Hashable128 for Hash128 {
    fn compute_hash(&self) -> Hash128 {
        *self
    }
}

/// Collects the little-endian bytes of a value's fields, then hashes them
/// in one go.
#[derive(Clone, Debug, Default)]
pub struct ContentHasher {
    bytes: Vec<u8>,
}

impl ContentHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn write_u8(&mut self, value: u8) -> &mut Self {
        self.bytes.push(value);
        self
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write_u8(value as u8)
    }

    pub fn write_u32(&mut self, value: u32) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_f32(&mut self, value: f32) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_vec3(&mut self, value: Vec3) -> &mut Self {
        for c in value.to_array() {
            self.write_f32(c);
        }
        self
    }

    pub fn write_vec4(&mut self, value: Vec4) -> &mut Self {
        for c in value.to_array() {
            self.write_f32(c);
        }
        self
    }

    /// Writes x, y, z, w.
    pub fn write_quat(&mut self, value: Quat) -> &mut Self {
        for c in value.to_array() {
            self.write_f32(c);
        }
        self
    }

    pub fn write_hash(&mut self, value: Hash128) -> &mut Self {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn finish(&self) -> Hash128 {
        Hash128::compute(&self.bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_with_zero_seed_is_zero() {
        assert_eq!(Hash128::compute(&[]), Hash128::ZERO);
        assert!(!Hash128::compute(&[]).is_valid());
        assert!(Hash128::compute(b"probe").is_valid());
    }

    #[test]
    fn matches_reference_vector() {
        let hash = Hash128::compute(b"The quick brown fox jumps over the lazy dog");
        assert_eq!(hash, Hash128::new(0xe34b_bc7b_bc07_1b6c, 0x7a43_3ca9_c49a_9347));
    }

    #[test]
    fn tail_lengths_all_differ() {
        let data = [0xabu8; 31];
        let hashes: Vec<_> = (0..=data.len()).map(|n| Hash128::compute(&data[..n])).collect();
        for (i, a) in hashes.iter().enumerate() {
            for b in &hashes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn seed_changes_result() {
        assert_ne!(Hash128::compute(b"probe"), Hash128::compute_seeded(b"probe", 7));
        assert_eq!(Hash128::compute(b"probe"), Hash128::compute_seeded(b"probe", 0));
    }

    #[test]
    fn append_is_order_sensitive() {
        let a = Hash128::compute(b"a");
        let b = Hash128::compute(b"b");

        let mut ab = a;
        ab.append(&b);
        let mut ba = b;
        ba.append(&a);

        assert_ne!(ab, ba);
        assert_ne!(ab, a);
    }

    #[test]
    fn append_hashes_accumulator_then_value() {
        let a = Hash128::compute(b"a");
        let b = Hash128::compute(b"b");

        let mut bytes = a.to_le_bytes().to_vec();
        bytes.extend_from_slice(&b.to_le_bytes());

        let mut folded = a;
        folded.append(&b);
        assert_eq!(folded, Hash128::compute(&bytes));
    }

    #[test]
    fn le_bytes_are_h1_then_h2() {
        let hash = Hash128::new(0x0807_0605_0403_0201, 0x100f_0e0d_0c0b_0a09);
        let expected: Vec<u8> = (1..=16).collect();
        assert_eq!(hash.to_le_bytes().to_vec(), expected);
        assert_eq!(Hash128::from(u128::from(hash)), hash);
    }

    #[test]
    fn text_form_parses_back() {
        let hash = Hash128::compute(b"reflection");
        let text = hash.to_string();
        assert_eq!(text.len(), 32);
        assert_eq!(text.parse::<Hash128>().unwrap(), hash);
        assert_eq!(text.to_uppercase().parse::<Hash128>().unwrap(), hash);
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert_eq!("abc".parse::<Hash128>(), Err(HelioError::InvalidHashLength(3)));
        let bad = format!("{}g", "0".repeat(31));
        assert_eq!(bad.parse::<Hash128>(), Err(HelioError::InvalidHashDigit('g')));
        let plus = format!("+{}", "0".repeat(31));
        assert_eq!(plus.parse::<Hash128>(), Err(HelioError::InvalidHashDigit('+')));
        let late = format!("{}z{}", "0".repeat(20), "0".repeat(11));
        assert_eq!(late.parse::<Hash128>(), Err(HelioError::InvalidHashDigit('z')));
        let wide = format!("{}é", "0".repeat(31));
        assert_eq!(wide.parse::<Hash128>(), Err(HelioError::InvalidHashDigit('é')));
    }

    #[test]
    fn serializes_as_hex_string() {
        let hash = Hash128::new(0x0123_4567_89ab_cdef, 0xfedc_ba98_7654_3210);
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"0123456789abcdeffedcba9876543210\"");
        assert_eq!(serde_json::from_str::<Hash128>(&json).unwrap(), hash);
    }

    #[test]
    fn content_hasher_is_little_endian() {
        let mut hasher = ContentHasher::new();
        hasher.write_u32(0x0403_0201).write_bool(true).write_f32(1.0);
        assert_eq!(
            hasher.finish(),
            Hash128::compute(&[1, 2, 3, 4, 1, 0x00, 0x00, 0x80, 0x3f])
        );
    }

    #[test]
    fn quat_is_written_xyzw() {
        let mut a = ContentHasher::new();
        a.write_quat(Quat::from_xyzw(1.0, 2.0, 3.0, 4.0));
        let mut b = ContentHasher::new();
        b.write_vec4(Vec4::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(a.finish(), b.finish());
    }
}
