//! DES key schedule (FIPS 46-3).

use core::ops::Index;

use serde::{Deserialize, Serialize};

use crate::bits::{permute, rotate_left_28, MASK_28};
use crate::error::{KeyScheduleError, Result};
use crate::key::DesKey;
use crate::tables::{KEY_SHIFTS, PC1, PC1_WIDTH, PC2, PC2_WIDTH};

/// Number of DES rounds, and of subkeys per schedule.
pub const DES_ROUNDS: usize = 16;

/// Mask covering the 48 bits of a DES subkey.
pub const SUBKEY_MASK: u64 = (1 << 48) - 1;

/// The 16 round subkeys of one DES key, round 1 first.
///
/// Each subkey occupies the low 48 bits of a `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u64; 16]")]
pub struct SubkeySet([u64; DES_ROUNDS]);

impl TryFrom<[u64; DES_ROUNDS]> for SubkeySet {
    type Error = KeyScheduleError;

    fn try_from(subkeys: [u64; DES_ROUNDS]) -> Result<Self> {
        if subkeys.iter().any(|&k| k & !SUBKEY_MASK != 0) {
            return Err(KeyScheduleError::MalformedSchedule(
                "DES subkey wider than 48 bits",
            ));
        }
        Ok(Self(subkeys))
    }
}

impl SubkeySet {
    /// Returns the subkey for a 1-based round (`1..=16`).
    #[inline]
    pub fn get(&self, round: usize) -> Option<u64> {
        round.checked_sub(1).and_then(|idx| self.0.get(idx).copied())
    }

    /// Subkeys in round order.
    pub fn iter(&self) -> core::slice::Iter<'_, u64> {
        self.0.iter()
    }

    /// Underlying array, index 0 holding round 1.
    pub fn as_array(&self) -> &[u64; DES_ROUNDS] {
        &self.0
    }

    /// Subkey `round` as six big-endian bytes.
    pub fn subkey_bytes(&self, round: usize) -> Option<[u8; 6]> {
        self.get(round).map(|subkey| {
            let wide = subkey.to_be_bytes();
            let mut out = [0u8; 6];
            out.copy_from_slice(&wide[2..]);
            out
        })
    }
}

impl Index<usize> for SubkeySet {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a SubkeySet {
    type Item = &'a u64;
    type IntoIter = core::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Derives the DES schedule from a raw 8-byte key.
pub fn des_key_schedule(key: &[u8]) -> Result<SubkeySet> {
    let key = DesKey::try_from(key)?;
    expand_des_key(&key)
}

/// Derives the 16 DES subkeys for `key`.
pub fn expand_des_key(key: &DesKey) -> Result<SubkeySet> {
    log::debug!("deriving DES key schedule");

    let permuted = permute(key.as_u64(), PC1_WIDTH, &PC1)?;
    let mut c = ((permuted >> 28) as u32) & MASK_28;
    let mut d = (permuted as u32) & MASK_28;

    let mut subkeys = [0u64; DES_ROUNDS];
    for (round, (&shift, subkey)) in KEY_SHIFTS.iter().zip(subkeys.iter_mut()).enumerate() {
        c = rotate_left_28(c, shift);
        d = rotate_left_28(d, shift);
        let cd = (u64::from(c) << 28) | u64::from(d);
        *subkey = permute(cd, PC2_WIDTH, &PC2)?;
        log::trace!("DES round {} rotated halves by {}", round + 1, shift);
    }

    Ok(SubkeySet(subkeys))
}
