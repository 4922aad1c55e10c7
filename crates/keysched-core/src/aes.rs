//! AES-128/192/256 key expansion (FIPS-197 §5.2).

use serde::{Deserialize, Serialize};

use crate::error::{KeyScheduleError, Result};
use crate::key::{AesKey, AesKeySize};
use crate::sbox::sbox;
use crate::tables::RCON;

/// AES block / round key of 16 bytes.
pub type Block = [u8; 16];

const NB: usize = 4;

/// Rotates a word left by one byte: `[a0, a1, a2, a3] -> [a1, a2, a3, a0]`.
#[inline]
pub fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Applies the S-box to each byte of a word.
#[inline]
pub fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expanded round keys, round 0 first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoundKeys")]
pub struct RoundKeys {
    size: AesKeySize,
    keys: Vec<Block>,
}

/// Wire form of [`RoundKeys`], checked before it becomes one.
#[derive(Deserialize)]
struct RawRoundKeys {
    size: AesKeySize,
    keys: Vec<Block>,
}

impl TryFrom<RawRoundKeys> for RoundKeys {
    type Error = KeyScheduleError;

    fn try_from(raw: RawRoundKeys) -> Result<Self> {
        if raw.keys.len() != raw.size.rounds() + 1 {
            return Err(KeyScheduleError::MalformedSchedule(
                "AES round key count does not match key size",
            ));
        }
        Ok(Self {
            size: raw.size,
            keys: raw.keys,
        })
    }
}

impl RoundKeys {
    /// Returns the round key at the requested index (`0..=Nr`).
    #[inline]
    pub fn get(&self, round: usize) -> Option<&Block> {
        self.keys.get(round)
    }

    /// Key size the schedule was expanded from.
    pub fn size(&self) -> AesKeySize {
        self.size
    }

    /// Number of rounds (`Nr`); there are `Nr + 1` round keys.
    pub fn rounds(&self) -> usize {
        self.size.rounds()
    }

    /// Number of round keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no round keys are held; never true for an expanded key.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Round key 0, equal to the first 16 key bytes.
    pub fn first(&self) -> &Block {
        &self.keys[0]
    }

    /// Round key `Nr`, consumed by the final cipher round.
    pub fn last(&self) -> &Block {
        &self.keys[self.keys.len() - 1]
    }

    /// Round keys in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Block> {
        self.keys.iter()
    }

    /// Round keys as a slice.
    pub fn as_slice(&self) -> &[Block] {
        &self.keys
    }

    /// All round keys concatenated, round 0 first.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_slice().concat()
    }
}

impl<'a> IntoIterator for &'a RoundKeys {
    type Item = &'a Block;
    type IntoIter = core::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Expands a raw 16-, 24- or 32-byte AES key.
pub fn aes_key_expansion(key: &[u8]) -> Result<RoundKeys> {
    let key = AesKey::try_from(key)?;
    Ok(expand_aes_key(&key))
}

/// Expands `key` into `Nr + 1` round keys.
pub fn expand_aes_key(key: &AesKey) -> RoundKeys {
    let size = key.size();
    let nk = size.nk();
    let total_words = NB * (size.rounds() + 1);
    log::debug!(
        "expanding {:?} key into {} round keys",
        size,
        size.rounds() + 1
    );

    let mut w = Vec::with_capacity(total_words);
    w.extend(
        key.as_bytes()
            .chunks_exact(4)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])),
    );

    for i in nk..total_words {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / nk) - 1]) << 24);
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w.push(w[i - nk] ^ temp);
    }

    let keys = w
        .chunks_exact(NB)
        .map(|words| {
            let mut round_key = [0u8; 16];
            for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
                dst.copy_from_slice(&word.to_be_bytes());
            }
            round_key
        })
        .collect();

    RoundKeys { size, keys }
}
