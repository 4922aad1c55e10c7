//! Key types for DES, Triple-DES and AES.

use serde::{Deserialize, Serialize};

use crate::error::KeyScheduleError;

pub(crate) const DES_KEY_LENGTHS: &[usize] = &[8];
pub(crate) const TDES_KEY_LENGTHS: &[usize] = &[16, 24];
pub(crate) const AES_KEY_LENGTHS: &[usize] = &[16, 24, 32];

/// Single DES key of 64 bits, parity bits included.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesKey(pub [u8; 8]);

impl DesKey {
    /// Key as a 64-bit big-endian integer.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }
}

impl From<[u8; 8]> for DesKey {
    fn from(value: [u8; 8]) -> Self {
        Self(value)
    }
}

impl TryFrom<&[u8]> for DesKey {
    type Error = KeyScheduleError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 8]>::try_from(bytes)
            .map(Self)
            .map_err(|_| KeyScheduleError::invalid_length("DES", DES_KEY_LENGTHS, bytes.len()))
    }
}

/// Triple-DES keying option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Keying {
    /// 16-byte key, `K3 = K1`.
    TwoKey,
    /// 24-byte key with three independent DES keys.
    ThreeKey,
}

/// Triple-DES key in two-key or three-key form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TripleDesKey {
    /// `K1 || K2`; the third key reuses `K1`.
    TwoKey([u8; 16]),
    /// `K1 || K2 || K3`.
    ThreeKey([u8; 24]),
}

impl TripleDesKey {
    /// Keying option implied by the key length.
    pub fn keying(&self) -> Keying {
        match self {
            Self::TwoKey(_) => Keying::TwoKey,
            Self::ThreeKey(_) => Keying::ThreeKey,
        }
    }

    /// Splits the key into the DES keys used in encrypt-decrypt-encrypt order.
    pub fn split(&self) -> [DesKey; 3] {
        match self {
            Self::TwoKey(bytes) => {
                let k1 = des_key_at(bytes, 0);
                [k1, des_key_at(bytes, 1), k1]
            }
            Self::ThreeKey(bytes) => [
                des_key_at(bytes, 0),
                des_key_at(bytes, 1),
                des_key_at(bytes, 2),
            ],
        }
    }
}

fn des_key_at(bytes: &[u8], index: usize) -> DesKey {
    let mut key = [0u8; 8];
    key.copy_from_slice(&bytes[index * 8..(index + 1) * 8]);
    DesKey(key)
}

impl From<[u8; 16]> for TripleDesKey {
    fn from(value: [u8; 16]) -> Self {
        Self::TwoKey(value)
    }
}

impl From<[u8; 24]> for TripleDesKey {
    fn from(value: [u8; 24]) -> Self {
        Self::ThreeKey(value)
    }
}

impl TryFrom<&[u8]> for TripleDesKey {
    type Error = KeyScheduleError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if let Ok(two) = <[u8; 16]>::try_from(bytes) {
            return Ok(Self::TwoKey(two));
        }
        if let Ok(three) = <[u8; 24]>::try_from(bytes) {
            return Ok(Self::ThreeKey(three));
        }
        Err(KeyScheduleError::invalid_length(
            "Triple-DES",
            TDES_KEY_LENGTHS,
            bytes.len(),
        ))
    }
}

/// AES variant, determined solely by key length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AesKeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl AesKeySize {
    /// Maps a key length in bytes to its variant.
    pub fn from_key_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub fn rounds(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }
}

/// AES key of 128, 192 or 256 bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AesKey {
    /// AES-128 key.
    Aes128([u8; 16]),
    /// AES-192 key.
    Aes192([u8; 24]),
    /// AES-256 key.
    Aes256([u8; 32]),
}

impl AesKey {
    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Aes128(bytes) => bytes,
            Self::Aes192(bytes) => bytes,
            Self::Aes256(bytes) => bytes,
        }
    }

    /// Variant of this key.
    pub fn size(&self) -> AesKeySize {
        match self {
            Self::Aes128(_) => AesKeySize::Aes128,
            Self::Aes192(_) => AesKeySize::Aes192,
            Self::Aes256(_) => AesKeySize::Aes256,
        }
    }
}

impl From<[u8; 16]> for AesKey {
    fn from(value: [u8; 16]) -> Self {
        Self::Aes128(value)
    }
}

impl From<[u8; 24]> for AesKey {
    fn from(value: [u8; 24]) -> Self {
        Self::Aes192(value)
    }
}

impl From<[u8; 32]> for AesKey {
    fn from(value: [u8; 32]) -> Self {
        Self::Aes256(value)
    }
}

impl TryFrom<&[u8]> for AesKey {
    type Error = KeyScheduleError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let invalid = || KeyScheduleError::invalid_length("AES", AES_KEY_LENGTHS, bytes.len());
        let key = match AesKeySize::from_key_len(bytes.len()).ok_or_else(invalid)? {
            AesKeySize::Aes128 => <[u8; 16]>::try_from(bytes).map(Self::Aes128),
            AesKeySize::Aes192 => <[u8; 24]>::try_from(bytes).map(Self::Aes192),
            AesKeySize::Aes256 => <[u8; 32]>::try_from(bytes).map(Self::Aes256),
        };
        key.map_err(|_| invalid())
    }
}
