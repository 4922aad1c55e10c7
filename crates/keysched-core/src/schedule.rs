//! Algorithm-tagged schedule container and its serialized form.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::aes::{aes_key_expansion, RoundKeys};
use crate::des::{des_key_schedule, SubkeySet};
use crate::error::Result;
use crate::tdes::{triple_des_key_schedule, TripleKeySet};

/// Block cipher whose key schedule is requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Single DES.
    Des,
    /// Two- or three-key Triple-DES.
    TripleDes,
    /// AES-128, AES-192 or AES-256, chosen by key length.
    Aes,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Des => "DES",
            Self::TripleDes => "Triple-DES",
            Self::Aes => "AES",
        };
        f.write_str(name)
    }
}

/// A derived key schedule for any of the supported algorithms.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    /// DES subkeys.
    Des(SubkeySet),
    /// Triple-DES subkeys per stage.
    TripleDes(TripleKeySet),
    /// AES round keys.
    Aes(RoundKeys),
}

impl Schedule {
    /// Derives the schedule of `algorithm` from raw key bytes.
    pub fn derive(algorithm: Algorithm, key: &[u8]) -> Result<Self> {
        match algorithm {
            Algorithm::Des => des_key_schedule(key).map(Self::Des),
            Algorithm::TripleDes => triple_des_key_schedule(key).map(Self::TripleDes),
            Algorithm::Aes => aes_key_expansion(key).map(Self::Aes),
        }
    }

    /// Algorithm this schedule belongs to.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Des(_) => Algorithm::Des,
            Self::TripleDes(_) => Algorithm::TripleDes,
            Self::Aes(_) => Algorithm::Aes,
        }
    }

    /// Serializes the schedule with `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Deserializes a schedule with `bincode`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeyScheduleError;

    #[test]
    fn serialize_roundtrip() {
        let key = [0x2bu8; 24];
        let schedule = Schedule::derive(Algorithm::Aes, &key).expect("derive");
        let bytes = schedule.to_bytes().expect("serialize");
        let decoded = Schedule::from_bytes(&bytes).expect("deserialize");
        assert_eq!(decoded, schedule);
        match decoded {
            Schedule::Aes(rks) => assert_eq!(rks.len(), 13),
            other => panic!("unexpected schedule {:?}", other.algorithm()),
        }
    }

    #[test]
    fn derive_dispatches_on_algorithm() {
        let key = [0x01u8; 16];
        assert_eq!(
            Schedule::derive(Algorithm::TripleDes, &key).unwrap().algorithm(),
            Algorithm::TripleDes
        );
        assert_eq!(
            Schedule::derive(Algorithm::Aes, &key).unwrap().algorithm(),
            Algorithm::Aes
        );
        assert!(Schedule::derive(Algorithm::Des, &key).is_err());
    }

    #[test]
    fn truncated_bytes_fail_to_decode() {
        let schedule = Schedule::derive(Algorithm::Des, &[0x10u8; 8]).unwrap();
        let bytes = schedule.to_bytes().unwrap();
        let err = Schedule::from_bytes(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, KeyScheduleError::Serialization(_)));
    }

    // bincode lays out `Schedule::Aes(RoundKeys { size, keys })` as
    // (variant u32, size variant u32, Vec<[u8; 16]>).
    fn aes_wire(size_variant: u32, blocks: usize) -> Vec<u8> {
        bincode::serialize(&(2u32, size_variant, vec![[0u8; 16]; blocks])).unwrap()
    }

    #[test]
    fn hand_encoded_aes_layout_decodes() {
        let decoded = Schedule::from_bytes(&aes_wire(0, 11)).expect("well-formed AES-128");
        match decoded {
            Schedule::Aes(rks) => assert_eq!(rks.len(), 11),
            other => panic!("unexpected schedule {:?}", other.algorithm()),
        }
    }

    #[test]
    fn aes_round_key_count_is_checked_on_decode() {
        for (size_variant, blocks) in [(0u32, 0usize), (0, 10), (1, 11), (2, 16)] {
            let err = Schedule::from_bytes(&aes_wire(size_variant, blocks)).unwrap_err();
            assert!(matches!(err, KeyScheduleError::Serialization(_)));
            assert!(err.to_string().contains("round key count"), "{err}");
        }
    }

    #[test]
    fn wide_des_subkey_is_rejected_on_decode() {
        let mut subkeys = [0u64; 16];
        assert!(Schedule::from_bytes(&bincode::serialize(&(0u32, subkeys)).unwrap()).is_ok());
        subkeys[0] = u64::MAX;
        let err = Schedule::from_bytes(&bincode::serialize(&(0u32, subkeys)).unwrap()).unwrap_err();
        assert!(err.to_string().contains("wider than 48 bits"), "{err}");
    }

    #[test]
    fn two_key_set_with_distinct_k3_is_rejected_on_decode() {
        let k1 = [1u64; 16];
        let k3 = [3u64; 16];
        let ok = bincode::serialize(&(1u32, k1, [2u64; 16], k1, 0u32)).unwrap();
        assert!(Schedule::from_bytes(&ok).is_ok());
        let bad = bincode::serialize(&(1u32, k1, [2u64; 16], k3, 0u32)).unwrap();
        let err = Schedule::from_bytes(&bad).unwrap_err();
        assert!(err.to_string().contains("K3 != K1"), "{err}");
    }

    #[test]
    fn algorithm_names() {
        assert_eq!(Algorithm::Des.to_string(), "DES");
        assert_eq!(Algorithm::TripleDes.to_string(), "Triple-DES");
        assert_eq!(Algorithm::Aes.to_string(), "AES");
    }
}
