//! Triple-DES key schedule: three independent DES schedules in E-D-E order.

use serde::{Deserialize, Serialize};

use crate::des::{expand_des_key, SubkeySet};
use crate::error::{KeyScheduleError, Result};
use crate::key::{Keying, TripleDesKey};

/// DES schedules for `K1`, `K2` and `K3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTripleKeySet")]
pub struct TripleKeySet {
    k1: SubkeySet,
    k2: SubkeySet,
    k3: SubkeySet,
    keying: Keying,
}

#[derive(Clone, Copy, Deserialize)]
struct RawTripleKeySet {
    k1: SubkeySet,
    k2: SubkeySet,
    k3: SubkeySet,
    keying: Keying,
}

impl TryFrom<RawTripleKeySet> for TripleKeySet {
    type Error = KeyScheduleError;

    fn try_from(raw: RawTripleKeySet) -> Result<Self> {
        // Two-key mode derives K3 from the K1 bytes.
        if raw.keying == Keying::TwoKey && raw.k1 != raw.k3 {
            return Err(KeyScheduleError::MalformedSchedule(
                "two-key Triple-DES schedule with K3 != K1",
            ));
        }
        Ok(Self {
            k1: raw.k1,
            k2: raw.k2,
            k3: raw.k3,
            keying: raw.keying,
        })
    }
}

impl TripleKeySet {
    /// Schedule for the first (encrypting) stage.
    pub fn k1(&self) -> &SubkeySet {
        &self.k1
    }

    /// Schedule for the second (decrypting) stage.
    pub fn k2(&self) -> &SubkeySet {
        &self.k2
    }

    /// Schedule for the third (encrypting) stage.
    pub fn k3(&self) -> &SubkeySet {
        &self.k3
    }

    /// Keying option the schedules were derived with.
    pub fn keying(&self) -> Keying {
        self.keying
    }

    /// Borrows the three schedules in stage order.
    pub fn as_array(&self) -> [&SubkeySet; 3] {
        [&self.k1, &self.k2, &self.k3]
    }

    /// Consumes the set, returning the schedules in stage order.
    pub fn into_array(self) -> [SubkeySet; 3] {
        [self.k1, self.k2, self.k3]
    }
}

/// Derives the Triple-DES schedules from a raw 16- or 24-byte key.
pub fn triple_des_key_schedule(key: &[u8]) -> Result<TripleKeySet> {
    let key = TripleDesKey::try_from(key)?;
    expand_triple_des_key(&key)
}

/// Derives one DES schedule per stage of `key`.
pub fn expand_triple_des_key(key: &TripleDesKey) -> Result<TripleKeySet> {
    log::debug!("deriving Triple-DES key schedule ({:?})", key.keying());
    let [k1, k2, k3] = key.split();
    Ok(TripleKeySet {
        k1: expand_des_key(&k1)?,
        k2: expand_des_key(&k2)?,
        k3: expand_des_key(&k3)?,
        keying: key.keying(),
    })
}
