//! Key schedule derivation for DES, Triple-DES and AES.
//!
//! This crate mirrors FIPS 46-3 and FIPS-197 and provides:
//! - The DES key schedule (16 × 48-bit subkeys).
//! - Two-key and three-key Triple-DES schedules built from three DES schedules.
//! - AES-128/192/256 key expansion into `Nr + 1` round keys.
//!
//! Only the key schedules are implemented; the block cipher rounds that consume
//! them live elsewhere. Every derivation is a pure function of the key bytes and
//! the static tables in this crate. Nothing here is constant-time.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod aes;
mod bits;
mod des;
mod error;
mod key;
mod schedule;
mod sbox;
mod tables;
mod tdes;

pub use crate::aes::{aes_key_expansion, expand_aes_key, rot_word, sub_word, Block, RoundKeys};
pub use crate::bits::{permute, rotate_left_28, MASK_28};
pub use crate::des::{des_key_schedule, expand_des_key, SubkeySet, DES_ROUNDS, SUBKEY_MASK};
pub use crate::error::{KeyScheduleError, Result};
pub use crate::key::{AesKey, AesKeySize, DesKey, Keying, TripleDesKey};
pub use crate::schedule::{Algorithm, Schedule};
pub use crate::sbox::sbox;
pub use crate::tables::{KEY_SHIFTS, PC1, PC2, RCON};
pub use crate::tdes::{expand_triple_des_key, triple_des_key_schedule, TripleKeySet};
