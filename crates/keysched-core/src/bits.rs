//! Bit-level primitives shared by the DES key schedule.

use crate::error::{KeyScheduleError, Result};

/// Mask selecting the low 28 bits of a word.
pub const MASK_28: u32 = 0x0fff_ffff;

/// Gathers bits of `source` in the order named by `table`.
///
/// Table entries are 1-based positions counted from the most significant bit
/// of a `width_bits`-wide integer. The first entry becomes the most significant
/// bit of the result, which is `table.len()` bits wide.
pub fn permute(source: u64, width_bits: u32, table: &[u8]) -> Result<u64> {
    if width_bits > 64 || table.len() > 64 {
        return Err(KeyScheduleError::PermutationTooWide {
            width: width_bits,
            len: table.len(),
        });
    }
    let mut result = 0u64;
    for &pos in table {
        if pos == 0 || u32::from(pos) > width_bits {
            return Err(KeyScheduleError::InvalidTable {
                position: pos,
                width: width_bits,
            });
        }
        let bit = (source >> (width_bits - u32::from(pos))) & 1;
        result = (result << 1) | bit;
    }
    Ok(result)
}

/// Rotates a 28-bit half-key left by `shift` positions.
#[inline]
pub fn rotate_left_28(value: u32, shift: u32) -> u32 {
    debug_assert!(value <= MASK_28, "value exceeds 28 bits: {value:#x}");
    debug_assert!((1..=2).contains(&shift), "DES rotations are 1 or 2 bits");
    ((value << shift) | (value >> (28 - shift))) & MASK_28
}

/// Compile-time check that every entry of `table` addresses a bit of a
/// `width_bits`-wide source.
pub(crate) const fn table_fits(table: &[u8], width_bits: u32) -> bool {
    let mut i = 0;
    while i < table.len() {
        let pos = table[i] as u32;
        if pos == 0 || pos > width_bits {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_table_preserves_value() {
        let table: Vec<u8> = (1..=8).collect();
        assert_eq!(permute(0b1011_0010, 8, &table).unwrap(), 0b1011_0010);
    }

    #[test]
    fn reversed_table_mirrors_bits() {
        let table: Vec<u8> = (1..=8).rev().collect();
        assert_eq!(permute(0b1000_0001, 8, &table).unwrap(), 0b1000_0001);
        assert_eq!(permute(0b1100_0000, 8, &table).unwrap(), 0b0000_0011);
    }

    #[test]
    fn position_one_is_most_significant() {
        assert_eq!(permute(1 << 63, 64, &[1]).unwrap(), 1);
        assert_eq!(permute(1, 64, &[64]).unwrap(), 1);
        assert_eq!(permute(1, 64, &[1]).unwrap(), 0);
    }

    #[test]
    fn result_width_follows_table_length() {
        // Selecting four set bits yields a 4-bit all-ones value.
        assert_eq!(permute(u64::MAX, 64, &[3, 9, 27, 64]).unwrap(), 0b1111);
    }

    #[test]
    fn out_of_range_entry_is_rejected() {
        let err = permute(0, 56, &[14, 57]).unwrap_err();
        assert!(matches!(
            err,
            KeyScheduleError::InvalidTable {
                position: 57,
                width: 56
            }
        ));
        assert!(matches!(
            permute(0, 8, &[0]),
            Err(KeyScheduleError::InvalidTable { position: 0, .. })
        ));
    }

    #[test]
    fn widths_beyond_64_bits_are_rejected() {
        assert!(matches!(
            permute(0, 65, &[1]),
            Err(KeyScheduleError::PermutationTooWide { width: 65, len: 1 })
        ));
        let long = [1u8; 65];
        assert!(matches!(
            permute(u64::MAX, 64, &long),
            Err(KeyScheduleError::PermutationTooWide { width: 64, len: 65 })
        ));
        assert_eq!(permute(u64::MAX, 64, &long[..64]).unwrap(), u64::MAX);
    }

    #[test]
    fn rotate_wraps_high_bits() {
        assert_eq!(rotate_left_28(0x800_0000, 1), 0x000_0001);
        assert_eq!(rotate_left_28(0xc00_0000, 2), 0x000_0003);
        assert_eq!(rotate_left_28(0x000_0001, 2), 0x000_0004);
        assert_eq!(rotate_left_28(MASK_28, 1), MASK_28);
    }

    #[test]
    fn twenty_eight_single_rotations_are_identity() {
        let start = 0x0f0_c3a5;
        let mut value = start;
        for _ in 0..28 {
            value = rotate_left_28(value, 1);
        }
        assert_eq!(value, start);
    }

    #[test]
    fn table_fits_detects_bad_entries() {
        assert!(table_fits(&[1, 2, 64], 64));
        assert!(!table_fits(&[1, 65], 64));
        assert!(!table_fits(&[0], 64));
    }
}
