//! Static tables from FIPS 46-3 (DES) and FIPS-197 (AES).

use crate::bits::table_fits;

/// Permuted Choice 1: selects 56 of the 64 key bits, dropping parity bits.
pub const PC1: [u8; 56] = [
    57, 49, 41, 33, 25, 17, 9, //
    1, 58, 50, 42, 34, 26, 18, //
    10, 2, 59, 51, 43, 35, 27, //
    19, 11, 3, 60, 52, 44, 36, //
    63, 55, 47, 39, 31, 23, 15, //
    7, 62, 54, 46, 38, 30, 22, //
    14, 6, 61, 53, 45, 37, 29, //
    21, 13, 5, 28, 20, 12, 4,
];

/// Permuted Choice 2: selects the 48 subkey bits from the rotated 56-bit `C || D`.
pub const PC2: [u8; 48] = [
    14, 17, 11, 24, 1, 5, //
    3, 28, 15, 6, 21, 10, //
    23, 19, 12, 4, 26, 8, //
    16, 7, 27, 20, 13, 2, //
    41, 52, 31, 37, 47, 55, //
    30, 40, 51, 45, 33, 48, //
    44, 49, 39, 56, 34, 53, //
    46, 42, 50, 36, 29, 32,
];

/// Left rotation applied to both 28-bit halves before each of the 16 rounds.
pub const KEY_SHIFTS: [u32; 16] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

/// AES round constants, placed in the most significant byte of the word.
pub const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

pub(crate) const PC1_WIDTH: u32 = 64;
pub(crate) const PC2_WIDTH: u32 = 56;

const _: () = assert!(table_fits(&PC1, PC1_WIDTH));
const _: () = assert!(table_fits(&PC2, PC2_WIDTH));
