//! Error type shared by every key schedule.

use thiserror::Error;

/// Result alias for key schedule operations.
pub type Result<T> = std::result::Result<T, KeyScheduleError>;

/// Failures reported by the key schedules.
#[derive(Error, Debug)]
pub enum KeyScheduleError {
    /// The key length is not one the algorithm accepts.
    #[error("invalid {algorithm} key length: got {actual} bytes, expected one of {expected:?}")]
    InvalidKeyLength {
        /// Algorithm the key was offered to.
        algorithm: &'static str,
        /// Accepted lengths in bytes.
        expected: &'static [usize],
        /// Length actually supplied.
        actual: usize,
    },

    /// A permutation table references a bit outside its source width.
    #[error("permutation table entry {position} exceeds source width of {width} bits")]
    InvalidTable {
        /// Offending 1-based bit position.
        position: u8,
        /// Declared width of the source integer.
        width: u32,
    },

    /// A permutation whose source or result does not fit in 64 bits.
    #[error("permutation of {len} entries over a {width}-bit source exceeds 64 bits")]
    PermutationTooWide {
        /// Declared width of the source integer.
        width: u32,
        /// Number of table entries, which is the result width.
        len: usize,
    },

    /// Schedule contents break the shape its algorithm requires.
    #[error("malformed schedule: {0}")]
    MalformedSchedule(&'static str),

    /// A serialized schedule could not be encoded or decoded.
    #[error("schedule serialization failed: {0}")]
    Serialization(#[from] bincode::Error),
}

impl KeyScheduleError {
    pub(crate) fn invalid_length(
        algorithm: &'static str,
        expected: &'static [usize],
        actual: usize,
    ) -> Self {
        Self::InvalidKeyLength {
            algorithm,
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_message_names_algorithm() {
        let err = KeyScheduleError::invalid_length("DES", &[8], 7);
        assert_eq!(
            err.to_string(),
            "invalid DES key length: got 7 bytes, expected one of [8]"
        );
    }
}
