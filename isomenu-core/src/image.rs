// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`ImageRecord`], the identifying data of one bootable install image.
//!
//! An [`ImageRecord`] can only be obtained through [`builder::ImageRecordBuilder`], which refuses to build a
//! record unless every field is populated. Once built, a record is immutable.

use core::ops::Deref;

use thiserror::Error;

use crate::system::helper::is_sha256_hex;

pub mod builder;

/// Errors that may happen while constructing an [`ImageRecord`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// A required field was absent or empty.
    #[error("Image record is missing its {0}")]
    Missing(&'static str),

    /// The checksum was not a hex encoded SHA-256 digest.
    #[error("\"{0}\" is not a valid SHA-256 checksum")]
    InvalidChecksum(String),
}

/// A newtype wrapper around a valid hex encoded SHA-256 digest.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sha256Sum(String);

impl Sha256Sum {
    /// Creates a new [`Sha256Sum`]. The digest is stored in lower case.
    ///
    /// # Errors
    ///
    /// May return an `Error` if the checksum is not exactly 64 hex characters.
    pub fn new(checksum: &str) -> Result<Self, RecordError> {
        if is_sha256_hex(checksum) {
            Ok(Self(checksum.to_ascii_lowercase()))
        } else {
            Err(RecordError::InvalidChecksum(checksum.to_owned()))
        }
    }
}

impl Deref for Sha256Sum {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One selectable install image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRecord {
    /// Where the image can be fetched from.
    url: String,

    /// The display name of the image, unique within a menu.
    label: String,

    /// The SHA-256 digest of the image.
    checksum: Sha256Sum,

    /// The length of the image in bytes.
    size: u64,
}

impl ImageRecord {
    /// The fetch location of the image.
    #[must_use = "Has no effect if the result is unused"]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The human readable name of the image.
    #[must_use = "Has no effect if the result is unused"]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The SHA-256 digest identifying the exact bytes of the image.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn checksum(&self) -> &Sha256Sum {
        &self.checksum
    }

    /// The byte length of the image.
    #[must_use = "Has no effect if the result is unused"]
    pub const fn size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_lowercased() -> Result<(), RecordError> {
        let sum = Sha256Sum::new(
            "E240E4B801F7BB68C20D1356B60968AD0C33A41D00D828E74CEB3364A0317BE9",
        )?;
        assert_eq!(
            &**sum,
            "e240e4b801f7bb68c20d1356b60968ad0c33a41d00d828e74ceb3364a0317be9"
        );
        Ok(())
    }

    #[test]
    fn test_checksum_invalid() {
        assert_eq!(
            Sha256Sum::new("deadbeef"),
            Err(RecordError::InvalidChecksum("deadbeef".to_owned()))
        );
    }
}
