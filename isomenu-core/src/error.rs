// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`MenuError`], which encapsulates other errors

use thiserror::Error;

/// An `Error` resulting from the library.
#[derive(Error, Debug)]
pub enum MenuError {
    /// A feed could not be reduced to a single image.
    #[error("Feed Error: {0}")]
    Feed(#[from] crate::feed::FeedError),

    /// The set of choices could not be built.
    #[error("Choice Error: {0}")]
    Choice(#[from] crate::choices::ChoiceError),

    /// The chosen image could not be written out.
    #[error("Write Error: {0}")]
    Emit(#[from] crate::emit::EmitError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{feed::select_newest, image::RecordError};

    #[test]
    fn test_record_errors_arrive_through_feed() {
        let feed = br#"{"products": {"p": {"arch": "amd64", "os": "ubuntu", "version": "24.04", "versions": {
            "1": {"items": {"iso": {"ftype": "iso", "path": "a.iso", "sha256": "nothex", "size": 1}}}
        }}}}"#;
        let err = MenuError::from(
            select_newest(feed, "amd64", "https://mirror").expect_err("checksum is invalid"),
        );
        assert!(matches!(
            err,
            MenuError::Feed(crate::feed::FeedError::IncompleteRecord {
                source: RecordError::InvalidChecksum(_),
                ..
            })
        ));
    }
}
