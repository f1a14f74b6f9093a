// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Provides [`ChoiceSet`], the images offered to the operator, one per input feed.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    feed::{FeedError, select_newest},
    image::ImageRecord,
};

/// An `Error` that may result from building a [`ChoiceSet`].
#[derive(Error, Debug)]
pub enum ChoiceError {
    /// There were no feeds to build the set from.
    #[error("No input feeds were given")]
    Empty,

    /// A feed file could not be read.
    #[error("Could not read feed \"{}\": {source}", path.display())]
    Read {
        /// The path of the feed.
        path: PathBuf,

        /// The underlying error.
        source: std::io::Error,
    },

    /// A feed could not be reduced to an image.
    #[error("Feed #{index}: {source}")]
    Feed {
        /// The zero based position of the feed in the input.
        index: usize,

        /// The underlying error.
        source: FeedError,
    },
}

/// The ordered, non-empty list of images to choose from.
///
/// The `n`th record always came from the `n`th input feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceSet {
    /// One record per input feed, in input order.
    records: Vec<ImageRecord>,
}

impl ChoiceSet {
    /// Builds a [`ChoiceSet`] from raw feed documents, each paired with the architecture to query it for.
    ///
    /// Each feed is reduced with [`select_newest`], in order. The first feed that fails aborts the build.
    ///
    /// # Errors
    ///
    /// May return an `Error` if there are no feeds, or any feed could not be reduced to a single image.
    pub fn build<I, D>(feeds: I, mirror: &str) -> Result<Self, ChoiceError>
    where
        I: IntoIterator<Item = (D, String)>,
        D: AsRef<[u8]>,
    {
        let records = feeds
            .into_iter()
            .enumerate()
            .map(|(index, (data, arch))| {
                select_newest(data.as_ref(), &arch, mirror)
                    .map_err(|source| ChoiceError::Feed { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if records.is_empty() {
            return Err(ChoiceError::Empty);
        }

        for (i, record) in records.iter().enumerate() {
            debug!("[CHOICES]: offering {} ({})", record.label(), record.url());
            if records[..i].iter().any(|x| x.label() == record.label()) {
                warn!("[CHOICES]: more than one choice is labelled {}", record.label());
            }
        }

        Ok(Self { records })
    }

    /// Reads every feed file in `paths` and builds a [`ChoiceSet`] from them, querying each for `arch`.
    ///
    /// # Errors
    ///
    /// May return an `Error` if a file could not be read, or [`Self::build`] fails.
    pub fn load<P: AsRef<Path>>(paths: &[P], arch: &str, mirror: &str) -> Result<Self, ChoiceError> {
        let feeds = paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                info!("[CHOICES]: reading feed {}", path.display());
                fs::read(path)
                    .map(|data| (data, arch.to_owned()))
                    .map_err(|source| ChoiceError::Read {
                        path: path.to_path_buf(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::build(feeds, mirror)
    }

    /// Returns the records in input order.
    #[must_use = "Has no effect if the result is unused"]
    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    /// Returns the number of records. This is never zero.
    #[must_use = "Has no effect if the result is unused"]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always returns false, as a [`ChoiceSet`] cannot be built empty.
    #[must_use = "Has no effect if the result is unused"]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if there is one.
    #[must_use = "Has no effect if the result is unused"]
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.records.get(index)
    }
}
