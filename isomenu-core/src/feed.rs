// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! A reader for `SimpleStreams` image feeds, reducing a feed to its newest ISO for one architecture.
//!
//! Example feed (trimmed):
//!
//! ```text
//! {
//!   "format": "products:1.0",
//!   "products": {
//!     "com.ubuntu.releases:server:24.04:amd64": {
//!       "arch": "amd64",
//!       "os": "ubuntu-server",
//!       "version": "24.04",
//!       "release_codename": "Noble Numbat",
//!       "versions": {
//!         "20240423": {
//!           "items": {
//!             "iso": {
//!               "ftype": "iso",
//!               "path": "noble/ubuntu-24.04-live-server-amd64.iso",
//!               "sha256": "8762f7e74e4d64d72fceb5f70682e6b069932deedb4949c6975d0f0fe0a91be3",
//!               "size": 2754981888
//!             }
//!           }
//!         }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Every `iso` item of every version of every product with a matching `arch` is a candidate. The candidate with
//! the greatest [`Serial`] wins. When serials compare equal, the candidate that comes later in the document
//! wins, as feeds are generated oldest first.

use log::debug;
use thiserror::Error;

use crate::{
    feed::{
        serial::Serial,
        stream::{Item, Product, Stream},
    },
    image::{ImageRecord, RecordError, builder::ImageRecordBuilder},
    system::helper::{join_url, title_case},
};

pub mod serial;

mod stream;

/// The mirror that relative item paths are resolved against by default.
pub const DEFAULT_MIRROR: &str = "https://releases.ubuntu.com";

/// The item file type of installable images.
const ISO_FTYPE: &str = "iso";

/// The prefix of every supported document format tag.
const PRODUCTS_FORMAT: &str = "products:";

/// An `Error` that may result from reading a feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The document is not valid JSON, or does not have the shape of a product stream.
    #[error("Feed could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The document is some other kind of stream, such as an index.
    #[error("Feed has unsupported format \"{0}\"")]
    UnsupportedFormat(String),

    /// No ISO in the feed is built for the requested architecture.
    #[error("Feed has no ISO images for architecture \"{0}\"")]
    NoMatch(String),

    /// The newest ISO in the feed lacks some of the fields needed to describe it.
    #[error("Newest image in \"{product}\" (version {serial}) is unusable: {source}")]
    IncompleteRecord {
        /// The product id of the newest image.
        product: String,

        /// The version serial of the newest image.
        serial: String,

        /// The reason the record could not be built.
        source: RecordError,
    },
}

/// One ISO item, together with where in the feed it was found.
#[derive(Clone, Copy)]
struct Candidate<'a> {
    /// The id of the product containing the item.
    product_id: &'a str,

    /// The product containing the item.
    product: &'a Product,

    /// The serial of the version containing the item.
    serial: Serial<'a>,

    /// The ISO item itself.
    item: &'a Item,
}

impl Candidate<'_> {
    /// Builds the display name of the candidate, like `Ubuntu Server 22.10 (Kinetic Kudu)`.
    ///
    /// Returns [`None`] if the product does not say which os or release it is.
    fn label(&self) -> Option<String> {
        let os = title_case(self.product.os.as_deref()?);
        if os.is_empty() {
            return None;
        }

        let release = non_empty(self.product.release_title.as_deref())
            .or_else(|| non_empty(self.product.version.as_deref()))?;

        let mut label = format!("{os} {release}");
        if let Some(codename) = non_empty(self.product.release_codename.as_deref()) {
            label.push_str(" (");
            label.push_str(codename);
            label.push(')');
        }
        Some(label)
    }

    /// Converts the candidate into an [`ImageRecord`].
    ///
    /// # Errors
    ///
    /// May return an `Error` if the item or its product is missing a required field.
    fn into_record(self, mirror: &str) -> Result<ImageRecord, FeedError> {
        ImageRecordBuilder::new()
            .assign_if_some(
                self.item.path.as_deref().map(|path| join_url(mirror, path)),
                ImageRecordBuilder::url,
            )
            .assign_if_some(self.label(), ImageRecordBuilder::label)
            .assign_if_some(self.item.sha256.as_deref(), ImageRecordBuilder::checksum)
            .assign_if_some(self.item.size, ImageRecordBuilder::size)
            .build()
            .map_err(|source| FeedError::IncompleteRecord {
                product: self.product_id.to_owned(),
                serial: self.serial.0.to_owned(),
                source,
            })
    }
}

/// Selects the newest ISO for an architecture from a raw feed document.
///
/// Relative item paths are turned into URLs by joining them onto `mirror`.
///
/// # Errors
///
/// May return an `Error` if the feed could not be parsed, has no ISO for `arch`, or the newest ISO is missing
/// its path, checksum, size, or naming fields.
pub fn select_newest(feed_data: &[u8], arch: &str, mirror: &str) -> Result<ImageRecord, FeedError> {
    let stream: Stream = serde_json::from_slice(feed_data)?;

    if let Some(format) = &stream.format
        && !format.starts_with(PRODUCTS_FORMAT)
    {
        return Err(FeedError::UnsupportedFormat(format.clone()));
    }

    let newest = candidates(&stream, arch)
        .reduce(|newest, candidate| {
            // later entries win ties
            if newest.serial > candidate.serial {
                newest
            } else {
                candidate
            }
        })
        .ok_or_else(|| FeedError::NoMatch(arch.to_owned()))?;

    debug!(
        "[FEED]: newest {arch} image is {} version {}",
        newest.product_id, newest.serial.0
    );

    newest.into_record(mirror)
}

/// Iterates over every ISO item for `arch`, in document order.
fn candidates<'a>(stream: &'a Stream, arch: &'a str) -> impl Iterator<Item = Candidate<'a>> {
    stream
        .products
        .iter()
        .filter(move |(_, product)| {
            product
                .arch
                .as_deref()
                .is_some_and(|x| x.eq_ignore_ascii_case(arch))
        })
        .flat_map(|(product_id, product)| {
            product.versions.iter().flat_map(move |(serial, version)| {
                version
                    .items
                    .iter()
                    .filter(|(_, item)| item.ftype.as_deref() == Some(ISO_FTYPE))
                    .map(move |(_, item)| Candidate {
                        product_id,
                        product,
                        serial: Serial(serial),
                        item,
                    })
            })
        })
}

/// Treats blank strings the same as missing ones.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|x| !x.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const MIRROR: &str = "https://releases.ubuntu.com/";

    const SUM_A: &str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    const SUM_B: &str = "bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

    /// Formats one version entry holding a single ISO.
    fn version(serial: &str, path: &str, sum: &str, size: u64) -> String {
        format!(
            r#""{serial}": {{"items": {{"iso": {{"ftype": "iso", "path": "{path}", "sha256": "{sum}", "size": {size}}}}}}}"#
        )
    }

    /// Formats one product entry from already formatted versions.
    fn product(id: &str, arch: &str, versions: &[String]) -> String {
        format!(
            r#""{id}": {{"arch": "{arch}", "os": "ubuntu-server", "version": "24.04", "versions": {{{}}}}}"#,
            versions.join(",")
        )
    }

    /// Formats a full feed from already formatted products.
    fn feed(products: &[String]) -> String {
        format!(
            r#"{{"format": "products:1.0", "products": {{{}}}}}"#,
            products.join(",")
        )
    }

    #[test]
    fn test_newest_version() -> Result<(), FeedError> {
        let data = feed(&[product(
            "server:amd64",
            "amd64",
            &[
                version("20240101", "old.iso", SUM_A, 1),
                version("20240201", "new.iso", SUM_B, 2),
            ],
        )]);
        let record = select_newest(data.as_bytes(), "amd64", MIRROR)?;
        assert_eq!(record.url(), "https://releases.ubuntu.com/new.iso");
        assert_eq!(record.label(), "Ubuntu Server 24.04");
        assert_eq!(&**record.checksum(), SUM_B);
        assert_eq!(record.size(), 2);
        Ok(())
    }

    #[test]
    fn test_newest_not_by_position() -> Result<(), FeedError> {
        let data = feed(&[product(
            "server:amd64",
            "amd64",
            &[
                version("20240201", "new.iso", SUM_B, 2),
                version("20240101", "old.iso", SUM_A, 1),
            ],
        )]);
        let record = select_newest(data.as_bytes(), "amd64", MIRROR)?;
        assert_eq!(record.url(), "https://releases.ubuntu.com/new.iso");
        Ok(())
    }

    #[test]
    fn test_newest_across_products() -> Result<(), FeedError> {
        let data = feed(&[
            product("a", "amd64", &[version("20240301", "a.iso", SUM_A, 1)]),
            product("b", "amd64", &[version("20240101", "b.iso", SUM_B, 2)]),
        ]);
        let record = select_newest(data.as_bytes(), "amd64", MIRROR)?;
        assert_eq!(record.url(), "https://releases.ubuntu.com/a.iso");
        Ok(())
    }

    #[test]
    fn test_tie_goes_to_later_entry() -> Result<(), FeedError> {
        let data = feed(&[
            product("a", "amd64", &[version("20240201", "first.iso", SUM_A, 1)]),
            product("b", "amd64", &[version("20240201", "second.iso", SUM_B, 2)]),
        ]);
        let record = select_newest(data.as_bytes(), "amd64", MIRROR)?;
        assert_eq!(record.url(), "https://releases.ubuntu.com/second.iso");
        Ok(())
    }

    #[test]
    fn test_other_architectures_ignored() -> Result<(), FeedError> {
        let data = feed(&[
            product("a", "amd64", &[version("20240101", "amd64.iso", SUM_A, 1)]),
            product("b", "arm64", &[version("20250101", "arm64.iso", SUM_B, 2)]),
        ]);
        let record = select_newest(data.as_bytes(), "AMD64", MIRROR)?;
        assert_eq!(record.url(), "https://releases.ubuntu.com/amd64.iso");
        Ok(())
    }

    #[test]
    fn test_no_match() {
        let data = feed(&[product(
            "a",
            "arm64",
            &[version("20240101", "a.iso", SUM_A, 1)],
        )]);
        assert!(matches!(
            select_newest(data.as_bytes(), "amd64", MIRROR),
            Err(FeedError::NoMatch(arch)) if arch == "amd64"
        ));
        assert!(matches!(
            select_newest(feed(&[]).as_bytes(), "amd64", MIRROR),
            Err(FeedError::NoMatch(_))
        ));
    }

    #[test]
    fn test_non_iso_items_ignored() {
        let data = r#"{"products": {"a": {"arch": "amd64", "os": "ubuntu", "version": "24.04", "versions": {
            "20240101": {"items": {"manifest": {"ftype": "manifest", "path": "a.manifest", "size": 1}}}
        }}}}"#;
        assert!(matches!(
            select_newest(data.as_bytes(), "amd64", MIRROR),
            Err(FeedError::NoMatch(_))
        ));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            select_newest(b"{\"products\": ", "amd64", MIRROR),
            Err(FeedError::Parse(_))
        ));
        assert!(matches!(
            select_newest(b"[1, 2, 3]", "amd64", MIRROR),
            Err(FeedError::Parse(_))
        ));
    }

    #[test]
    fn test_unsupported_format() {
        let data = r#"{"format": "index:1.0", "index": {}}"#;
        assert!(matches!(
            select_newest(data.as_bytes(), "amd64", MIRROR),
            Err(FeedError::UnsupportedFormat(format)) if format == "index:1.0"
        ));
    }

    #[test]
    fn test_incomplete_newest() {
        let data = r#"{"products": {"a": {"arch": "amd64", "os": "ubuntu", "version": "24.04", "versions": {
            "20240101": {"items": {"iso": {"ftype": "iso", "path": "a.iso", "size": 1}}}
        }}}}"#;
        match select_newest(data.as_bytes(), "amd64", MIRROR) {
            Err(FeedError::IncompleteRecord {
                product,
                serial,
                source,
            }) => {
                assert_eq!(product, "a");
                assert_eq!(serial, "20240101");
                assert_eq!(source, RecordError::Missing("checksum"));
            }
            other => panic!("expected an incomplete record, got {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_older_ignored() -> Result<(), FeedError> {
        let data = format!(
            r#"{{"products": {{"a": {{"arch": "amd64", "os": "ubuntu", "version": "24.04", "versions": {{
                "20240101": {{"items": {{"iso": {{"ftype": "iso", "size": 1}}}}}},
                {}
            }}}}}}}}"#,
            version("20240201", "a.iso", SUM_A, 1)
        );
        let record = select_newest(data.as_bytes(), "amd64", MIRROR)?;
        assert_eq!(record.label(), "Ubuntu 24.04");
        Ok(())
    }

    #[test]
    fn test_label_and_absolute_path() -> Result<(), FeedError> {
        let data = format!(
            r#"{{"products": {{"a": {{"arch": "amd64", "os": "ubuntu-server", "version": "22.10",
                "release_title": "22.10", "release_codename": "Kinetic Kudu", "versions": {{{}}}}}}}}}"#,
            version(
                "20221020",
                "https://cdimage.ubuntu.com/kinetic/ubuntu-22.10-live-server-amd64.iso",
                SUM_A,
                1_642_631_168
            )
        );
        let record = select_newest(data.as_bytes(), "amd64", MIRROR)?;
        assert_eq!(record.label(), "Ubuntu Server 22.10 (Kinetic Kudu)");
        assert_eq!(
            record.url(),
            "https://cdimage.ubuntu.com/kinetic/ubuntu-22.10-live-server-amd64.iso"
        );
        Ok(())
    }

    #[test]
    fn test_missing_label() {
        let data = format!(
            r#"{{"products": {{"a": {{"arch": "amd64", "versions": {{{}}}}}}}}}"#,
            version("20240101", "a.iso", SUM_A, 1)
        );
        assert!(matches!(
            select_newest(data.as_bytes(), "amd64", MIRROR),
            Err(FeedError::IncompleteRecord {
                source: RecordError::Missing("label"),
                ..
            })
        ));
    }

    proptest! {
        #[test]
        fn doesnt_panic(x in any::<Vec<u8>>()) {
            let _ = select_newest(&x, "amd64", MIRROR);
        }

        #[test]
        fn picks_last_maximum(serials in prop::collection::vec(0u32..8, 1..12)) {
            let mut products = Vec::new();
            for (i, serial) in serials.iter().enumerate() {
                let path = format!("{i}.iso");
                products.push(product(&format!("p{i}"), "amd64", &[version(&serial.to_string(), &path, SUM_A, 1)]));
            }
            let data = feed(&products);

            let max = serials.iter().max().copied().unwrap_or_default();
            let expected = serials.iter().rposition(|x| *x == max).unwrap_or_default();

            let record = select_newest(data.as_bytes(), "amd64", MIRROR);
            prop_assert!(record.is_ok());
            if let Ok(record) = record {
                prop_assert_eq!(record.url(), format!("https://releases.ubuntu.com/{expected}.iso"));
            }
        }
    }
}
