//! Image record builder.

use crate::image::{ImageRecord, RecordError, Sha256Sum};

/// A builder to configure an [`ImageRecord`]
///
/// # Example
///
/// ```
/// use isomenu_core::image::builder::ImageRecordBuilder;
///
/// let record = ImageRecordBuilder::new()
///     .url("https://releases.ubuntu.com/noble/ubuntu-24.04-live-server-amd64.iso")
///     .label("Ubuntu Server 24.04")
///     .checksum("e240e4b801f7bb68c20d1356b60968ad0c33a41d00d828e74ceb3364a0317be9")
///     .size(2_754_981_888)
///     .build()
///     .expect("every field was set");
///
/// assert_eq!(record.label(), "Ubuntu Server 24.04");
/// ```
#[must_use = "Has no effect if the result is unused"]
#[derive(Default)]
pub struct ImageRecordBuilder {
    /// The fetch location, if known yet.
    url: Option<String>,

    /// The display name, if known yet.
    label: Option<String>,

    /// The unvalidated checksum, if known yet.
    checksum: Option<String>,

    /// The byte length, if known yet.
    size: Option<u64>,
}

impl ImageRecordBuilder {
    /// Constructs a new, empty [`ImageRecordBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fetch location of an [`ImageRecord`].
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the display name of an [`ImageRecord`].
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the checksum of an [`ImageRecord`].
    ///
    /// The checksum is only validated once [`Self::build`] is called.
    pub fn checksum(mut self, checksum: impl Into<String>) -> Self {
        self.checksum = Some(checksum.into());
        self
    }

    /// Sets the byte length of an [`ImageRecord`].
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Assigns a value to a field in an [`ImageRecord`] if it is [`Some`].
    pub fn assign_if_some<F, T>(self, value: Option<T>, assign: F) -> Self
    where
        F: FnOnce(Self, T) -> Self,
    {
        if let Some(value) = value {
            assign(self, value)
        } else {
            self
        }
    }

    /// Builds an [`ImageRecord`].
    ///
    /// # Errors
    ///
    /// May return an `Error` if any field was never set, the url or label is blank, or the checksum is not a
    /// SHA-256 digest.
    pub fn build(self) -> Result<ImageRecord, RecordError> {
        let url = self
            .url
            .filter(|x| !x.trim().is_empty())
            .ok_or(RecordError::Missing("url"))?;
        let label = self
            .label
            .filter(|x| !x.trim().is_empty())
            .ok_or(RecordError::Missing("label"))?;
        let checksum = self.checksum.ok_or(RecordError::Missing("checksum"))?;
        let size = self.size.ok_or(RecordError::Missing("size"))?;

        Ok(ImageRecord {
            url,
            label,
            checksum: Sha256Sum::new(&checksum)?,
            size,
        })
    }
}
