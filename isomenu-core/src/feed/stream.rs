//! The parts of a `SimpleStreams` product document that the feed reader looks at.
//!
//! Every object keyed by an identifier is read into [`Entries`] instead of a map, so that the order the entries
//! appear in the document survives parsing. Fields that are not listed here are ignored.

use core::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer,
    de::{MapAccess, Visitor},
};

/// A JSON object whose entries are kept in document order.
#[derive(Debug)]
pub(crate) struct Entries<T>(Vec<(String, T)>);

impl<T> Entries<T> {
    /// Iterates over the keys and values in document order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Collects the entries of a JSON object without sorting or deduplicating them.
struct EntriesVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
    type Value = Entries<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, T>()? {
            entries.push(entry);
        }
        Ok(Entries(entries))
    }
}

/// A `products:1.0` document.
#[derive(Deserialize, Debug)]
pub(crate) struct Stream {
    /// The format tag of the document, such as `products:1.0`.
    pub format: Option<String>,

    /// Every product in the document, keyed by product id.
    #[serde(default)]
    pub products: Entries<Product>,
}

/// One product, which is one release of one flavour for one architecture.
#[derive(Deserialize, Debug)]
pub(crate) struct Product {
    /// The architecture tag, such as `amd64`.
    pub arch: Option<String>,

    /// The flavour identifier, such as `ubuntu-server`.
    pub os: Option<String>,

    /// The release number, such as `24.04`.
    pub version: Option<String>,

    /// The display title of the release, such as `24.04 LTS`.
    pub release_title: Option<String>,

    /// The codename of the release, such as `Noble Numbat`.
    pub release_codename: Option<String>,

    /// Every build of the product, keyed by serial.
    #[serde(default)]
    pub versions: Entries<Version>,
}

/// One build of a product.
#[derive(Deserialize, Debug)]
pub(crate) struct Version {
    /// The files making up the build, keyed by item id.
    #[serde(default)]
    pub items: Entries<Item>,
}

/// One downloadable file.
#[derive(Deserialize, Debug)]
pub(crate) struct Item {
    /// The kind of file, such as `iso` or `manifest`.
    pub ftype: Option<String>,

    /// The location of the file, usually relative to the mirror root.
    pub path: Option<String>,

    /// The hex encoded SHA-256 digest of the file.
    pub sha256: Option<String>,

    /// The byte length of the file.
    pub size: Option<u64>,
}
