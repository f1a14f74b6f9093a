// SPDX-FileCopyrightText: 2025 some100 <ootinnyoo@outlook.com>
// SPDX-License-Identifier: MIT

//! Writes the chosen [`ImageRecord`] as a shell-sourceable file.
//!
//! The output is exactly four lines, in this order:
//!
//! ```text
//! MEDIA_URL="<url>"
//! MEDIA_LABEL="<label>"
//! MEDIA_256SUM="<checksum>"
//! MEDIA_SIZE="<size>"
//! ```
//!
//! Values are written as they are, without escaping.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;
use thiserror::Error;

use crate::image::ImageRecord;

/// An `Error` that may result from writing the output file.
#[derive(Error, Debug)]
#[error("Could not write \"{}\": {source}", path.display())]
pub struct EmitError {
    /// The path of the output file.
    pub path: PathBuf,

    /// The underlying error.
    pub source: io::Error,
}

/// Writes `record` to the file at `path`, replacing anything already there.
///
/// # Errors
///
/// May return an `Error` if the file could not be created, written to, or flushed. A partially written file is left
/// in place.
pub fn emit(path: impl AsRef<Path>, record: &ImageRecord) -> Result<(), EmitError> {
    let path = path.as_ref();
    let wrap = |source| EmitError {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);
    write_record(&mut writer, record).map_err(wrap)?;
    writer.flush().map_err(wrap)?;

    info!("[EMIT]: wrote {} to {}", record.label(), path.display());
    Ok(())
}

/// Writes the four lines of `record` to `writer`.
///
/// # Errors
///
/// May return an `Error` if the writer fails.
pub fn write_record<W: Write>(writer: &mut W, record: &ImageRecord) -> io::Result<()> {
    writeln!(writer, "MEDIA_URL=\"{}\"", record.url())?;
    writeln!(writer, "MEDIA_LABEL=\"{}\"", record.label())?;
    writeln!(writer, "MEDIA_256SUM=\"{}\"", &**record.checksum())?;
    writeln!(writer, "MEDIA_SIZE=\"{}\"", record.size())
}
