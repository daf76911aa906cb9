//! BSON encoding and file persistence for [`SignalDocument`].

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::document::schema::SignalDocument;
use crate::prelude::{SignalError, SignalResult};

pub fn encode(document: &SignalDocument) -> SignalResult<Vec<u8>> {
    Ok(bson::to_vec(document)?)
}

/// Decodes a signal document, rejecting unknown fields and unsupported versions.
pub fn decode(bytes: &[u8]) -> SignalResult<SignalDocument> {
    let document: SignalDocument = bson::from_slice(bytes)?;
    document.validate()
}

/// Wraps `signal` in a version-stamped document and writes it to `path`,
/// replacing whatever was there.
pub fn write_document<P: AsRef<Path>>(signal: &[f64], path: P) -> SignalResult<()> {
    let path = path.as_ref();
    let document = SignalDocument::new(signal.to_vec());
    let bytes = encode(&document)?;
    debug!("encoded {} samples into {} bytes", document.len(), bytes.len());

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|err| SignalError::io(path, err))?;
    file.write_all(&bytes)
        .map_err(|err| SignalError::io(path, err))?;

    info!("wrote signal document {}", path.display());
    Ok(())
}

pub fn read_document<P: AsRef<Path>>(path: P) -> SignalResult<SignalDocument> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| SignalError::io(path, err))?;
    let document = decode(&bytes)?;
    debug!(
        "read signal document {} ({} samples)",
        path.display(),
        document.len()
    );
    Ok(document)
}
