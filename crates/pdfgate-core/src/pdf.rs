//! Startup check for the document the bot hands out.

use std::{fs, path::Path};

use lopdf::Document;

use crate::{errors::Error, Result};

/// Read `path` and make sure it parses as a PDF document.
pub fn validate(path: &Path) -> Result<()> {
    let bytes = fs::read(path)?;
    let doc = Document::load_mem(&bytes).map_err(|e| Error::InvalidPdf {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::debug!(
        path = %path.display(),
        version = %doc.version,
        pages = doc.get_pages().len(),
        "pdf parsed"
    );
    Ok(())
}

/// Like [`validate`], but logs the failure and reports a plain yes/no.
pub fn verify(path: &Path) -> bool {
    match validate(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(path = %path.display(), "PDF verification failed: {e}");
            false
        }
    }
}
