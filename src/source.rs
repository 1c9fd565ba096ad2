//! Line-oriented document ingestion.
//!
//! Each line of the source becomes one [`Document`]; ids are assigned in
//! read order starting at 1. A missing source file is reported as
//! [`LanceaError::SourceNotFound`], distinct from read failures, which
//! surface as [`LanceaError::Io`].

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use log::info;

use crate::document::Document;
use crate::error::{LanceaError, Result};

/// Read documents from any buffered reader, one document per line.
pub fn read_documents<R: BufRead>(reader: R) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    let mut doc_id = 1;

    for line in reader.lines() {
        let line = line?;
        documents.push(Document::new(doc_id, line));
        doc_id += 1;
    }

    Ok(documents)
}

/// Load documents from a text file.
///
/// # Examples
///
/// ```no_run
/// use lancea::source::load_documents;
///
/// let documents = load_documents("text_dataset.txt").unwrap();
/// ```
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            LanceaError::source_not_found(path.display().to_string())
        } else {
            LanceaError::Io(e)
        }
    })?;

    let documents = read_documents(BufReader::new(file))?;
    info!("loaded {} documents from {}", documents.len(), path.display());

    Ok(documents)
}
