//! Record store for docmanager.
//!
//! This module provides the in-memory store that owns every document record,
//! keyed by document number. Records live only for the lifetime of the
//! process.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info};

use crate::document::Document;
use crate::error::{Error, Result};

/// In-memory store of document records.
///
/// All operations take a single lock around the record map, so each one
/// either fully applies or leaves the map untouched. Callers receive clones;
/// the store is the only owner of the records themselves.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: Mutex<HashMap<String, Document>>,
}

impl DocumentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Document>>> {
        self.documents
            .lock()
            .map_err(|_| Error::internal("document store lock poisoned"))
    }

    /// Create a document, replacing any existing record with the same number.
    ///
    /// The date is validated before the store is touched, so a failed create
    /// never disturbs a prior record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if `number` is empty, and
    /// [`Error::InvalidDate`] if `creation_date` is not `YYYY-MM-DD`.
    pub fn create(&self, number: &str, creation_date: &str, summary: &str) -> Result<Document> {
        if number.is_empty() {
            return Err(Error::MissingField { field: "number" });
        }
        let date = Document::parse_creation_date(creation_date)?;
        let doc = Document::new(number.to_string(), date, summary.to_string());

        let replaced = self
            .lock()?
            .insert(doc.number.clone(), doc.clone())
            .is_some();
        if replaced {
            info!("Document replaced: {doc}");
        } else {
            info!("Document created: {doc}");
        }
        Ok(doc)
    }

    /// Look up a document by number.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store lock is poisoned.
    pub fn get(&self, number: &str) -> Result<Option<Document>> {
        let doc = self.lock()?.get(number).cloned();
        debug!(number, found = doc.is_some(), "Document lookup");
        Ok(doc)
    }

    /// Replace the summary of an existing document.
    ///
    /// Returns the updated record, or `None` if no document has this number.
    /// Never creates a record.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store lock is poisoned.
    pub fn update_summary(&self, number: &str, summary: &str) -> Result<Option<Document>> {
        let mut documents = self.lock()?;
        let Some(doc) = documents.get_mut(number) else {
            debug!(number, "Update skipped, document not found");
            return Ok(None);
        };
        doc.summary = summary.to_string();
        info!("Document updated: {doc}");
        Ok(Some(doc.clone()))
    }

    /// Delete a document by number.
    ///
    /// Returns whether a record was removed; deleting twice is safe.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store lock is poisoned.
    pub fn delete(&self, number: &str) -> Result<bool> {
        let removed = self.lock()?.remove(number).is_some();
        if removed {
            info!("Document deleted: {number}");
        } else {
            debug!(number, "Delete skipped, document not found");
        }
        Ok(removed)
    }

    /// Number of documents currently held.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store lock is poisoned.
    pub fn count(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }
}
