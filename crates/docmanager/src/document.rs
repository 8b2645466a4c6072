//! Core document types for docmanager.
//!
//! This module defines the document record and its two projections: the
//! structured (JSON) form used by the API and the fixed-layout text form
//! offered for download.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Format accepted for creation dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A document record.
///
/// Serializes to the structured projection:
/// `{"number": "...", "creation_date": "YYYY-MM-DD", "summary": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique document number; also the store key.
    pub number: String,

    /// Calendar date supplied by the caller when the document was created.
    pub creation_date: NaiveDate,

    /// Free-form summary text. May span multiple lines.
    pub summary: String,
}

impl Document {
    /// Create a new document from already-validated parts.
    #[must_use]
    pub fn new(number: String, creation_date: NaiveDate, summary: String) -> Self {
        Self {
            number,
            creation_date,
            summary,
        }
    }

    /// Parse a creation date in `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDate`] if the text is not a valid calendar date
    /// in that format.
    pub fn parse_creation_date(text: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|source| Error::InvalidDate {
            value: text.to_string(),
            source,
        })
    }

    /// The creation date rendered as `YYYY-MM-DD`.
    #[must_use]
    pub fn creation_date_iso(&self) -> String {
        self.creation_date.format(DATE_FORMAT).to_string()
    }

    /// Render the downloadable text projection.
    ///
    /// The summary is emitted verbatim after the `Summary:` line, with no
    /// trailing newline added.
    #[must_use]
    pub fn to_text(&self) -> String {
        format!(
            "Document Number: {}\nCreation Date: {}\nSummary:\n{}",
            self.number,
            self.creation_date_iso(),
            self.summary
        )
    }

    /// File name offered for the text download.
    #[must_use]
    pub fn download_filename(&self) -> String {
        format!("{}_document.txt", self.number)
    }
}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.number, self.creation_date_iso())
    }
}
