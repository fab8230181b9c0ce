use thiserror::Error;

/// Errors that can occur while turning an upload into an invoice.
///
/// Every boundary failure is reported as one of these; nothing panics and
/// each request fails independently. Non-numeric amounts are deliberately
/// *not* an error — they coerce to zero with a `tracing` warning (see
/// [`crate::core::parse_amount`]).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InvoiceError {
    /// The uploaded bytes could not be decoded as delimited text, or no
    /// header record was present.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// No artifact exists under the given correlation id.
    #[error("not found: {0}")]
    NotFound(String),

    /// One or more required fields are unmapped, or mapped to a header the
    /// dataset does not have.
    #[error("incomplete field mapping: {0}")]
    IncompleteMapping(String),

    /// Artifact store I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted dataset could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
