use chrono::{DateTime, Utc};

/// Identifier for one generation request: `INV-<unix-millis>`.
///
/// Every document of the request shares this prefix; in multiple mode the
/// per-row numbers append a 1-based suffix via [`row_number`].
pub fn batch_number(at: DateTime<Utc>) -> String {
    format!("INV-{}", at.timestamp_millis())
}

/// Per-row invoice number in multiple mode, e.g. `INV-1700000000000-3`.
pub fn row_number(batch: &str, index: usize) -> String {
    format!("{batch}-{}", index + 1)
}
