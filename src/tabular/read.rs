use crate::core::{Dataset, InvoiceError};

/// Parse raw delimited-text bytes into a dataset.
///
/// The first record is the required header row; each subsequent record
/// becomes one row keyed positionally by header. Records whose fields are
/// all empty are skipped entirely. Rows shorter than the header set are
/// padded with empty strings, longer ones truncated, so the dataset
/// invariant holds.
///
/// Fails with [`InvoiceError::MalformedInput`] when the bytes cannot be
/// decoded as delimited text or no header record is present.
pub fn parse(bytes: &[u8]) -> Result<Dataset, InvoiceError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| InvoiceError::MalformedInput(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        return Err(InvoiceError::MalformedInput("no header record".into()));
    }

    let mut dataset = Dataset::new(headers);
    for record in reader.records() {
        let record = record.map_err(|e| InvoiceError::MalformedInput(e.to_string()))?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        dataset.push_row(record.iter().map(str::to_string).collect());
    }
    Ok(dataset)
}
