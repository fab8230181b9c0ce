use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::profile::BusinessProfile;

/// An ordered set of rows sharing one header set.
///
/// Invariant: every row has exactly as many values as there are headers —
/// missing values are empty strings, never absent. Row order is preserved
/// from the source and drives both line-item order and per-row numbering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Create an empty dataset with the given header set.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row, padding or truncating it to the header count.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (the header row is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a header within the header set, if present.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Value of one cell, addressed by row index and header name.
    pub fn value(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.column_index(header)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }
}

/// Aggregation mode for one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceMode {
    /// One invoice document covering every row of the dataset.
    Single,
    /// One invoice per row; only the first row's document is rendered as a
    /// preview, the rest are represented by their numbers in the export.
    Multiple,
}

/// Payment status inferred from the sign of a row's raw amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Raw amount was negative — the transaction already settled.
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }
}

/// One invoice line, derived from one mapped row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub date: String,
    pub description: String,
    pub reference: String,
    /// Absolute value of the row's amount; the sign lives in `is_credit`.
    pub amount: Decimal,
    /// True when the raw amount was negative.
    pub is_credit: bool,
}

impl InvoiceLine {
    pub fn status(&self) -> PaymentStatus {
        if self.is_credit {
            PaymentStatus::Paid
        } else {
            PaymentStatus::Pending
        }
    }
}

/// The aggregated invoice model handed to the renderer.
///
/// Constructed fresh per generation request and never mutated afterwards;
/// only its rendered markup and the annotated dataset outlive the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// Timestamp-derived identifier, `INV-` prefixed.
    pub number: String,
    pub issue_date: NaiveDate,
    /// Issue date + 30 calendar days. Always computed; only the
    /// professional and dark templates display it.
    pub due_date: NaiveDate,
    pub line_items: Vec<InvoiceLine>,
    /// Sum of displayed (absolute) line amounts.
    pub subtotal: Decimal,
    /// 21 % VAT on the subtotal, rounded to 2 decimal places.
    pub tax_amount: Decimal,
    pub total: Decimal,
    pub profile: BusinessProfile,
    pub mode: InvoiceMode,
    /// In multiple mode, how many rows beyond the previewed first one still
    /// get their own invoice. Zero in single mode.
    pub more_invoices: usize,
}
