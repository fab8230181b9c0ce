use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;

use super::error::InvoiceError;
use super::mapping::{FieldMapping, RequiredField};
use super::numbering;
use super::profile::BusinessProfile;
use super::types::{Dataset, InvoiceDocument, InvoiceLine, InvoiceMode};

/// Fixed VAT rate applied by the templates that show a tax breakdown.
pub const VAT_RATE: Decimal = dec!(0.21);

/// Payment term: due 30 calendar days after the issue date.
pub const PAYMENT_TERM_DAYS: u64 = 30;

/// Parse a raw amount cell.
///
/// Non-numeric or empty text is not an error — it degrades to zero. The
/// coercion is logged as a warning but never surfaced to the caller.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    match trimmed.parse::<Decimal>() {
        Ok(amount) => amount,
        Err(_) => {
            if !trimmed.is_empty() {
                warn!(value = trimmed, "non-numeric amount coerced to zero");
            }
            Decimal::ZERO
        }
    }
}

/// Resolved column positions for the four required fields.
struct Columns {
    date: usize,
    description: usize,
    amount: usize,
    reference: usize,
}

fn resolve_columns(dataset: &Dataset, mapping: &FieldMapping) -> Result<Columns, InvoiceError> {
    let missing = mapping.missing();
    if !missing.is_empty() {
        let ids: Vec<&str> = missing.iter().map(RequiredField::id).collect();
        return Err(InvoiceError::IncompleteMapping(format!(
            "unmapped fields: {}",
            ids.join(", ")
        )));
    }

    let index_of = |field: RequiredField| -> Result<usize, InvoiceError> {
        // missing() was empty, so every field has a header name
        let header = mapping.get(field).unwrap_or_default();
        dataset.column_index(header).ok_or_else(|| {
            InvoiceError::IncompleteMapping(format!(
                "field '{}' is mapped to header '{header}', which the dataset does not have",
                field.id()
            ))
        })
    };

    Ok(Columns {
        date: index_of(RequiredField::Date)?,
        description: index_of(RequiredField::Description)?,
        amount: index_of(RequiredField::Amount)?,
        reference: index_of(RequiredField::Reference)?,
    })
}

fn line_from_row(row: &[String], columns: &Columns) -> InvoiceLine {
    let amount = parse_amount(&row[columns.amount]);
    InvoiceLine {
        date: row[columns.date].clone(),
        description: row[columns.description].clone(),
        reference: row[columns.reference].clone(),
        amount: amount.abs(),
        is_credit: amount < Decimal::ZERO,
    }
}

/// Aggregate mapped rows into one invoice document.
///
/// Single mode turns every row into a line item, in dataset order. Multiple
/// mode keeps only the first row's line item for the preview and records how
/// many more invoices the request covers. Either way the subtotal is the sum
/// of the *kept* lines' absolute amounts, VAT is 21 % of the subtotal and
/// the due date is the issue date plus 30 days.
///
/// Fails with [`InvoiceError::IncompleteMapping`] when a required field is
/// unset or mapped to a header absent from the dataset. An empty dataset is
/// not an error: zero subtotal, no line items.
pub fn aggregate(
    dataset: &Dataset,
    mapping: &FieldMapping,
    profile: BusinessProfile,
    mode: InvoiceMode,
    number: impl Into<String>,
    issue_date: NaiveDate,
) -> Result<InvoiceDocument, InvoiceError> {
    let columns = resolve_columns(dataset, mapping)?;

    let mut line_items: Vec<InvoiceLine> = dataset
        .rows()
        .iter()
        .map(|row| line_from_row(row, &columns))
        .collect();

    let more_invoices = match mode {
        InvoiceMode::Single => 0,
        InvoiceMode::Multiple => {
            line_items.truncate(1);
            dataset.len().saturating_sub(1)
        }
    };

    let subtotal: Decimal = line_items.iter().map(|l| l.amount).sum();
    let tax_amount = (subtotal * VAT_RATE).round_dp(2);

    Ok(InvoiceDocument {
        number: number.into(),
        issue_date,
        due_date: issue_date
            .checked_add_days(Days::new(PAYMENT_TERM_DAYS))
            .unwrap_or(issue_date),
        line_items,
        subtotal,
        tax_amount,
        total: subtotal + tax_amount,
        profile,
        mode,
        more_invoices,
    })
}

/// Append an `invoice_number` column to every row of the dataset.
///
/// Single mode stamps the same number on all rows; multiple mode stamps the
/// per-row sequential number. This happens for every row regardless of which
/// invoice was chosen for preview rendering.
pub fn annotate(dataset: &Dataset, mode: InvoiceMode, number: &str) -> Dataset {
    let mut headers = dataset.headers().to_vec();
    headers.push("invoice_number".to_string());

    let mut annotated = Dataset::new(headers);
    for (i, row) in dataset.rows().iter().enumerate() {
        let mut row = row.clone();
        row.push(match mode {
            InvoiceMode::Single => number.to_string(),
            InvoiceMode::Multiple => numbering::row_number(number, i),
        });
        annotated.push_row(row);
    }
    annotated
}
