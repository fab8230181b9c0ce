//! The three boundary operations: upload, generate, export.
//!
//! These are plain request/response functions — transports (HTTP, UI
//! wizards, PDF printing) are the caller's concern. Each call is a single
//! synchronous pass over a fully loaded in-memory dataset; requests fail
//! independently and share no mutable state beyond the artifact store.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::core::{
    BusinessProfile, FieldMapping, InvoiceError, InvoiceMode, aggregate, annotate, batch_number,
};
use crate::render::{Template, render};
use crate::store::UploadStore;
use crate::tabular;

/// Result of accepting an upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Correlation id for the persisted dataset.
    pub id: String,
    pub headers: Vec<String>,
    pub row_count: usize,
}

/// One generation request. The caller holds all wizard state and passes it
/// in explicitly; nothing is remembered between calls except the artifacts
/// under their correlation ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub upload_id: String,
    pub mode: InvoiceMode,
    pub template: Template,
    pub mapping: FieldMapping,
    /// Free-text business details, parsed into a [`BusinessProfile`].
    #[serde(default)]
    pub business_details: String,
    /// Declared business name; overrides the parsed one when non-empty.
    #[serde(default)]
    pub business_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub markup: String,
    pub invoice_number: String,
    /// Correlation id of the annotated dataset, for [`export`].
    pub export_id: String,
}

/// Accept raw delimited-text bytes; persist them and the parsed dataset.
pub fn upload(store: &UploadStore, bytes: &[u8]) -> Result<UploadResponse, InvoiceError> {
    let dataset = tabular::parse(bytes)?;
    let id = store.put_upload(bytes, &dataset)?;
    Ok(UploadResponse {
        id,
        headers: dataset.headers().to_vec(),
        row_count: dataset.len(),
    })
}

/// Generate the invoice preview and the annotated dataset.
///
/// The annotated dataset is written to the store regardless of mode and of
/// which invoice was previewed; its export id comes back in the response.
pub fn generate(
    store: &UploadStore,
    request: &GenerateRequest,
) -> Result<GenerateResponse, InvoiceError> {
    let dataset = store.get_dataset(&request.upload_id)?;

    let profile = BusinessProfile::parse(&request.business_details)
        .with_name_override(&request.business_name);

    let now = Utc::now();
    let number = batch_number(now);
    let document = aggregate(
        &dataset,
        &request.mapping,
        profile,
        request.mode,
        number.clone(),
        now.date_naive(),
    )?;
    let markup = render(&document, request.template);

    let annotated = annotate(&dataset, request.mode, &number);
    let export_id = store.put_export(&annotated)?;

    Ok(GenerateResponse {
        markup,
        invoice_number: number,
        export_id,
    })
}

/// Serialize the annotated dataset back to delimited text for download.
pub fn export(store: &UploadStore, export_id: &str) -> Result<String, InvoiceError> {
    let dataset = store.get_export(export_id)?;
    Ok(tabular::to_csv(&dataset))
}
