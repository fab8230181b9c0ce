//! Invoice document rendering.
//!
//! Each template is a pure function of [`InvoiceDocument`] to presentational
//! markup — no totals are recomputed here. The templates differ only in
//! layout and in which derived figures they surface: minimal shows no tax
//! breakdown but a per-line Paid badge; professional and dark show the
//! subtotal/VAT/total breakdown and no badge.

mod dark;
mod format;
mod minimal;
mod professional;

pub use format::format_currency;

use serde::{Deserialize, Serialize};

use crate::core::{BusinessProfile, InvoiceDocument, InvoiceMode};

/// The closed set of visual templates.
///
/// Unknown template ids are rejected at the boundary (serde deserialization
/// and [`Template::from_id`] both fail); there is no silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    Minimal,
    Professional,
    Dark,
}

impl Template {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "minimal" => Some(Self::Minimal),
            "professional" => Some(Self::Professional),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Professional => "professional",
            Self::Dark => "dark",
        }
    }
}

/// Render the document with the given template.
pub fn render(document: &InvoiceDocument, template: Template) -> String {
    match template {
        Template::Minimal => minimal::render(document),
        Template::Professional => professional::render(document),
        Template::Dark => dark::render(document),
    }
}

/// The FROM block shared by all templates: one `<p>` per populated field.
fn business_info_html(profile: &BusinessProfile) -> String {
    let mut out = String::new();
    if let Some(name) = &profile.name {
        out.push_str(&format!("<p class=\"mb-1\"><strong>{name}</strong></p>\n"));
    }
    if let Some(address) = &profile.address {
        out.push_str(&format!("<p class=\"mb-1\">{address}</p>\n"));
    }
    if let Some(tax_id) = &profile.tax_id {
        out.push_str(&format!("<p class=\"mb-1\">Tax ID: {tax_id}</p>\n"));
    }
    if let Some(phone) = &profile.phone {
        out.push_str(&format!("<p class=\"mb-1\">Phone: {phone}</p>\n"));
    }
    if let Some(email) = &profile.email {
        out.push_str(&format!("<p class=\"mb-1\">Email: {email}</p>\n"));
    }
    out
}

/// In multiple mode, the note row announcing the remaining invoices.
fn preview_note(document: &InvoiceDocument, colspan: u8) -> String {
    if document.mode != InvoiceMode::Multiple {
        return String::new();
    }
    format!(
        "<tr><td colspan=\"{colspan}\" class=\"text-center text-muted\">\
         <em>Note: {} more invoices will be generated</em></td></tr>\n",
        document.more_invoices
    )
}
