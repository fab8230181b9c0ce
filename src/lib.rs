//! # csv2invoice
//!
//! Convert tabular transaction exports (CSV) into rendered invoice
//! documents, guided by a mapping from source columns to four semantic
//! fields: date, description, amount and reference.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use csv2invoice::core::*;
//! use csv2invoice::render::{Template, render};
//! use csv2invoice::tabular;
//!
//! let dataset = tabular::parse(
//!     b"Date,Description,Amount,Reference\n2024-01-05,Consulting,1500.00,P-001\n",
//! )
//! .unwrap();
//!
//! let mapping = FieldMapping::suggest(dataset.headers());
//! assert!(mapping.is_complete());
//!
//! let profile = BusinessProfile::parse("Acme BV\nVAT: BE0123456789");
//! let document = aggregate(
//!     &dataset,
//!     &mapping,
//!     profile,
//!     InvoiceMode::Single,
//!     "INV-1704067200000",
//!     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//! )
//! .unwrap();
//!
//! assert_eq!(document.line_items.len(), 1);
//! let markup = render(&document, Template::Professional);
//! assert!(markup.contains("€1,500.00"));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tabular`] | Delimited-text parsing and export serialization |
//! | [`core`] | Field mapping, business-detail parsing, aggregation |
//! | [`render`] | Minimal / professional / dark invoice templates |
//! | [`store`] | Per-session artifacts keyed by correlation id |
//! | [`api`] | Upload / generate / export boundary operations |

pub mod api;
pub mod core;
pub mod render;
pub mod store;
pub mod tabular;

// Re-export core types at crate root for convenience
pub use crate::core::*;
