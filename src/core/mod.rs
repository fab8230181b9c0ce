//! Core domain types and decision logic.
//!
//! Everything that turns mapped transaction rows into an invoice model lives
//! here: field mapping, business-detail parsing, aggregation, and numbering.
//! Reading and rendering are the [`crate::tabular`] and [`crate::render`]
//! modules' concern.

mod aggregate;
mod error;
mod mapping;
mod numbering;
mod profile;
mod types;

pub use aggregate::*;
pub use error::*;
pub use mapping::*;
pub use numbering::*;
pub use profile::*;
pub use types::*;
