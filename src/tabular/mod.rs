//! Delimited-text reading and writing.
//!
//! Reading goes through the `csv` crate so quoted fields containing the
//! delimiter stay one value. Writing is deliberately minimal: it mirrors the
//! export contract (quote only fields containing the delimiter) rather than
//! full RFC 4180.

mod read;
mod write;

pub use read::parse;
pub use write::to_csv;
