//! Record normalization layer
//!
//! Rows come back from the data-API gateway with snake_case field names
//! and values that may be strings even for numeric, boolean, or null
//! data. This module turns those wire-format rows into normalized rows:
//! camelCase keys, values narrowed to a closed variant.
//!
//! # Principles
//!
//! 1. Normalization is pure: no I/O, no failures on well-formed rows
//! 2. Values stay inside the {number, bool, null, text} variant
//! 3. Coercion is lossy and one-way; the wire row is the only place the
//!    original representation survives

mod normalize;
mod value;

pub use normalize::{camel_case_key, normalize_record};
pub use value::{FieldValue, Record};
