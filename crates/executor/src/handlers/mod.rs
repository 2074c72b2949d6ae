//! Command handlers, one module per command family.

pub mod document;
pub mod search;
