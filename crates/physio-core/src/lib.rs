//! physio-core
//!
//! Pure domain types for physiotherapy assessment forms: the flat
//! assessment record, field and section metadata, and the default-merge
//! rule. No UI or storage dependency — this is the shared vocabulary of the
//! forms, renderer and host crates.

pub mod error;
pub mod models;
