//! Test helpers shared across the record-builder workspace.
//!
//! - [`figment`]: jail-isolated option loading.
//! - [`fields`]: component and option fixtures.
//! - [`text`]: whitespace-insensitive comparison of generated Java.

pub mod fields;
pub mod figment;
pub mod text;
