//! `rstest-bdd` behavioural suite for the collection helpers.
//!
//! Fixtures hold the per-scenario generation unit, steps drive it, and
//! `scenarios` binds the feature files so everything runs under the stock
//! `cargo test` harness.

mod fixtures;
mod scenarios;
mod steps;
