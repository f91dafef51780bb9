//! Shared test helpers for `geofleet-core` integration tests.
//!
//! Fixtures build presence intervals from short date/time literals, and an
//! in-memory source stands in for the file-backed one.

#![allow(dead_code)]

pub mod fixtures;
pub mod source;
