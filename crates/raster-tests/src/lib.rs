//! Integration tests for raster-rs crates.
//!
//! End-to-end checks that span raster-core, raster-ops and raster-io:
//! the documented grid properties, file round trips and whole pipelines.
