//! Integration tests for the picker crates.
//!
//! End-to-end properties that cut across crate boundaries: round-trip
//! accuracy per model and space, gamut-boundary tightness, appearance
//! transform endpoints, blend endpoints, and full cursor-to-color
//! scenarios.
