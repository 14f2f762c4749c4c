//! # Pricetrack Analytics Engine
//!
//! This crate computes year-over-year percentage changes over sparse,
//! irregularly sampled price series. Missing exact-anniversary data is
//! tolerated by falling back to the nearest available sample within the
//! same calendar month one year earlier.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   external systems. It depends only on `core-types` (Layer 0).
//! - **Stateless Calculation:** The `YoyEngine` is a stateless calculator.
//!   It borrows caller-owned records, returns freshly allocated results, and
//!   retains nothing between calls beyond its rounding configuration, so it
//!   can be shared across threads without coordination.
//!
//! ## Public API
//!
//! - `YoyEngine`: the main struct that contains the calculation logic.
//! - `AnalyticsError`: the specific error types that can be returned from
//!   this crate.

// Declare the modules that constitute this crate.
pub mod engine;
pub mod error;

// Re-export the key components to create a clean, public-facing API.
pub use engine::YoyEngine;
pub use error::AnalyticsError;
