// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Geometry scale factors and resize percentages are floats, so tests compare
//! them with the `approx` assertion macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Epsilon for f64 viewport scale comparisons.
pub const F64_EPSILON: f64 = 1e-10;
