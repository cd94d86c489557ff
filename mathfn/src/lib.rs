//! # mathfn: Elementary Integer Arithmetic
//!
//! A small set of pure, stateless functions over 32-bit signed integers.
//!
//! ## Functions
//!
//! | Function | Result |
//! |---|---|
//! | [`multiply_by_two`] | `2n`, wrapping on overflow |
//! | [`generate_multiplication_table`] | first `limit` multiples of `n` |
//! | [`is_prime`] | primality by trial division |
//! | [`calculate_average`] | arithmetic mean of a non-empty slice |
//!
//! ## Overflow
//!
//! Integer results follow native two's-complement semantics: anything that
//! leaves the `i32` range wraps modulo 2^32. Nothing in this crate panics on
//! overflow, in debug or release builds.
//!
//! ## Quick Start
//!
//! ```
//! use mathfn::prelude::*;
//!
//! assert_eq!(multiply_by_two(5), 10);
//! assert_eq!(generate_multiplication_table(3, 4)?, vec![3, 6, 9, 12]);
//! assert!(is_prime(17));
//! assert_eq!(calculate_average(&[2, 4, 6])?, 4.0);
//! # Ok::<(), mathfn::MathError>(())
//! ```
//!
//! ## Logging
//!
//! Functions that can reject input emit `tracing` events (`debug` on success,
//! `warn` on rejection). No subscriber is installed by this crate.

#![warn(missing_docs)]

// Core modules
pub mod arith;
pub mod error;
pub mod prime;
pub mod stats;

// Re-exports for convenience
pub use arith::{generate_multiplication_table, multiply_by_two};
pub use error::{MathError, Result};
pub use prime::is_prime;
pub use stats::{calculate_average, calculate_average_opt, Mean};

/// Prelude - commonly used items
pub mod prelude {
    pub use crate::arith::{generate_multiplication_table, multiply_by_two};
    pub use crate::error::{MathError, Result};
    pub use crate::prime::is_prime;
    pub use crate::stats::{calculate_average, calculate_average_opt, Mean};
}

// ============================================================================
// Version
// ============================================================================

/// Major version
pub const VERSION_MAJOR: u32 = parse_version_part(env!("CARGO_PKG_VERSION_MAJOR"));
/// Minor version
pub const VERSION_MINOR: u32 = parse_version_part(env!("CARGO_PKG_VERSION_MINOR"));
/// Patch version
pub const VERSION_PATCH: u32 = parse_version_part(env!("CARGO_PKG_VERSION_PATCH"));
/// Version string
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Get version as packed integer (major << 16 | minor << 8 | patch)
pub const fn version() -> u32 {
    (VERSION_MAJOR << 16) | (VERSION_MINOR << 8) | VERSION_PATCH
}

// Cargo guarantees each CARGO_PKG_VERSION_* part is a decimal number
const fn parse_version_part(part: &str) -> u32 {
    let bytes = part.as_bytes();
    let mut value = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}
