//! mathfn Property-Based Tests
//!
//! Standalone test suite using proptest for arithmetic invariant verification,
//! plus a runner for the JSON test vectors in `spec/test-vectors`.
//!
//! # Usage
//!
//! ```bash
//! cargo test -p mathfn-property-tests              # Run all property tests
//! cargo test -p mathfn-property-tests prime        # Run only primality tests
//! cargo test -- --nocapture                        # Show output
//! PROPTEST_CASES=1000 cargo test                   # More test cases
//! RUST_LOG=debug cargo test -- --nocapture         # Show mathfn log events
//! ```
//!
//! # Test Modules
//!
//! - `prop_double`: evenness and wraparound of `multiply_by_two`
//! - `prop_table`: length, stride and sign of multiplication tables
//! - `prop_prime`: primes, composites, squares, values `<= 1`
//! - `prop_average`: bounds, order independence, rejection of empty input
//! - `prop_vectors`: every JSON vector in `spec/test-vectors`

pub mod strategies;
pub mod vectors;

// Re-export for convenience in tests
pub use mathfn::*;

use tracing_subscriber::EnvFilter;

/// Install a test-writer fmt subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_test_writer()
        .try_init();
}
