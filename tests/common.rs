//! tests/common.rs
//! Common constants and utilities shared across test files

/// Fast iteration count for tests - performance testing is in benches/
pub const TEST_ITERATIONS: u32 = 5;

/// Standard test secret used across test files
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SECRET: &[u8] = b"password";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &[u8] = b"salt";

/// Common iteration count vectors for testing various iteration values
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATION_VALUES: &[u32] = &[1, 2, TEST_ITERATIONS, 10];

/// Output lengths straddling the 20/32/64-byte MAC block boundaries
#[allow(dead_code)] // Used across multiple test files
pub const TEST_LENGTHS: &[usize] = &[0, 1, 19, 20, 21, 31, 32, 33, 40, 63, 64, 65, 100];
