//! # Builders
//!
//! This module provides builder patterns for configuring key derivation.
//!
//! ## Modules
//!
//! - [`pbkdf2_builder`] - Builder for PBKDF2 over any HMAC
//!
//! ## Usage
//!
//! Builders provide a fluent API for configuring cryptographic operations with
//! sensible defaults and optional customization.

pub mod pbkdf2_builder;
