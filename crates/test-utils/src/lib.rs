//! Shared builders for taskpath's integration tests.

pub mod builders;
