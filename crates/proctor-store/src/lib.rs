//! proctor-store — Submission store implementations.
//!
//! Implements the `SubmissionStore` trait from `proctor-core`. The
//! in-memory store is both the reference backend the server runs on and
//! the store the test suites drive the service against.

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;
pub use seed::{seed_store, SeedSummary};
