//! Service layer: the three pipeline stages and their orchestration.
//!
//! ## Service map
//! - `backup.rs`: byte-exact, fsynced copy to `<input>.bak` with a SHA-256 digest.
//! - `filter.rs`: comment classification and streaming to `<input>.temp`.
//! - `commit.rs`: atomic rename of the temp file over the input.
//! - `pipeline.rs`: runs backup → filter → commit, short-circuiting on failure.
//! - `output.rs`: JSON/text output helpers.
//!
//! ## Conventions
//! - Each stage maps its I/O errors to exactly one `ProcessError` family.
//! - Stages never clean up after earlier stages.

pub mod backup;
pub mod commit;
pub mod filter;
pub mod output;
pub mod pipeline;
