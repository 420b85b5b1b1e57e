//! Shared data model layer (structs/enums only).
//!
//! ## Files
//! - `models.rs`: derived paths, stage markers, run statistics and the JSON report.
//! - `errors.rs`: the per-stage error taxonomy.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `ProcessReport` is the `--json` output. Keep it in sync with
//! `docs/contracts/process-report.schema.json`.

pub mod errors;
pub mod models;
