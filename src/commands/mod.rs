//! Command handler layer.
//!
//! Owns CLI-oriented orchestration and output wiring; the work itself lives in
//! `services/*`.

pub mod process;

pub use process::handle_process;
