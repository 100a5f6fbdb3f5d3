//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — draft, payload, queue entry, report/output structs.
//! - `constants.rs` — fixed form vocabulary and client constants.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `SalarySubmission` and `QueuedSubmission` are wire/storage schema: changes
//! affect both the submit endpoint body and `queue.json` on disk. The report
//! structs shape the `--json` output contract.

pub mod constants;
pub mod models;
