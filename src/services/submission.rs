//! Delivery with offline fallback, cooldown gating, and queue lifecycle.
//!
//! Policy: one inline network attempt per submit. Anything that fails lands
//! in the durable queue and is only ever retried through `retry_queue`,
//! never automatically.

use std::path::Path;

use crate::api::Api;
use crate::domain::constants::COOLDOWN_MS;
use crate::domain::models::{ExportReport, QueuedSubmission, RetryReport, SalarySubmission, SubmitReceipt};
use crate::services::storage;

pub fn submit(api: &Api, payload: SalarySubmission) -> anyhow::Result<SubmitReceipt> {
    let claim_token = payload.claim_token.clone();
    match api.submit(&payload) {
        Ok(server_id) => Ok(SubmitReceipt {
            claim_token,
            status: "delivered".to_string(),
            server_id,
        }),
        Err(_) => {
            let mut queue = storage::load_queue();
            queue.push(QueuedSubmission {
                submission: payload,
                queued_at: storage::now_ms(),
            });
            storage::save_queue(&queue)?;
            Ok(SubmitReceipt {
                claim_token,
                status: "queued".to_string(),
                server_id: None,
            })
        }
    }
}

pub fn cooldown_remaining() -> u64 {
    match storage::read_cooldown_started() {
        Some(started) => remaining_from(started, storage::now_ms()),
        None => 0,
    }
}

fn remaining_from(started_ms: u64, now_ms: u64) -> u64 {
    COOLDOWN_MS.saturating_sub(now_ms.saturating_sub(started_ms))
}

/// Recorded after every submit attempt, delivered or queued alike.
pub fn start_cooldown() -> anyhow::Result<()> {
    storage::write_cooldown_started(storage::now_ms())
}

pub fn queue() -> Vec<QueuedSubmission> {
    storage::load_queue()
}

pub fn clear_queue() -> anyhow::Result<()> {
    storage::save_queue(&[])
}

/// One pass over the queue in insertion order. Entries that fail stay put,
/// in order; the remainder is written back once after the whole pass.
pub fn retry_queue(api: &Api) -> anyhow::Result<RetryReport> {
    let mut remaining = Vec::new();
    let mut sent = 0usize;
    for entry in storage::load_queue() {
        match api.submit(&entry.submission) {
            Ok(_) => sent += 1,
            Err(_) => remaining.push(entry),
        }
    }
    let failed = remaining.len();
    storage::save_queue(&remaining)?;
    Ok(RetryReport { sent, failed })
}

pub fn export_queue(out_dir: Option<&Path>) -> anyhow::Result<ExportReport> {
    let queue = storage::load_queue();
    let name = format!("salary-queue-{}.json", storage::now_secs());
    let path = out_dir.unwrap_or_else(|| Path::new(".")).join(name);
    std::fs::write(&path, serde_json::to_string_pretty(&queue)?)?;
    Ok(ExportReport {
        path: path.to_string_lossy().to_string(),
        entries: queue.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::remaining_from;
    use crate::domain::constants::COOLDOWN_MS;

    #[test]
    fn cooldown_counts_down_from_the_window() {
        assert_eq!(remaining_from(1_000, 1_000), COOLDOWN_MS);
        assert_eq!(remaining_from(1_000, 11_000), COOLDOWN_MS - 10_000);
        assert!(remaining_from(1_000, 11_000) < remaining_from(1_000, 6_000));
    }

    #[test]
    fn cooldown_is_zero_after_the_window() {
        assert_eq!(remaining_from(1_000, 1_000 + COOLDOWN_MS), 0);
        assert_eq!(remaining_from(1_000, 1_000 + COOLDOWN_MS + 5_000), 0);
    }

    #[test]
    fn clock_rollback_does_not_underflow() {
        assert_eq!(remaining_from(10_000, 5_000), COOLDOWN_MS);
    }
}
