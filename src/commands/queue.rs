use crate::api::Api;
use crate::cli::{Cli, QueueCommands};
use crate::services::i18n::Catalog;
use crate::services::output::{print_rows, print_value};
use crate::services::storage::audit;
use crate::services::submission;

pub fn handle_queue_commands(
    cli: &Cli,
    api: &Api,
    catalog: &Catalog,
    command: &QueueCommands,
) -> anyhow::Result<()> {
    match command {
        QueueCommands::List => {
            let queue = submission::queue();
            print_rows(cli.json, &queue, |entry| {
                format!(
                    "{}\t{}\t{}\t{}",
                    entry.submission.role,
                    entry.submission.company_name,
                    entry.submission.salary_amount,
                    entry.queued_at
                )
            })
        }
        QueueCommands::Retry => {
            let report = submission::retry_queue(api)?;
            audit(
                "queue_retry",
                serde_json::json!({"sent": report.sent, "failed": report.failed}),
            );
            let line = catalog.t_with(
                "queue.sent",
                &[
                    ("sent", report.sent.to_string()),
                    ("failed", report.failed.to_string()),
                ],
            );
            print_value(cli.json, report, |_| line.clone())
        }
        QueueCommands::Export { out } => {
            let report = submission::export_queue(out.as_deref())?;
            audit("queue_export", serde_json::json!({"entries": report.entries}));
            print_value(cli.json, report, |r| {
                format!("exported {} entries to {}", r.entries, r.path)
            })
        }
        QueueCommands::Clear => {
            let removed = submission::queue().len();
            submission::clear_queue()?;
            audit("queue_clear", serde_json::json!({ "removed": removed }));
            print_value(cli.json, removed, |n| format!("cleared {} entries", n))
        }
    }
}
