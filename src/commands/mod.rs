//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — submit/cooldown/directory/tags/lang.
//! - `queue.rs` — offline queue lifecycle (list/retry/export/clear).
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod queue;
pub mod runtime;

use std::collections::BTreeMap;

use crate::api::{Api, DirectoryKind};
use crate::cli::{Cli, Commands};
use crate::services::i18n::Catalog;

/// Failures that carry a stable code in the `--json` error envelope.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("validation failed")]
    Validation(BTreeMap<&'static str, String>),
    #[error("{0}")]
    CooldownActive(String),
    #[error("unknown tech tags: {0}")]
    UnknownTags(String),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Validation(_) => "VALIDATION",
            CliError::CooldownActive(_) => "COOLDOWN_ACTIVE",
            CliError::UnknownTags(_) => "UNKNOWN_TAGS",
        }
    }
}

pub fn handle(cli: &Cli, api: &Api, catalog: &Catalog) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Submit(args) => runtime::handle_submit(cli, api, catalog, args),
        Commands::Queue { command } => queue::handle_queue_commands(cli, api, catalog, command),
        Commands::Cooldown => runtime::handle_cooldown(cli),
        Commands::Companies => runtime::handle_directory(cli, api, DirectoryKind::Companies),
        Commands::Roles => runtime::handle_directory(cli, api, DirectoryKind::Roles),
        Commands::Tags { role } => runtime::handle_tags(cli, role.as_deref()),
        Commands::Lang { command } => runtime::handle_lang_commands(cli, catalog, command),
    }
}
