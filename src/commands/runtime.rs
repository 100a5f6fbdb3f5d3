use crate::api::{Api, DirectoryKind};
use crate::cli::{Cli, LangCommands, SubmitArgs};
use crate::commands::CliError;
use crate::domain::constants::default_roles;
use crate::domain::models::{Choice, Draft, JsonOut, SalarySubmission};
use crate::services::directory::Directory;
use crate::services::i18n::{Catalog, Lang};
use crate::services::output::{print_rows, print_value};
use crate::services::storage::{self, audit};
use crate::services::submission;
use crate::services::validation::{all_tags, tags_for_role, unknown_tags, validate_form};

pub fn handle_submit(
    cli: &Cli,
    api: &Api,
    catalog: &Catalog,
    args: &SubmitArgs,
) -> anyhow::Result<()> {
    let draft = draft_from_args(args);

    let errors = validate_form(&draft, |key| catalog.t(key));
    if !errors.is_empty() {
        return Err(CliError::Validation(errors).into());
    }

    let bad_tags = unknown_tags(&draft.role, &draft.tech_tags);
    if !bad_tags.is_empty() {
        return Err(CliError::UnknownTags(bad_tags.join(", ")).into());
    }

    let remaining = submission::cooldown_remaining();
    if remaining > 0 {
        let seconds = remaining.div_ceil(1000);
        let msg = catalog.t_with("form.cooldown", &[("seconds", seconds.to_string())]);
        return Err(CliError::CooldownActive(msg).into());
    }

    let payload = payload_from_draft(&draft);

    // Enrichment writes go out before the submit attempt; their failures
    // are invisible.
    let directory = Directory::new(api.clone());
    directory.upsert_company(&payload.company_name);
    directory.upsert_role(&payload.role);

    let receipt = submission::submit(api, payload)?;
    submission::start_cooldown()?;
    audit(
        "submit",
        serde_json::json!({"status": receipt.status.as_str(), "role": receipt_role(&draft)}),
    );

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: receipt
            })?
        );
    } else {
        if receipt.status == "delivered" {
            println!("{}", catalog.t("success.submitted"));
        } else {
            println!("{}", catalog.t("success.savedLocally"));
        }
        println!("{} {}", catalog.t("success.claimToken"), receipt.claim_token);
        if let Some(id) = &receipt.server_id {
            println!("submission id: {}", id);
        }
    }
    Ok(())
}

fn draft_from_args(args: &SubmitArgs) -> Draft {
    Draft {
        role: args.role.clone().unwrap_or_default(),
        custom_role: args.custom_role.clone().unwrap_or_default(),
        level: args.level.clone().unwrap_or_default(),
        experience_years: args.experience.clone().unwrap_or_default(),
        salary_amount: args.salary.clone().unwrap_or_default(),
        currency: args.currency.clone(),
        period: args.period.clone(),
        net_or_gross: args.net_or_gross.clone(),
        location: args.location.clone().unwrap_or_default(),
        custom_location: args.custom_location.clone().unwrap_or_default(),
        contract_type: args.contract_type.clone().unwrap_or_default(),
        company_name: args.company.clone().unwrap_or_default(),
        custom_company: args.custom_company.clone().unwrap_or_default(),
        tech_tags: args.tags.clone(),
    }
}

fn resolve(selected: &str, custom: &str) -> String {
    Choice::from_parts(selected, custom)
        .and_then(|c| c.resolve().map(str::to_string))
        .unwrap_or_default()
}

fn receipt_role(draft: &Draft) -> String {
    resolve(&draft.role, &draft.custom_role)
}

/// Only called on a validated draft: every resolve yields a non-empty value
/// and both numbers parse.
fn payload_from_draft(draft: &Draft) -> SalarySubmission {
    SalarySubmission {
        role: resolve(&draft.role, &draft.custom_role),
        level: draft.level.clone(),
        experience_years: draft.experience_years.trim().parse().unwrap_or(0.0),
        salary_amount: draft.salary_amount.trim().parse().unwrap_or(0.0),
        currency: draft.currency.clone(),
        period: draft.period.clone(),
        net_or_gross: draft.net_or_gross.clone(),
        location: resolve(&draft.location, &draft.custom_location),
        company_name: resolve(&draft.company_name, &draft.custom_company),
        contract_type: (!draft.contract_type.is_empty()).then(|| draft.contract_type.clone()),
        tech_tags: draft.tech_tags.clone(),
        claim_token: uuid::Uuid::new_v4().to_string(),
    }
}

pub fn handle_cooldown(cli: &Cli) -> anyhow::Result<()> {
    let remaining = submission::cooldown_remaining();
    print_value(
        cli.json,
        serde_json::json!({ "remainingMs": remaining }),
        |_| remaining.to_string(),
    )
}

pub fn handle_directory(cli: &Cli, api: &Api, kind: DirectoryKind) -> anyhow::Result<()> {
    let directory = Directory::new(api.clone());
    let fetched = match kind {
        DirectoryKind::Companies => directory.companies(),
        DirectoryKind::Roles => directory.roles(),
    };
    if !fetched.is_empty() {
        let _ = storage::save_directory_cache(api.base(), kind, &fetched);
    }

    let defaults = match kind {
        DirectoryKind::Companies => Vec::new(),
        DirectoryKind::Roles => default_roles(),
    };
    let cached = storage::load_directory_cache(api.base(), kind);
    let mut merged: Vec<String> = defaults
        .into_iter()
        .chain(cached)
        .chain(fetched)
        .collect();
    merged.sort();
    merged.dedup();

    print_rows(cli.json, &merged, |name| name.clone())
}

pub fn handle_tags(cli: &Cli, role: Option<&str>) -> anyhow::Result<()> {
    let tags: Vec<String> = match role {
        Some(role) => tags_for_role(role).into_iter().map(str::to_string).collect(),
        None => all_tags().into_iter().map(str::to_string).collect(),
    };
    print_rows(cli.json, &tags, |tag| tag.clone())
}

pub fn handle_lang_commands(
    cli: &Cli,
    catalog: &Catalog,
    command: &LangCommands,
) -> anyhow::Result<()> {
    match command {
        LangCommands::Show => print_value(
            cli.json,
            serde_json::json!({ "lang": catalog.lang().code() }),
            |_| catalog.lang().code().to_string(),
        ),
        LangCommands::Set { code } => {
            let Some(lang) = Lang::from_code(code) else {
                anyhow::bail!("unsupported language: {} (expected en, hy, or ru)", code);
            };
            storage::save_lang(lang.code())?;
            audit("lang_set", serde_json::json!({ "lang": lang.code() }));
            print_value(
                cli.json,
                serde_json::json!({ "lang": lang.code() }),
                |_| format!("language set to {}", lang.code()),
            )
        }
    }
}
