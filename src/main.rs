use clap::Parser;

mod api;
mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::CliError;
use services::i18n::{Catalog, Lang, DEFAULT_LANG};
use services::storage;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_error(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = storage::load_config()?;
    let catalog = Catalog::new(resolve_lang(cli));
    let base = cli
        .api_base
        .clone()
        .or(config.api_base)
        .unwrap_or_else(|| api::DEFAULT_API_BASE.to_string());
    let submit_url = cli.submit_url.clone().or(config.submit_url);
    let api = api::Api::new(&base, submit_url);
    commands::handle(cli, &api, &catalog)
}

// Unsupported codes fall through to the stored choice, then the default.
fn resolve_lang(cli: &Cli) -> Lang {
    cli.lang
        .as_deref()
        .and_then(Lang::from_code)
        .or_else(|| storage::load_lang().as_deref().and_then(Lang::from_code))
        .unwrap_or(DEFAULT_LANG)
}

fn report_error(json: bool, err: &anyhow::Error) {
    let cli_err = err.downcast_ref::<CliError>();
    let code = cli_err.map(CliError::code).unwrap_or("ERROR");
    if json {
        let mut error = serde_json::json!({
            "code": code,
            "message": err.to_string(),
        });
        if let Some(CliError::Validation(fields)) = cli_err {
            if let Ok(fields) = serde_json::to_value(fields) {
                error["fields"] = fields;
            }
        }
        println!("{}", serde_json::json!({ "ok": false, "error": error }));
    } else {
        eprintln!("error: {}", err);
        if let Some(CliError::Validation(fields)) = cli_err {
            for (field, message) in fields {
                eprintln!("  {}: {}", field, message);
            }
        }
    }
}
