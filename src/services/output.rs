use crate::domain::models::JsonOut;
use serde::Serialize;

/// List output: one `row` line per item, or the whole slice inside the
/// `{ok, data}` envelope under `--json`.
pub fn print_rows<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
        return Ok(());
    }
    for item in data {
        println!("{}", row(item));
    }
    Ok(())
}

/// Scalar/report output: `text` rendering, or the envelope under `--json`.
pub fn print_value<T: Serialize>(
    json: bool,
    data: T,
    text: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", text(&data));
    }
    Ok(())
}
