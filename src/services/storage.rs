use crate::api::DirectoryKind;
use crate::domain::models::{Config, QueuedSubmission};
use sha2::{Digest, Sha256};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn audit(action: &str, data: serde_json::Value) {
    let Ok(home) = std::env::var("HOME") else {
        return;
    };
    let path = PathBuf::from(home).join(".config/devcareer/audit.jsonl");
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let event = serde_json::json!({
        "ts": now_secs(),
        "action": action,
        "data": data
    });
    let line = format!("{}\n", event);
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .and_then(|mut f| std::io::Write::write_all(&mut f, line.as_bytes()));
}

pub fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn config_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/devcareer"))
}

fn queue_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("queue.json"))
}

fn cooldown_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("last_submit"))
}

fn lang_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("lang"))
}

fn config_path() -> anyhow::Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn load_config() -> anyhow::Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(toml::from_str(&raw)?)
}

/// Stored queue data may predate the current schema or be hand-edited;
/// anything that does not parse is treated as an empty queue.
pub fn parse_queue(raw: &str) -> Vec<QueuedSubmission> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn load_queue() -> Vec<QueuedSubmission> {
    let Ok(p) = queue_path() else {
        return Vec::new();
    };
    match std::fs::read_to_string(p) {
        Ok(raw) => parse_queue(&raw),
        Err(_) => Vec::new(),
    }
}

pub fn save_queue(queue: &[QueuedSubmission]) -> anyhow::Result<()> {
    let p = queue_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(queue)?)?;
    Ok(())
}

pub fn read_cooldown_started() -> Option<u64> {
    let p = cooldown_path().ok()?;
    let raw = std::fs::read_to_string(p).ok()?;
    raw.trim().parse().ok()
}

pub fn write_cooldown_started(started_ms: u64) -> anyhow::Result<()> {
    let p = cooldown_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, started_ms.to_string())?;
    Ok(())
}

pub fn load_lang() -> Option<String> {
    let p = lang_path().ok()?;
    let raw = std::fs::read_to_string(p).ok()?;
    let code = raw.trim();
    (!code.is_empty()).then(|| code.to_string())
}

pub fn save_lang(code: &str) -> anyhow::Result<()> {
    let p = lang_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, code)?;
    Ok(())
}

fn directory_cache_path(base: &str, kind: DirectoryKind) -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    let mut hasher = Sha256::new();
    hasher.update(base.as_bytes());
    let id = hex::encode(hasher.finalize());
    Ok(PathBuf::from(home)
        .join(".cache")
        .join("devcareer")
        .join("directory")
        .join(format!("{}-{}.json", id, kind.path())))
}

pub fn load_directory_cache(base: &str, kind: DirectoryKind) -> Vec<String> {
    let Ok(p) = directory_cache_path(base, kind) else {
        return Vec::new();
    };
    match std::fs::read_to_string(p) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}

pub fn save_directory_cache(base: &str, kind: DirectoryKind, names: &[String]) -> anyhow::Result<()> {
    let p = directory_cache_path(base, kind)?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(names)?)?;
    Ok(())
}
