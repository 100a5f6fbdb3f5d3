//! HTTP layer for the DevCareer collection API.

use std::time::Duration;

use crate::domain::models::SalarySubmission;

pub const DEFAULT_API_BASE: &str = "https://api.devcareer.am/v1";

const SUBMIT_TIMEOUT_MS: u64 = 8000;
const DIRECTORY_TIMEOUT_MS: u64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryKind {
    Companies,
    Roles,
}

impl DirectoryKind {
    pub fn path(self) -> &'static str {
        match self {
            DirectoryKind::Companies => "companies",
            DirectoryKind::Roles => "roles",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Api {
    base: String,
    submit_url: Option<String>,
}

impl Api {
    pub fn new(base: &str, submit_url: Option<String>) -> Api {
        Api {
            base: base.trim_end_matches('/').to_string(),
            submit_url,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn submit_url(&self) -> String {
        self.submit_url
            .clone()
            .unwrap_or_else(|| format!("{}/submit", self.base))
    }

    fn client(timeout_ms: u64) -> reqwest::Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
    }

    /// One delivery attempt. Success yields the server-assigned id when the
    /// response body carries one; any non-2xx status or transport error is a
    /// plain failure for the caller to recover from.
    pub fn submit(&self, payload: &SalarySubmission) -> reqwest::Result<Option<String>> {
        let resp = Self::client(SUBMIT_TIMEOUT_MS)?
            .post(self.submit_url())
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()?
            .error_for_status()?;
        let body: serde_json::Value = resp.json().unwrap_or(serde_json::Value::Null);
        let id = match body.get("id") {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Ok(id)
    }

    pub fn directory(&self, kind: DirectoryKind) -> reqwest::Result<Vec<String>> {
        Self::client(DIRECTORY_TIMEOUT_MS)?
            .get(format!("{}/{}", self.base, kind.path()))
            .send()?
            .error_for_status()?
            .json()
    }

    /// Enrichment write; the response is ignored entirely.
    pub fn upsert_name(&self, kind: DirectoryKind, name: &str) -> reqwest::Result<()> {
        Self::client(DIRECTORY_TIMEOUT_MS)?
            .post(format!("{}/{}", self.base, kind.path()))
            .json(&serde_json::json!({ "name": name }))
            .send()?;
        Ok(())
    }
}
