use serde::{Deserialize, Serialize};

use crate::domain::constants::OTHER;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Raw form input as collected from the CLI, before validation.
///
/// Every field is kept as entered; the validator owns parsing and membership
/// checks so that a bad value surfaces as a field error instead of an
/// argument-parse failure.
#[derive(Debug, Default, Clone)]
pub struct Draft {
    pub role: String,
    pub custom_role: String,
    pub level: String,
    pub experience_years: String,
    pub salary_amount: String,
    pub currency: String,
    pub period: String,
    pub net_or_gross: String,
    pub location: String,
    pub custom_location: String,
    pub contract_type: String,
    pub company_name: String,
    pub custom_company: String,
    pub tech_tags: Vec<String>,
}

/// A selected value that may be the `Other` sentinel plus free text.
///
/// Role, location, and company all share this shape; resolving through one
/// type keeps the "picked Other but left the text blank" handling in a single
/// place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Known(String),
    Custom(String),
}

impl Choice {
    /// `None` when nothing was selected at all.
    pub fn from_parts(selected: &str, custom: &str) -> Option<Choice> {
        if selected.is_empty() {
            None
        } else if selected == OTHER {
            Some(Choice::Custom(custom.to_string()))
        } else {
            Some(Choice::Known(selected.to_string()))
        }
    }

    /// The value that would go on the wire; `None` for a blank custom entry.
    pub fn resolve(&self) -> Option<&str> {
        match self {
            Choice::Known(v) => Some(v.as_str()),
            Choice::Custom(text) => {
                let t = text.trim();
                (!t.is_empty()).then_some(t)
            }
        }
    }
}

/// Wire payload for `POST {base}/submit`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySubmission {
    pub role: String,
    pub level: String,
    pub experience_years: f64,
    pub salary_amount: f64,
    pub currency: String,
    pub period: String,
    pub net_or_gross: String,
    pub location: String,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tech_tags: Vec<String>,
    pub claim_token: String,
}

/// Queue storage entry: the payload plus the moment it was parked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueuedSubmission {
    #[serde(flatten)]
    pub submission: SalarySubmission,
    pub queued_at: u64,
}

/// Outcome of a submit attempt shown to the user.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    pub claim_token: String,
    /// "delivered" or "queued".
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RetryReport {
    pub sent: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
pub struct ExportReport {
    pub path: String,
    pub entries: usize,
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub submit_url: Option<String>,
}
