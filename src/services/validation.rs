use std::collections::BTreeMap;

use crate::domain::constants::{
    CURRENCIES, LEVELS, NET_GROSS, OTHER, PERIODS, ROLE_TECH_TAGS, SALARY_CEILING,
};
use crate::domain::models::{Choice, Draft};

/// Allowed tech-tag vocabulary for a role. Unknown roles and the `Other`
/// sentinel get the union of every role's set.
pub fn tags_for_role(role: &str) -> Vec<&'static str> {
    if role != OTHER {
        if let Some((_, tags)) = ROLE_TECH_TAGS.iter().find(|(name, _)| *name == role) {
            return tags.to_vec();
        }
    }
    all_tags()
}

pub fn all_tags() -> Vec<&'static str> {
    let mut out: Vec<&'static str> = ROLE_TECH_TAGS
        .iter()
        .flat_map(|(_, tags)| tags.iter().copied())
        .collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Tags in `tags` that fall outside the role's vocabulary.
pub fn unknown_tags(role: &str, tags: &[String]) -> Vec<String> {
    let allowed = tags_for_role(role);
    tags.iter()
        .filter(|t| !allowed.contains(&t.as_str()))
        .cloned()
        .collect()
}

// Unparseable input behaves like NaN so range comparisons stay false.
fn parse_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Check a draft against every field rule independently.
///
/// Returns field name → localized message; empty means the draft is valid.
/// `t` maps a message key to the user's language.
pub fn validate_form(
    draft: &Draft,
    t: impl Fn(&str) -> String,
) -> BTreeMap<&'static str, String> {
    let mut errors = BTreeMap::new();

    match Choice::from_parts(&draft.role, &draft.custom_role) {
        None => {
            errors.insert("role", t("validation.roleRequired"));
        }
        Some(choice) => {
            if choice.resolve().is_none() {
                errors.insert("customRole", t("validation.specifyRole"));
            }
        }
    }

    if !LEVELS.contains(&draft.level.as_str()) {
        errors.insert("level", t("validation.levelRequired"));
    }

    if draft.experience_years.is_empty() {
        errors.insert("experienceYears", t("validation.experienceRequired"));
    } else {
        let exp = parse_number(&draft.experience_years);
        if !exp.is_finite() || exp < 0.0 || exp > 40.0 {
            errors.insert("experienceYears", t("validation.experienceRange"));
        }
    }

    if draft.salary_amount.is_empty() {
        errors.insert("salaryAmount", t("validation.salaryRequired"));
    } else {
        let sal = parse_number(&draft.salary_amount);
        if !sal.is_finite() || sal <= 0.0 {
            errors.insert("salaryAmount", t("validation.salaryPositive"));
        }
        // The ceiling check replaces, never joins, the positivity error.
        if sal > SALARY_CEILING {
            errors.insert("salaryAmount", t("validation.salaryTooHigh"));
        }
    }

    if !CURRENCIES.contains(&draft.currency.as_str()) {
        errors.insert("currency", t("validation.currencyRequired"));
    }
    if !PERIODS.contains(&draft.period.as_str()) {
        errors.insert("period", t("validation.periodRequired"));
    }
    if !NET_GROSS.contains(&draft.net_or_gross.as_str()) {
        errors.insert("netOrGross", t("validation.netOrGrossRequired"));
    }

    match Choice::from_parts(&draft.location, &draft.custom_location) {
        None => {
            errors.insert("location", t("validation.locationRequired"));
        }
        Some(choice) => {
            if choice.resolve().is_none() {
                errors.insert("customLocation", t("validation.specifyLocation"));
            }
        }
    }

    match Choice::from_parts(&draft.company_name, &draft.custom_company) {
        None => {
            errors.insert("companyName", t("validation.companyRequired"));
        }
        Some(choice) => {
            if choice.resolve().is_none() {
                errors.insert("customCompany", t("validation.specifyCompany"));
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> String {
        k.to_string()
    }

    fn valid_draft() -> Draft {
        Draft {
            role: "Backend".into(),
            level: "Senior".into(),
            experience_years: "7".into(),
            salary_amount: "1500000".into(),
            currency: "AMD".into(),
            period: "Monthly".into(),
            net_or_gross: "Net".into(),
            location: "Yerevan".into(),
            company_name: "Example LLC".into(),
            ..Draft::default()
        }
    }

    #[test]
    fn valid_draft_produces_no_errors() {
        assert!(validate_form(&valid_draft(), key).is_empty());
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate_form(&Draft::default(), key);
        for field in [
            "role",
            "level",
            "experienceYears",
            "salaryAmount",
            "currency",
            "period",
            "netOrGross",
            "location",
            "companyName",
        ] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
        assert!(!errors.contains_key("customRole"));
        assert!(!errors.contains_key("customCompany"));
    }

    #[test]
    fn salary_zero_must_be_positive() {
        let mut draft = valid_draft();
        draft.salary_amount = "0".into();
        let errors = validate_form(&draft, key);
        assert_eq!(errors["salaryAmount"], "validation.salaryPositive");
    }

    #[test]
    fn salary_over_ceiling_reports_too_high_only() {
        let mut draft = valid_draft();
        draft.salary_amount = "100000001".into();
        let errors = validate_form(&draft, key);
        assert_eq!(errors["salaryAmount"], "validation.salaryTooHigh");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn salary_under_ceiling_is_fine() {
        let mut draft = valid_draft();
        draft.salary_amount = "50000000".into();
        assert!(validate_form(&draft, key).is_empty());
    }

    #[test]
    fn salary_rejects_non_numbers_and_nan() {
        for bad in ["abc", "NaN"] {
            let mut draft = valid_draft();
            draft.salary_amount = bad.into();
            let errors = validate_form(&draft, key);
            assert_eq!(errors["salaryAmount"], "validation.salaryPositive", "{bad}");
        }
    }

    #[test]
    fn experience_boundaries_are_inclusive() {
        for ok in ["0", "40", "2.5"] {
            let mut draft = valid_draft();
            draft.experience_years = ok.into();
            assert!(validate_form(&draft, key).is_empty(), "{ok}");
        }
        for bad in ["-1", "41", "inf", "abc"] {
            let mut draft = valid_draft();
            draft.experience_years = bad.into();
            let errors = validate_form(&draft, key);
            assert_eq!(errors["experienceYears"], "validation.experienceRange", "{bad}");
        }
    }

    #[test]
    fn other_role_requires_companion_text() {
        let mut draft = valid_draft();
        draft.role = "Other".into();
        let errors = validate_form(&draft, key);
        assert_eq!(errors["customRole"], "validation.specifyRole");

        draft.custom_role = "  Solutions Architect  ".into();
        assert!(validate_form(&draft, key).is_empty());
    }

    #[test]
    fn other_location_requires_companion_text() {
        let mut draft = valid_draft();
        draft.location = "Other".into();
        draft.custom_location = "   ".into();
        let errors = validate_form(&draft, key);
        assert_eq!(errors["customLocation"], "validation.specifyLocation");

        draft.custom_location = "Tbilisi".into();
        assert!(validate_form(&draft, key).is_empty());
    }

    #[test]
    fn company_errors_distinguish_missing_from_unspecified() {
        let mut draft = valid_draft();
        draft.company_name = String::new();
        let errors = validate_form(&draft, key);
        assert_eq!(errors["companyName"], "validation.companyRequired");
        assert!(!errors.contains_key("customCompany"));

        draft.company_name = "Other".into();
        let errors = validate_form(&draft, key);
        assert_eq!(errors["customCompany"], "validation.specifyCompany");
        assert!(!errors.contains_key("companyName"));

        draft.custom_company = "My Startup".into();
        assert!(validate_form(&draft, key).is_empty());
    }

    #[test]
    fn level_and_enums_are_membership_checked() {
        let mut draft = valid_draft();
        draft.level = "Principal".into();
        draft.currency = "GBP".into();
        draft.period = "Weekly".into();
        draft.net_or_gross = "Gross-ish".into();
        let errors = validate_form(&draft, key);
        assert_eq!(errors["level"], "validation.levelRequired");
        assert_eq!(errors["currency"], "validation.currencyRequired");
        assert_eq!(errors["period"], "validation.periodRequired");
        assert_eq!(errors["netOrGross"], "validation.netOrGrossRequired");
    }

    #[test]
    fn role_vocabulary_bounds_tags() {
        assert!(tags_for_role("DevOps").contains(&"Terraform"));
        assert!(!tags_for_role("Project Manager").contains(&"Rust"));
        assert!(tags_for_role("Other").contains(&"Rust"));
        assert!(tags_for_role("Carpenter").contains(&"Rust"));

        let bad = unknown_tags("Backend", &["Rust".into(), "Crochet".into()]);
        assert_eq!(bad, vec!["Crochet".to_string()]);
    }
}
