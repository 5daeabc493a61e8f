//! Shape checks over the model's verdict.
//!
//! The verdict is relayed to the caller verbatim — these checks only feed
//! operator logs. Model output is non-deterministic, so a deviation is a
//! warning, never a rejection.

use serde_json::Value;

/// The keys the analysis prompt asks the model to produce.
pub const EXPECTED_KEYS: [&str; 4] = [
    "fit_score_percent",
    "summary",
    "issues_to_update",
    "alternative_summary",
];

/// Returns one message per deviation from the expected verdict shape.
/// Empty means the verdict looks like what the prompt asked for.
pub fn shape_warnings(verdict: &Value) -> Vec<String> {
    let Some(object) = verdict.as_object() else {
        return vec!["verdict is not a JSON object".to_string()];
    };

    let mut warnings = Vec::new();
    for key in EXPECTED_KEYS {
        if !object.contains_key(key) {
            warnings.push(format!("missing key '{key}'"));
        }
    }

    if let Some(score) = object.get("fit_score_percent") {
        match score.as_u64() {
            Some(s) if s <= 100 => {}
            _ => warnings.push(format!("fit_score_percent out of range: {score}")),
        }
    }

    if let Some(issues) = object.get("issues_to_update") {
        match issues.as_array() {
            Some(list) if (3..=5).contains(&list.len()) => {}
            Some(list) => warnings.push(format!(
                "issues_to_update has {} items, expected 3-5",
                list.len()
            )),
            None => warnings.push("issues_to_update is not a list".to_string()),
        }
    }

    warnings
}
