//! Option lists for the demo host.
//!
//! Options come from a JSON file of `{ "label": ..., "value": ... }` objects,
//! or from a built-in list of sample users keyed by id.

use std::fs;
use std::path::Path;

use seekbox::{OptionKey, SelectOption};
use serde_json::Value;

use crate::error::AppError;

const SAMPLE_USERS: [&str; 10] = [
    "Leanne Graham",
    "Ervin Howell",
    "Clementine Bauch",
    "Patricia Lebsack",
    "Chelsey Dietrich",
    "Mrs. Dennis Schulist",
    "Kurtis Weissnat",
    "Nicholas Runolfsdottir V",
    "Glenna Reichert",
    "Clementina DuBuque",
];

/// Built-in users with ids starting at 1.
pub fn sample() -> Vec<SelectOption<Value>> {
    SAMPLE_USERS
        .iter()
        .zip(1u64..)
        .map(|(name, id)| SelectOption::new(*name, Value::from(id)))
        .collect()
}

/// Read options from a JSON file.
pub fn load(path: &Path) -> Result<Vec<SelectOption<Value>>, AppError> {
    let raw = fs::read_to_string(path)?;
    let options = parse(&raw)?;
    log::info!("Loaded {} options from {}", options.len(), path.display());
    Ok(options)
}

pub fn parse(raw: &str) -> Result<Vec<SelectOption<Value>>, AppError> {
    Ok(serde_json::from_str(raw)?)
}

/// Identity of a JSON option value.
pub fn value_key(value: &Value) -> OptionKey {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map_or_else(|| OptionKey::Text(n.to_string()), OptionKey::Number),
        Value::String(s) => OptionKey::Text(s.clone()),
        other => OptionKey::Text(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_start_at_one() {
        let options = sample();
        assert_eq!(options.len(), 10);
        assert_eq!(options[0].label(), "Leanne Graham");
        assert_eq!(value_key(options[0].value()), OptionKey::Number(1));
        assert_eq!(value_key(options[9].value()), OptionKey::Number(10));
    }

    #[test]
    fn test_parse_mixed_values() {
        let raw = r#"[{"label":"One","value":1},{"label":"Two","value":"two"}]"#;
        let options = parse(raw).unwrap();
        assert_eq!(value_key(options[0].value()), OptionKey::Number(1));
        assert_eq!(value_key(options[1].value()), OptionKey::Text("two".to_string()));
    }

    #[test]
    fn test_parse_rejects_missing_label() {
        assert!(parse(r#"[{"value":1}]"#).is_err());
    }

    #[test]
    fn test_fractional_numbers_keyed_by_text() {
        assert_eq!(value_key(&Value::from(1.5)), OptionKey::Text("1.5".to_string()));
    }
}
