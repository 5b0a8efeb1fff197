use serde_json::Value;
use std::{fs, path::PathBuf};

use super::types::Args;

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a JSON object
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The json file '{file}': {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_labels_format(&json)?;
    Ok(json)
}

/// Expected format: `{ "Scoreboard.Rank": "Rank", "Scoreboard.Total": "Total", ... }`
///
/// # Errors
///
/// Will return `Err` if the json is not an object of strings
pub fn validate_labels_format(json: &Value) -> Result<(), String> {
    let Some(obj) = json.as_object() else {
        return Err("The label file is not in the correct format. Expected an object.".to_string());
    };
    for (key, value) in obj {
        if !value.is_string() {
            return Err(format!(
                "The label '{key}' is not in the correct format. Expected a string."
            ));
        }
    }
    Ok(())
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the clock duration or the listen address is unusable
    pub fn validate(&self) -> Result<(), String> {
        if self.countdown_secs == 0 {
            return Err("countdown-secs must be greater than zero".to_string());
        }
        if self.bind.trim().is_empty() {
            return Err("bind address is required".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn labels_must_be_string_values() {
        assert!(validate_labels_format(&json!({"Scoreboard.Rank": "Rang"})).is_ok());
        assert!(validate_labels_format(&json!({"Scoreboard.Rank": 1})).is_err());
        assert!(validate_labels_format(&json!("Rank")).is_err());
    }
}
