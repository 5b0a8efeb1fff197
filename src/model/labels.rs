use ahash::AHashMap;
use serde_json::Value;

use crate::model::rich_text::TrustedHtml;
use crate::mvu::error::ScoreboardError;

pub const START: &str = "Scoreboard.Start";
pub const NAME: &str = "Scoreboard.Name";
pub const CATEGORY: &str = "Scoreboard.Category";
pub const BIRTH: &str = "Scoreboard.Birth";
pub const TEAM: &str = "Scoreboard.Team";
pub const SNATCH: &str = "Scoreboard.Snatch";
pub const RANK: &str = "Scoreboard.Rank";
pub const CLEAN_AND_JERK: &str = "Scoreboard.Clean_and_Jerk";
pub const TOTAL: &str = "Scoreboard.Total";

const ENGLISH: [(&str, &str); 9] = [
    (START, "Start"),
    (NAME, "Name"),
    (CATEGORY, "Cat."),
    (BIRTH, "Born"),
    (TEAM, "Team"),
    (SNATCH, "Snatch"),
    (RANK, "Rank"),
    (CLEAN_AND_JERK, "Clean&amp;Jerk"),
    (TOTAL, "Total"),
];

/// Resolves fixed labels by stable key. Labels may carry markup.
pub trait Translate: Send + Sync {
    fn label(&self, key: &str) -> TrustedHtml;
}

#[derive(Debug, Clone)]
pub struct LabelCatalog {
    labels: AHashMap<String, TrustedHtml>,
}

impl Default for LabelCatalog {
    fn default() -> Self {
        Self::english()
    }
}

impl LabelCatalog {
    #[must_use]
    pub fn english() -> Self {
        let labels = ENGLISH
            .iter()
            .map(|(k, v)| ((*k).to_string(), TrustedHtml::new(v)))
            .collect();
        Self { labels }
    }

    /// Builds a catalog from a JSON object of key to label, over the English defaults.
    ///
    /// # Errors
    ///
    /// Returns `ScoreboardError::Labels` if the value is not an object of strings.
    pub fn from_json(json: &Value) -> Result<Self, ScoreboardError> {
        let obj = json
            .as_object()
            .ok_or_else(|| ScoreboardError::Labels("label file must be a JSON object".into()))?;
        let mut catalog = Self::english();
        for (key, value) in obj {
            let text = value.as_str().ok_or_else(|| {
                ScoreboardError::Labels(format!("label '{key}' is not a string"))
            })?;
            catalog.labels.insert(key.clone(), TrustedHtml::new(text));
        }
        Ok(catalog)
    }
}

impl Translate for LabelCatalog {
    fn label(&self, key: &str) -> TrustedHtml {
        match self.labels.get(key) {
            Some(label) => label.clone(),
            None => {
                log::debug!("no label for key {key}");
                TrustedHtml::new(key)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_entries_override_defaults() {
        let catalog = LabelCatalog::from_json(&json!({ "Scoreboard.Rank": "Rang" }))
            .expect("valid labels");
        assert_eq!(catalog.label(RANK).as_str(), "Rang");
        assert_eq!(catalog.label(TOTAL).as_str(), "Total");
        assert_eq!(catalog.label("Scoreboard.Unknown").as_str(), "Scoreboard.Unknown");
    }

    #[test]
    fn rejects_non_string_labels() {
        assert!(LabelCatalog::from_json(&json!({ "Scoreboard.Rank": 3 })).is_err());
        assert!(LabelCatalog::from_json(&json!(["Rank"])).is_err());
    }
}
