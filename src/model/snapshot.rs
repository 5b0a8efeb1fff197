use serde::{Deserialize, Serialize};

use crate::model::lenient;
use crate::model::result_row::ResultRow;
use crate::model::rich_text::TrustedHtml;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupInfo {
    #[serde(alias = "name", deserialize_with = "lenient::or_default")]
    pub group_name: String,
    #[serde(alias = "liftsDone", deserialize_with = "lenient::or_default")]
    pub lifts_done_summary: String,
}

/// The athlete on the platform. Replaced wholesale on every new lift.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AttemptBarSnapshot {
    #[serde(deserialize_with = "lenient::or_default")]
    pub start_number: Option<u32>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub full_name: TrustedHtml,
    #[serde(deserialize_with = "lenient::or_default")]
    pub team_name: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub attempt_label: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub weight: Option<f64>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub weight_unit: String,
}

impl AttemptBarSnapshot {
    /// Weight as shown on the bar: whole kilos without decimals.
    #[must_use]
    pub fn weight_display(&self) -> String {
        match self.weight {
            Some(w) if w.fract() == 0.0 => format!("{w:.0}"),
            Some(w) => format!("{w}"),
            None => String::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub group: GroupInfo,
    pub attempt_bar: AttemptBarSnapshot,
    pub rows: Vec<ResultRow>,
}

impl Snapshot {
    #[must_use]
    pub fn new(group: GroupInfo, attempt_bar: AttemptBarSnapshot, rows: Vec<ResultRow>) -> Self {
        Self {
            group,
            attempt_bar,
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_display_drops_trailing_zero() {
        let mut bar = AttemptBarSnapshot {
            weight: Some(120.0),
            ..AttemptBarSnapshot::default()
        };
        assert_eq!(bar.weight_display(), "120");
        bar.weight = Some(120.5);
        assert_eq!(bar.weight_display(), "120.5");
        bar.weight = None;
        assert_eq!(bar.weight_display(), "");
    }

    #[test]
    fn group_accepts_short_keys() {
        let group: GroupInfo =
            serde_json::from_str(r#"{"name":"A","liftsDone":"3/9"}"#).expect("group json");
        assert_eq!(group.group_name, "A");
        assert_eq!(group.lifts_done_summary, "3/9");
    }
}
