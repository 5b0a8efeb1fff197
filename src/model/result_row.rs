use serde::{Deserialize, Serialize};

use crate::model::lenient;
use crate::model::rich_text::TrustedHtml;

/// Attempts per lift discipline.
pub const ATTEMPTS_PER_LIFT: usize = 3;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pending,
    Good,
    Fail,
    #[default]
    Empty,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowClass {
    #[default]
    Normal,
    Current,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AttemptCell {
    #[serde(deserialize_with = "lenient::or_default")]
    pub string_value: String,
    #[serde(deserialize_with = "lenient::or_default")]
    pub outcome: Outcome,
    #[serde(deserialize_with = "lenient::or_default")]
    pub is_active_attempt: bool,
}

impl AttemptCell {
    #[must_use]
    pub fn new(string_value: &str, outcome: Outcome) -> Self {
        Self {
            string_value: string_value.to_string(),
            outcome,
            is_active_attempt: false,
        }
    }

    #[must_use]
    pub fn active(mut self) -> Self {
        self.is_active_attempt = true;
        self
    }
}

/// One line of the results table, computed upstream.
///
/// Every display field is optional and decoded on its own: a producer that
/// omits one, or sends one that cannot be read, gets an empty cell rather than
/// a broken row.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultRow {
    #[serde(deserialize_with = "lenient::or_default")]
    pub is_spacer: bool,
    #[serde(deserialize_with = "lenient::or_default")]
    pub start_number: Option<u32>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub full_name: Option<TrustedHtml>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub year_of_birth: Option<i32>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub team_name: Option<String>,
    #[serde(
        rename = "sattempts",
        alias = "snatchAttempts",
        deserialize_with = "lenient::seq_or_default"
    )]
    pub snatch_attempts: Vec<AttemptCell>,
    #[serde(
        rename = "cattempts",
        alias = "cleanJerkAttempts",
        deserialize_with = "lenient::seq_or_default"
    )]
    pub clean_jerk_attempts: Vec<AttemptCell>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub snatch_rank: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub clean_jerk_rank: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub total: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub total_rank: Option<String>,
    #[serde(deserialize_with = "lenient::or_default")]
    pub row_class: RowClass,
}

impl ResultRow {
    #[must_use]
    pub fn spacer() -> Self {
        Self {
            is_spacer: true,
            ..Self::default()
        }
    }

    /// Row standing in for one the producer sent but could not be read.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_current(&self) -> bool {
        !self.is_spacer && self.row_class == RowClass::Current
    }
}

/// Position of the row to highlight as current.
///
/// Only the first non-spacer current row counts; later ones render as normal.
#[must_use]
pub fn highlighted_row(rows: &[ResultRow]) -> Option<usize> {
    rows.iter().position(ResultRow::is_current)
}

#[must_use]
pub fn current_row_count(rows: &[ResultRow]) -> usize {
    rows.iter().filter(|r| r.is_current()).count()
}

/// Rows carrying more attempts than a lift has; the extras are not shown.
#[must_use]
pub fn oversized_attempt_rows(rows: &[ResultRow]) -> usize {
    rows.iter()
        .filter(|r| {
            r.snatch_attempts.len() > ATTEMPTS_PER_LIFT
                || r.clean_jerk_attempts.len() > ATTEMPTS_PER_LIFT
        })
        .count()
}

/// Attempt cell at `idx`, or `None` when the producer sent fewer than three.
#[must_use]
pub fn attempt_at(cells: &[AttemptCell], idx: usize) -> Option<&AttemptCell> {
    if idx < ATTEMPTS_PER_LIFT {
        cells.get(idx)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(n: usize) -> Vec<AttemptCell> {
        (0..n).map(|_| AttemptCell::new("100", Outcome::Good)).collect()
    }

    #[test]
    fn counts_rows_with_extra_attempts_once() {
        let rows = vec![
            ResultRow {
                snatch_attempts: cells(4),
                clean_jerk_attempts: cells(5),
                ..ResultRow::default()
            },
            ResultRow {
                snatch_attempts: cells(3),
                ..ResultRow::default()
            },
            ResultRow {
                clean_jerk_attempts: cells(4),
                ..ResultRow::default()
            },
            ResultRow::spacer(),
        ];
        assert_eq!(oversized_attempt_rows(&rows), 2);
        assert_eq!(oversized_attempt_rows(&rows[1..2]), 0);
    }

    #[test]
    fn attempts_past_the_third_are_out_of_range() {
        let four = cells(4);
        assert!(attempt_at(&four, 2).is_some());
        assert!(attempt_at(&four, 3).is_none());
        assert!(attempt_at(&cells(1), 1).is_none());
    }
}
