use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::model::{AttemptBarSnapshot, GroupInfo, ResultRow, Snapshot};
use crate::mvu::board::{Msg, RefereeVerdicts};
use crate::mvu::error::ScoreboardError;

#[derive(Debug, Deserialize)]
pub struct DecisionsPayload {
    pub decisions: RefereeVerdicts,
}

#[derive(Debug, Deserialize)]
pub struct BreakTimerPayload {
    pub seconds: u32,
}

/// Maps an event name from the push channel to its message.
///
/// # Errors
///
/// Returns `ScoreboardError::UnknownEvent` for names that are not board events.
pub fn parse_event_name(name: &str) -> Result<Msg, ScoreboardError> {
    match name.trim() {
        "reset" => Ok(Msg::Reset),
        "start" => Ok(Msg::Start),
        "decision" | "refereeDecision" | "down" => Ok(Msg::RefereeDecision),
        "break" | "enterBreak" => Ok(Msg::EnterBreak),
        "done" | "groupDone" => Ok(Msg::GroupDone),
        other => Err(ScoreboardError::UnknownEvent(other.to_string())),
    }
}

fn lenient<T: DeserializeOwned + Default>(value: Option<&Value>, what: &str) -> T {
    let Some(value) = value else {
        log::warn!("snapshot has no {what}, showing it empty");
        return T::default();
    };
    match serde_json::from_value(value.clone()) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("malformed {what} ({e}), showing it empty");
            T::default()
        }
    }
}

/// Decodes a pushed snapshot. Fields are read one by one, so an unreadable
/// field renders empty and keeps the rest of its record. A row that is not an
/// object at all becomes an empty placeholder instead of losing the table.
///
/// # Errors
///
/// Returns `ScoreboardError::Decode` if the payload is not a JSON object or
/// `rows` is present but not an array.
pub fn decode_snapshot(json: &Value) -> Result<Snapshot, ScoreboardError> {
    let obj = json
        .as_object()
        .ok_or_else(|| ScoreboardError::Decode("snapshot must be a JSON object".into()))?;

    let group: GroupInfo = lenient(obj.get("group"), "group");
    let attempt_bar: AttemptBarSnapshot = lenient(
        obj.get("attemptBar").or_else(|| obj.get("attempt_bar")),
        "attempt bar",
    );

    let rows = match obj.get("rows") {
        None | Some(Value::Null) => vec![],
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| match serde_json::from_value::<ResultRow>(item.clone()) {
                Ok(row) => row,
                Err(e) => {
                    log::warn!("row {idx} is malformed ({e}), rendering a placeholder");
                    ResultRow::placeholder()
                }
            })
            .collect(),
        Some(_) => return Err(ScoreboardError::Decode("rows must be an array".into())),
    };

    Ok(Snapshot::new(group, attempt_bar, rows))
}
