use serde::Deserialize;

use crate::mvu::board::{DisplayMode, Msg};

/// Field-of-play state as reported by the competition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FopState {
    Inactive,
    Break,
    CurrentAthlete,
    TimeRunning,
    DownSignaled,
    DecisionVisible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BreakType {
    BeforeIntroduction,
    FirstSnatch,
    FirstCj,
    GroupDone,
    Jury,
    Challenge,
    Marshal,
    Technical,
    Ceremony,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FopUpdate {
    pub fop_state: FopState,
    #[serde(default)]
    pub break_type: Option<BreakType>,
}

/// The board event implied by an engine state change, given what the board
/// shows now. `None` when the board already matches.
#[must_use]
pub fn board_event(mode: DisplayMode, update: &FopUpdate) -> Option<Msg> {
    match update.fop_state {
        FopState::Inactive => None,
        FopState::Break => match (update.break_type, mode) {
            (Some(BreakType::GroupDone), DisplayMode::GroupDone) => None,
            (Some(BreakType::GroupDone), _) => Some(Msg::GroupDone),
            (_, DisplayMode::Break) => None,
            _ => Some(Msg::EnterBreak),
        },
        FopState::CurrentAthlete => match mode {
            DisplayMode::Lifting => None,
            _ => Some(Msg::Reset),
        },
        FopState::TimeRunning => Some(Msg::Start),
        FopState::DownSignaled | FopState::DecisionVisible => match mode {
            DisplayMode::DecisionPending => None,
            _ => Some(Msg::RefereeDecision),
        },
    }
}
