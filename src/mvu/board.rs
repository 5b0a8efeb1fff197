use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::model::{ATTEMPTS_PER_LIFT, Snapshot, current_row_count, oversized_attempt_rows};

/// Ignored-event diagnostics kept for inspection; older ones are dropped.
pub const IGNORED_EVENT_CAPACITY: usize = 64;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisplayMode {
    #[default]
    Idle,
    Lifting,
    DecisionPending,
    Break,
    GroupDone,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DisplayMode::Idle => "Idle",
            DisplayMode::Lifting => "Lifting",
            DisplayMode::DecisionPending => "DecisionPending",
            DisplayMode::Break => "Break",
            DisplayMode::GroupDone => "GroupDone",
        };
        write!(f, "{s}")
    }
}

/// A part of the board whose visibility is decided by the display mode.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Region {
    GroupHeader,
    Name,
    StartNumber,
    Team,
    Attempt,
    Weight,
    Timer,
    BreakTimer,
    Decisions,
    Table,
}

impl Region {
    /// Element id the region renders under.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Region::GroupHeader => "groupDiv",
            Region::Name => "fullNameDiv",
            Region::StartNumber => "startNumberDiv",
            Region::Team => "teamNameDiv",
            Region::Attempt => "attemptDiv",
            Region::Weight => "weightDiv",
            Region::Timer => "timerDiv",
            Region::BreakTimer => "breakTimerDiv",
            Region::Decisions => "decisionDiv",
            Region::Table => "resultsTable",
        }
    }
}

/// Regions shown by each mode, before the blanking flag is applied.
#[must_use]
pub fn mode_regions(mode: DisplayMode) -> &'static [Region] {
    use Region::*;
    match mode {
        DisplayMode::Idle => &[],
        DisplayMode::Lifting => &[
            GroupHeader,
            Name,
            StartNumber,
            Team,
            Attempt,
            Weight,
            Timer,
            Table,
        ],
        DisplayMode::DecisionPending => &[
            GroupHeader,
            Name,
            StartNumber,
            Team,
            Attempt,
            Weight,
            Timer,
            Decisions,
            Table,
        ],
        DisplayMode::Break => &[Name, BreakTimer, Table],
        DisplayMode::GroupDone => &[Name, Table],
    }
}

/// Visible regions for `mode`; a blanked board shows nothing.
#[must_use]
pub fn region_visibility(mode: DisplayMode, hidden: bool) -> BTreeSet<Region> {
    if hidden {
        return BTreeSet::new();
    }
    mode_regions(mode).iter().copied().collect()
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Reset,
    Start,
    RefereeDecision,
    EnterBreak,
    GroupDone,
    Decisions,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventKind::Reset => "reset",
            EventKind::Start => "start",
            EventKind::RefereeDecision => "refereeDecision",
            EventKind::EnterBreak => "enterBreak",
            EventKind::GroupDone => "groupDone",
            EventKind::Decisions => "decisions",
        };
        write!(f, "{s}")
    }
}

/// Destination mode for `event` in `mode`, or `None` when the event does not
/// apply there and must be ignored.
#[must_use]
pub fn transition(mode: DisplayMode, event: EventKind) -> Option<DisplayMode> {
    use DisplayMode::*;
    match (event, mode) {
        (EventKind::Reset, _) => Some(Lifting),
        (EventKind::Start, Lifting) => Some(Lifting),
        (EventKind::RefereeDecision, Lifting) => Some(DecisionPending),
        (EventKind::EnterBreak, _) => Some(Break),
        (EventKind::GroupDone, _) => Some(GroupDone),
        (EventKind::Decisions, Lifting | DecisionPending) => Some(mode),
        _ => None,
    }
}

/// Referee verdicts, left to right. `None` until the referee has decided.
pub type RefereeVerdicts = [Option<bool>; 3];

#[derive(Debug, Clone)]
pub enum Msg {
    SetSnapshot(Box<Snapshot>),
    Reset,
    Start,
    RefereeDecision,
    EnterBreak,
    GroupDone,
    SetHidden(bool),
    Decisions(RefereeVerdicts),
    BreakTimer(u32),
}

impl Msg {
    #[must_use]
    pub fn kind(&self) -> Option<EventKind> {
        match self {
            Msg::Reset => Some(EventKind::Reset),
            Msg::Start => Some(EventKind::Start),
            Msg::RefereeDecision => Some(EventKind::RefereeDecision),
            Msg::EnterBreak => Some(EventKind::EnterBreak),
            Msg::GroupDone => Some(EventKind::GroupDone),
            Msg::Decisions(_) => Some(EventKind::Decisions),
            Msg::SetSnapshot(_) | Msg::SetHidden(_) | Msg::BreakTimer(_) => None,
        }
    }
}

/// Work for the sub-components the board drives but does not own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    StartTimer,
    ResetTimer,
    ClearDecisions,
    ShowDecisions(RefereeVerdicts),
    StartBreakTimer(u32),
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct IgnoredEvent {
    pub event: EventKind,
    pub mode: DisplayMode,
    pub reason: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreboardView {
    mode: DisplayMode,
    hidden: bool,
    snapshot: Snapshot,
    ignored: VecDeque<IgnoredEvent>,
}

impl ScoreboardView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn visible_regions(&self) -> BTreeSet<Region> {
        region_visibility(self.mode, self.hidden)
    }

    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        self.visible_regions().contains(&region)
    }

    pub fn ignored_events(&self) -> impl Iterator<Item = &IgnoredEvent> {
        self.ignored.iter()
    }

    #[must_use]
    pub fn ignored_count(&self) -> usize {
        self.ignored.len()
    }

    pub fn set_snapshot(&mut self, snapshot: Snapshot) -> Vec<Effect> {
        update(self, Msg::SetSnapshot(Box::new(snapshot)))
    }

    pub fn reset(&mut self) -> Vec<Effect> {
        update(self, Msg::Reset)
    }

    pub fn start(&mut self) -> Vec<Effect> {
        update(self, Msg::Start)
    }

    pub fn referee_decision(&mut self) -> Vec<Effect> {
        update(self, Msg::RefereeDecision)
    }

    pub fn enter_break(&mut self) -> Vec<Effect> {
        update(self, Msg::EnterBreak)
    }

    pub fn group_done(&mut self) -> Vec<Effect> {
        update(self, Msg::GroupDone)
    }

    pub fn set_hidden(&mut self, hidden: bool) -> Vec<Effect> {
        update(self, Msg::SetHidden(hidden))
    }

    fn replace_snapshot(&mut self, snapshot: Snapshot) {
        let current = current_row_count(&snapshot.rows);
        if current > 1 {
            log::warn!("snapshot has {current} current rows, only the first is highlighted");
        }
        let oversized = oversized_attempt_rows(&snapshot.rows);
        if oversized > 0 {
            log::warn!(
                "snapshot has {oversized} rows with more than {ATTEMPTS_PER_LIFT} attempts, \
                 showing the first {ATTEMPTS_PER_LIFT}"
            );
        }
        self.snapshot = snapshot;
        if self.mode == DisplayMode::Idle {
            log::debug!("group loaded: {} -> {}", self.mode, DisplayMode::Lifting);
            self.mode = DisplayMode::Lifting;
        }
    }

    fn record_ignored(&mut self, event: EventKind) {
        let reason = format!("ignored event in state {}", self.mode);
        log::warn!("{event}: {reason}");
        if self.ignored.len() == IGNORED_EVENT_CAPACITY {
            self.ignored.pop_front();
        }
        self.ignored.push_back(IgnoredEvent {
            event,
            mode: self.mode,
            reason,
            at: Utc::now(),
        });
    }
}

fn event_effects(msg: &Msg) -> Vec<Effect> {
    match msg {
        Msg::Reset => vec![Effect::ResetTimer, Effect::ClearDecisions],
        Msg::Start => vec![Effect::StartTimer],
        Msg::Decisions(verdicts) => vec![Effect::ShowDecisions(*verdicts)],
        _ => vec![],
    }
}

/// Applies one message to the board and returns the sub-component work it implies.
pub fn update(view: &mut ScoreboardView, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::SetSnapshot(snapshot) => {
            view.replace_snapshot(*snapshot);
            vec![]
        }
        Msg::SetHidden(hidden) => {
            view.hidden = hidden;
            vec![]
        }
        Msg::BreakTimer(secs) => vec![Effect::StartBreakTimer(secs)],
        other => {
            let Some(kind) = other.kind() else {
                return vec![];
            };
            match transition(view.mode, kind) {
                Some(next) => {
                    if next != view.mode {
                        log::debug!("{kind}: {} -> {next}", view.mode);
                    }
                    view.mode = next;
                    event_effects(&other)
                }
                None => {
                    view.record_ignored(kind);
                    vec![]
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODES: [DisplayMode; 5] = [
        DisplayMode::Idle,
        DisplayMode::Lifting,
        DisplayMode::DecisionPending,
        DisplayMode::Break,
        DisplayMode::GroupDone,
    ];

    #[test]
    fn reset_enter_break_and_group_done_apply_everywhere() {
        for mode in MODES {
            assert_eq!(transition(mode, EventKind::Reset), Some(DisplayMode::Lifting));
            assert_eq!(transition(mode, EventKind::EnterBreak), Some(DisplayMode::Break));
            assert_eq!(transition(mode, EventKind::GroupDone), Some(DisplayMode::GroupDone));
        }
    }

    #[test]
    fn start_and_decision_only_from_lifting() {
        for mode in MODES {
            let start = transition(mode, EventKind::Start);
            let decision = transition(mode, EventKind::RefereeDecision);
            if mode == DisplayMode::Lifting {
                assert_eq!(start, Some(DisplayMode::Lifting));
                assert_eq!(decision, Some(DisplayMode::DecisionPending));
            } else {
                assert_eq!(start, None, "start from {mode}");
                assert_eq!(decision, None, "decision from {mode}");
            }
        }
    }

    #[test]
    fn break_hides_attempt_details() {
        let regions = region_visibility(DisplayMode::Break, false);
        let expected: BTreeSet<Region> =
            [Region::Name, Region::BreakTimer, Region::Table].into_iter().collect();
        assert_eq!(regions, expected);
    }

    #[test]
    fn hidden_blanks_every_mode() {
        for mode in MODES {
            assert!(region_visibility(mode, true).is_empty());
        }
    }

    #[test]
    fn timer_and_break_timer_never_share_the_screen() {
        for mode in MODES {
            let regions = region_visibility(mode, false);
            assert!(!(regions.contains(&Region::Timer) && regions.contains(&Region::BreakTimer)));
            assert!(!(regions.contains(&Region::Decisions) && regions.contains(&Region::BreakTimer)));
        }
    }

    #[test]
    fn reset_emits_timer_reset() {
        let mut view = ScoreboardView::new();
        assert_eq!(view.reset(), vec![Effect::ResetTimer, Effect::ClearDecisions]);
        assert_eq!(view.start(), vec![Effect::StartTimer]);
    }

    #[test]
    fn ignored_events_are_bounded() {
        let mut view = ScoreboardView::new();
        view.enter_break();
        for _ in 0..(IGNORED_EVENT_CAPACITY + 5) {
            view.start();
        }
        assert_eq!(view.ignored_count(), IGNORED_EVENT_CAPACITY);
        assert_eq!(view.mode(), DisplayMode::Break);
    }
}
