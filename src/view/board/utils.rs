use maud::{Markup, html};
use std::collections::BTreeSet;
use std::fmt::Display;

use crate::model::{AttemptCell, Outcome};
use crate::mvu::board::Region;

#[must_use]
pub fn outcome_class(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Good => "good",
        Outcome::Fail => "fail",
        Outcome::Pending => "request",
        Outcome::Empty => "empty",
    }
}

/// Classes for one attempt cell; a missing cell gets the neutral `empty` class.
#[must_use]
pub fn attempt_cell_class(cell: Option<&AttemptCell>) -> String {
    match cell {
        Some(c) if c.is_active_attempt => format!("{} current blink", outcome_class(c.outcome)),
        Some(c) => outcome_class(c.outcome).to_string(),
        None => outcome_class(Outcome::Empty).to_string(),
    }
}

#[must_use]
pub fn team_width_class(wide_team_names: bool) -> &'static str {
    if wide_team_names { "club" } else { "narrow" }
}

#[must_use]
pub fn lift_rank_header_class(show: bool) -> &'static str {
    if show { "showThRank" } else { "collapsedThRank" }
}

#[must_use]
pub fn lift_rank_cell_class(show: bool) -> &'static str {
    if show { "showRank" } else { "collapsedRank" }
}

#[must_use]
pub fn flag(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

#[must_use]
pub fn or_blank<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Wraps `body` in the element for `region`, shown or hidden per `visible`.
#[must_use]
pub fn region(region: Region, visible: &BTreeSet<Region>, class: &str, body: Markup) -> Markup {
    let shown = visible.contains(&region);
    html! {
        div class=(class) id=(region.dom_id()) hidden[!shown] data-visible=(flag(shown)) {
            (body)
        }
    }
}
