use maud::{Markup, html};
use std::collections::BTreeSet;

use crate::model::{AttemptBarSnapshot, GroupInfo};
use crate::mvu::board::{Region, RefereeVerdicts};
use crate::view::board::utils::{or_blank, region};

/// Clock text and referee lights read from the mounted sub-components.
#[derive(Debug, Clone, Default)]
pub struct WidgetReadout {
    pub timer: Option<String>,
    pub break_timer: Option<String>,
    pub verdicts: Option<RefereeVerdicts>,
}

#[must_use]
pub fn render_attempt_bar(
    bar: &AttemptBarSnapshot,
    visible: &BTreeSet<Region>,
    readout: &WidgetReadout,
) -> Markup {
    html! {
        div class="attemptBar" {
            div class="athleteInfo" id="athleteInfoDiv" {
                (region(Region::StartNumber, visible, "startNumber", html! {
                    span { (or_blank(bar.start_number.as_ref())) }
                }))
                (region(Region::Name, visible, "fullName ellipsis", html! { (bar.full_name) }))
                (region(Region::Team, visible, "clubName ellipsis", html! { (bar.team_name) }))
                (region(Region::Attempt, visible, "attempt", html! { span { (bar.attempt_label) } }))
                (region(Region::Weight, visible, "weight", html! {
                    (bar.weight_display())
                    span class="unit" { (bar.weight_unit) }
                }))
                (region(Region::Timer, visible, "timer athleteTimer", html! {
                    @if let Some(t) = &readout.timer { span class="clock" { (t) } }
                }))
                (region(Region::BreakTimer, visible, "timer breakTime", html! {
                    @if let Some(t) = &readout.break_timer { span class="clock" { (t) } }
                }))
                (region(Region::Decisions, visible, "decisionBox", html! {
                    @if let Some(verdicts) = &readout.verdicts { (render_lights(verdicts)) }
                }))
            }
        }
    }
}

#[must_use]
pub fn render_group_header(group: &GroupInfo, visible: &BTreeSet<Region>) -> Markup {
    region(Region::GroupHeader, visible, "group", html! {
        span class="groupName" { (group.group_name) }
        @if !group.lifts_done_summary.is_empty() {
            " \u{2013} " (group.lifts_done_summary)
        }
    })
}

fn render_lights(verdicts: &RefereeVerdicts) -> Markup {
    html! {
        div class="decisions" {
            @for verdict in verdicts {
                @let class = match verdict {
                    Some(true) => "light good",
                    Some(false) => "light fail",
                    None => "light pending",
                };
                span class=(class) {}
            }
        }
    }
}
