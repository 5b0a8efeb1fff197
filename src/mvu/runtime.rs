use chrono::{DateTime, Utc};
use serde_json::json;

use crate::mvu::board::{Effect, Msg, ScoreboardView, update};
use crate::mvu::widgets::Widgets;

/// Applies `msg` to the board and runs the resulting effects against the
/// mounted sub-components. Returns the effects that were produced.
pub fn dispatch(
    view: &mut ScoreboardView,
    widgets: &mut Widgets,
    msg: Msg,
    now: DateTime<Utc>,
) -> Vec<Effect> {
    let effects = update(view, msg);
    if log::log_enabled!(log::Level::Debug) && !effects.is_empty() {
        log::debug!(
            "{}",
            json!({"mvu":"update","mode": view.mode().to_string(),"effects": effects.iter().map(|x| format!("{x:?}")).collect::<Vec<_>>()})
        );
    }
    for effect in &effects {
        run_effect(effect, widgets, now);
    }
    effects
}

/// Runs one effect. A missing sub-component turns the effect into a no-op.
pub fn run_effect(effect: &Effect, widgets: &mut Widgets, now: DateTime<Utc>) {
    match effect {
        Effect::StartTimer => match widgets.timer.as_mut() {
            Some(timer) => timer.start(now),
            None => deferred(effect, "timer"),
        },
        Effect::ResetTimer => match widgets.timer.as_mut() {
            Some(timer) => timer.reset(),
            None => deferred(effect, "timer"),
        },
        Effect::ClearDecisions => match widgets.decisions.as_mut() {
            Some(lights) => lights.clear(),
            None => deferred(effect, "decisions"),
        },
        Effect::ShowDecisions(verdicts) => match widgets.decisions.as_mut() {
            Some(lights) => lights.show(*verdicts),
            None => deferred(effect, "decisions"),
        },
        Effect::StartBreakTimer(secs) => match widgets.break_timer.as_mut() {
            Some(timer) => {
                timer.set_duration(*secs);
                timer.reset();
                timer.start(now);
            }
            None => deferred(effect, "break timer"),
        },
    }
}

fn deferred(effect: &Effect, widget: &str) {
    log::debug!("{widget} not mounted, skipping {effect:?}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvu::board::DisplayMode;

    #[test]
    fn effects_without_widgets_are_no_ops() {
        let mut view = ScoreboardView::new();
        let mut widgets = Widgets::default();
        let now = Utc::now();
        dispatch(&mut view, &mut widgets, Msg::Reset, now);
        dispatch(&mut view, &mut widgets, Msg::Start, now);
        dispatch(&mut view, &mut widgets, Msg::Decisions([Some(true), None, None]), now);
        dispatch(&mut view, &mut widgets, Msg::BreakTimer(300), now);
        assert_eq!(view.mode(), DisplayMode::Lifting);
        assert!(widgets.timer_display(now).is_none());
    }

    #[test]
    fn start_runs_the_mounted_timer() {
        let mut view = ScoreboardView::new();
        let mut widgets = Widgets::mounted(60);
        let now = Utc::now();
        dispatch(&mut view, &mut widgets, Msg::Reset, now);
        dispatch(&mut view, &mut widgets, Msg::Start, now);
        let timer = widgets.timer.as_ref().expect("timer mounted");
        assert!(timer.is_running());
        dispatch(&mut view, &mut widgets, Msg::Reset, now);
        let timer = widgets.timer.as_ref().expect("timer mounted");
        assert!(!timer.is_running());
    }

    #[test]
    fn decisions_reach_the_lights_and_reset_clears_them() {
        let mut view = ScoreboardView::new();
        let mut widgets = Widgets::mounted(60);
        let now = Utc::now();
        dispatch(&mut view, &mut widgets, Msg::Reset, now);
        dispatch(&mut view, &mut widgets, Msg::RefereeDecision, now);
        dispatch(&mut view, &mut widgets, Msg::Decisions([Some(true), Some(false), Some(true)]), now);
        assert_eq!(widgets.verdicts(), Some([Some(true), Some(false), Some(true)]));
        dispatch(&mut view, &mut widgets, Msg::Reset, now);
        assert_eq!(widgets.verdicts(), Some([None, None, None]));
    }
}
