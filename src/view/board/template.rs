use chrono::{DateTime, Utc};
use maud::{Markup, html};

use crate::model::{ScoreboardConfig, Translate};
use crate::mvu::board::{Region, ScoreboardView};
use crate::mvu::widgets::Widgets;
use crate::view::board::attempt_bar::{WidgetReadout, render_attempt_bar, render_group_header};
use crate::view::board::table::render_results_table;

impl WidgetReadout {
    #[must_use]
    pub fn from_widgets(widgets: &Widgets, now: DateTime<Utc>) -> Self {
        Self {
            timer: widgets.timer_display(now),
            break_timer: widgets.break_timer_display(now),
            verdicts: widgets.verdicts(),
        }
    }
}

/// Renders the whole board for the current mode. Pure: the same inputs give
/// the same markup.
#[must_use]
pub fn render_board_pure(
    view: &ScoreboardView,
    readout: &WidgetReadout,
    cfg: &ScoreboardConfig,
    labels: &dyn Translate,
) -> Markup {
    let visible = view.visible_regions();
    let snapshot = view.snapshot();
    html! {
        div class=(format!("wrapper {}", cfg.theme.css_class())) data-mode=(view.mode().to_string()) {
            (render_attempt_bar(&snapshot.attempt_bar, &visible, readout))
            (render_group_header(&snapshot.group, &visible))
            (render_results_table(&snapshot.rows, cfg, labels, visible.contains(&Region::Table)))
        }
    }
}

#[must_use]
pub fn render_board(
    view: &ScoreboardView,
    widgets: &Widgets,
    cfg: &ScoreboardConfig,
    labels: &dyn Translate,
    now: DateTime<Utc>,
) -> Markup {
    render_board_pure(view, &WidgetReadout::from_widgets(widgets, now), cfg, labels)
}
