use maud::{Markup, html};

use crate::model::labels::{self, Translate};
use crate::model::{ATTEMPTS_PER_LIFT, AttemptCell, ResultRow, ScoreboardConfig, attempt_at, highlighted_row};
use crate::mvu::board::Region;
use crate::view::board::utils::{
    attempt_cell_class, flag, lift_rank_cell_class, lift_rank_header_class, or_blank,
    team_width_class,
};

/// Renders the results table, one `tr` per row in order.
///
/// Rank columns are always emitted; compact density only collapses them so the
/// column count never changes between renders.
#[must_use]
pub fn render_results_table(
    rows: &[ResultRow],
    cfg: &ScoreboardConfig,
    labels: &dyn Translate,
    visible: bool,
) -> Markup {
    let team_class = team_width_class(cfg.wide_team_names);
    let show_ranks = cfg.show_lift_ranks();
    let rank_th = lift_rank_header_class(show_ranks);
    let current = highlighted_row(rows);

    html! {
        table class="results" id=(Region::Table.dom_id()) hidden[!visible] data-visible=(flag(visible)) {
            thead {
                tr {
                    th class="veryNarrow" { (labels.label(labels::START)) }
                    th class="name" { (labels.label(labels::NAME)) }
                    th class="category" { (labels.label(labels::CATEGORY)) }
                    th class="veryNarrow" { (labels.label(labels::BIRTH)) }
                    th class=(team_class) { (labels.label(labels::TEAM)) }
                    th colspan="3" { (labels.label(labels::SNATCH)) }
                    th class=(rank_th) { (labels.label(labels::RANK)) }
                    th colspan="3" { (labels.label(labels::CLEAN_AND_JERK)) }
                    th class=(rank_th) { (labels.label(labels::RANK)) }
                    th class="veryNarrow" { (labels.label(labels::TOTAL)) }
                    th class="thRank" { (labels.label(labels::RANK)) }
                }
            }
            tbody {
                @for (idx, row) in rows.iter().enumerate() {
                    @if row.is_spacer {
                        tr class="spacer-row" { td colspan="100%" class="spacer" {} }
                    } @else {
                        (render_row(row, current == Some(idx), team_class, show_ranks))
                    }
                }
            }
        }
    }
}

fn render_row(row: &ResultRow, highlighted: bool, team_class: &str, show_ranks: bool) -> Markup {
    let row_class = if highlighted { " current" } else { "" };
    let rank_td = lift_rank_cell_class(show_ranks);
    html! {
        tr {
            td class=(format!("veryNarrow{row_class}")) { (or_blank(row.start_number.as_ref())) }
            td class=(format!("name{row_class}")) {
                div { @if let Some(name) = &row.full_name { (name) } }
            }
            td class="category" { div { (or_blank(row.category.as_ref())) } }
            td class="veryNarrow" { div { (or_blank(row.year_of_birth.as_ref())) } }
            td class=(team_class) { div { (or_blank(row.team_name.as_ref())) } }
            (render_attempts(&row.snatch_attempts))
            td class=(rank_td) { (or_blank(row.snatch_rank.as_ref())) }
            (render_attempts(&row.clean_jerk_attempts))
            td class=(rank_td) { (or_blank(row.clean_jerk_rank.as_ref())) }
            td class="veryNarrow" { (or_blank(row.total.as_ref())) }
            td class="veryNarrow" { (or_blank(row.total_rank.as_ref())) }
        }
    }
}

fn render_attempts(cells: &[AttemptCell]) -> Markup {
    html! {
        @for idx in 0..ATTEMPTS_PER_LIFT {
            @let cell = attempt_at(cells, idx);
            td class=(attempt_cell_class(cell)) {
                div { @if let Some(c) = cell { (c.string_value) } }
            }
        }
    }
}
