#![allow(dead_code)]

use lift_scoreboard::model::{
    AttemptBarSnapshot, AttemptCell, GroupInfo, LabelCatalog, Outcome, ResultRow, RowClass,
    ScoreboardConfig, Snapshot, TrustedHtml,
};
use lift_scoreboard::mvu::board::ScoreboardView;
use lift_scoreboard::view::board::{WidgetReadout, render_board_pure};
use scraper::{Html, Selector};

pub fn athlete_row(start_number: u32, name: &str, current: bool) -> ResultRow {
    ResultRow {
        start_number: Some(start_number),
        full_name: Some(TrustedHtml::new(name)),
        category: Some("M89".to_string()),
        year_of_birth: Some(1998),
        team_name: Some("Club Haltéro".to_string()),
        snatch_attempts: vec![
            AttemptCell::new("100", Outcome::Good),
            AttemptCell::new("105", Outcome::Fail),
            AttemptCell::new("105", Outcome::Pending).active(),
        ],
        clean_jerk_attempts: vec![
            AttemptCell::new("", Outcome::Empty),
            AttemptCell::new("", Outcome::Empty),
            AttemptCell::new("", Outcome::Empty),
        ],
        snatch_rank: Some("2".to_string()),
        clean_jerk_rank: Some("\u{2013}".to_string()),
        total: Some("\u{2013}".to_string()),
        total_rank: Some("\u{2013}".to_string()),
        row_class: if current { RowClass::Current } else { RowClass::Normal },
        ..ResultRow::default()
    }
}

/// Group "A", J. Doe (#12) on the platform with 120 kg.
pub fn sample_snapshot() -> Snapshot {
    Snapshot::new(
        GroupInfo {
            group_name: "A".to_string(),
            lifts_done_summary: "3/9".to_string(),
        },
        AttemptBarSnapshot {
            start_number: Some(12),
            full_name: TrustedHtml::new("J. Doe"),
            team_name: "Club Haltéro".to_string(),
            attempt_label: "Snatch 2".to_string(),
            weight: Some(120.0),
            weight_unit: "kg".to_string(),
        },
        vec![
            athlete_row(12, "J. Doe", true),
            athlete_row(7, "A. Smith", false),
            ResultRow::spacer(),
            athlete_row(3, "B. Martin", false),
        ],
    )
}

pub fn render(view: &ScoreboardView, cfg: &ScoreboardConfig) -> String {
    render_board_pure(view, &WidgetReadout::default(), cfg, &LabelCatalog::english()).into_string()
}

pub fn select_all(html: &str, selector: &str) -> Vec<String> {
    let document = Html::parse_fragment(html);
    let selector = Selector::parse(selector).expect("valid selector");
    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .collect()
}

pub fn attr_of(html: &str, selector: &str, attr: &str) -> Option<String> {
    let document = Html::parse_fragment(html);
    let selector = Selector::parse(selector).expect("valid selector");
    document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(attr).map(ToString::to_string))
}
