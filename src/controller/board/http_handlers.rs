use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use serde::Serialize;
use serde_json::{Value, json};
use std::collections::HashMap;
use tokio::sync::Mutex;

use super::decode::{BreakTimerPayload, DecisionsPayload, decode_snapshot, parse_event_name};
use super::fop::{FopUpdate, board_event};
use crate::model::{LabelCatalog, ScoreboardConfig, parse_flag};
use crate::mvu::board::{DisplayMode, IgnoredEvent, Msg, Region, ScoreboardView};
use crate::mvu::runtime::dispatch;
use crate::mvu::widgets::Widgets;
use crate::view::board::render_board;
use crate::view::index::render_index_template;

/// The board and the sub-components it drives, updated under one lock so each
/// operation completes before the next starts.
pub struct BoardState {
    pub view: ScoreboardView,
    pub widgets: Widgets,
}

pub struct AppState {
    pub board: Mutex<BoardState>,
    pub cfg: ScoreboardConfig,
    pub labels: LabelCatalog,
    pub title: String,
}

impl AppState {
    #[must_use]
    pub fn new(cfg: ScoreboardConfig, labels: LabelCatalog, title: String) -> Self {
        let widgets = Widgets::mounted(cfg.countdown_secs);
        Self {
            board: Mutex::new(BoardState {
                view: ScoreboardView::new(),
                widgets,
            }),
            cfg,
            labels,
            title,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateReport {
    pub mode: DisplayMode,
    pub hidden: bool,
    pub visible_regions: Vec<Region>,
    pub ignored: Vec<IgnoredEvent>,
}

impl StateReport {
    #[must_use]
    pub fn of(view: &ScoreboardView) -> Self {
        Self {
            mode: view.mode(),
            hidden: view.is_hidden(),
            visible_regions: view.visible_regions().into_iter().collect(),
            ignored: view.ignored_events().cloned().collect(),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/board", web::get().to(board))
        .route("/board/state", web::get().to(board_state))
        .route("/board/snapshot", web::post().to(post_snapshot))
        .route("/board/event/{name}", web::post().to(post_event))
        .route("/board/hidden", web::post().to(post_hidden))
        .route("/board/decisions", web::post().to(post_decisions))
        .route("/board/break-timer", web::post().to(post_break_timer))
        .route("/board/fop", web::post().to(post_fop))
        .route("/health", web::get().to(health));
}

async fn apply(state: &AppState, msg: Msg) -> HttpResponse {
    let mut guard = state.board.lock().await;
    let BoardState { view, widgets } = &mut *guard;
    dispatch(view, widgets, msg, Utc::now());
    HttpResponse::Ok().json(StateReport::of(view))
}

fn bad_request(e: impl ToString) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({"error": e.to_string()}))
}

pub async fn index(req: HttpRequest, state: Data<AppState>) -> impl Responder {
    let markup = render_index_template(&state.title, req.query_string());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn board(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    let cfg = state
        .cfg
        .with_overrides(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let guard = state.board.lock().await;
    let markup = render_board(&guard.view, &guard.widgets, &cfg, &state.labels, Utc::now());
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub async fn board_state(state: Data<AppState>) -> impl Responder {
    let guard = state.board.lock().await;
    HttpResponse::Ok().json(StateReport::of(&guard.view))
}

pub async fn post_snapshot(body: web::Json<Value>, state: Data<AppState>) -> impl Responder {
    match decode_snapshot(&body) {
        Ok(snapshot) => apply(&state, Msg::SetSnapshot(Box::new(snapshot))).await,
        Err(e) => bad_request(e),
    }
}

pub async fn post_event(path: web::Path<String>, state: Data<AppState>) -> impl Responder {
    match parse_event_name(&path) {
        Ok(msg) => apply(&state, msg).await,
        Err(e) => bad_request(e),
    }
}

pub async fn post_hidden(
    query: web::Query<HashMap<String, String>>,
    state: Data<AppState>,
) -> impl Responder {
    match query.get("hidden").and_then(|v| parse_flag(v)) {
        Some(hidden) => apply(&state, Msg::SetHidden(hidden)).await,
        None => bad_request("hidden parameter must be 0 or 1"),
    }
}

pub async fn post_decisions(
    body: web::Json<DecisionsPayload>,
    state: Data<AppState>,
) -> impl Responder {
    apply(&state, Msg::Decisions(body.decisions)).await
}

pub async fn post_break_timer(
    body: web::Json<BreakTimerPayload>,
    state: Data<AppState>,
) -> impl Responder {
    apply(&state, Msg::BreakTimer(body.seconds)).await
}

pub async fn post_fop(body: web::Json<FopUpdate>, state: Data<AppState>) -> impl Responder {
    let mut guard = state.board.lock().await;
    let BoardState { view, widgets } = &mut *guard;
    if let Some(msg) = board_event(view.mode(), &body) {
        dispatch(view, widgets, msg, Utc::now());
    }
    HttpResponse::Ok().json(StateReport::of(view))
}
