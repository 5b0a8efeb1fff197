use maud::{Markup, html};

use crate::HTMX_PATH;

pub const DEFAULT_INDEX_TITLE: &str = "Scoreboard";

/// Page shell; the board fragment is pulled in and refreshed by htmx.
/// `query` is forwarded so display overrides reach the fragment.
#[must_use]
pub fn render_index_template(title: &str, query: &str) -> Markup {
    let board_url = if query.is_empty() {
        "board".to_string()
    } else {
        format!("board?{query}")
    };
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/scoreboard.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            div id="board" hx-get=(board_url) hx-trigger="load, every 1s" hx-swap="innerHTML" {}
        }
    }
}
