pub mod args;
pub mod model;
pub mod controller {
    pub mod board;
}
pub mod mvu {
    pub mod board;
    pub mod error;
    pub mod runtime;
    pub mod widgets;
}
pub mod view {
    pub mod board;
    pub mod index;
}

pub const HTMX_PATH: &str = "https://cdn.jsdelivr.net/npm/htmx.org@2.0.8/dist/htmx.min.js";

pub use mvu::board::{DisplayMode, Region, ScoreboardView};
pub use mvu::error::ScoreboardError;
