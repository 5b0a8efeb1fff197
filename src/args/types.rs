use clap::Parser;
use serde_json::Value;

use crate::model::{DEFAULT_COUNTDOWN_SECS, Density, Theme};
use crate::view::index::DEFAULT_INDEX_TITLE;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to listen on
    #[arg(long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value_t = 8082)]
    pub port: u16,
    /// Use the wide fixed team column instead of the narrow one
    #[arg(long)]
    pub wide_team_names: bool,
    #[arg(long, value_name = "THEME", value_enum, default_value_t = Theme::Dark)]
    pub theme: Theme,
    /// `compact` collapses the snatch and clean & jerk rank columns
    #[arg(long, value_name = "DENSITY", value_enum, default_value_t = Density::Full)]
    pub density: Density,
    /// Seconds the athlete clock restarts from on reset
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_COUNTDOWN_SECS)]
    pub countdown_secs: u32,
    #[arg(long, value_name = "TITLE", default_value = DEFAULT_INDEX_TITLE)]
    pub title: String,
    /// JSON object of label key to label text, e.g. {"Scoreboard.Rank": "Rang"}
    #[arg(
        long,
        value_name = "LABELS_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub labels: Option<Value>,
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub wide_team_names: bool,
    pub theme: Theme,
    pub density: Density,
    pub countdown_secs: u32,
    pub title: String,
    pub labels: Option<Value>,
    pub static_dir: String,
}
