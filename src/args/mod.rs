use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

use crate::model::{LabelCatalog, ScoreboardConfig};
use crate::mvu::error::ScoreboardError;

/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, ScoreboardError> {
    let xx = Args::parse();
    xx.validate().map_err(ScoreboardError::Config)?;
    Ok(CleanArgs::new(xx))
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            bind: args.bind,
            port: args.port,
            wide_team_names: args.wide_team_names,
            theme: args.theme,
            density: args.density,
            countdown_secs: args.countdown_secs,
            title: args.title,
            labels: args.labels,
            static_dir: args.static_dir,
        }
    }

    #[must_use]
    pub fn scoreboard_config(&self) -> ScoreboardConfig {
        ScoreboardConfig {
            wide_team_names: self.wide_team_names,
            theme: self.theme,
            density: self.density,
            countdown_secs: self.countdown_secs,
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the label file content is not an object of strings
    pub fn label_catalog(&self) -> Result<LabelCatalog, ScoreboardError> {
        match &self.labels {
            Some(json) => LabelCatalog::from_json(json),
            None => Ok(LabelCatalog::english()),
        }
    }
}
