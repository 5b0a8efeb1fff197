use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_COUNTDOWN_SECS: u32 = 60;

/// Palette used for the status classes (good, fail, current, request, empty).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_class())
    }
}

/// How much fits on the screen. `Compact` collapses the per-lift rank columns.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    #[default]
    Full,
    Compact,
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Density::Full => write!(f, "full"),
            Density::Compact => write!(f, "compact"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ScoreboardConfig {
    pub wide_team_names: bool,
    pub theme: Theme,
    pub density: Density,
    pub countdown_secs: u32,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            wide_team_names: false,
            theme: Theme::Dark,
            density: Density::Full,
            countdown_secs: DEFAULT_COUNTDOWN_SECS,
        }
    }
}

impl ScoreboardConfig {
    #[must_use]
    pub fn show_lift_ranks(&self) -> bool {
        self.density == Density::Full
    }

    /// Applies the `dark`, `wide` and `ranks` page parameters on top of this config.
    #[must_use]
    pub fn with_overrides<'a, I>(&self, params: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = self.clone();
        for (key, value) in params {
            let Some(flag) = parse_flag(value) else {
                continue;
            };
            match key {
                "dark" => cfg.theme = if flag { Theme::Dark } else { Theme::Light },
                "wide" => cfg.wide_team_names = flag,
                "ranks" => cfg.density = if flag { Density::Full } else { Density::Compact },
                _ => {}
            }
        }
        cfg
    }
}

#[must_use]
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "1" => Some(true),
        "0" => Some(false),
        other => other.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_known_flags_only() {
        let base = ScoreboardConfig::default();
        let cfg = base.with_overrides([("dark", "0"), ("wide", "true"), ("ranks", "x"), ("foo", "1")]);
        assert_eq!(cfg.theme, Theme::Light);
        assert!(cfg.wide_team_names);
        assert_eq!(cfg.density, Density::Full);
        assert_eq!(cfg.countdown_secs, DEFAULT_COUNTDOWN_SECS);
    }
}
