use chrono::{DateTime, Duration, Utc};

use crate::mvu::board::RefereeVerdicts;

/// A countdown clock mounted on the board. It keeps its own time; the board
/// only starts, resets and reads it.
pub trait Countdown: Send {
    fn start(&mut self, now: DateTime<Utc>);
    fn reset(&mut self);
    fn set_duration(&mut self, secs: u32);
    fn remaining_at(&self, now: DateTime<Utc>) -> Duration;
    fn is_running(&self) -> bool;
}

pub trait DecisionLights: Send {
    fn show(&mut self, verdicts: RefereeVerdicts);
    fn clear(&mut self);
    fn verdicts(&self) -> RefereeVerdicts;
}

#[derive(Debug, Clone)]
pub struct ClockCountdown {
    duration: Duration,
    started_at: Option<DateTime<Utc>>,
}

impl ClockCountdown {
    #[must_use]
    pub fn new(secs: u32) -> Self {
        Self {
            duration: Duration::seconds(i64::from(secs)),
            started_at: None,
        }
    }
}

impl Countdown for ClockCountdown {
    fn start(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    fn reset(&mut self) {
        self.started_at = None;
    }

    fn set_duration(&mut self, secs: u32) {
        self.duration = Duration::seconds(i64::from(secs));
    }

    fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        let Some(started) = self.started_at else {
            return self.duration;
        };
        let left = self.duration - (now - started);
        if left < Duration::zero() {
            Duration::zero()
        } else {
            left
        }
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

/// `m:ss`, rounding partial seconds up so a fresh minute reads `1:00`.
#[must_use]
pub fn format_clock(remaining: Duration) -> String {
    let millis = remaining.num_milliseconds().max(0);
    let secs = (millis + 999) / 1000;
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[derive(Debug, Clone, Default)]
pub struct RefereeLights {
    verdicts: RefereeVerdicts,
}

impl DecisionLights for RefereeLights {
    fn show(&mut self, verdicts: RefereeVerdicts) {
        self.verdicts = verdicts;
    }

    fn clear(&mut self) {
        self.verdicts = [None; 3];
    }

    fn verdicts(&self) -> RefereeVerdicts {
        self.verdicts
    }
}

/// Sub-components the board drives. Any of them may be missing until the
/// host mounts it.
#[derive(Default)]
pub struct Widgets {
    pub timer: Option<Box<dyn Countdown>>,
    pub break_timer: Option<Box<dyn Countdown>>,
    pub decisions: Option<Box<dyn DecisionLights>>,
}

impl Widgets {
    /// Clock timers for the athlete and the break, plus referee lights.
    #[must_use]
    pub fn mounted(countdown_secs: u32) -> Self {
        Self {
            timer: Some(Box::new(ClockCountdown::new(countdown_secs))),
            break_timer: Some(Box::new(ClockCountdown::new(0))),
            decisions: Some(Box::new(RefereeLights::default())),
        }
    }

    #[must_use]
    pub fn timer_display(&self, now: DateTime<Utc>) -> Option<String> {
        self.timer
            .as_ref()
            .map(|t| format_clock(t.remaining_at(now)))
    }

    #[must_use]
    pub fn break_timer_display(&self, now: DateTime<Utc>) -> Option<String> {
        self.break_timer
            .as_ref()
            .map(|t| format_clock(t.remaining_at(now)))
    }

    #[must_use]
    pub fn verdicts(&self) -> Option<RefereeVerdicts> {
        self.decisions.as_ref().map(|d| d.verdicts())
    }
}
