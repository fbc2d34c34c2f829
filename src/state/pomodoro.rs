//! Study/break countdown state machine
//!
//! The timer has no thread of its own. A driver calls [`PomodoroTimer::tick`]
//! once per second; control operations come from the HTTP layer. Both go
//! through the same `&mut self`, so whoever owns the timer decides how they
//! are serialized.
//!
//! ```text
//! Study-Paused <--start/pause--> Study-Running
//!                                  |      ^
//!                        reaches 0 v      | reaches 0
//! Break-Paused <--start/pause--> Break-Running
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const DEFAULT_STUDY_MINUTES: u32 = 25;
pub const DEFAULT_BREAK_MINUTES: u32 = 5;
/// Upper bound for either duration (one day)
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Which duration the countdown is currently running against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Study,
    Break,
}

impl Phase {
    pub fn opposite(self) -> Self {
        match self {
            Phase::Study => Phase::Break,
            Phase::Break => Phase::Study,
        }
    }

    pub fn is_study(self) -> bool {
        self == Phase::Study
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Study => "study",
            Phase::Break => "break",
        }
    }
}

/// Validated study and break durations, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSettings {
    study_minutes: u32,
    break_minutes: u32,
}

impl TimerSettings {
    /// Validate raw durations as they arrive from a request or the CLI
    pub fn new(study_minutes: i64, break_minutes: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            study_minutes: check_minutes("studyTime", study_minutes)?,
            break_minutes: check_minutes("breakTime", break_minutes)?,
        })
    }

    pub fn study_minutes(&self) -> u32 {
        self.study_minutes
    }

    pub fn break_minutes(&self) -> u32 {
        self.break_minutes
    }

    /// Full length of `phase` in seconds
    pub fn duration_seconds(&self, phase: Phase) -> u64 {
        let minutes = match phase {
            Phase::Study => self.study_minutes,
            Phase::Break => self.break_minutes,
        };
        u64::from(minutes) * 60
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            study_minutes: DEFAULT_STUDY_MINUTES,
            break_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

fn check_minutes(field: &'static str, value: i64) -> Result<u32, ValidationError> {
    if value <= 0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    match u32::try_from(value) {
        Ok(minutes) if minutes <= MAX_DURATION_MINUTES => Ok(minutes),
        _ => Err(ValidationError::TooLarge {
            field,
            value,
            max: MAX_DURATION_MINUTES,
        }),
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused; nothing changed
    Idle,
    /// Countdown advanced by one second
    Counted { remaining_seconds: u64 },
    /// `completed` reached zero and the timer rolled over into `next`
    PhaseFinished { completed: Phase, next: Phase },
}

/// Point-in-time copy of the timer, safe to hand to readers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub remaining_seconds: u64,
    pub phase: Phase,
    pub running: bool,
    pub finished: bool,
    pub settings: TimerSettings,
}

impl TimerSnapshot {
    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_seconds)
    }

    pub fn is_study_timer(&self) -> bool {
        self.phase.is_study()
    }
}

/// `MM:SS` with two-digit fields; minutes grow past two digits when needed
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    remaining_seconds: u64,
    phase: Phase,
    settings: TimerSettings,
    running: bool,
    finished: bool,
}

impl PomodoroTimer {
    /// Create a paused timer with the default 25/5 durations
    pub fn new(initial_phase_is_study: bool) -> Self {
        let phase = if initial_phase_is_study {
            Phase::Study
        } else {
            Phase::Break
        };
        Self::with_settings(phase, TimerSettings::default())
    }

    /// Create a paused timer in `phase` using `settings`
    pub fn with_settings(phase: Phase, settings: TimerSettings) -> Self {
        Self {
            remaining_seconds: settings.duration_seconds(phase),
            phase,
            settings,
            running: false,
            finished: false,
        }
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn display(&self) -> String {
        format_mm_ss(self.remaining_seconds)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining_seconds: self.remaining_seconds,
            phase: self.phase,
            running: self.running,
            finished: self.finished,
            settings: self.settings,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Refill the current phase and start counting
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Replace both durations and refill the current phase.
    ///
    /// Invalid input leaves the timer untouched. Running state is kept.
    pub fn update_settings(
        &mut self,
        study_minutes: i64,
        break_minutes: i64,
    ) -> Result<(), ValidationError> {
        self.settings = TimerSettings::new(study_minutes, break_minutes)?;
        self.reset();
        Ok(())
    }

    /// Advance the countdown by one second.
    ///
    /// Hitting zero flips the phase and keeps running in the new phase;
    /// `finished` is only set between the stop and the refill.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Counted {
                remaining_seconds: self.remaining_seconds,
            };
        }

        let completed = self.phase;
        self.pause();
        self.finished = true;

        self.phase = completed.opposite();
        self.reset();
        self.start();

        TickOutcome::PhaseFinished {
            completed,
            next: self.phase,
        }
    }

    fn reset(&mut self) {
        self.remaining_seconds = self.settings.duration_seconds(self.phase);
        self.finished = false;
    }

    #[cfg(test)]
    pub(crate) fn set_remaining_for_test(&mut self, seconds: u64) {
        self.remaining_seconds = seconds;
    }

    #[cfg(test)]
    pub(crate) fn mark_finished_for_test(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running_study() -> PomodoroTimer {
        let mut timer = PomodoroTimer::new(true);
        timer.start();
        timer
    }

    #[test]
    fn new_loads_default_durations() {
        let study = PomodoroTimer::new(true);
        assert_eq!(study.phase(), Phase::Study);
        assert_eq!(study.remaining_seconds(), 25 * 60);
        assert!(!study.is_running());
        assert!(!study.is_finished());

        let rest = PomodoroTimer::new(false);
        assert_eq!(rest.phase(), Phase::Break);
        assert_eq!(rest.remaining_seconds(), 5 * 60);
    }

    #[test]
    fn ticks_count_down_one_second_each() {
        let mut timer = running_study();
        for n in 1..=90u64 {
            assert_eq!(
                timer.tick(),
                TickOutcome::Counted {
                    remaining_seconds: 1500 - n
                }
            );
        }
        assert_eq!(timer.remaining_seconds(), 1410);
        assert_eq!(timer.phase(), Phase::Study);
    }

    #[test]
    fn study_rolls_over_into_running_break() {
        let mut timer = running_study();
        timer.set_remaining_for_test(1);

        let outcome = timer.tick();

        assert_eq!(
            outcome,
            TickOutcome::PhaseFinished {
                completed: Phase::Study,
                next: Phase::Break
            }
        );
        assert_eq!(timer.phase(), Phase::Break);
        assert_eq!(timer.remaining_seconds(), 5 * 60);
        assert!(timer.is_running());
        assert!(!timer.is_finished());
    }

    #[test]
    fn break_rolls_over_into_running_study() {
        let mut timer = PomodoroTimer::new(false);
        timer.start();
        timer.set_remaining_for_test(1);

        timer.tick();

        assert_eq!(timer.phase(), Phase::Study);
        assert_eq!(timer.remaining_seconds(), 25 * 60);
        assert!(timer.is_running());
    }

    #[test]
    fn zero_remaining_still_rolls_over() {
        let mut timer = running_study();
        timer.set_remaining_for_test(0);

        assert!(matches!(timer.tick(), TickOutcome::PhaseFinished { .. }));
        assert_eq!(timer.remaining_seconds(), 5 * 60);
    }

    #[test]
    fn paused_timer_ignores_ticks() {
        let mut timer = running_study();
        timer.tick();
        timer.pause();

        for _ in 0..10 {
            assert_eq!(timer.tick(), TickOutcome::Idle);
        }
        assert_eq!(timer.remaining_seconds(), 1499);
        assert_eq!(timer.phase(), Phase::Study);

        timer.start();
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 1498);
    }

    #[test]
    fn start_and_pause_are_idempotent() {
        let mut once = PomodoroTimer::new(true);
        once.start();
        let mut twice = PomodoroTimer::new(true);
        twice.start();
        twice.start();
        assert_eq!(once.snapshot(), twice.snapshot());

        once.pause();
        twice.pause();
        twice.pause();
        assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn restart_refills_and_runs() {
        let mut timer = PomodoroTimer::new(false);
        timer.set_remaining_for_test(42);
        assert!(!timer.is_running());

        timer.restart();

        assert_eq!(timer.remaining_seconds(), 5 * 60);
        assert_eq!(timer.phase(), Phase::Break);
        assert!(timer.is_running());
    }

    #[test]
    fn restart_clears_finished() {
        let mut timer = running_study();
        timer.mark_finished_for_test();
        timer.restart();
        assert!(!timer.is_finished());
    }

    #[test]
    fn update_settings_resets_current_phase() {
        let mut study = running_study();
        study.tick();
        study.update_settings(30, 10).unwrap();
        assert_eq!(study.remaining_seconds(), 1800);
        assert!(study.is_running());

        let mut rest = PomodoroTimer::new(false);
        rest.update_settings(30, 10).unwrap();
        assert_eq!(rest.remaining_seconds(), 600);
        assert!(!rest.is_running());
        assert_eq!(rest.phase(), Phase::Break);
    }

    #[test]
    fn update_settings_rejects_non_positive_without_mutation() {
        let mut timer = running_study();
        timer.tick();
        let before = timer.snapshot();

        let err = timer.update_settings(0, 5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositive {
                field: "studyTime",
                value: 0
            }
        );
        assert!(timer.update_settings(25, -3).is_err());
        assert_eq!(timer.snapshot(), before);
    }

    #[test]
    fn settings_reject_oversized_durations() {
        assert!(matches!(
            TimerSettings::new(i64::MAX, 5),
            Err(ValidationError::TooLarge { .. })
        ));
        assert!(TimerSettings::new(MAX_DURATION_MINUTES as i64, 1).is_ok());
        assert!(TimerSettings::new(1, MAX_DURATION_MINUTES as i64 + 1).is_err());
    }

    #[test]
    fn new_settings_apply_after_rollover() {
        let mut timer = running_study();
        timer.update_settings(1, 2).unwrap();
        timer.set_remaining_for_test(1);
        timer.tick();
        assert_eq!(timer.remaining_seconds(), 120);
    }

    #[test]
    fn display_pads_minutes_and_seconds() {
        let mut timer = PomodoroTimer::new(true);
        timer.set_remaining_for_test(125);
        assert_eq!(timer.display(), "02:05");
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(25 * 60), "25:00");
        assert_eq!(format_mm_ss(120 * 60 + 7), "120:07");
    }
}
