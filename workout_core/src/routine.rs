//! Timed phases of a workout and the countdown that drives each one.
//!
//! A routine is the literal sequence a player walks through:
//! prepare, then every rep of every set with rests and breaks in between.
//! `Countdown` is a small state machine fed by timer ticks and user input,
//! so the terminal player only has to translate events and draw views.

use crate::{Settings, WorkoutPlan};

/// Timer resolution
pub const TICKS_PER_SECOND: u32 = 10;

/// Length of the opening countdown
pub const PREPARE_SECS: u32 = 10;

/// Seconds before the end of a prepare/rest phase when the warning color shows
pub const WARNING_SECS: u32 = 5;

// ============================================================================
// Colors
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const START: Rgb = Rgb(0, 192, 0);
    pub const MID: Rgb = Rgb(255, 192, 0);
    pub const END: Rgb = Rgb(192, 0, 0);
    pub const REST: Rgb = Rgb(0, 0, 192);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Text color that stays readable on this background
    pub fn foreground(&self) -> Rgb {
        let sum = u16::from(self.0) + u16::from(self.1) + u16::from(self.2);
        if sum <= 382 {
            Rgb::WHITE
        } else {
            Rgb::BLACK
        }
    }
}

// ============================================================================
// Phases
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseKind {
    Prepare,
    Exercise,
    Rest,
    Break,
}

/// When a phase's background flips from its initial to its late color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorSwitch {
    /// Half of the duration remains
    Midpoint,
    /// At most this many seconds remain
    LastSeconds(u32),
}

/// Set and rep a phase belongs to (both 1-based)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub set: u32,
    pub sets: u32,
    pub rep: u32,
    pub reps: u32,
}

impl Position {
    /// The `set x/y | rep a/b` status line
    pub fn status(&self) -> String {
        format!(
            "set {}/{} | rep {}/{}",
            self.set, self.sets, self.rep, self.reps
        )
    }
}

/// One timed screen of the workout
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub title: String,
    pub duration_secs: u32,
    pub initial: Rgb,
    pub late: Rgb,
    pub switch: ColorSwitch,
    pub position: Option<Position>,
    pub next: Option<String>,
}

impl Phase {
    pub fn header(&self) -> String {
        self.position.map(|p| p.status()).unwrap_or_default()
    }

    fn total_ticks(&self) -> u64 {
        u64::from(self.duration_secs) * u64::from(TICKS_PER_SECOND)
    }

    fn late_threshold_ticks(&self) -> u64 {
        match self.switch {
            ColorSwitch::Midpoint => self.total_ticks() / 2,
            ColorSwitch::LastSeconds(secs) => u64::from(secs) * u64::from(TICKS_PER_SECOND),
        }
    }
}

/// Expand a plan into the full phase sequence for a workout
pub fn build_phases(plan: &WorkoutPlan, settings: &Settings) -> Vec<Phase> {
    let moves = plan.moves();
    let first = moves.first().cloned();
    let reps = moves.len() as u32;

    let mut phases = vec![Phase {
        kind: PhaseKind::Prepare,
        title: "get ready!".into(),
        duration_secs: PREPARE_SECS,
        initial: Rgb::BLACK,
        late: Rgb::END,
        switch: ColorSwitch::LastSeconds(WARNING_SECS),
        position: None,
        next: first.clone(),
    }];

    for set in 1..=settings.sets {
        for (idx, name) in moves.iter().enumerate() {
            let rep = idx as u32 + 1;
            let last_rep = idx + 1 == moves.len();
            let position = Some(Position {
                set,
                sets: settings.sets,
                rep,
                reps,
            });

            phases.push(Phase {
                kind: PhaseKind::Exercise,
                title: name.clone(),
                duration_secs: settings.on,
                initial: Rgb::START,
                late: Rgb::MID,
                switch: ColorSwitch::Midpoint,
                position,
                next: Some(if last_rep { "break" } else { "rest" }.into()),
            });

            if !last_rep {
                phases.push(Phase {
                    kind: PhaseKind::Rest,
                    title: "rest".into(),
                    duration_secs: settings.off,
                    initial: Rgb::REST,
                    late: Rgb::END,
                    switch: ColorSwitch::LastSeconds(WARNING_SECS),
                    position,
                    next: moves.get(idx + 1).cloned(),
                });
            } else if set < settings.sets {
                phases.push(Phase {
                    kind: PhaseKind::Break,
                    title: "break".into(),
                    duration_secs: settings.on.saturating_add(settings.off),
                    initial: Rgb::REST,
                    late: Rgb::END,
                    switch: ColorSwitch::Midpoint,
                    position,
                    next: first.clone(),
                });
            }
        }
    }

    phases
}

// ============================================================================
// Countdown
// ============================================================================

/// Input to a running countdown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Tick,
    TogglePause,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Running,
    Finished,
    Aborted,
}

/// Everything a renderer needs to paint one countdown frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountdownView {
    pub background: Rgb,
    pub foreground: Rgb,
    pub header: String,
    pub title: String,
    pub timer: String,
    pub paused: bool,
    pub next: Option<String>,
}

/// Countdown over a single phase, counted in whole ticks
#[derive(Clone, Debug)]
pub struct Countdown<'a> {
    phase: &'a Phase,
    remaining_ticks: u64,
    late_threshold: u64,
    paused: bool,
}

impl<'a> Countdown<'a> {
    pub fn new(phase: &'a Phase) -> Self {
        Self {
            phase,
            remaining_ticks: phase.total_ticks(),
            late_threshold: phase.late_threshold_ticks(),
            paused: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.remaining_ticks == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn remaining_ticks(&self) -> u64 {
        self.remaining_ticks
    }

    pub fn handle(&mut self, signal: Signal) -> Progress {
        match signal {
            Signal::Quit => return Progress::Aborted,
            Signal::TogglePause => {
                self.paused = !self.paused;
                tracing::debug!(
                    paused = self.paused,
                    "Countdown '{}' pause toggled",
                    self.phase.title
                );
            }
            Signal::Tick => {
                if !self.paused {
                    self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
                }
            }
        }

        if self.is_finished() {
            Progress::Finished
        } else {
            Progress::Running
        }
    }

    /// Remaining time rounded up to whole seconds
    pub fn seconds_left(&self) -> u64 {
        self.remaining_ticks.div_ceil(u64::from(TICKS_PER_SECOND))
    }

    pub fn background(&self) -> Rgb {
        if self.remaining_ticks <= self.late_threshold {
            self.phase.late
        } else {
            self.phase.initial
        }
    }

    pub fn view(&self) -> CountdownView {
        let background = self.background();
        CountdownView {
            background,
            foreground: background.foreground(),
            header: self.phase.header(),
            title: self.phase.title.clone(),
            timer: self.seconds_left().to_string(),
            paused: self.paused,
            next: self.phase.next.as_ref().map(|n| format!("next: {}", n)),
        }
    }
}
