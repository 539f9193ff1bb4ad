//! # Terminal player
//!
//! Plays a routine full-screen using ratatui and crossterm. All timing
//! and pause logic lives in `workout_core::Countdown`; this module only
//! turns terminal events into signals and paints views.
//!
//! The loop is single-threaded. It blocks in `crossterm::event::poll` until
//! either an input arrives or the next 100 ms tick is due.

mod event;
mod render;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use std::io::{self, stdout};
use std::time::Duration;
use workout_core::routine::TICKS_PER_SECOND;
use workout_core::{build_phases, Countdown, Phase, PhaseKind, Progress, Result, Settings, Signal, WorkoutPlan};

use event::{Clock, ClockEvent, Input};

const TICK: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND as u64);

/// How a played workout ended
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// User quit; carries a description of the phase that was running
    Stopped(String),
}

struct MouseCaptureGuard;

impl MouseCaptureGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Play the whole workout, returning once it finishes or the user quits
pub fn play(plan: &WorkoutPlan, settings: &Settings) -> Result<Outcome> {
    let phases = build_phases(plan, settings);
    tracing::info!("Starting workout with {} phases", phases.len());

    let outcome = restoring_after(
        || {
            let mut terminal = ratatui::try_init()?;
            let _mouse = MouseCaptureGuard::new()?;
            run(&mut terminal, plan, settings, &phases)
        },
        ratatui::restore,
    );

    Ok(outcome?)
}

/// Run `body`, then `restore`, whether or not `body` failed part way
fn restoring_after<T>(
    body: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> io::Result<T> {
    let result = body();
    restore();
    result
}

fn run(
    terminal: &mut DefaultTerminal,
    plan: &WorkoutPlan,
    settings: &Settings,
    phases: &[Phase],
) -> io::Result<Outcome> {
    // Any input starts; resize only redraws
    loop {
        terminal.draw(|frame| render::draw_intro(frame, plan, settings))?;
        if event::wait_input()? != Input::Resize {
            break;
        }
    }

    let mut clock = Clock::new(TICK);
    for phase in phases {
        if play_phase(terminal, &mut clock, phase)? == Progress::Aborted {
            let at = describe(phase);
            tracing::info!("Workout stopped during {}", at);
            return Ok(Outcome::Stopped(at));
        }
    }

    tracing::info!("Workout complete");
    loop {
        terminal.draw(render::draw_finish)?;
        if event::wait_input()? != Input::Resize {
            break;
        }
    }

    Ok(Outcome::Completed)
}

fn play_phase(
    terminal: &mut DefaultTerminal,
    clock: &mut Clock,
    phase: &Phase,
) -> io::Result<Progress> {
    let mut countdown = Countdown::new(phase);
    if countdown.is_finished() {
        return Ok(Progress::Finished);
    }

    if phase.kind == PhaseKind::Exercise {
        tracing::info!("{} | {}", phase.header(), phase.title);
    } else {
        tracing::debug!("{:?} phase: {} ({}s)", phase.kind, phase.title, phase.duration_secs);
    }

    loop {
        let view = countdown.view();
        terminal.draw(|frame| render::draw_countdown(frame, &view))?;

        let signal = match clock.next_event()? {
            ClockEvent::Tick => Signal::Tick,
            ClockEvent::Input(Input::Pause) => Signal::TogglePause,
            ClockEvent::Input(Input::Other) => Signal::Quit,
            ClockEvent::Input(Input::Resize) => continue,
        };

        match countdown.handle(signal) {
            Progress::Running => {}
            done => return Ok(done),
        }
    }
}

fn describe(phase: &Phase) -> String {
    let header = phase.header();
    if header.is_empty() {
        phase.title.clone()
    } else {
        format!("{} ({})", header, phase.title)
    }
}
