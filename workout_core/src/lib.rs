#![forbid(unsafe_code)]

//! Core domain model and plan logic for the workout interval timer.
//!
//! This crate provides:
//! - Domain types (categories, levels, weights, settings)
//! - The built-in exercise catalog
//! - Plan generation (weighted category schedule + random sampling)
//! - The routine: timed phases and the countdown state machine
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod planner;
pub mod routine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{default_catalog, Catalog};
pub use config::Config;
pub use planner::{category_schedule, generate_plan, WorkoutPlan};
pub use routine::{build_phases, Countdown, CountdownView, Phase, PhaseKind, Progress, Rgb, Signal};
