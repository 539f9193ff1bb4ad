//! Core domain types for the workout timer.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercise categories and their relative weights
//! - Intensity levels and their presets
//! - Resolved workout settings

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Categories
// ============================================================================

/// Kind of exercise, in the order used to break scheduling ties
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Leg,
    Ab,
    Back,
    Arm,
    Killer,
}

impl Category {
    /// All categories in tie-break order
    pub const ALL: [Category; 5] = [
        Category::Leg,
        Category::Ab,
        Category::Back,
        Category::Arm,
        Category::Killer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Leg => "leg",
            Category::Ab => "ab",
            Category::Back => "back",
            Category::Arm => "arm",
            Category::Killer => "killer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| Error::Config(format!("Unknown category: {}", s)))
    }
}

/// Relative frequency of each category in a generated plan
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Weights {
    #[serde(default = "default_weight")]
    pub leg: u32,
    #[serde(default = "default_weight")]
    pub ab: u32,
    #[serde(default = "default_weight")]
    pub back: u32,
    #[serde(default = "default_weight")]
    pub arm: u32,
    #[serde(default = "default_weight")]
    pub killer: u32,
}

fn default_weight() -> u32 {
    1
}

impl Default for Weights {
    fn default() -> Self {
        Self::uniform(default_weight())
    }
}

impl Weights {
    pub fn uniform(weight: u32) -> Self {
        Self {
            leg: weight,
            ab: weight,
            back: weight,
            arm: weight,
            killer: weight,
        }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Leg => self.leg,
            Category::Ab => self.ab,
            Category::Back => self.back,
            Category::Arm => self.arm,
            Category::Killer => self.killer,
        }
    }

    pub fn set(&mut self, category: Category, weight: u32) {
        match category {
            Category::Leg => self.leg = weight,
            Category::Ab => self.ab = weight,
            Category::Back => self.back = weight,
            Category::Arm => self.arm = weight,
            Category::Killer => self.killer = weight,
        }
    }

    /// Sum of all weights
    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

// ============================================================================
// Intensity Levels
// ============================================================================

/// Named intensity preset
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Test,
    Baby,
    #[default]
    Easy,
    Medium,
    Hard,
    Insane,
}

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Test,
        Level::Baby,
        Level::Easy,
        Level::Medium,
        Level::Hard,
        Level::Insane,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Test => "test",
            Level::Baby => "baby",
            Level::Easy => "easy",
            Level::Medium => "medium",
            Level::Hard => "hard",
            Level::Insane => "insane",
        }
    }

    /// (on, off, sets, reps) for this level
    fn preset(&self) -> (u32, u32, u32, u32) {
        match self {
            Level::Test => (10, 5, 2, 2),
            Level::Baby => (20, 20, 3, 5),   // 11 minutes
            Level::Easy => (20, 20, 3, 7),   // 15 minutes
            Level::Medium => (30, 20, 4, 8), // 29 minutes
            Level::Hard => (40, 15, 5, 9),   // 45 minutes
            Level::Insane => (50, 15, 5, 10),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Level::ALL
            .into_iter()
            .find(|l| l.as_str() == s.to_lowercase())
            .ok_or_else(|| Error::Config(format!("Unknown level: {}", s)))
    }
}

// ============================================================================
// Settings
// ============================================================================

/// Longest allowed on or off interval, in seconds
pub const MAX_INTERVAL_SECS: u32 = 3600;

/// Explicit per-run replacements for level preset values
#[derive(Clone, Copy, Debug, Default)]
pub struct Overrides {
    pub on: Option<u32>,
    pub off: Option<u32>,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
}

/// Fully resolved workout settings
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Seconds of work per rep
    pub on: u32,
    /// Seconds of rest between reps
    pub off: u32,
    pub sets: u32,
    pub reps: u32,
    pub weights: Weights,
}

impl Settings {
    pub fn from_level(level: Level) -> Self {
        let (on, off, sets, reps) = level.preset();
        Self {
            on,
            off,
            sets,
            reps,
            weights: Weights::default(),
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.on = overrides.on.unwrap_or(self.on);
        self.off = overrides.off.unwrap_or(self.off);
        self.sets = overrides.sets.unwrap_or(self.sets);
        self.reps = overrides.reps.unwrap_or(self.reps);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.reps == 0 {
            return Err(Error::Config("reps must be at least 1".into()));
        }
        if self.sets == 0 {
            return Err(Error::Config("sets must be at least 1".into()));
        }
        if self.on == 0 {
            return Err(Error::Config("on time must be at least 1 second".into()));
        }
        if self.on > MAX_INTERVAL_SECS || self.off > MAX_INTERVAL_SECS {
            return Err(Error::Config(format!(
                "on and off times must be at most {} seconds",
                MAX_INTERVAL_SECS
            )));
        }
        Ok(())
    }

    /// Advertised workout length in seconds
    ///
    /// Counts one extra `on` per set for the break, as printed on the intro
    /// screen. The opening prepare countdown is not included.
    pub fn total_duration(&self) -> u64 {
        let on = u64::from(self.on);
        let off = u64::from(self.off);
        let reps = u64::from(self.reps);
        (on * (reps + 1) + off * reps) * u64::from(self.sets)
    }

    /// The `{on} on x {off} off x {sets} sets` headline
    pub fn headline(&self) -> String {
        format!("{} on x {} off x {} sets", self.on, self.off, self.sets)
    }
}

/// Format seconds as `M:SS`
pub fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_is_default_level() {
        assert_eq!(Level::default(), Level::Easy);
        let settings = Settings::from_level(Level::default());
        assert_eq!((settings.on, settings.off, settings.sets, settings.reps), (20, 20, 3, 7));
    }

    #[test]
    fn test_level_parse() {
        assert_eq!("insane".parse::<Level>().unwrap(), Level::Insane);
        assert_eq!("Medium".parse::<Level>().unwrap(), Level::Medium);
        assert!("extreme".parse::<Level>().is_err());
    }

    #[test]
    fn test_category_parse_and_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
        assert!("cardio".parse::<Category>().is_err());
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let settings = Settings::from_level(Level::Hard).with_overrides(Overrides {
            on: Some(45),
            reps: Some(4),
            ..Default::default()
        });
        assert_eq!(settings.on, 45);
        assert_eq!(settings.off, 15);
        assert_eq!(settings.sets, 5);
        assert_eq!(settings.reps, 4);
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let base = Settings::from_level(Level::Test);
        assert!(base.validate().is_ok());

        let zero_reps = base.clone().with_overrides(Overrides {
            reps: Some(0),
            ..Default::default()
        });
        assert!(matches!(zero_reps.validate(), Err(Error::Config(_))));

        let zero_sets = base.clone().with_overrides(Overrides {
            sets: Some(0),
            ..Default::default()
        });
        assert!(zero_sets.validate().is_err());

        let zero_on = base.clone().with_overrides(Overrides {
            on: Some(0),
            ..Default::default()
        });
        assert!(matches!(zero_on.validate(), Err(Error::Config(_))));

        let zero_off = base.with_overrides(Overrides {
            off: Some(0),
            ..Default::default()
        });
        assert!(zero_off.validate().is_ok());
    }

    #[test]
    fn test_validate_caps_interval_length() {
        let base = Settings::from_level(Level::Test);

        let longest = base.clone().with_overrides(Overrides {
            on: Some(MAX_INTERVAL_SECS),
            off: Some(MAX_INTERVAL_SECS),
            ..Default::default()
        });
        assert!(longest.validate().is_ok());

        let long_on = base.clone().with_overrides(Overrides {
            on: Some(500_000_000),
            ..Default::default()
        });
        assert!(matches!(long_on.validate(), Err(Error::Config(_))));

        let long_off = base.with_overrides(Overrides {
            off: Some(u32::MAX),
            ..Default::default()
        });
        assert!(matches!(long_off.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_preset_durations() {
        // (on*(reps+1) + off*reps) * sets
        let expected = [
            (Level::Test, 80),
            (Level::Baby, 660),
            (Level::Easy, 900),
            (Level::Medium, 1720),
            (Level::Hard, 2675),
            (Level::Insane, 3500),
        ];
        for (level, secs) in expected {
            assert_eq!(Settings::from_level(level).total_duration(), secs, "{}", level);
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(5), "0:05");
        assert_eq!(format_duration(900), "15:00");
        assert_eq!(format_duration(3700), "61:40");
    }

    #[test]
    fn test_weights_total_and_set() {
        let mut weights = Weights::uniform(0);
        assert_eq!(weights.total(), 0);
        weights.set(Category::Killer, 3);
        weights.set(Category::Ab, 2);
        assert_eq!(weights.get(Category::Killer), 3);
        assert_eq!(weights.total(), 5);
    }
}
