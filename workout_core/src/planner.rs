//! Plan generation for a workout.
//!
//! This module implements the two-step selection:
//! - Interleave categories by descending weight (deterministic)
//! - Sample concrete moves per category without replacement, then shuffle

use crate::{format_duration, Catalog, Category, Error, Result, Settings, Weights};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The ordered list of moves played back in every set
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkoutPlan {
    moves: Vec<String>,
}

impl WorkoutPlan {
    pub fn from_moves<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }

    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Render the plan as the plain-text block printed before a workout
    pub fn summary(&self, settings: &Settings) -> String {
        let mut text = settings.headline();
        text.push('\n');
        for name in &self.moves {
            text.push_str(name);
            text.push('\n');
        }
        text.push_str(&format!(
            "duration: {}\n",
            format_duration(settings.total_duration())
        ));
        text
    }
}

/// Draw `reps` category labels by round-robin over descending weights
///
/// Categories with the highest remaining counter each get one label per
/// pass and have their counter decremented. The ordering is fixed after the
/// initial stable sort, so equal weights resolve in `Category::ALL` order.
/// Counters keep going below zero, which lets zero-weight categories in once
/// `reps` exceeds the weight total.
pub fn category_schedule(weights: &Weights, reps: u32) -> Vec<Category> {
    let target = reps as usize;

    let mut counters: Vec<(Category, i64)> = Category::ALL
        .iter()
        .map(|c| (*c, i64::from(weights.get(*c))))
        .collect();
    counters.sort_by(|a, b| b.1.cmp(&a.1));

    let mut schedule = Vec::with_capacity(target + Category::ALL.len());
    while schedule.len() < target {
        let top = counters[0].1;
        for (category, counter) in counters.iter_mut() {
            if *counter == top {
                schedule.push(*category);
                *counter -= 1;
            }
        }
    }

    schedule.truncate(target);
    schedule
}

/// Generate a workout plan for the given settings
///
/// Fails with `Error::Plan` when more moves are requested than the catalog
/// holds, either in total or for a single scheduled category.
pub fn generate_plan<R: Rng + ?Sized>(
    catalog: &Catalog,
    settings: &Settings,
    rng: &mut R,
) -> Result<WorkoutPlan> {
    let total = catalog.total_capacity();
    if settings.reps as usize > total {
        return Err(Error::Plan(format!(
            "{} moves requested but the catalog only has {}",
            settings.reps, total
        )));
    }

    let schedule = category_schedule(&settings.weights, settings.reps);
    tracing::debug!("Category schedule: {:?}", schedule);

    let mut moves = Vec::with_capacity(schedule.len());
    for category in Category::ALL {
        let count = schedule.iter().filter(|c| **c == category).count();
        if count == 0 {
            continue;
        }

        let available = catalog.moves(category);
        if count > available.len() {
            return Err(Error::Plan(format!(
                "{} {} moves requested but the catalog only has {}",
                count,
                category,
                available.len()
            )));
        }

        moves.extend(
            available
                .choose_multiple(rng, count)
                .map(|name| name.to_string()),
        );
    }

    moves.shuffle(rng);
    tracing::info!("Generated plan with {} moves", moves.len());

    Ok(WorkoutPlan { moves })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::{Level, Overrides};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn settings(weights: Weights, reps: u32) -> Settings {
        Settings::from_level(Level::Easy)
            .with_weights(weights)
            .with_overrides(Overrides {
                reps: Some(reps),
                ..Default::default()
            })
    }

    #[test]
    fn test_uniform_schedule_follows_category_order() {
        let schedule = category_schedule(&Weights::default(), 7);
        assert_eq!(
            schedule,
            vec![
                Category::Leg,
                Category::Ab,
                Category::Back,
                Category::Arm,
                Category::Killer,
                Category::Leg,
                Category::Ab,
            ]
        );
    }

    #[test]
    fn test_heavier_category_leads_schedule() {
        let mut weights = Weights::uniform(1);
        weights.set(Category::Arm, 3);

        let schedule = category_schedule(&weights, 6);
        assert_eq!(
            schedule,
            vec![
                Category::Arm,
                Category::Arm,
                Category::Arm,
                Category::Leg,
                Category::Ab,
                Category::Back,
            ]
        );
    }

    #[test]
    fn test_zero_weight_enters_after_weight_total() {
        let mut weights = Weights::uniform(0);
        weights.set(Category::Ab, 2);

        let schedule = category_schedule(&weights, 2);
        assert_eq!(schedule, vec![Category::Ab, Category::Ab]);

        // Past the total every counter ties at zero
        let schedule = category_schedule(&weights, 4);
        assert_eq!(
            schedule,
            vec![Category::Ab, Category::Ab, Category::Ab, Category::Leg]
        );
    }

    #[test]
    fn test_all_zero_weights_still_fill_reps() {
        let schedule = category_schedule(&Weights::uniform(0), 3);
        assert_eq!(schedule, vec![Category::Leg, Category::Ab, Category::Back]);
    }

    #[test]
    fn test_plan_length_matches_reps() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(7);

        for weight in 1..4 {
            for reps in 1..=10 {
                let mut weights = Weights::uniform(1);
                weights.set(Category::Ab, weight);
                weights.set(Category::Arm, weight);
                let plan = generate_plan(catalog, &settings(weights, reps), &mut rng).unwrap();
                assert_eq!(plan.len(), reps as usize);
            }
        }
    }

    #[test]
    fn test_plan_has_no_duplicates() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let plan = generate_plan(catalog, &settings(Weights::default(), 10), &mut rng).unwrap();
            let unique: HashSet<_> = plan.moves().iter().collect();
            assert_eq!(unique.len(), plan.len(), "duplicate in {:?}", plan.moves());
        }
    }

    #[test]
    fn test_zero_weight_category_excluded() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(3);

        let mut weights = Weights::uniform(2);
        weights.set(Category::Leg, 0);
        weights.set(Category::Killer, 0);

        for _ in 0..20 {
            let plan = generate_plan(catalog, &settings(weights, 6), &mut rng).unwrap();
            for name in plan.moves() {
                let category = catalog.category_of(name).unwrap();
                assert_ne!(category, Category::Leg);
                assert_ne!(category, Category::Killer);
            }
        }
    }

    #[test]
    fn test_over_capacity_is_an_error() {
        crate::logging::init_test();
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(1);

        let mut weights = Weights::uniform(0);
        weights.set(Category::Leg, 5);

        let result = generate_plan(catalog, &settings(weights, 3), &mut rng);
        match result {
            Err(Error::Plan(msg)) => assert!(msg.contains("3 leg moves"), "{}", msg),
            other => panic!("expected plan error, got {:?}", other),
        }
    }

    #[test]
    fn test_reps_beyond_catalog_fail_fast() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(1);

        let result = generate_plan(catalog, &settings(Weights::default(), 4_000_000_000), &mut rng);
        match result {
            Err(Error::Plan(msg)) => {
                assert_eq!(msg, "4000000000 moves requested but the catalog only has 23")
            }
            other => panic!("expected plan error, got {:?}", other),
        }

        // One past the catalog still fails on the total, not a category
        let result = generate_plan(catalog, &settings(Weights::default(), 24), &mut rng);
        assert!(matches!(result, Err(Error::Plan(msg)) if msg.starts_with("24 moves")));
    }

    #[test]
    fn test_same_seed_same_plan() {
        let catalog = default_catalog();
        let s = settings(Weights::default(), 8);

        let a = generate_plan(catalog, &s, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate_plan(catalog, &s, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_summary_text() {
        let s = Settings::from_level(Level::Test);
        let plan = WorkoutPlan::from_moves(["squats", "plank"]);

        assert_eq!(
            plan.summary(&s),
            "10 on x 5 off x 2 sets\nsquats\nplank\nduration: 1:20\n"
        );
    }
}
