//! Built-in exercise catalog.
//!
//! The catalog maps each category to an ordered list of move names. It is
//! fixed at compile time; there is no way to add moves at runtime.

use crate::types::Category;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Exercise names grouped by category
#[derive(Clone, Debug)]
pub struct Catalog {
    moves: BTreeMap<Category, Vec<&'static str>>,
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `default_catalog()` which returns a
/// cached reference. This function is retained for tests that need to mutate
/// their own copy.
pub fn build_default_catalog() -> Catalog {
    let mut moves = BTreeMap::new();

    moves.insert(Category::Leg, vec!["squats", "lunges"]);
    moves.insert(
        Category::Ab,
        vec![
            "crunches",
            "flutter kicks",
            "bicycle kicks",
            "leg lifts",
            "side leg lifts",
            "scissors",
            "v-up",
        ],
    );
    moves.insert(Category::Back, vec!["swimmer", "plank", "side plank*"]);
    moves.insert(
        Category::Arm,
        vec![
            "push ups",
            "dips",
            "diamond push ups",
            "archer push ups",
            "wide push ups",
            "pike push ups",
        ],
    );
    moves.insert(
        Category::Killer,
        vec![
            "burpees",
            "mountain climbers",
            "jumping lunges",
            "side squats",
            "pistol squats",
        ],
    );

    Catalog { moves }
}

impl Catalog {
    /// Moves in a category, in catalog order
    pub fn moves(&self, category: Category) -> &[&'static str] {
        self.moves
            .get(&category)
            .map(|m| m.as_slice())
            .unwrap_or(&[])
    }

    /// Number of distinct moves a category can contribute to one plan
    pub fn capacity(&self, category: Category) -> usize {
        self.moves(category).len()
    }

    /// Number of distinct moves across all categories
    pub fn total_capacity(&self) -> usize {
        Category::ALL.iter().map(|c| self.capacity(*c)).sum()
    }

    /// Category a move belongs to, if any
    pub fn category_of(&self, name: &str) -> Option<Category> {
        self.moves
            .iter()
            .find(|(_, moves)| moves.iter().any(|m| *m == name))
            .map(|(category, _)| *category)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for category in Category::ALL {
            let moves = self.moves(category);
            if moves.is_empty() {
                errors.push(format!("Category '{}' has no moves", category));
            }

            for name in moves {
                if name.trim().is_empty() {
                    errors.push(format!("Category '{}' has an empty move name", category));
                }
                // Plans rely on names being unique across categories
                if !seen.insert(*name) {
                    errors.push(format!("Move '{}' appears more than once", name));
                }
            }
        }

        errors
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, category: Category, moves: Vec<&'static str>) {
        self.moves.insert(category, moves);
    }
}
