//! Binds the collection helper feature file to the step registry.

use crate::fixtures::{UnitState, unit};
use rstest_bdd_macros::scenarios;

scenarios!(
    "tests/features/collection_helpers.feature",
    fixtures = [unit: UnitState]
);
