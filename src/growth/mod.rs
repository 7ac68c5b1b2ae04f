//! Compound growth projections with periodic contributions

mod engine;
mod interest;

pub use engine::{
    project_growth, CompoundFrequency, CompoundGrowthInput, ContributionFrequency, GrowthSeries,
    GrowthSnapshot,
};
pub use interest::{compound_interest, simple_interest, CompoundingSchedule};
