//! Growth inputs and scenario loading

mod data;
pub mod loader;

pub use data::{
    CompoundingFrequency, ContributionFrequency, ContributionTiming, GrowthInput,
    MAX_HORIZON_YEARS,
};
pub use loader::{load_inputs, load_inputs_from_reader};
