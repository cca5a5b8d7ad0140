//! The AquaPlan quantitative core: per-species feasibility and
//! profitability simulation (monoculture), and the multi-species mix
//! optimizer built on an injected integer-LP solving capability.
//!
//! Both consumers are independent, pure views over the same inputs: the
//! species catalogue and the producer's [`ProductionSystem`]
//! (re-exported from `aquaplan-schemas`). Neither mutates its inputs and
//! no run affects any other.

pub mod catalogue;
pub mod costing;
pub mod error;
pub mod logger;
pub mod optimizer;
pub mod simulation;
pub mod solver;

pub use aquaplan_schemas::outcome::{
    Bottleneck, InfeasibilityReason, MixAllocation, MixItem, SpeciesOutcome,
};
pub use aquaplan_schemas::production::{ProductionSystem, TechnologyLevel};
pub use aquaplan_schemas::species::SpeciesProfile;
