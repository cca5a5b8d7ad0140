//! Data structures shared across the AquaPlan workspace: the species
//! catalogue, the producer's production system, and the tagged outcome
//! records produced by the planning core.

pub mod outcome;
pub mod production;
pub mod species;
