//! Tagged result records produced by the planning core. Every outcome is a
//! discriminated union: callers branch on the variant, never on the
//! presence of individual fields.

use serde::{Deserialize, Serialize};

/// Why a species cannot be farmed at all under the given resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfeasibilityReason {
    /// The fixed cost of running the farm for the species' whole cycle
    /// already exceeds the available capital.
    FixedCostExceedsCapital,
    /// The budget left after fixed costs buys less than one fingerling, or
    /// the tanks hold less than one animal.
    InsufficientCapital,
}

/// Which ceiling actually bound the stocking decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bottleneck {
    /// Space ran out first: money is left over, tanks are full.
    Physical,
    /// Money ran out first: tanks are partly idle.
    Financial,
}

/// Result of simulating one species farmed alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpeciesOutcome {
    Viable {
        species: String,
        /// Fingerlings introduced at cycle start.
        stocking_quantity: u64,
        /// Animals expected to survive to harvest.
        survivors: u64,
        sold_biomass_kg: f64,
        fingerling_cost: f64,
        feed_cost: f64,
        fixed_cost: f64,
        total_cost: f64,
        /// Production cost per kilogram sold; 0 when nothing is sold.
        cost_per_kg: f64,
        revenue: f64,
        net_profit: f64,
        /// Net profit normalized per month, the ranking key across species
        /// with different cycle lengths.
        monthly_profit: f64,
        roi_percent: f64,
        /// Months of average profit needed to recover the cycle cost;
        /// 0 is the sentinel for "never recovers".
        payback_months: f64,
        /// Output at which revenue equals total cost.
        break_even_kg: f64,
        /// Total feed purchased over the cycle.
        feed_required_kg: f64,
        /// Stocking as a percentage of the physical ceiling.
        occupancy_percent: f64,
        bottleneck: Bottleneck,
    },
    Infeasible {
        species: String,
        reason: InfeasibilityReason,
    },
}

impl SpeciesOutcome {
    pub fn species(&self) -> &str {
        match self {
            SpeciesOutcome::Viable { species, .. } => species,
            SpeciesOutcome::Infeasible { species, .. } => species,
        }
    }

    pub fn is_viable(&self) -> bool {
        matches!(self, SpeciesOutcome::Viable { .. })
    }
}

/// One species' share of an optimal mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixItem {
    pub species: String,
    pub quantity: u64,
    pub biomass_kg: f64,
    /// Fingerling plus feed spend for this species' share.
    pub variable_cost: f64,
    pub cycle_months: f64,
    pub occupancy_percent: f64,
}

/// Result of one mix optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MixAllocation {
    Optimal {
        items: Vec<MixItem>,
        /// Objective value of the solved program.
        total_profit: f64,
        total_biomass_kg: f64,
        /// Same 0-sentinel convention as the monoculture payback.
        payback_months: f64,
    },
    /// Resources cannot satisfy the constraints, notably a minimum
    /// production target.
    Infeasible,
    /// Non-recoverable numerical or solver failure.
    Error { detail: String },
}
